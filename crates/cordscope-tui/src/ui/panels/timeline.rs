use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset as Series, GraphType, Paragraph};

use crate::app::App;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Publications Over Time ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.border()))
        .style(Style::default().bg(app.theme.bg()));

    let points: Vec<(f64, f64)> = app
        .view
        .by_year
        .iter()
        .map(|&(year, count)| (year as f64, count as f64))
        .collect();

    if points.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "  No dated papers in the selected range",
                Style::default().fg(app.theme.muted()),
            )),
        ])
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    // A single year still needs a non-degenerate x interval.
    let (mut x_min, mut x_max) = (points[0].0, points[points.len() - 1].0);
    if x_min == x_max {
        x_min -= 1.0;
        x_max += 1.0;
    }
    let y_max = points.iter().map(|&(_, n)| n).fold(1.0, f64::max);

    let series = vec![
        Series::default()
            .marker(symbols::Marker::Braille)
            .graph_type(GraphType::Line)
            .style(Style::default().fg(app.theme.frost_ice()))
            .data(&points),
    ];

    let x_labels = vec![
        format!("{:.0}", x_min),
        format!("{:.0}", (x_min + x_max) / 2.0),
        format!("{:.0}", x_max),
    ];
    let y_labels = vec![
        "0".to_string(),
        format!("{:.0}", y_max / 2.0),
        format!("{:.0}", y_max),
    ];

    let chart = Chart::new(series)
        .block(block)
        .x_axis(
            Axis::default()
                .title(Span::styled("Year", Style::default().fg(app.theme.muted())))
                .style(Style::default().fg(app.theme.muted()))
                .bounds([x_min, x_max])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title(Span::styled(
                    "Papers",
                    Style::default().fg(app.theme.muted()),
                ))
                .style(Style::default().fg(app.theme.muted()))
                .bounds([0.0, y_max])
                .labels(y_labels),
        );

    frame.render_widget(chart, area);
}

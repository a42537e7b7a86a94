use ratatui::Frame;
use ratatui::layout::{Direction, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph};

use crate::app::App;
use crate::ui::panels::truncate;

const LABEL_WIDTH: usize = 24;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Top 10 Journals ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.border()))
        .style(Style::default().bg(app.theme.bg()));

    if app.view.top_journals.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "  No journals in the selected range",
                Style::default().fg(app.theme.muted()),
            )),
        ])
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let bars: Vec<Bar> = app
        .view
        .top_journals
        .iter()
        .map(|(journal, count)| {
            Bar::default()
                .value(*count as u64)
                .text_value(count.to_string())
                .label(Line::from(truncate(journal, LABEL_WIDTH)))
                .style(Style::default().fg(app.theme.frost_blue()))
                .value_style(
                    Style::default()
                        .fg(app.theme.bg())
                        .bg(app.theme.frost_blue())
                        .add_modifier(Modifier::BOLD),
                )
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
        .label_style(Style::default().fg(app.theme.fg()))
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}

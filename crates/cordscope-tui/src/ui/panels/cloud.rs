use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::app::App;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Word Cloud of Paper Titles ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.border()))
        .style(Style::default().bg(app.theme.bg()));

    if app.view.cloud.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "  No data available for the selected year range to generate a word cloud.",
                Style::default().fg(app.theme.muted()),
            )),
        ])
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    // A terminal has one font size; weight is shown through color and bold
    // instead, heaviest words first.
    let max = app.view.cloud[0].1 as f64;
    let mut spans: Vec<Span> = Vec::new();
    for (word, count) in &app.view.cloud {
        if !spans.is_empty() {
            spans.push(Span::raw("  "));
        }
        let ratio = *count as f64 / max;
        let style = if ratio >= 0.6 {
            Style::default()
                .fg(app.theme.yellow())
                .add_modifier(Modifier::BOLD)
        } else if ratio >= 0.3 {
            Style::default().fg(app.theme.frost_ice())
        } else {
            Style::default().fg(app.theme.muted())
        };
        spans.push(Span::styled(format!("{word} {count}"), style));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

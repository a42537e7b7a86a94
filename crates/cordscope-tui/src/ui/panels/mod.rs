pub(crate) mod cloud;
pub(crate) mod header;
pub(crate) mod journals;
pub(crate) mod sample;
pub(crate) mod statusbar;
pub(crate) mod timeline;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::app::App;

/// Sample table on top, the two charts side by side, word cloud below.
pub fn render_body(frame: &mut Frame, app: &App, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(13), // sample table: 10 rows + header + borders
            Constraint::Min(8),     // charts
            Constraint::Length(8),  // word cloud
        ])
        .split(area);

    sample::render(frame, app, rows[0]);

    let charts = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(rows[1]);

    timeline::render(frame, app, charts[0]);
    journals::render(frame, app, charts[1]);

    cloud::render(frame, app, rows[2]);
}

/// Error screen for a missing or unreadable input file. The dashboard stays
/// up so the message is readable; `q` quits.
pub fn render_load_error(frame: &mut Frame, app: &App, error: &str, area: Rect) {
    let block = Block::default()
        .title(" Load failed ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.red()))
        .style(Style::default().bg(app.theme.bg()));

    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            error.to_string(),
            Style::default()
                .fg(app.theme.red())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Place metadata.csv next to the binary (or pass --input) and restart.",
            Style::default().fg(app.theme.muted()),
        )),
        Line::from(Span::styled(
            "Press q to quit.",
            Style::default().fg(app.theme.muted()),
        )),
    ];

    let paragraph = Paragraph::new(text)
        .block(block)
        .wrap(Wrap { trim: true })
        .alignment(ratatui::layout::Alignment::Center);
    frame.render_widget(paragraph, area);
}

/// Truncate to `max` characters with an ellipsis.
pub(crate) fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        text.to_string()
    } else {
        let cut: String = text.chars().take(max.saturating_sub(1)).collect();
        format!("{cut}…")
    }
}

#[cfg(test)]
mod tests {
    use super::truncate;

    #[test]
    fn truncate_is_char_aware() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("a longer title", 8), "a longe…");
        assert_eq!(truncate("ératosthène", 4), "éra…");
    }
}

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::app::App;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let keys = Span::styled(
        " Tab switch end · h/l adjust · H/L ±10 · r reset · q quit ",
        Style::default().fg(app.theme.muted()),
    );
    let handle = Span::styled(
        format!(" adjusting: {} ", app.active_handle),
        Style::default()
            .fg(app.theme.yellow())
            .add_modifier(Modifier::BOLD),
    );

    let line = if app.load_error.is_some() {
        Line::from(Span::styled(
            " q quit ",
            Style::default().fg(app.theme.muted()),
        ))
    } else {
        Line::from(vec![keys, handle])
    };

    let bar = Paragraph::new(line).style(Style::default().bg(app.theme.bg_secondary()));
    frame.render_widget(bar, area);
}

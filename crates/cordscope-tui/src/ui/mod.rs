pub(crate) mod panels;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};

use crate::app::App;

/// Render the entire dashboard.
pub fn render(frame: &mut Frame, app: &App) {
    let size = frame.area();

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // header with year selector
            Constraint::Min(10),   // body
            Constraint::Length(1), // status bar
        ])
        .split(size);

    panels::header::render(frame, app, main_layout[0]);

    if let Some(ref error) = app.load_error {
        panels::render_load_error(frame, app, error, main_layout[1]);
    } else {
        panels::render_body(frame, app, main_layout[1]);
    }

    panels::statusbar::render(frame, app, main_layout[2]);
}

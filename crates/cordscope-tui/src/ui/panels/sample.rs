use ratatui::Frame;
use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};

use crate::app::App;
use crate::ui::panels::truncate;

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(format!(" Sample · {} rows in range ", app.view.rows))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.border()))
        .style(Style::default().bg(app.theme.bg()));

    if app.view.sample.is_empty() {
        let empty = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "  No papers in the selected year range",
                Style::default().fg(app.theme.muted()),
            )),
        ])
        .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let header = Row::new(vec![
        Cell::from("Title"),
        Cell::from("Journal"),
        Cell::from("Year"),
        Cell::from("Words"),
    ])
    .style(
        Style::default()
            .fg(app.theme.fg_bright())
            .add_modifier(Modifier::BOLD),
    );

    let title_width = (area.width as usize).saturating_mul(55) / 100;
    let rows: Vec<Row> = app
        .view
        .sample
        .iter()
        .map(|p| {
            let year = p
                .publication_year
                .map(|y| y.to_string())
                .unwrap_or_else(|| "-".to_string());
            Row::new(vec![
                Cell::from(truncate(&p.title, title_width)),
                Cell::from(truncate(&p.journal, 30)),
                Cell::from(year),
                Cell::from(p.abstract_word_count.to_string()),
            ])
            .style(Style::default().fg(app.theme.fg()))
        })
        .collect();

    let table = Table::new(
        rows,
        [
            Constraint::Percentage(55),
            Constraint::Percentage(29),
            Constraint::Length(6),
            Constraint::Length(6),
        ],
    )
    .header(header)
    .column_spacing(1)
    .block(block);

    frame.render_widget(table, area);
}

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::app::{App, RangeHandle};

pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(Span::styled(
            " CORD-19 Data Explorer ",
            Style::default()
                .fg(app.theme.frost_ice())
                .add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.border()))
        .style(Style::default().bg(app.theme.bg()));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let total = app
        .dataset
        .as_ref()
        .map(|ds| ds.papers.len())
        .unwrap_or(0);
    let info = Line::from(vec![
        Span::styled(
            app.source_path.display().to_string(),
            Style::default().fg(app.theme.muted()),
        ),
        Span::raw("  "),
        Span::styled(
            format!("{total} papers"),
            Style::default().fg(app.theme.fg()),
        ),
        Span::styled(
            format!("  ·  {} in range", app.view.rows),
            Style::default().fg(app.theme.green()),
        ),
    ]);

    let slider = slider_line(app, inner.width as usize);
    let paragraph = Paragraph::new(vec![info, slider]);
    frame.render_widget(paragraph, inner);
}

fn slider_line(app: &App, width: usize) -> Line<'static> {
    let (Some(bounds), Some(selected)) = (app.year_bounds, app.selected) else {
        return Line::from(Span::styled(
            "No parseable publication years in this file",
            Style::default().fg(app.theme.muted()),
        ));
    };
    let (lo, hi) = selected;

    let handle_style = |handle: RangeHandle| {
        if app.active_handle == handle {
            Style::default()
                .fg(app.theme.yellow())
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.fg())
        }
    };

    // "Years 2019 ────████──── 2022" with the bar using whatever width is left.
    let bar_width = width.saturating_sub("Years 0000  0000 ".len()).max(10);
    Line::from(vec![
        Span::styled("Years ", Style::default().fg(app.theme.muted())),
        Span::styled(format!("{lo}"), handle_style(RangeHandle::Lo)),
        Span::raw(" "),
        Span::styled(
            slider_cells(bounds, selected, bar_width),
            Style::default().fg(app.theme.frost_dark()),
        ),
        Span::raw(" "),
        Span::styled(format!("{hi}"), handle_style(RangeHandle::Hi)),
    ])
}

/// The bar itself: one cell per position, filled between the selected
/// endpoints scaled onto `width` cells.
fn slider_cells((min, max): (i32, i32), (lo, hi): (i32, i32), width: usize) -> String {
    if width == 0 {
        return String::new();
    }
    if max <= min {
        return "█".repeat(width);
    }
    let pos = |year: i32| ((year - min) as usize * (width - 1)) / (max - min) as usize;
    let (from, to) = (pos(lo), pos(hi));
    (0..width)
        .map(|i| if from <= i && i <= to { '█' } else { '─' })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::slider_cells;

    #[test]
    fn full_selection_fills_the_bar() {
        assert_eq!(slider_cells((2019, 2022), (2019, 2022), 8), "████████");
    }

    #[test]
    fn single_year_dataset_is_always_full() {
        assert_eq!(slider_cells((2020, 2020), (2020, 2020), 4), "████");
    }

    #[test]
    fn narrowed_selection_fills_a_segment() {
        let bar = slider_cells((2000, 2020), (2010, 2020), 21);
        assert!(bar.starts_with('─'));
        assert!(bar.ends_with('█'));
        assert_eq!(bar.chars().count(), 21);
    }
}

use std::path::PathBuf;
use std::sync::Arc;

use cordscope_core::aggregate::{papers_by_year, title_corpus, top_journals, word_frequencies};
use cordscope_core::{Dataset, Paper, load_cached};

use crate::theme::NordTheme;

/// Rows shown in the sample table.
pub const SAMPLE_ROWS: usize = 10;
/// Journals shown in the bar chart.
pub const TOP_JOURNALS: usize = 10;
/// Words kept for the word-cloud panel.
pub const CLOUD_WORDS: usize = 40;

/// Which end of the year-range selector the next h/l press moves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeHandle {
    Lo,
    Hi,
}

impl std::fmt::Display for RangeHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lo => write!(f, "FROM"),
            Self::Hi => write!(f, "TO"),
        }
    }
}

/// Everything recomputed when the year selection changes.
#[derive(Debug, Default)]
pub struct FilteredView {
    pub rows: usize,
    pub sample: Vec<Paper>,
    pub by_year: Vec<(i32, usize)>,
    pub top_journals: Vec<(String, usize)>,
    pub cloud: Vec<(String, usize)>,
}

/// Dashboard state. The dataset behind it is loaded once through the
/// process-wide cache; key handling only moves the selection and recomputes
/// the aggregates over the in-memory table.
pub struct App {
    pub theme: NordTheme,
    pub source_path: PathBuf,
    pub dataset: Option<Arc<Dataset>>,
    /// A missing or malformed input file lands here and renders as an error
    /// screen instead of crashing the terminal.
    pub load_error: Option<String>,
    /// Observed year bounds over the full table; `None` when no row has a
    /// parseable date.
    pub year_bounds: Option<(i32, i32)>,
    /// Current selection, always within `year_bounds` with lo <= hi.
    pub selected: Option<(i32, i32)>,
    pub active_handle: RangeHandle,
    pub view: FilteredView,
    pub should_quit: bool,
}

impl App {
    pub fn new(source_path: PathBuf) -> Self {
        match load_cached(&source_path) {
            Ok(dataset) => Self::with_dataset(source_path, dataset),
            Err(e) => Self {
                load_error: Some(e.to_string()),
                ..Self::empty(source_path)
            },
        }
    }

    /// Build around an already-loaded dataset.
    pub fn with_dataset(source_path: PathBuf, dataset: Arc<Dataset>) -> Self {
        let bounds = dataset.year_bounds();
        let mut app = Self {
            dataset: Some(dataset),
            year_bounds: bounds,
            selected: bounds,
            ..Self::empty(source_path)
        };
        app.recompute();
        app
    }

    fn empty(source_path: PathBuf) -> Self {
        Self {
            theme: NordTheme::default(),
            source_path,
            dataset: None,
            load_error: None,
            year_bounds: None,
            selected: None,
            active_handle: RangeHandle::Lo,
            view: FilteredView::default(),
            should_quit: false,
        }
    }

    /// Recompute the filtered view for the current selection. With no
    /// selection (no parseable years at all) the full table is shown.
    pub fn recompute(&mut self) {
        let Some(dataset) = &self.dataset else { return };
        let filtered: Vec<&Paper> = match self.selected {
            Some((lo, hi)) => dataset.filter_by_years(lo, hi),
            None => dataset.papers.iter().collect(),
        };
        let corpus = title_corpus(filtered.iter().copied());
        self.view = FilteredView {
            rows: filtered.len(),
            sample: filtered.iter().take(SAMPLE_ROWS).map(|p| (*p).clone()).collect(),
            by_year: papers_by_year(filtered.iter().copied()),
            top_journals: top_journals(filtered.iter().copied(), TOP_JOURNALS),
            cloud: word_frequencies(&corpus, CLOUD_WORDS),
        };
    }

    pub fn toggle_handle(&mut self) {
        self.active_handle = match self.active_handle {
            RangeHandle::Lo => RangeHandle::Hi,
            RangeHandle::Hi => RangeHandle::Lo,
        };
    }

    /// Move the active endpoint by `delta` years, clamped to the observed
    /// bounds and so that lo never passes hi.
    pub fn nudge(&mut self, delta: i32) {
        let (Some((min, max)), Some((lo, hi))) = (self.year_bounds, self.selected) else {
            return;
        };
        let next = match self.active_handle {
            RangeHandle::Lo => ((lo + delta).clamp(min, hi), hi),
            RangeHandle::Hi => (lo, (hi + delta).clamp(lo, max)),
        };
        if Some(next) != self.selected {
            self.selected = Some(next);
            self.recompute();
        }
    }

    /// Widen the selection back to the full observed range.
    pub fn reset_range(&mut self) {
        if self.selected != self.year_bounds {
            self.selected = self.year_bounds;
            self.recompute();
        }
    }
}

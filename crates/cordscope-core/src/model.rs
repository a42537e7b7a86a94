use chrono::NaiveDate;
use serde::Serialize;

/// One cleaned publication record.
///
/// After cleaning, `title` and `abstract_text` are always present and
/// `journal` is never empty (a placeholder is substituted). The derived
/// fields are `None` only when `publish_time` failed to parse.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Paper {
    pub title: String,

    /// Source CSV column `abstract` — renamed because `abstract` is a
    /// reserved word in Rust.
    #[serde(rename = "abstract")]
    pub abstract_text: String,

    pub journal: String,

    pub publish_time: Option<NaiveDate>,

    pub publication_year: Option<i32>,

    pub abstract_word_count: usize,
}

/// Per-column null tallies over the four source columns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ColumnNulls {
    pub title: usize,
    #[serde(rename = "abstract")]
    pub abstract_text: usize,
    pub journal: usize,
    pub publish_time: usize,
}

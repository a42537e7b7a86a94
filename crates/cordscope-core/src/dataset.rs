use std::fs::File;
use std::path::{Path, PathBuf};

use chrono::{Datelike, NaiveDate};
use serde::Deserialize;

use crate::error::{ExplorerError, Result};
use crate::model::{ColumnNulls, Paper};

/// Placeholder substituted for papers with no journal on record.
pub const UNKNOWN_JOURNAL: &str = "Unknown Journal";

/// One row as it appears in the source CSV, before cleaning. Extra columns
/// in the file are ignored; missing columns read as null.
#[derive(Debug, Deserialize)]
struct RawRecord {
    #[serde(default)]
    title: Option<String>,
    #[serde(default, rename = "abstract")]
    abstract_text: Option<String>,
    #[serde(default)]
    journal: Option<String>,
    #[serde(default)]
    publish_time: Option<String>,
}

impl RawRecord {
    /// Blank and whitespace-only cells count as null.
    fn normalized(self) -> Self {
        Self {
            title: non_blank(self.title),
            abstract_text: non_blank(self.abstract_text),
            journal: non_blank(self.journal),
            publish_time: non_blank(self.publish_time),
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

/// Lenient `publish_time` parsing. The source data mixes full dates
/// ("2020-03-12"), textual dates ("2020 Apr 7"), month precision
/// ("2020 Apr", "2020-04") and bare years ("2020"); partial dates round
/// down to the first day. Anything else becomes `None`, never an error.
pub fn parse_publish_time(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d);
    }
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y %b %d") {
        return Some(d);
    }
    if let Ok(d) = NaiveDate::parse_from_str(&format!("{s} 1"), "%Y %b %d") {
        return Some(d);
    }
    if let Ok(d) = NaiveDate::parse_from_str(&format!("{s}-1"), "%Y-%m-%d") {
        return Some(d);
    }
    if let Ok(year) = s.parse::<i32>() {
        return NaiveDate::from_ymd_opt(year, 1, 1);
    }
    None
}

/// The cleaned paper table plus provenance about the raw load.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub papers: Vec<Paper>,
    pub source_path: PathBuf,
    /// Row count of the file before cleaning.
    pub raw_rows: usize,
    /// Column count of the file (not of the cleaned table).
    pub raw_columns: usize,
    pub nulls_before: ColumnNulls,
}

/// Number of columns in the cleaned table: the four source columns plus
/// the two derived ones.
pub const CLEANED_COLUMNS: usize = 6;

/// Load, clean and derive in one deterministic pass.
///
/// Rows missing a title or an abstract are dropped; a missing journal gets
/// [`UNKNOWN_JOURNAL`]; unparseable dates become null rather than failing
/// the load. Repeated calls over the same file yield identical tables.
pub fn load_dataset(path: &Path) -> Result<Dataset> {
    if !path.exists() {
        return Err(ExplorerError::MissingFile(path.to_path_buf()));
    }
    let file = File::open(path)?;
    let mut reader = csv::ReaderBuilder::new().has_headers(true).from_reader(file);
    let raw_columns = reader.headers()?.len();

    let mut raw_rows = 0usize;
    let mut nulls_before = ColumnNulls::default();
    let mut papers = Vec::new();

    for row in reader.deserialize() {
        let record: RawRecord = row?;
        let record = record.normalized();
        raw_rows += 1;

        if record.title.is_none() {
            nulls_before.title += 1;
        }
        if record.abstract_text.is_none() {
            nulls_before.abstract_text += 1;
        }
        if record.journal.is_none() {
            nulls_before.journal += 1;
        }
        if record.publish_time.is_none() {
            nulls_before.publish_time += 1;
        }

        let (Some(title), Some(abstract_text)) = (record.title, record.abstract_text) else {
            continue;
        };
        let journal = record.journal.unwrap_or_else(|| UNKNOWN_JOURNAL.to_string());
        let publish_time = record.publish_time.as_deref().and_then(parse_publish_time);
        let publication_year = publish_time.map(|d| d.year());
        let abstract_word_count = abstract_text.split_whitespace().count();

        papers.push(Paper {
            title,
            abstract_text,
            journal,
            publish_time,
            publication_year,
            abstract_word_count,
        });
    }

    Ok(Dataset {
        papers,
        source_path: path.to_path_buf(),
        raw_rows,
        raw_columns,
        nulls_before,
    })
}

impl Dataset {
    /// Shape of the cleaned table: (rows, columns).
    pub fn shape(&self) -> (usize, usize) {
        (self.papers.len(), CLEANED_COLUMNS)
    }

    /// Null tallies after cleaning. Title, abstract and journal are zero by
    /// construction; `publish_time` counts the rows whose date failed to
    /// parse (those rows also have a null `publication_year`).
    pub fn nulls_after(&self) -> ColumnNulls {
        ColumnNulls {
            publish_time: self
                .papers
                .iter()
                .filter(|p| p.publish_time.is_none())
                .count(),
            ..ColumnNulls::default()
        }
    }

    /// Observed publication-year bounds over the full table, or `None` when
    /// no row has a parseable date.
    pub fn year_bounds(&self) -> Option<(i32, i32)> {
        let mut years = self.papers.iter().filter_map(|p| p.publication_year);
        let first = years.next()?;
        Some(years.fold((first, first), |(lo, hi), y| (lo.min(y), hi.max(y))))
    }

    /// Rows whose publication year is within the closed interval `[lo, hi]`.
    /// Rows without a year never match.
    pub fn filter_by_years(&self, lo: i32, hi: i32) -> Vec<&Paper> {
        self.papers
            .iter()
            .filter(|p| p.publication_year.is_some_and(|y| lo <= y && y <= hi))
            .collect()
    }

    /// First `n` rows of the cleaned table.
    pub fn sample(&self, n: usize) -> &[Paper] {
        &self.papers[..self.papers.len().min(n)]
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    fn write_csv(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    const FIXTURE: &str = "\
title,abstract,journal,publish_time
Viral entry mechanisms,Spike protein binding study,J1,2020-01-01
Vaccine trial results,a b  c,,not-a-date
,missing title row,J2,2020-05-05
Transmission dynamics,Contact tracing analysis,J1,2021-06-15
Asymptomatic spread,,J3,2021-07-01
";

    #[test]
    fn cleaning_drops_rows_and_fills_journal() {
        let file = write_csv(FIXTURE);
        let ds = load_dataset(file.path()).unwrap();

        assert_eq!(ds.raw_rows, 5);
        assert_eq!(ds.raw_columns, 4);
        assert_eq!(ds.papers.len(), 3);

        for p in &ds.papers {
            assert!(!p.title.is_empty());
            assert!(!p.abstract_text.is_empty());
            assert!(!p.journal.is_empty());
        }
        assert_eq!(ds.papers[1].journal, UNKNOWN_JOURNAL);
    }

    #[test]
    fn null_tallies_before_and_after() {
        let file = write_csv(FIXTURE);
        let ds = load_dataset(file.path()).unwrap();

        assert_eq!(
            ds.nulls_before,
            ColumnNulls {
                title: 1,
                abstract_text: 1,
                journal: 1,
                publish_time: 0,
            }
        );
        // Only the unparseable date survives cleaning as a null.
        assert_eq!(ds.nulls_after().publish_time, 1);
        assert_eq!(ds.nulls_after().title, 0);
        assert_eq!(ds.nulls_after().journal, 0);
    }

    #[test]
    fn end_to_end_three_row_scenario() {
        let file = write_csv(
            "title,abstract,journal,publish_time\n\
             T1,A1,J1,2020-01-01\n\
             T2,A2,,not-a-date\n\
             T3,A3,J1,2021-06-15\n",
        );
        let ds = load_dataset(file.path()).unwrap();

        let years: Vec<Option<i32>> = ds.papers.iter().map(|p| p.publication_year).collect();
        assert_eq!(years, vec![Some(2020), None, Some(2021)]);

        let journals: Vec<&str> = ds.papers.iter().map(|p| p.journal.as_str()).collect();
        assert_eq!(journals, vec!["J1", UNKNOWN_JOURNAL, "J1"]);

        let by_year = crate::aggregate::papers_by_year(ds.papers.iter());
        assert_eq!(by_year, vec![(2020, 1), (2021, 1)]);
    }

    #[test]
    fn preparation_is_idempotent() {
        let file = write_csv(FIXTURE);
        let first = load_dataset(file.path()).unwrap();
        let second = load_dataset(file.path()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn word_count_tolerates_repeated_separators() {
        let file = write_csv(FIXTURE);
        let ds = load_dataset(file.path()).unwrap();
        // Second surviving row has abstract "a b  c".
        assert_eq!(ds.papers[1].abstract_word_count, 3);
    }

    #[test]
    fn missing_file_is_a_distinct_error() {
        let err = load_dataset(Path::new("no/such/metadata.csv")).unwrap_err();
        assert!(matches!(err, ExplorerError::MissingFile(_)));
    }

    #[test]
    fn year_filter_is_closed_and_skips_null_years() {
        let file = write_csv(FIXTURE);
        let ds = load_dataset(file.path()).unwrap();

        assert_eq!(ds.year_bounds(), Some((2020, 2021)));
        assert_eq!(ds.filter_by_years(2020, 2021).len(), 2);
        assert_eq!(ds.filter_by_years(2020, 2020).len(), 1);
        assert_eq!(ds.filter_by_years(2021, 2021).len(), 1);
        assert_eq!(ds.filter_by_years(1990, 1999).len(), 0);
    }

    #[test]
    fn sample_never_exceeds_table_length() {
        let file = write_csv(FIXTURE);
        let ds = load_dataset(file.path()).unwrap();
        assert_eq!(ds.sample(10).len(), 3);
        assert_eq!(ds.sample(2).len(), 2);
    }

    #[test]
    fn publish_time_formats() {
        let d = |y, m, dd| NaiveDate::from_ymd_opt(y, m, dd).unwrap();
        assert_eq!(parse_publish_time("2020-03-12"), Some(d(2020, 3, 12)));
        assert_eq!(parse_publish_time("2020 Apr 7"), Some(d(2020, 4, 7)));
        assert_eq!(parse_publish_time("2020 Apr"), Some(d(2020, 4, 1)));
        assert_eq!(parse_publish_time("2020-04"), Some(d(2020, 4, 1)));
        assert_eq!(parse_publish_time("2020"), Some(d(2020, 1, 1)));
        assert_eq!(parse_publish_time("not-a-date"), None);
        assert_eq!(parse_publish_time(""), None);
    }
}

//! The non-interactive variant: one linear pass over the full cleaned table,
//! text summaries to stdout, then the three charts.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;

use cordscope_core::aggregate::{papers_by_year, top_journals};
use cordscope_core::{ColumnNulls, Dataset, load_cached};

use crate::charts;

const PREVIEW_ROWS: usize = 5;
const TOP_JOURNALS: usize = 10;

/// Console report over the full cleaned table, then the charts.
pub fn run(input: &Path, charts_dir: &Path, open_charts: bool) -> Result<()> {
    let dataset = load_cached(input)?;

    let stdout = std::io::stdout();
    write_report(&dataset, &mut stdout.lock())?;

    let rendered = charts::render_all(&dataset, charts_dir)?;
    println!("\nCharts written to {}:", charts_dir.display());
    for path in &rendered.paths {
        println!("  {}", path.display());
    }
    if !rendered.cloud_rendered {
        println!("No titles available to generate a word cloud.");
    }

    if open_charts {
        for path in &rendered.paths {
            open::that(path).with_context(|| format!("opening {}", path.display()))?;
        }
    }
    Ok(())
}

/// The text half of the report, written to any sink so tests can capture it.
pub fn write_report<W: Write>(dataset: &Dataset, out: &mut W) -> Result<()> {
    writeln!(out, "Data loaded successfully!")?;

    writeln!(out, "\nFirst {PREVIEW_ROWS} rows of the cleaned table:")?;
    for paper in dataset.sample(PREVIEW_ROWS) {
        let year = paper
            .publication_year
            .map(|y| y.to_string())
            .unwrap_or_else(|| "-".to_string());
        writeln!(
            out,
            "  {} | {} | {} | {} words",
            paper.title, paper.journal, year, paper.abstract_word_count
        )?;
    }

    let (rows, columns) = dataset.shape();
    writeln!(out, "\nDimensions:")?;
    writeln!(out, "  Rows before cleaning:    {}", dataset.raw_rows)?;
    writeln!(out, "  Columns before cleaning: {}", dataset.raw_columns)?;
    writeln!(out, "  Rows after cleaning:     {rows}")?;
    writeln!(out, "  Columns after cleaning:  {columns}")?;

    writeln!(out, "\nMissing values before cleaning:")?;
    write_nulls(&dataset.nulls_before, out)?;

    writeln!(out, "\nMissing values after cleaning:")?;
    let after = dataset.nulls_after();
    write_nulls(&after, out)?;
    writeln!(out, "  publication_year: {}", after.publish_time)?;

    writeln!(out, "\nPapers published per year:")?;
    for (year, count) in papers_by_year(dataset.papers.iter()) {
        writeln!(out, "  {year}: {count}")?;
    }

    writeln!(out, "\nTop {TOP_JOURNALS} publishing journals:")?;
    for (journal, count) in top_journals(dataset.papers.iter(), TOP_JOURNALS) {
        writeln!(out, "  {count:>6}  {journal}")?;
    }
    Ok(())
}

fn write_nulls<W: Write>(nulls: &ColumnNulls, out: &mut W) -> Result<()> {
    writeln!(out, "  title:        {}", nulls.title)?;
    writeln!(out, "  abstract:     {}", nulls.abstract_text)?;
    writeln!(out, "  journal:      {}", nulls.journal)?;
    writeln!(out, "  publish_time: {}", nulls.publish_time)?;
    Ok(())
}

// ─── Stats ──────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct Summary {
    source: String,
    rows: usize,
    columns: usize,
    year_bounds: Option<(i32, i32)>,
    papers_without_year: usize,
    top_journals: Vec<JournalCount>,
}

#[derive(Serialize)]
struct JournalCount {
    journal: String,
    papers: usize,
}

/// Compact summary, plain text or JSON.
pub fn stats(input: &Path, json: bool) -> Result<()> {
    let dataset = load_cached(input)?;
    let (rows, columns) = dataset.shape();
    let summary = Summary {
        source: dataset.source_path.display().to_string(),
        rows,
        columns,
        year_bounds: dataset.year_bounds(),
        papers_without_year: dataset.nulls_after().publish_time,
        top_journals: top_journals(dataset.papers.iter(), TOP_JOURNALS)
            .into_iter()
            .map(|(journal, papers)| JournalCount { journal, papers })
            .collect(),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{}: {} rows x {} columns", summary.source, summary.rows, summary.columns);
        match summary.year_bounds {
            Some((lo, hi)) => println!("Years: {lo}-{hi} ({} undated)", summary.papers_without_year),
            None => println!("Years: none parseable"),
        }
        for jc in &summary.top_journals {
            println!("  {:>6}  {}", jc.papers, jc.journal);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use cordscope_core::Paper;

    use super::*;

    fn dataset() -> Dataset {
        let paper = |title: &str, journal: &str, year: Option<i32>| Paper {
            title: title.to_string(),
            abstract_text: "a b c".to_string(),
            journal: journal.to_string(),
            publish_time: year.and_then(|y| chrono::NaiveDate::from_ymd_opt(y, 1, 1)),
            publication_year: year,
            abstract_word_count: 3,
        };
        Dataset {
            papers: vec![
                paper("Viral entry", "J1", Some(2020)),
                paper("Spike binding", "Unknown Journal", None),
                paper("Transmission", "J1", Some(2021)),
            ],
            source_path: PathBuf::from("metadata.csv"),
            raw_rows: 5,
            raw_columns: 4,
            nulls_before: ColumnNulls {
                title: 1,
                abstract_text: 1,
                journal: 1,
                publish_time: 0,
            },
        }
    }

    #[test]
    fn report_text_covers_every_section() {
        let mut out = Vec::new();
        write_report(&dataset(), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Data loaded successfully!"));
        assert!(text.contains("Rows after cleaning:     3"));
        assert!(text.contains("Missing values before cleaning:"));
        assert!(text.contains("Missing values after cleaning:"));
        assert!(text.contains("publication_year: 1"));
        assert!(text.contains("2020: 1"));
        assert!(text.contains("2021: 1"));
        assert!(text.contains("J1"));
    }

    #[test]
    fn report_on_missing_file_fails_with_missing_file() {
        let err = run(
            Path::new("no/such/metadata.csv"),
            Path::new("charts"),
            false,
        )
        .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<cordscope_core::ExplorerError>(),
            Some(cordscope_core::ExplorerError::MissingFile(_))
        ));
    }
}

//! PNG chart rendering with plotters. The original report popped up three
//! blocking chart windows; here each chart is written under the charts
//! directory and handed to the system viewer instead.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use plotters::prelude::*;

use cordscope_core::Dataset;
use cordscope_core::aggregate::{papers_by_year, title_corpus, top_journals, word_frequencies};

const TOP_JOURNALS: usize = 10;
const CLOUD_WORDS: usize = 50;
const CLOUD_SIZE: (u32, u32) = (800, 400);

pub struct RenderedCharts {
    pub paths: Vec<PathBuf>,
    /// False when the title corpus was empty and the cloud was skipped.
    pub cloud_rendered: bool,
}

/// Render all three charts over the full (unfiltered) cleaned table.
pub fn render_all(dataset: &Dataset, dir: &Path) -> Result<RenderedCharts> {
    fs::create_dir_all(dir)
        .with_context(|| format!("creating charts directory {}", dir.display()))?;

    let by_year = papers_by_year(dataset.papers.iter());
    let journals = top_journals(dataset.papers.iter(), TOP_JOURNALS);
    let corpus = title_corpus(dataset.papers.iter());
    let words = word_frequencies(&corpus, CLOUD_WORDS);

    let mut paths = Vec::new();

    let timeline = dir.join("publications_over_time.png");
    draw_timeline(&by_year, &timeline).context("rendering the time-series chart")?;
    paths.push(timeline);

    let bars = dir.join("top_journals.png");
    draw_journals(&journals, &bars).context("rendering the journals chart")?;
    paths.push(bars);

    // Empty corpus: placeholder message instead of a chart, never an error.
    let cloud_rendered = !words.is_empty();
    if cloud_rendered {
        let cloud = dir.join("title_wordcloud.png");
        draw_cloud(&words, &cloud).context("rendering the word cloud")?;
        paths.push(cloud);
    }

    Ok(RenderedCharts {
        paths,
        cloud_rendered,
    })
}

// ─── Publications over time ─────────────────────────────────────────────────

fn draw_timeline(by_year: &[(i32, usize)], path: &Path) -> Result<()> {
    let root = BitMapBackend::new(path, (1000, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let (x_lo, x_hi) = x_bounds(by_year);
    let y_hi = padded_max(by_year.iter().map(|&(_, n)| n));

    let mut chart = ChartBuilder::on(&root)
        .caption("CORD-19 Publications Over Time", ("sans-serif", 28))
        .margin(12)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_lo..x_hi, 0usize..y_hi)?;
    chart
        .configure_mesh()
        .x_desc("Publication Year")
        .y_desc("Number of Papers")
        .draw()?;

    chart.draw_series(LineSeries::new(by_year.iter().copied(), &BLUE))?;
    chart.draw_series(
        by_year
            .iter()
            .map(|&(year, count)| Circle::new((year, count), 4, BLUE.filled())),
    )?;

    root.present()?;
    Ok(())
}

/// Non-degenerate x interval even for a single (or no) plotted year.
fn x_bounds(by_year: &[(i32, usize)]) -> (i32, i32) {
    match (by_year.first(), by_year.last()) {
        (Some(&(lo, _)), Some(&(hi, _))) if lo < hi => (lo, hi),
        (Some(&(year, _)), _) => (year - 1, year + 1),
        _ => (0, 1),
    }
}

/// Max count with ~10% headroom so the top marker is not glued to the frame.
fn padded_max(counts: impl Iterator<Item = usize>) -> usize {
    let max = counts.max().unwrap_or(0).max(1);
    max + max / 10 + 1
}

// ─── Top journals ───────────────────────────────────────────────────────────

fn draw_journals(journals: &[(String, usize)], path: &Path) -> Result<()> {
    let root = BitMapBackend::new(path, (1200, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let n = journals.len().max(1);
    let x_hi = padded_max(journals.iter().map(|&(_, count)| count));

    let mut chart = ChartBuilder::on(&root)
        .caption("Top 10 Journals by Number of Publications", ("sans-serif", 28))
        .margin(12)
        .x_label_area_size(40)
        .y_label_area_size(280)
        .build_cartesian_2d(0usize..x_hi, (0..n).into_segmented())?;
    chart
        .configure_mesh()
        .disable_y_mesh()
        .x_desc("Number of Papers")
        .y_labels(n)
        .y_label_formatter(&|segment| match segment {
            SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => n
                .checked_sub(*i + 1)
                .and_then(|rank| journals.get(rank))
                .map(|(journal, _)| journal.clone())
                .unwrap_or_default(),
            _ => String::new(),
        })
        .draw()?;

    // Rank 0 (most papers) in the top segment.
    chart.draw_series(journals.iter().enumerate().map(|(rank, (_, count))| {
        let segment = n - 1 - rank;
        let mut bar = Rectangle::new(
            [
                (0, SegmentValue::Exact(segment)),
                (*count, SegmentValue::Exact(segment + 1)),
            ],
            Palette99::pick(rank).mix(0.8).filled(),
        );
        bar.set_margin(6, 6, 0, 0);
        bar
    }))?;

    root.present()?;
    Ok(())
}

// ─── Word cloud ─────────────────────────────────────────────────────────────

/// Font size scaled between 14px and 48px by count within [min, max].
fn font_size(count: usize, min: usize, max: usize) -> i32 {
    let t = if max > min {
        (count - min) as f64 / (max - min) as f64
    } else {
        1.0
    };
    (14.0 + t * 34.0) as i32
}

/// Deterministic row-packed layout: words largest-first, wrapped onto new
/// rows when the estimated width runs out, stopping at the bottom edge.
fn draw_cloud(words: &[(String, usize)], path: &Path) -> Result<()> {
    let root = BitMapBackend::new(path, CLOUD_SIZE).into_drawing_area();
    root.fill(&WHITE)?;

    let max = words.first().map(|&(_, n)| n).unwrap_or(1);
    let min = words.last().map(|&(_, n)| n).unwrap_or(1);
    let right_edge = CLOUD_SIZE.0 as i32 - 10;
    let bottom_edge = CLOUD_SIZE.1 as i32 - 10;

    let (mut x, mut y) = (10, 10);
    let mut row_height = 0;
    for (i, (word, count)) in words.iter().enumerate() {
        let size = font_size(*count, min, max);
        let estimated_width = (word.chars().count() as f64 * size as f64 * 0.6) as i32;

        if x > 10 && x + estimated_width > right_edge {
            x = 10;
            y += row_height + 8;
            row_height = 0;
        }
        if y + size > bottom_edge {
            break;
        }

        let color = Palette99::pick(i).mix(0.9);
        root.draw(&Text::new(
            word.clone(),
            (x, y),
            ("sans-serif", size).into_font().color(&color),
        ))?;

        x += estimated_width + 14;
        row_height = row_height.max(size);
    }

    root.present()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn x_bounds_never_degenerate() {
        assert_eq!(x_bounds(&[]), (0, 1));
        assert_eq!(x_bounds(&[(2020, 3)]), (2019, 2021));
        assert_eq!(x_bounds(&[(2019, 1), (2022, 2)]), (2019, 2022));
    }

    #[test]
    fn padded_max_leaves_headroom() {
        assert!(padded_max([10usize, 40, 25].into_iter()) > 40);
        // Empty input still yields a drawable range.
        assert!(padded_max(std::iter::empty()) >= 2);
    }

    #[test]
    fn font_size_scales_with_count() {
        assert_eq!(font_size(1, 1, 1), 48);
        assert_eq!(font_size(1, 1, 100), 14);
        assert_eq!(font_size(100, 1, 100), 48);
        assert!(font_size(50, 1, 100) > font_size(10, 1, 100));
    }
}

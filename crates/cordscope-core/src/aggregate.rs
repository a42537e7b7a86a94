//! Aggregations over a slice of the cleaned table. Every function accepts an
//! iterator of papers so the same code serves the full table and any
//! year-filtered view of it.

use std::collections::{BTreeMap, HashMap};

use crate::model::Paper;

/// Paper count per publication year, ascending by year. Rows without a
/// parseable date carry no year and are excluded.
pub fn papers_by_year<'a>(papers: impl IntoIterator<Item = &'a Paper>) -> Vec<(i32, usize)> {
    let mut counts: BTreeMap<i32, usize> = BTreeMap::new();
    for paper in papers {
        if let Some(year) = paper.publication_year {
            *counts.entry(year).or_insert(0) += 1;
        }
    }
    counts.into_iter().collect()
}

/// The `limit` journals with the most papers, descending by count. Equal
/// counts keep first-seen order in the input, so the result is deterministic
/// for a given table.
pub fn top_journals<'a>(
    papers: impl IntoIterator<Item = &'a Paper>,
    limit: usize,
) -> Vec<(String, usize)> {
    let mut counted = count_in_order(papers.into_iter().map(|p| p.journal.clone()));
    counted.sort_by(|a, b| b.1.cmp(&a.1));
    counted.truncate(limit);
    counted
}

/// All titles space-joined, as word-cloud input. An empty result is a valid,
/// expected case (no rows in the view) and must be handled by the caller.
pub fn title_corpus<'a>(papers: impl IntoIterator<Item = &'a Paper>) -> String {
    papers
        .into_iter()
        .map(|p| p.title.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Filler words the word cloud leaves out.
const STOPWORDS: &[&str] = &[
    "the", "and", "for", "with", "from", "into", "via", "using", "based", "during", "between",
    "among", "after", "before", "are", "can", "its", "their", "toward", "towards", "versus",
    "study", "analysis",
];

/// Word frequencies over a corpus: tokens are lowercased and stripped of
/// surrounding punctuation; tokens shorter than three characters and
/// [`STOPWORDS`] are dropped. Sorted by count descending with first-seen
/// order on ties, truncated to `limit` entries.
pub fn word_frequencies(corpus: &str, limit: usize) -> Vec<(String, usize)> {
    let words = corpus.split_whitespace().filter_map(|token| {
        let word: String = token
            .trim_matches(|c: char| !c.is_alphanumeric())
            .to_lowercase();
        if word.chars().count() < 3 || STOPWORDS.contains(&word.as_str()) {
            None
        } else {
            Some(word)
        }
    });
    let mut counted = count_in_order(words);
    counted.sort_by(|a, b| b.1.cmp(&a.1));
    counted.truncate(limit);
    counted
}

/// Count occurrences while remembering first-seen order, so a stable sort on
/// the counts gives a documented tie-break.
fn count_in_order(keys: impl Iterator<Item = String>) -> Vec<(String, usize)> {
    let mut order: Vec<(String, usize)> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for key in keys {
        match index.get(&key) {
            Some(&i) => order[i].1 += 1,
            None => {
                index.insert(key.clone(), order.len());
                order.push((key, 1));
            }
        }
    }
    order
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paper(title: &str, journal: &str, year: Option<i32>) -> Paper {
        Paper {
            title: title.to_string(),
            abstract_text: "body".to_string(),
            journal: journal.to_string(),
            publish_time: year.and_then(|y| chrono::NaiveDate::from_ymd_opt(y, 1, 1)),
            publication_year: year,
            abstract_word_count: 1,
        }
    }

    #[test]
    fn by_year_is_ascending_and_skips_null_years() {
        let papers = vec![
            paper("a", "J1", Some(2021)),
            paper("b", "J1", Some(2019)),
            paper("c", "J2", None),
            paper("d", "J2", Some(2021)),
        ];
        assert_eq!(
            papers_by_year(papers.iter()),
            vec![(2019, 1), (2021, 2)]
        );
    }

    #[test]
    fn top_journals_is_bounded_and_non_increasing() {
        let papers: Vec<Paper> = (0..30)
            .map(|i| paper("t", &format!("J{}", i % 12), Some(2020)))
            .collect();
        let top = top_journals(papers.iter(), 10);
        assert!(top.len() <= 10);
        for pair in top.windows(2) {
            assert!(pair[0].1 >= pair[1].1);
        }
    }

    #[test]
    fn top_journals_ties_keep_first_seen_order() {
        let papers = vec![
            paper("a", "Zeta", Some(2020)),
            paper("b", "Alpha", Some(2020)),
            paper("c", "Zeta", Some(2020)),
            paper("d", "Alpha", Some(2020)),
        ];
        let top = top_journals(papers.iter(), 10);
        assert_eq!(top[0].0, "Zeta");
        assert_eq!(top[1].0, "Alpha");
        assert_eq!(top[0].1, top[1].1);
    }

    #[test]
    fn corpus_joins_titles_and_may_be_empty() {
        let papers = vec![paper("Viral entry", "J1", None), paper("Spike", "J1", None)];
        assert_eq!(title_corpus(papers.iter()), "Viral entry Spike");
        assert_eq!(title_corpus(std::iter::empty()), "");
    }

    #[test]
    fn word_frequencies_normalize_and_filter() {
        let freqs = word_frequencies("Spike, spike protein; the of protein SPIKE", 10);
        assert_eq!(freqs[0], ("spike".to_string(), 3));
        assert_eq!(freqs[1], ("protein".to_string(), 2));
        // "the" is a stopword, "of" is too short.
        assert!(!freqs.iter().any(|(w, _)| w == "the" || w == "of"));
    }

    #[test]
    fn word_frequencies_of_empty_corpus_are_empty() {
        assert!(word_frequencies("", 10).is_empty());
    }
}

//! TF-IDF vectorizer over a small fixed corpus.
//!
//! Word unigrams and bigrams, English stop words removed before n-grams are
//! formed, raw term counts, smoothed idf `ln((1 + n) / (1 + df)) + 1`, and
//! L2-normalized rows.

use std::collections::{BTreeMap, HashMap};

use crate::scoring::stop_words::is_stop_word;
use crate::scoring::text::analyzer_tokens;

/// Learned vocabulary plus one weighted row per input document.
#[derive(Debug, Clone)]
pub struct TfidfMatrix {
    /// term → column, columns in lexical term order
    vocabulary: BTreeMap<String, usize>,
    rows: Vec<Vec<f64>>,
}

impl TfidfMatrix {
    pub fn contains_term(&self, term: &str) -> bool {
        self.vocabulary.contains_key(term)
    }

    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn row(&self, doc: usize) -> Option<&[f64]> {
        self.rows.get(doc).map(Vec::as_slice)
    }

    /// Cosine similarity between two document rows in [0, 1].
    /// Zero when either row is empty or out of range.
    pub fn cosine(&self, a: usize, b: usize) -> f64 {
        match (self.row(a), self.row(b)) {
            (Some(a), Some(b)) => cosine_similarity(a, b),
            _ => 0.0,
        }
    }
}

/// Unigrams and space-joined bigrams of a cleaned document.
pub fn word_ngrams(clean: &str) -> Vec<String> {
    let tokens: Vec<&str> = analyzer_tokens(clean)
        .into_iter()
        .filter(|t| !is_stop_word(t))
        .collect();

    let mut grams: Vec<String> = tokens.iter().map(|t| t.to_string()).collect();
    grams.extend(tokens.windows(2).map(|pair| format!("{} {}", pair[0], pair[1])));
    grams
}

/// Learns the vocabulary of `docs` and returns their TF-IDF rows.
///
/// An all-stop-word or empty corpus yields an empty vocabulary instead of
/// an error; every row is then zero-length.
pub fn fit_transform(docs: &[&str]) -> TfidfMatrix {
    let counts: Vec<HashMap<String, u32>> = docs
        .iter()
        .map(|doc| {
            let mut tf = HashMap::new();
            for gram in word_ngrams(doc) {
                *tf.entry(gram).or_insert(0) += 1;
            }
            tf
        })
        .collect();

    let mut doc_freq: BTreeMap<String, u32> = BTreeMap::new();
    for tf in &counts {
        for term in tf.keys() {
            *doc_freq.entry(term.clone()).or_insert(0) += 1;
        }
    }

    let vocabulary: BTreeMap<String, usize> = doc_freq
        .keys()
        .enumerate()
        .map(|(col, term)| (term.clone(), col))
        .collect();

    let n_docs = docs.len() as f64;
    let idf: Vec<f64> = doc_freq
        .values()
        .map(|&df| ((1.0 + n_docs) / (1.0 + df as f64)).ln() + 1.0)
        .collect();

    let rows = counts
        .iter()
        .map(|tf| {
            let mut row = vec![0.0_f64; vocabulary.len()];
            for (term, &count) in tf {
                let col = vocabulary[term];
                row[col] = count as f64 * idf[col];
            }
            l2_normalize(&mut row);
            row
        })
        .collect();

    TfidfMatrix { vocabulary, rows }
}

fn l2_normalize(row: &mut [f64]) {
    let norm = row.iter().map(|v| v * v).sum::<f64>().sqrt();
    if norm > 0.0 {
        row.iter_mut().for_each(|v| *v /= norm);
    }
}

fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| x * y).sum();
    let norm_a = a.iter().map(|v| v * v).sum::<f64>().sqrt();
    let norm_b = b.iter().map(|v| v * v).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    (dot / (norm_a * norm_b)).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bigrams_skip_over_removed_stop_words() {
        let grams = word_ngrams("experience with rust and kafka");
        assert_eq!(
            grams,
            vec!["experience", "rust", "kafka", "experience rust", "rust kafka"]
        );
    }

    #[test]
    fn test_vocabulary_is_joint_over_documents() {
        let matrix = fit_transform(&["rust engineer", "python engineer"]);
        let terms: Vec<&str> = matrix.vocabulary.keys().map(String::as_str).collect();
        assert_eq!(
            terms,
            vec!["engineer", "python", "python engineer", "rust", "rust engineer"]
        );
    }

    #[test]
    fn test_rows_are_unit_length() {
        let matrix = fit_transform(&["rust rust tokio", "tokio axum"]);
        for doc in 0..2 {
            let norm: f64 = matrix.row(doc).unwrap().iter().map(|v| v * v).sum();
            assert!((norm - 1.0).abs() < 1e-9, "row {doc} norm {norm}");
        }
    }

    #[test]
    fn test_shared_terms_get_lower_idf_weight() {
        // "engineer" appears in both docs (idf 1.0), "rust" in one (idf 1 + ln 1.5).
        let matrix = fit_transform(&["rust engineer", "engineer"]);
        let row = matrix.row(0).unwrap();
        let engineer = row[matrix.vocabulary["engineer"]];
        let rust = row[matrix.vocabulary["rust"]];
        let expected_ratio = 1.0 + 1.5_f64.ln();
        assert!((rust / engineer - expected_ratio).abs() < 1e-9);
    }

    #[test]
    fn test_identical_documents_have_cosine_one() {
        let matrix = fit_transform(&["distributed systems rust", "distributed systems rust"]);
        assert!((matrix.cosine(0, 1) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_disjoint_documents_have_cosine_zero() {
        let matrix = fit_transform(&["rust tokio", "java spring"]);
        assert_eq!(matrix.cosine(0, 1), 0.0);
    }

    #[test]
    fn test_stop_word_only_corpus_has_empty_vocabulary() {
        let matrix = fit_transform(&["the and of", ""]);
        assert_eq!(matrix.vocabulary_len(), 0);
        assert_eq!(matrix.cosine(0, 1), 0.0);
    }

    #[test]
    fn test_empty_document_row_is_zero() {
        let matrix = fit_transform(&["", "rust engineer"]);
        assert!(matrix.row(0).unwrap().iter().all(|v| *v == 0.0));
        assert_eq!(matrix.cosine(0, 1), 0.0);
    }
}

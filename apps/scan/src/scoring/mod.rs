//! Match scoring — pluggable scorer that rates a résumé against a job description.
//!
//! Default: `TfidfScorer` (unigram/bigram TF-IDF cosine + keyword overlap).
//! Alternative: `BagOfWordsScorer` (raw term counts, lighter boost curve).
//!
//! `main` picks the backend from `Config` and hands a `Box<dyn MatchScorer>`
//! to the handler.

pub mod bag_of_words;
pub mod blend;
pub mod stop_words;
pub mod text;
pub mod tfidf;
pub mod vectorizer;

use std::fmt;
use std::str::FromStr;

use serde::Serialize;
use thiserror::Error;

pub use bag_of_words::BagOfWordsScorer;
pub use tfidf::TfidfScorer;

// ────────────────────────────────────────────────────────────────────────────
// Output data model (shared across all scorer backends)
// ────────────────────────────────────────────────────────────────────────────

/// Intermediate values of one scoring call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub cosine_similarity: f64, // 0 – 100
    pub keyword_overlap: f64,   // 0 – 100
    pub blended: f64,           // before boost
    pub score: f64,             // 0 – 98, one decimal
    pub matched_keywords: Vec<String>,
    pub missing_keywords: Vec<String>,
    pub scorer_backend: String, // "tfidf" | "bag-of-words"
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// The match scorer trait. Implement this to swap backends without touching
/// the handler.
pub trait MatchScorer {
    fn breakdown(&self, resume_text: &str, job_desc: &str) -> ScoreBreakdown;

    fn score(&self, resume_text: &str, job_desc: &str) -> f64 {
        self.breakdown(resume_text, job_desc).score
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Backend selection
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScorerBackend {
    #[default]
    Tfidf,
    BagOfWords,
}

#[derive(Debug, Error)]
#[error("unknown scorer backend '{0}'")]
pub struct UnknownBackend(String);

impl ScorerBackend {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScorerBackend::Tfidf => "tfidf",
            ScorerBackend::BagOfWords => "bag-of-words",
        }
    }
}

impl fmt::Display for ScorerBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScorerBackend {
    type Err = UnknownBackend;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tfidf" | "tf-idf" => Ok(ScorerBackend::Tfidf),
            "bag-of-words" | "bag_of_words" | "bow" => Ok(ScorerBackend::BagOfWords),
            other => Err(UnknownBackend(other.to_string())),
        }
    }
}

pub fn build_scorer(backend: ScorerBackend) -> Box<dyn MatchScorer> {
    match backend {
        ScorerBackend::Tfidf => Box::new(TfidfScorer::default()),
        ScorerBackend::BagOfWords => Box::new(BagOfWordsScorer::default()),
    }
}

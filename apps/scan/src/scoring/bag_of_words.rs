use std::collections::{BTreeMap, BTreeSet};

use tracing::debug;

use crate::scoring::blend::{round_to_tenth, BoostCurve, ScoreWeights};
use crate::scoring::text::bag_of_words_tokens;
use crate::scoring::{MatchScorer, ScoreBreakdown, ScorerBackend};

/// Lightweight scorer over raw term counts. No idf, no n-grams, no stop-word
/// list; words of two characters or fewer are dropped instead.
///
/// Keyword hits are exact token matches, and the boost curve kicks in at 15.
#[derive(Debug, Clone)]
pub struct BagOfWordsScorer {
    pub weights: ScoreWeights,
    pub boost: BoostCurve,
}

impl Default for BagOfWordsScorer {
    fn default() -> Self {
        Self {
            weights: ScoreWeights::default(),
            boost: BoostCurve::BAG_OF_WORDS,
        }
    }
}

impl MatchScorer for BagOfWordsScorer {
    fn breakdown(&self, resume_text: &str, job_desc: &str) -> ScoreBreakdown {
        let resume_tokens = bag_of_words_tokens(resume_text);
        let job_tokens = bag_of_words_tokens(job_desc);

        let resume_vector = term_counts(&resume_tokens);
        let job_vector = term_counts(&job_tokens);
        let cosine_similarity = count_cosine(&resume_vector, &job_vector) * 100.0;

        let unique_job_words: BTreeSet<&str> = job_tokens.iter().map(String::as_str).collect();
        let (matched_keywords, missing_keywords): (Vec<String>, Vec<String>) = unique_job_words
            .into_iter()
            .map(str::to_string)
            .partition(|word| resume_vector.contains_key(word.as_str()));

        let unique = matched_keywords.len() + missing_keywords.len();
        let keyword_overlap = if unique > 0 {
            matched_keywords.len() as f64 / unique as f64 * 100.0
        } else {
            0.0
        };

        let blended = self.weights.blend(cosine_similarity, keyword_overlap);
        let score = round_to_tenth(self.boost.apply(blended));

        debug!(
            unique, cosine_similarity, keyword_overlap, blended, score,
            "bag-of-words score computed"
        );

        ScoreBreakdown {
            cosine_similarity,
            keyword_overlap,
            blended,
            score,
            matched_keywords,
            missing_keywords,
            scorer_backend: ScorerBackend::BagOfWords.to_string(),
        }
    }
}

fn term_counts(tokens: &[String]) -> BTreeMap<&str, u32> {
    let mut counts = BTreeMap::new();
    for token in tokens {
        *counts.entry(token.as_str()).or_insert(0) += 1;
    }
    counts
}

/// Cosine over raw counts in [0, 1]; zero when no term is shared.
fn count_cosine(a: &BTreeMap<&str, u32>, b: &BTreeMap<&str, u32>) -> f64 {
    let dot: f64 = a
        .iter()
        .filter_map(|(term, &count)| b.get(term).map(|&other| count as f64 * other as f64))
        .sum();
    if dot == 0.0 {
        return 0.0;
    }

    let (mag_a, mag_b) = (magnitude(a), magnitude(b));
    if mag_a == 0.0 || mag_b == 0.0 {
        return 0.0;
    }
    (dot / (mag_a * mag_b)).min(1.0)
}

fn magnitude(v: &BTreeMap<&str, u32>) -> f64 {
    v.values()
        .map(|&c| (c as f64) * (c as f64))
        .sum::<f64>()
        .sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn breakdown(resume: &str, jd: &str) -> ScoreBreakdown {
        BagOfWordsScorer::default().breakdown(resume, jd)
    }

    #[test]
    fn test_empty_inputs_score_zero() {
        assert_eq!(breakdown("", "").score, 0.0);
    }

    #[test]
    fn test_identical_text_saturates_at_ceiling() {
        let text = "Backend engineer: Rust, Postgres, Kubernetes";
        let b = breakdown(text, text);
        assert!((b.cosine_similarity - 100.0).abs() < 1e-6);
        assert_eq!(b.score, 98.0);
    }

    #[test]
    fn test_disjoint_tokens_score_zero() {
        assert_eq!(breakdown("python django", "rust tokio").score, 0.0);
    }

    #[test]
    fn test_partial_match_is_boosted() {
        // cosine = 1/√2 → 70.71, overlap 50 → blended 58.28 → 58.28*1.5 + 10
        let b = breakdown("rust", "rust java");
        assert_eq!(b.keyword_overlap, 50.0);
        assert_eq!(b.matched_keywords, vec!["rust"]);
        assert_eq!(b.missing_keywords, vec!["java"]);
        assert_eq!(b.score, 97.4);
    }

    #[test]
    fn test_low_scores_below_threshold_are_not_boosted() {
        let others: Vec<String> = (b'a'..=b's').map(|c| (c as char).to_string().repeat(3)).collect();
        let jd = format!("rust {}", others.join(" "));
        // cosine = 1/√20 → 22.36, overlap 5 → blended 11.94
        assert_eq!(breakdown("rust", &jd).score, 11.9);
    }

    #[test]
    fn test_keyword_hits_require_whole_tokens() {
        let b = breakdown("javascript developer", "java");
        assert_eq!(b.keyword_overlap, 0.0);
        assert_eq!(b.score, 0.0);
    }
}

use std::collections::BTreeSet;

use tracing::debug;

use crate::scoring::blend::{round_to_tenth, BoostCurve, ScoreWeights};
use crate::scoring::text::{clean_text, words};
use crate::scoring::vectorizer::fit_transform;
use crate::scoring::{MatchScorer, ScoreBreakdown, ScorerBackend};

/// Default scorer: TF-IDF cosine similarity blended with keyword overlap.
///
/// Algorithm:
/// 1. Clean both texts (lowercase, ASCII letters/digits/whitespace only).
/// 2. Fit unigram+bigram TF-IDF over exactly the two documents.
/// 3. cosine = cos(resume, job) × 100
/// 4. Significant job words = whitespace tokens of the job that are in the
///    learned vocabulary; overlap = share of them found as substrings of the
///    cleaned résumé × 100
/// 5. Blend, boost, round to one decimal.
#[derive(Debug, Clone)]
pub struct TfidfScorer {
    pub weights: ScoreWeights,
    pub boost: BoostCurve,
}

impl Default for TfidfScorer {
    fn default() -> Self {
        Self {
            weights: ScoreWeights::default(),
            boost: BoostCurve::TFIDF,
        }
    }
}

impl MatchScorer for TfidfScorer {
    fn breakdown(&self, resume_text: &str, job_desc: &str) -> ScoreBreakdown {
        let clean_resume = clean_text(resume_text);
        let clean_job = clean_text(job_desc);

        let matrix = fit_transform(&[clean_resume.as_str(), clean_job.as_str()]);
        let cosine_similarity = matrix.cosine(0, 1) * 100.0;

        let job_words: BTreeSet<&str> = words(&clean_job).collect();
        let (matched_keywords, missing_keywords): (Vec<String>, Vec<String>) = job_words
            .into_iter()
            .filter(|word| matrix.contains_term(word))
            .map(str::to_string)
            .partition(|word| clean_resume.contains(word.as_str()));

        let significant = matched_keywords.len() + missing_keywords.len();
        let keyword_overlap = if significant == 0 {
            0.0
        } else {
            matched_keywords.len() as f64 / significant as f64 * 100.0
        };

        let blended = self.weights.blend(cosine_similarity, keyword_overlap);
        let score = round_to_tenth(self.boost.apply(blended));

        debug!(
            vocabulary = matrix.vocabulary_len(),
            significant, cosine_similarity, keyword_overlap, blended, score, "tfidf score computed"
        );

        ScoreBreakdown {
            cosine_similarity,
            keyword_overlap,
            blended,
            score,
            matched_keywords,
            missing_keywords,
            scorer_backend: ScorerBackend::Tfidf.to_string(),
        }
    }
}

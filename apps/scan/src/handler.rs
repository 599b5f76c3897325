//! Request handling: raw stdin payload in, one `ScanResponse` out.

use std::panic::{self, AssertUnwindSafe};

use anyhow::anyhow;
use tracing::{debug, info};

use crate::errors::ScanError;
use crate::models::request::ScanRequest;
use crate::models::response::ScanResponse;
use crate::scoring::{MatchScorer, ScoreBreakdown};

/// Parses the payload and scores it. A panic inside the scorer is turned
/// into `ScanError::Internal`.
pub fn handle_scan(raw: &str, scorer: &dyn MatchScorer) -> Result<ScoreBreakdown, ScanError> {
    let request = ScanRequest::parse(raw)?;

    info!(
        resume_chars = request.resume_text.len(),
        job_chars = request.job_desc.len(),
        "scoring request"
    );

    panic::catch_unwind(AssertUnwindSafe(|| {
        scorer.breakdown(&request.resume_text, &request.job_desc)
    }))
    .map_err(|payload| {
        let message = payload
            .downcast_ref::<&str>()
            .map(|s| (*s).to_string())
            .or_else(|| payload.downcast_ref::<String>().cloned())
            .unwrap_or_else(|| "scorer panicked".to_string());
        ScanError::Internal(anyhow!("Scoring failed: {message}"))
    })
}

/// Folds a scan result into the stdout contract.
pub fn into_response(
    result: Result<ScoreBreakdown, ScanError>,
    include_breakdown: bool,
) -> ScanResponse {
    match result {
        Ok(breakdown) => {
            let score = breakdown.score;
            ScanResponse::success(score, include_breakdown.then_some(breakdown))
        }
        Err(err) => {
            debug!(kind = err.kind(), error = %err, "scan failed");
            ScanResponse::failure(&err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scoring::{build_scorer, ScorerBackend};

    struct PanickingScorer;

    impl MatchScorer for PanickingScorer {
        fn breakdown(&self, _resume_text: &str, _job_desc: &str) -> ScoreBreakdown {
            panic!("vectorizer exploded")
        }
    }

    #[test]
    fn test_valid_payload_scores() {
        let scorer = build_scorer(ScorerBackend::Tfidf);
        let raw = r#"{"resumeText": "Rust engineer", "jobDesc": "Rust engineer"}"#;
        let breakdown = handle_scan(raw, scorer.as_ref()).unwrap();
        assert_eq!(breakdown.score, 98.0);
    }

    #[test]
    fn test_missing_fields_score_zero() {
        let scorer = build_scorer(ScorerBackend::Tfidf);
        let breakdown = handle_scan("{}", scorer.as_ref()).unwrap();
        assert_eq!(breakdown.score, 0.0);
    }

    #[test]
    fn test_malformed_payload_becomes_failure_response() {
        let scorer = build_scorer(ScorerBackend::Tfidf);
        let response = into_response(handle_scan("not json", scorer.as_ref()), false);
        assert!(!response.success);
        assert!(response.score.is_none());
        assert!(response.error.unwrap().starts_with("Malformed input JSON"));
    }

    #[test]
    fn test_scorer_panic_is_caught() {
        let err = handle_scan(r#"{"jobDesc": "x"}"#, &PanickingScorer).unwrap_err();
        assert_eq!(err.kind(), "internal");
        assert!(err.to_string().contains("vectorizer exploded"));
    }

    #[test]
    fn test_breakdown_only_attached_when_requested() {
        let scorer = build_scorer(ScorerBackend::Tfidf);
        let raw = r#"{"resumeText": "rust", "jobDesc": "rust kafka"}"#;

        let plain = into_response(handle_scan(raw, scorer.as_ref()), false);
        assert!(plain.success);
        assert!(plain.breakdown.is_none());

        let detailed = into_response(handle_scan(raw, scorer.as_ref()), true);
        let breakdown = detailed.breakdown.unwrap();
        assert_eq!(detailed.score, Some(breakdown.score));
        assert_eq!(breakdown.missing_keywords, vec!["kafka"]);
    }
}

use serde::Serialize;

use crate::errors::ScanError;
use crate::scoring::ScoreBreakdown;

/// The single JSON line written to stdout.
///
/// `{"success": true, "score": n}` or `{"success": false, "error": "..."}`;
/// `breakdown` only appears on success when it was asked for.
#[derive(Debug, Clone, Serialize)]
pub struct ScanResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub breakdown: Option<ScoreBreakdown>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ScanResponse {
    pub fn success(score: f64, breakdown: Option<ScoreBreakdown>) -> Self {
        Self {
            success: true,
            score: Some(score),
            breakdown,
            error: None,
        }
    }

    pub fn failure(err: &ScanError) -> Self {
        Self {
            success: false,
            score: None,
            breakdown: None,
            error: Some(err.to_string()),
        }
    }

    pub fn to_json_line(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|e| {
            // Serialization of this shape only fails on non-finite floats.
            format!(
                r#"{{"success":false,"error":{}}}"#,
                serde_json::Value::String(format!("Failed to encode result: {e}"))
            )
        })
    }
}

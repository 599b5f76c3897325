use anyhow::{bail, Context, Result};

use crate::scoring::ScorerBackend;

/// Process configuration loaded from environment variables.
/// Nothing is required; every setting has a default.
#[derive(Debug, Clone)]
pub struct Config {
    pub scorer: ScorerBackend,
    pub include_breakdown: bool,
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scorer: ScorerBackend::Tfidf,
            include_breakdown: false,
            rust_log: "off".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let scorer = match lookup("SCAN_SCORER") {
            Some(raw) => raw
                .parse::<ScorerBackend>()
                .context("SCAN_SCORER must be one of: tfidf, bag-of-words")?,
            None => defaults.scorer,
        };

        let include_breakdown = match lookup("SCAN_INCLUDE_BREAKDOWN") {
            Some(raw) => parse_bool(&raw)
                .with_context(|| format!("SCAN_INCLUDE_BREAKDOWN must be a boolean, got '{raw}'"))?,
            None => defaults.include_breakdown,
        };

        Ok(Config {
            scorer,
            include_breakdown,
            rust_log: lookup("RUST_LOG").unwrap_or(defaults.rust_log),
        })
    }
}

fn parse_bool(raw: &str) -> Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => bail!("unrecognized boolean '{other}'"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_set() {
        let config = Config::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(config.scorer, ScorerBackend::Tfidf);
        assert!(!config.include_breakdown);
        assert_eq!(config.rust_log, "off");
    }

    #[test]
    fn test_bag_of_words_backend_selected() {
        let config =
            Config::from_lookup(lookup_from(&[("SCAN_SCORER", "bag-of-words")])).unwrap();
        assert_eq!(config.scorer, ScorerBackend::BagOfWords);
    }

    #[test]
    fn test_unknown_backend_rejected() {
        let err = Config::from_lookup(lookup_from(&[("SCAN_SCORER", "bm25")])).unwrap_err();
        assert!(err.to_string().contains("SCAN_SCORER"));
    }

    #[test]
    fn test_breakdown_flag_accepts_common_spellings() {
        for raw in ["1", "true", "TRUE", "yes", "on"] {
            let config =
                Config::from_lookup(lookup_from(&[("SCAN_INCLUDE_BREAKDOWN", raw)])).unwrap();
            assert!(config.include_breakdown, "'{raw}' should enable breakdown");
        }
    }

    #[test]
    fn test_breakdown_flag_rejects_garbage() {
        let err =
            Config::from_lookup(lookup_from(&[("SCAN_INCLUDE_BREAKDOWN", "maybe")])).unwrap_err();
        assert!(err.to_string().contains("SCAN_INCLUDE_BREAKDOWN"));
    }
}

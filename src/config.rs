// File: src/config.rs
use crate::core::tokenizer::Strategy;
use crate::error::RelatedError;
use serde::{Deserialize, Serialize};

/// How many related items a detail view shows.
pub const DEFAULT_TOP_K: usize = 3;

/// Engine settings. Every field has a default, so `{}` is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RelatedConfig {
    pub top_k: usize,
    pub strategy: Strategy,
}

impl Default for RelatedConfig {
    fn default() -> Self {
        Self {
            top_k: DEFAULT_TOP_K,
            strategy: Strategy::Auto,
        }
    }
}

impl RelatedConfig {
    pub fn from_json_str(json: &str) -> Result<Self, RelatedError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_object_gives_defaults() {
        let config = RelatedConfig::from_json_str("{}").unwrap();
        assert_eq!(config, RelatedConfig::default());
        assert_eq!(config.top_k, 3);
    }

    #[test]
    fn parses_strategy_names() {
        let json = r#"{"top_k": 5, "strategy": "fallback"}"#;
        let config = RelatedConfig::from_json_str(json).unwrap();
        assert_eq!(config.top_k, 5);
        assert_eq!(config.strategy, Strategy::Fallback);
    }

    #[test]
    fn rejects_unknown_strategy() {
        let err = RelatedConfig::from_json_str(r#"{"strategy": "neural"}"#).unwrap_err();
        assert!(matches!(err, RelatedError::Json(_)));
    }
}

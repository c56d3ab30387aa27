//! Configuration for the comparison engine.
//!
//! `DiffConfig` centralizes thresholds and behavioral knobs so constants
//! are not scattered through the alignment and classification code.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffConfig {
    /// Minimum Levenshtein ratio for an adjacent delete/add pair to collapse
    /// into a single `Modified` entry. Pairs below the threshold stay as
    /// independent deletions and additions.
    pub modified_similarity_threshold: f64,
    /// Run the semantic change classifier over modified pairs.
    pub enable_classification: bool,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            modified_similarity_threshold: 0.4,
            enable_classification: true,
        }
    }
}

impl DiffConfig {
    /// Preset that only merges near-identical delete/add pairs.
    pub fn strict() -> Self {
        Self {
            modified_similarity_threshold: 0.7,
            ..Default::default()
        }
    }

    pub fn builder() -> DiffConfigBuilder {
        DiffConfigBuilder {
            inner: DiffConfig::default(),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.modified_similarity_threshold.is_finite()
            || self.modified_similarity_threshold < 0.0
            || self.modified_similarity_threshold > 1.0
        {
            return Err(ConfigError::InvalidSimilarityThreshold {
                value: self.modified_similarity_threshold,
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("modified_similarity_threshold must be in [0.0, 1.0] and finite (got {value})")]
    InvalidSimilarityThreshold { value: f64 },
}

#[derive(Debug, Clone, Default)]
pub struct DiffConfigBuilder {
    inner: DiffConfig,
}

impl DiffConfigBuilder {
    pub fn new() -> Self {
        DiffConfig::builder()
    }

    pub fn modified_similarity_threshold(mut self, value: f64) -> Self {
        self.inner.modified_similarity_threshold = value;
        self
    }

    pub fn enable_classification(mut self, value: bool) -> Self {
        self.inner.enable_classification = value;
        self
    }

    pub fn build(self) -> Result<DiffConfig, ConfigError> {
        self.inner.validate()?;
        Ok(self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(DiffConfig::default().validate().is_ok());
        assert!(DiffConfig::strict().validate().is_ok());
    }

    #[test]
    fn builder_applies_fields() {
        let config = DiffConfig::builder()
            .modified_similarity_threshold(0.9)
            .enable_classification(false)
            .build()
            .expect("valid config");
        assert_eq!(config.modified_similarity_threshold, 0.9);
        assert!(!config.enable_classification);
    }

    #[test]
    fn builder_rejects_invalid_similarity_threshold() {
        for bad in [-0.1, 1.5, f64::NAN, f64::INFINITY] {
            let err = DiffConfig::builder()
                .modified_similarity_threshold(bad)
                .build();
            assert!(err.is_err(), "expected rejection for {bad}");
        }
    }

    #[test]
    fn boundary_thresholds_are_accepted() {
        assert!(DiffConfig::builder()
            .modified_similarity_threshold(0.0)
            .build()
            .is_ok());
        assert!(DiffConfig::builder()
            .modified_similarity_threshold(1.0)
            .build()
            .is_ok());
    }
}

//! Configuration for training, evaluation and data provisioning.
//!
//! Every section has a `Default` matching the reference workflow (α = 1,
//! log-space scoring, ties counted as errors, tab-separated SMS corpus,
//! 80/20 split with seed 1). A JSON file may override any subset of fields.
//!
//! ```
//! use hamspam::config::HamspamConfig;
//!
//! let config: HamspamConfig =
//!     serde_json::from_str(r#"{ "classifier": { "alpha": 0.5 } }"#).unwrap();
//! assert_eq!(config.classifier.alpha, 0.5);
//! assert_eq!(config.split.train_fraction, 0.8);
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{HamspamError, Result};
use crate::ml::naive_bayes::{DEFAULT_ALPHA, ScoringStrategy, TiePolicy, validate_alpha};

/// Naive Bayes training and scoring parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClassifierConfig {
    /// Laplace smoothing constant; must be positive.
    pub alpha: f64,
    /// Score accumulation strategy.
    pub scoring: ScoringStrategy,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
            scoring: ScoringStrategy::default(),
        }
    }
}

/// Accuracy reporting parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EvaluationConfig {
    /// How tied decisions count toward accuracy.
    pub tie_policy: TiePolicy,
}

/// Layout of a delimited corpus file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// Field separator.
    pub delimiter: char,
    /// Whether the first row is a header.
    pub has_headers: bool,
    /// Whether double quotes delimit fields. SMS bodies contain stray
    /// quotes, so the reference corpus is read with quoting off.
    pub quoting: bool,
    /// Zero-based column holding the label.
    pub label_column: usize,
    /// Zero-based column holding the message text.
    pub text_column: usize,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            delimiter: '\t',
            has_headers: false,
            quoting: false,
            label_column: 0,
            text_column: 1,
        }
    }
}

/// Train/test split parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitConfig {
    /// Share of messages used for training, in (0, 1).
    pub train_fraction: f64,
    /// Seed of the shuffle preceding the split.
    pub seed: u64,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            train_fraction: 0.8,
            seed: 1,
        }
    }
}

/// Top-level configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct HamspamConfig {
    pub classifier: ClassifierConfig,
    pub evaluation: EvaluationConfig,
    pub dataset: DatasetConfig,
    pub split: SplitConfig,
}

impl HamspamConfig {
    /// Load a configuration from a JSON file. Missing fields take defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: HamspamConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values that would make training or loading meaningless.
    pub fn validate(&self) -> Result<()> {
        validate_alpha(self.classifier.alpha)?;

        let fraction = self.split.train_fraction;
        if !(fraction > 0.0 && fraction < 1.0) {
            return Err(HamspamError::configuration(format!(
                "train fraction must be strictly between 0 and 1, got {fraction}"
            )));
        }

        if !self.dataset.delimiter.is_ascii() {
            return Err(HamspamError::configuration(format!(
                "delimiter must be a single ASCII character, got {:?}",
                self.dataset.delimiter
            )));
        }

        if self.dataset.label_column == self.dataset.text_column {
            return Err(HamspamError::configuration(
                "label and text columns must differ",
            ));
        }

        Ok(())
    }
}

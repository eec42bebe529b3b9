//! Parameter estimation: smoothed word likelihoods and class priors.
//!
//! For every vocabulary word `w` and label `c`:
//!
//! ```text
//! P(w|c) = (count(w, c) + α) / (total_words(c) + α · |V|)
//! ```
//!
//! Tables are computed once at training time and only read afterwards.

use ahash::AHashMap;
use serde::{Deserialize, Serialize};

use super::frequency::ClassStatistics;
use super::types::{Label, PerLabel};
use super::vocabulary::Vocabulary;
use crate::error::{HamspamError, Result};

/// Laplace smoothing constant.
pub const DEFAULT_ALPHA: f64 = 1.0;

/// Check that a smoothing constant keeps every likelihood strictly positive.
pub fn validate_alpha(alpha: f64) -> Result<()> {
    if alpha.is_finite() && alpha > 0.0 {
        Ok(())
    } else {
        Err(HamspamError::configuration(format!(
            "smoothing constant must be a positive finite number, got {alpha}"
        )))
    }
}

/// Smoothed likelihood of one word under one label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WordLikelihood {
    pub probability: f64,
    /// Cached `ln(probability)` for log-space scoring.
    pub log_probability: f64,
}

impl WordLikelihood {
    fn new(probability: f64) -> Self {
        WordLikelihood {
            probability,
            log_probability: probability.ln(),
        }
    }
}

/// Conditional probability table `P(word | label)` for a single label.
///
/// Every vocabulary word has an entry in `(0, 1]`. Words outside the
/// vocabulary have none, and [`ParameterTable::lookup`] says so explicitly.
#[derive(Debug, Clone)]
pub struct ParameterTable {
    label: Label,
    entries: AHashMap<String, WordLikelihood>,
}

impl ParameterTable {
    /// Label this table describes.
    pub fn label(&self) -> Label {
        self.label
    }

    /// `P(word | label)`, or `None` when the word was never seen in training.
    pub fn lookup(&self, word: &str) -> Option<f64> {
        self.entries.get(word).map(|entry| entry.probability)
    }

    /// `ln P(word | label)`, or `None` when the word was never seen in training.
    pub fn lookup_log(&self, word: &str) -> Option<f64> {
        self.entries.get(word).map(|entry| entry.log_probability)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &WordLikelihood)> {
        self.entries.iter().map(|(word, entry)| (word.as_str(), entry))
    }
}

/// Unconditional class probabilities: the share of training messages per label.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClassPriors(PerLabel<f64>);

impl ClassPriors {
    pub fn get(&self, label: Label) -> f64 {
        self.0[label]
    }

    pub fn spam(&self) -> f64 {
        self.0.spam
    }

    pub fn ham(&self) -> f64 {
        self.0.ham
    }

    pub fn as_per_label(&self) -> &PerLabel<f64> {
        &self.0
    }
}

/// Compute the smoothed likelihood table for every label.
///
/// An empty vocabulary yields empty tables; there is nothing to divide.
pub fn estimate(
    vocabulary: &Vocabulary,
    statistics: &ClassStatistics,
    alpha: f64,
) -> Result<PerLabel<ParameterTable>> {
    validate_alpha(alpha)?;

    let smoothing_mass = alpha * vocabulary.len() as f64;

    Ok(PerLabel::from_fn(|label| {
        let denominator = statistics.total_words(label) as f64 + smoothing_mass;
        let counts = statistics.word_counts(label);

        let entries = vocabulary
            .iter()
            .enumerate()
            .map(|(idx, word)| {
                let count = counts.get(idx).copied().unwrap_or(0) as f64;
                let probability = (count + alpha) / denominator;
                (word.to_owned(), WordLikelihood::new(probability))
            })
            .collect();

        ParameterTable { label, entries }
    }))
}

/// Compute class priors from per-label message counts.
///
/// Fails when the corpus is empty, when a label has no messages, or when the
/// counts do not add up to `total_messages`.
pub fn estimate_priors(
    message_counts: &PerLabel<usize>,
    total_messages: usize,
) -> Result<ClassPriors> {
    if total_messages == 0 {
        return Err(HamspamError::configuration("training corpus is empty"));
    }

    for (label, &count) in message_counts.iter() {
        if count == 0 {
            return Err(HamspamError::configuration(format!(
                "training corpus has no '{label}' messages"
            )));
        }
    }

    let counted = message_counts.spam + message_counts.ham;
    if counted != total_messages {
        return Err(HamspamError::configuration(format!(
            "label counts add up to {counted} but the corpus has {total_messages} messages"
        )));
    }

    let total = total_messages as f64;
    Ok(ClassPriors(message_counts.map(|_, &count| count as f64 / total)))
}

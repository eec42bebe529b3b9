//! Trained multinomial Naive Bayes model.

use std::sync::Arc;

use log::{debug, info};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::classifier::{Classification, MessageClassifier, ScoringStrategy, score};
use super::estimator::{ClassPriors, ParameterTable, estimate, estimate_priors, validate_alpha};
use super::frequency::{ClassStatistics, TokenizedMessage, count_frequencies};
use super::types::{Label, Message, PerLabel};
use super::vocabulary::Vocabulary;
use crate::analysis::analyzer::{Analyzer, MessageAnalyzer};
use crate::config::ClassifierConfig;
use crate::error::{HamspamError, Result};

/// A trained spam filter: vocabulary, statistics, likelihood tables, priors
/// and the analyzer used to produce them.
///
/// The model is immutable once trained and can be shared across threads.
///
/// # Examples
///
/// ```
/// use hamspam::config::ClassifierConfig;
/// use hamspam::ml::naive_bayes::{Decision, Label, Message, MessageClassifier, NaiveBayesClassifier};
///
/// let corpus = vec![
///     Message::labeled("WINNER! Claim your cash prize now", Label::Spam),
///     Message::labeled("Are we still on for lunch?", Label::Ham),
/// ];
/// let model = NaiveBayesClassifier::train(&corpus, &ClassifierConfig::default()).unwrap();
///
/// assert_eq!(model.decide("cash prize"), Decision::Spam);
/// assert_eq!(model.decide("lunch?"), Decision::Ham);
/// ```
pub struct NaiveBayesClassifier {
    analyzer: Arc<dyn Analyzer>,
    vocabulary: Vocabulary,
    statistics: ClassStatistics,
    tables: PerLabel<ParameterTable>,
    priors: ClassPriors,
    config: ClassifierConfig,
}

impl NaiveBayesClassifier {
    /// Train on labeled messages with the default [`MessageAnalyzer`].
    pub fn train(messages: &[Message], config: &ClassifierConfig) -> Result<Self> {
        Self::train_with_analyzer(messages, config, Arc::new(MessageAnalyzer::new()?))
    }

    /// Train on labeled messages with a custom analyzer.
    ///
    /// Fails with a configuration error when the corpus is empty, a message
    /// is unlabeled, a label is missing entirely, or alpha is not positive.
    pub fn train_with_analyzer(
        messages: &[Message],
        config: &ClassifierConfig,
        analyzer: Arc<dyn Analyzer>,
    ) -> Result<Self> {
        validate_alpha(config.alpha)?;
        if messages.is_empty() {
            return Err(HamspamError::configuration("training corpus is empty"));
        }

        let tokenized = messages
            .iter()
            .enumerate()
            .map(|(idx, message)| {
                let label = message.label.ok_or_else(|| {
                    HamspamError::configuration(format!("training message {idx} has no label"))
                })?;
                Ok(TokenizedMessage::new(label, analyzer.terms(&message.text)))
            })
            .collect::<Result<Vec<_>>>()?;

        let vocabulary = Vocabulary::build(tokenized.iter().map(|m| m.tokens.as_slice()));
        let statistics = count_frequencies(&tokenized, &vocabulary);
        let priors = estimate_priors(statistics.message_counts(), tokenized.len())?;
        let tables = estimate(&vocabulary, &statistics, config.alpha)?;

        debug!(
            "analyzer '{}' produced {} spam and {} ham word tokens",
            analyzer.name(),
            statistics.total_words(Label::Spam),
            statistics.total_words(Label::Ham)
        );
        info!(
            "trained naive bayes on {} messages ({} spam, {} ham), vocabulary of {} words, \
             P(spam) = {:.4}, P(ham) = {:.4}",
            tokenized.len(),
            statistics.message_count(Label::Spam),
            statistics.message_count(Label::Ham),
            vocabulary.len(),
            priors.spam(),
            priors.ham()
        );

        Ok(Self {
            analyzer,
            vocabulary,
            statistics,
            tables,
            priors,
            config: *config,
        })
    }

    /// Use a different scoring strategy with the same trained parameters.
    pub fn with_scoring(mut self, scoring: ScoringStrategy) -> Self {
        self.config.scoring = scoring;
        self
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    pub fn statistics(&self) -> &ClassStatistics {
        &self.statistics
    }

    pub fn priors(&self) -> &ClassPriors {
        &self.priors
    }

    /// Likelihood table of one label.
    pub fn table(&self, label: Label) -> &ParameterTable {
        &self.tables[label]
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    pub fn analyzer(&self) -> &Arc<dyn Analyzer> {
        &self.analyzer
    }

    /// Score tokens that were already analyzed.
    pub fn classify_tokens<S: AsRef<str>>(&self, tokens: &[S]) -> Classification {
        score(
            tokens,
            &self.priors,
            &self.tables.spam,
            &self.tables.ham,
            self.config.scoring,
        )
    }

    /// Classify many messages in parallel. Output order matches input order.
    pub fn classify_batch<S: AsRef<str> + Sync>(&self, texts: &[S]) -> Vec<Classification> {
        texts
            .par_iter()
            .map(|text| self.classify(text.as_ref()))
            .collect()
    }

    /// Serializable overview of the trained parameters.
    pub fn summary(&self) -> ModelSummary {
        ModelSummary {
            alpha: self.config.alpha,
            scoring: self.config.scoring,
            vocabulary_size: self.vocabulary.len(),
            messages: *self.statistics.message_counts(),
            words: PerLabel::from_fn(|label| self.statistics.total_words(label)),
            priors: *self.priors.as_per_label(),
        }
    }
}

impl MessageClassifier for NaiveBayesClassifier {
    fn classify(&self, text: &str) -> Classification {
        let tokens = self.analyzer.terms(text);
        self.classify_tokens(&tokens)
    }

    fn name(&self) -> &str {
        "naive_bayes"
    }
}

impl std::fmt::Debug for NaiveBayesClassifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NaiveBayesClassifier")
            .field("analyzer", &self.analyzer.name())
            .field("vocabulary_size", &self.vocabulary.len())
            .field("priors", &self.priors)
            .field("config", &self.config)
            .finish()
    }
}

/// Trained-model overview for reports.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModelSummary {
    pub alpha: f64,
    pub scoring: ScoringStrategy,
    pub vocabulary_size: usize,
    /// Training messages per label.
    pub messages: PerLabel<usize>,
    /// Training word tokens per label.
    pub words: PerLabel<u64>,
    pub priors: PerLabel<f64>,
}

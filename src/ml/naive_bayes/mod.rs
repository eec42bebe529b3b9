//! Multinomial Naive Bayes spam filter.
//!
//! Messages are reduced to bags of lowercase word tokens. Training collects
//! a vocabulary, per-label word counts and message counts, then estimates
//! Laplace-smoothed likelihoods `P(word | label)` and priors `P(label)`.
//! A message is decided by comparing `P(label) × Π P(word | label)` across
//! labels; equal scores yield [`Decision::Tie`].
//!
//! # Architecture
//!
//! - `Vocabulary`: distinct training tokens with stable indices
//! - `ClassStatistics`: per-label word counts, token totals and message counts
//! - `ParameterTable` / `ClassPriors`: immutable estimated parameters
//! - `MessageClassifier` trait: common interface for classifiers
//! - `NaiveBayesClassifier`: trained model bundling all of the above
//! - `evaluate`: accuracy on held-out labeled messages
//!
//! # Example
//!
//! ```
//! use hamspam::config::ClassifierConfig;
//! use hamspam::ml::naive_bayes::{
//!     Label, Message, MessageClassifier, NaiveBayesClassifier, TiePolicy, evaluate,
//! };
//!
//! # fn main() -> hamspam::error::Result<()> {
//! let training = vec![
//!     Message::labeled("Free entry in a weekly prize draw, txt WIN now", Label::Spam),
//!     Message::labeled("Ok, see you at lunch", Label::Ham),
//!     Message::labeled("Call me when you get home", Label::Ham),
//! ];
//! let model = NaiveBayesClassifier::train(&training, &ClassifierConfig::default())?;
//!
//! let test = vec![
//!     Message::labeled("WIN a free prize", Label::Spam),
//!     Message::labeled("see you at home", Label::Ham),
//! ];
//! let report = evaluate(&test, &model, TiePolicy::CountAsIncorrect)?;
//! assert_eq!(report.correct, 2);
//! assert_eq!(report.accuracy, 1.0);
//! # Ok(())
//! # }
//! ```

mod classifier;
mod estimator;
mod evaluation;
mod frequency;
mod model;
mod types;
mod vocabulary;

// Public exports
pub use classifier::{Classification, MessageClassifier, ScoringStrategy, classify, decide, score};
pub use estimator::{
    ClassPriors, DEFAULT_ALPHA, ParameterTable, WordLikelihood, estimate, estimate_priors,
    validate_alpha,
};
pub use evaluation::{ConfusionMatrix, EvaluationReport, TiePolicy, evaluate};
pub use frequency::{ClassStatistics, TokenizedMessage, count_frequencies};
pub use model::{ModelSummary, NaiveBayesClassifier};
pub use types::{Decision, Label, Message, PerLabel};
pub use vocabulary::{Vocabulary, build_vocabulary};

//! # hamspam
//!
//! A multinomial Naive Bayes spam filter for short text messages.
//!
//! ## Features
//!
//! - Regex word tokenizer with a lowercase filter pipeline
//! - Laplace-smoothed likelihoods and message-count priors
//! - Log-space scoring, or product scoring with underflow fallback
//! - Explicit tie handling in classification and evaluation
//! - Delimited corpus loading and seeded train/test splits
//!
//! ```
//! use hamspam::config::ClassifierConfig;
//! use hamspam::ml::naive_bayes::{Decision, Label, Message, MessageClassifier, NaiveBayesClassifier};
//!
//! # fn main() -> hamspam::error::Result<()> {
//! let corpus = vec![
//!     Message::labeled("URGENT! You have won a 1 week FREE membership", Label::Spam),
//!     Message::labeled("I'm gonna be home soon", Label::Ham),
//! ];
//! let model = NaiveBayesClassifier::train(&corpus, &ClassifierConfig::default())?;
//! assert_eq!(model.decide("FREE membership!"), Decision::Spam);
//! # Ok(())
//! # }
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod dataset;
pub mod error;
pub mod ml;

pub mod prelude {
    pub use crate::analysis::{Analyzer, MessageAnalyzer, tokenize};
    pub use crate::config::{ClassifierConfig, HamspamConfig};
    pub use crate::error::{HamspamError, Result};
    pub use crate::ml::naive_bayes::{
        Classification, Decision, EvaluationReport, Label, Message, MessageClassifier,
        NaiveBayesClassifier, ScoringStrategy, TiePolicy, evaluate,
    };
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

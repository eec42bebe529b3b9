//! Analyzers combine a tokenizer and a chain of filters.
//!
//! ```text
//! Raw Text → Analyzer → Token Stream → Vocabulary / Classifier
//!             ↓
//!         Tokenizer
//!             ↓
//!         Filter 1 .. Filter N
//! ```
//!
//! - [`MessageAnalyzer`] - word runs, lowercased, empties dropped (the default)
//! - [`PipelineAnalyzer`] - custom tokenizer + filter chains
//!
//! # Examples
//!
//! ```
//! use hamspam::analysis::analyzer::{Analyzer, MessageAnalyzer};
//!
//! let analyzer = MessageAnalyzer::new().unwrap();
//! assert_eq!(analyzer.terms("WINNER!! money: C3421."), vec!["winner", "money", "c3421"]);
//! ```

use std::sync::LazyLock;

use crate::analysis::token::TokenStream;

mod message;
mod pipeline;

pub use message::MessageAnalyzer;
pub use pipeline::PipelineAnalyzer;

/// Trait for analyzers that convert text into processed tokens.
///
/// `Send + Sync` is required because a trained model keeps its analyzer and
/// may be shared across classification threads.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text and return a stream of tokens.
    fn analyze(&self, text: &str) -> TokenStream;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &str;

    /// Analyze the text and keep only the token strings, in order.
    fn terms(&self, text: &str) -> Vec<String> {
        self.analyze(text).map(|token| token.text).collect()
    }
}

static DEFAULT_ANALYZER: LazyLock<MessageAnalyzer> = LazyLock::new(MessageAnalyzer::default);

/// Tokenize a message with the default [`MessageAnalyzer`].
///
/// Every character that is not a letter, digit or underscore acts as a
/// separator; tokens are lowercased and returned left to right.
///
/// ```
/// use hamspam::analysis::analyzer::tokenize;
///
/// assert_eq!(tokenize("WINNER!! money: C3421."), vec!["winner", "money", "c3421"]);
/// assert!(tokenize("").is_empty());
/// ```
pub fn tokenize(text: &str) -> Vec<String> {
    DEFAULT_ANALYZER.terms(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_reference_example() {
        assert_eq!(
            tokenize("WINNER!! money: C3421."),
            vec!["winner", "money", "c3421"]
        );
    }

    #[test]
    fn test_tokenize_preserves_order_and_repeats() {
        assert_eq!(
            tokenize("Call now, CALL NOW!"),
            vec!["call", "now", "call", "now"]
        );
    }

    #[test]
    fn test_tokenize_whitespace_and_symbols_only() {
        assert!(tokenize("   \t\n").is_empty());
        assert!(tokenize("£££ ... !!!").is_empty());
    }

    #[test]
    fn test_tokenize_keeps_underscore_and_digits() {
        assert_eq!(tokenize("txt_STOP to 87121"), vec!["txt_stop", "to", "87121"]);
    }

    #[test]
    fn test_tokenize_connector_punctuation_separates() {
        assert_eq!(tokenize("win\u{203F}cash"), vec!["win", "cash"]);
        assert_eq!(tokenize("free\u{2040}entry"), vec!["free", "entry"]);
    }

    #[test]
    fn test_tokenize_combining_mark_separates() {
        assert_eq!(tokenize("cafe\u{0301} now"), vec!["cafe", "now"]);
    }

    #[test]
    fn test_tokenize_keeps_non_decimal_numbers() {
        assert_eq!(tokenize("x\u{00B2}"), vec!["x\u{00B2}"]);
        assert_eq!(tokenize("Call \u{00BD} price"), vec!["call", "\u{00BD}", "price"]);
    }
}

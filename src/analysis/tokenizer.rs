//! Tokenizers split raw message text into tokens.
//!
//! Tokenizers are the first step of the analysis pipeline. They never fail:
//! any input string, including the empty string, yields a possibly-empty
//! token stream in left-to-right order.
//!
//! # Examples
//!
//! ```
//! use hamspam::analysis::tokenizer::Tokenizer;
//! use hamspam::analysis::tokenizer::regex::RegexTokenizer;
//!
//! let tokenizer = RegexTokenizer::new().unwrap();
//! let tokens: Vec<_> = tokenizer.tokenize("Free entry, txt now").collect();
//! assert_eq!(tokens.len(), 4);
//! ```

use crate::analysis::token::TokenStream;

pub mod regex;

pub use self::regex::RegexTokenizer;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` so a trained model holding a tokenizer
/// can classify messages from several threads.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> TokenStream;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

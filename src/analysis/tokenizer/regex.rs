//! Regex-based tokenizer implementation.

use std::sync::Arc;

use regex::Regex;

use super::Tokenizer;
use crate::analysis::token::{IntoTokenStream, Token, TokenStream};
use crate::error::{HamspamError, Result};

/// Runs of word characters: Unicode letters, numbers and underscore.
///
/// Anything else, including combining marks and connector punctuation other
/// than `_`, separates words.
pub const WORD_PATTERN: &str = r"[\p{L}\p{N}_]+";

/// A regex-based tokenizer that extracts tokens using regular expressions.
#[derive(Clone, Debug)]
pub struct RegexTokenizer {
    /// The regex pattern used to extract tokens
    pattern: Arc<Regex>,
    /// Whether to extract gaps (text between matches) instead of matches
    gaps: bool,
}

impl RegexTokenizer {
    /// Create a new regex tokenizer with the word pattern [`WORD_PATTERN`].
    pub fn new() -> Result<Self> {
        Self::with_pattern(WORD_PATTERN)
    }

    /// Create a new regex tokenizer with a custom pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| HamspamError::analysis(format!("Invalid regex pattern: {e}")))?;

        Ok(RegexTokenizer {
            pattern: Arc::new(regex),
            gaps: false,
        })
    }

    /// Create a tokenizer that extracts gaps (text between matches) instead of matches.
    pub fn with_gaps(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| HamspamError::analysis(format!("Invalid regex pattern: {e}")))?;

        Ok(RegexTokenizer {
            pattern: Arc::new(regex),
            gaps: true,
        })
    }

    /// Get the regex pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }

    /// Check if this tokenizer extracts gaps.
    pub fn gaps(&self) -> bool {
        self.gaps
    }

    fn split_gaps(&self, text: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut last_end = 0;

        for mat in self.pattern.find_iter(text) {
            if mat.start() > last_end {
                tokens.push(Token::with_offsets(
                    &text[last_end..mat.start()],
                    tokens.len(),
                    last_end,
                    mat.start(),
                ));
            }
            last_end = mat.end();
        }

        if last_end < text.len() {
            tokens.push(Token::with_offsets(
                &text[last_end..],
                tokens.len(),
                last_end,
                text.len(),
            ));
        }

        tokens
    }
}

impl Default for RegexTokenizer {
    fn default() -> Self {
        Self::new().expect("Default regex pattern should be valid")
    }
}

impl Tokenizer for RegexTokenizer {
    fn tokenize(&self, text: &str) -> TokenStream {
        let tokens: Vec<Token> = if self.gaps {
            self.split_gaps(text)
        } else {
            self.pattern
                .find_iter(text)
                .enumerate()
                .map(|(position, mat)| {
                    Token::with_offsets(mat.as_str(), position, mat.start(), mat.end())
                })
                .collect()
        };

        tokens.into_token_stream()
    }

    fn name(&self) -> &'static str {
        "regex"
    }
}

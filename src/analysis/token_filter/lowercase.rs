//! Lowercase filter implementation.
//!
//! # Examples
//!
//! ```
//! use hamspam::analysis::token_filter::Filter;
//! use hamspam::analysis::token_filter::lowercase::LowercaseFilter;
//! use hamspam::analysis::token::{IntoTokenStream, Token};
//!
//! let filter = LowercaseFilter::new();
//! let tokens = vec![Token::new("FREE", 0), Token::new("Entry", 1)];
//! let filtered: Vec<_> = filter.filter(tokens.into_token_stream()).collect();
//!
//! assert_eq!(filtered[0].text, "free");
//! assert_eq!(filtered[1].text, "entry");
//! ```

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;

/// A filter that converts tokens to lowercase.
///
/// ASCII tokens take the byte-wise fast path; anything else goes through
/// Unicode-aware lowercasing. Positions and offsets are preserved.
#[derive(Clone, Debug, Default)]
pub struct LowercaseFilter;

impl LowercaseFilter {
    /// Create a new lowercase filter.
    pub fn new() -> Self {
        LowercaseFilter
    }

    fn lowercase(text: &str) -> String {
        if text.is_ascii() {
            text.to_ascii_lowercase()
        } else {
            text.to_lowercase()
        }
    }
}

impl Filter for LowercaseFilter {
    fn filter(&self, tokens: TokenStream) -> TokenStream {
        Box::new(tokens.map(|token| {
            let lowered = Self::lowercase(&token.text);
            token.with_text(lowered)
        }))
    }

    fn name(&self) -> &'static str {
        "lowercase"
    }
}

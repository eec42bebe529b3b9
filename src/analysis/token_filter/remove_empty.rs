//! Remove empty filter implementation.

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::Filter;

/// A filter that removes tokens with empty text from the stream.
///
/// Used at the end of a pipeline so that no later stage ever sees an empty
/// word, whatever the tokenizer upstream produced.
///
/// # Examples
///
/// ```
/// use hamspam::analysis::token_filter::Filter;
/// use hamspam::analysis::token_filter::remove_empty::RemoveEmptyFilter;
/// use hamspam::analysis::token::{IntoTokenStream, Token};
///
/// let filter = RemoveEmptyFilter::new();
/// let tokens = vec![Token::new("hello", 0), Token::new("", 1), Token::new("world", 2)];
///
/// let result: Vec<_> = filter.filter(tokens.into_token_stream()).collect();
///
/// assert_eq!(result.len(), 2);
/// assert_eq!(result[1].text, "world");
/// ```
#[derive(Clone, Debug, Default)]
pub struct RemoveEmptyFilter;

impl RemoveEmptyFilter {
    /// Create a new remove empty filter.
    pub fn new() -> Self {
        RemoveEmptyFilter
    }
}

impl Filter for RemoveEmptyFilter {
    fn filter(&self, tokens: TokenStream) -> TokenStream {
        Box::new(tokens.filter(|token| !token.text.is_empty()))
    }

    fn name(&self) -> &'static str {
        "remove_empty"
    }
}

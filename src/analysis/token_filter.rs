//! Token filters transform token streams produced by tokenizers.
//!
//! # Available Filters
//!
//! - [`lowercase::LowercaseFilter`] - Converts tokens to lowercase
//! - [`remove_empty::RemoveEmptyFilter`] - Removes empty tokens

use crate::analysis::token::TokenStream;

pub mod lowercase;
pub mod remove_empty;

pub use lowercase::LowercaseFilter;
pub use remove_empty::RemoveEmptyFilter;

/// Trait for filters that transform token streams.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> TokenStream;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

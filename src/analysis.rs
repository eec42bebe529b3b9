//! Text analysis: turning raw message text into normalized word tokens.

pub mod analyzer;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

pub use analyzer::{Analyzer, MessageAnalyzer, PipelineAnalyzer, tokenize};

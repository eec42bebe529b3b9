//! Message analyzer: the tokenization used for training and classification.
//!
//! # Pipeline
//!
//! 1. RegexTokenizer (runs of Unicode letters, numbers and `_`)
//! 2. LowercaseFilter
//! 3. RemoveEmptyFilter

use std::sync::Arc;

use crate::analysis::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::lowercase::LowercaseFilter;
use crate::analysis::token_filter::remove_empty::RemoveEmptyFilter;
use crate::analysis::tokenizer::regex::RegexTokenizer;
use crate::error::Result;

/// Analyzer for short text messages.
///
/// No stop words and no stemming: every word that survives normalization
/// becomes a feature.
#[derive(Clone, Debug)]
pub struct MessageAnalyzer {
    inner: PipelineAnalyzer,
}

impl MessageAnalyzer {
    /// Create a new message analyzer.
    pub fn new() -> Result<Self> {
        let tokenizer = Arc::new(RegexTokenizer::new()?);
        let analyzer = PipelineAnalyzer::new(tokenizer)
            .add_filter(Arc::new(LowercaseFilter::new()))
            .add_filter(Arc::new(RemoveEmptyFilter::new()))
            .with_name("message");

        Ok(MessageAnalyzer { inner: analyzer })
    }

    /// Get the inner pipeline analyzer.
    pub fn inner(&self) -> &PipelineAnalyzer {
        &self.inner
    }
}

impl Default for MessageAnalyzer {
    fn default() -> Self {
        Self::new().expect("Message analyzer should be creatable with default settings")
    }
}

impl Analyzer for MessageAnalyzer {
    fn analyze(&self, text: &str) -> TokenStream {
        self.inner.analyze(text)
    }

    fn name(&self) -> &str {
        "message"
    }
}

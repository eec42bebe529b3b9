//! Per-label word frequencies of the training corpus.

use serde::{Deserialize, Serialize};

use super::types::{Label, PerLabel};
use super::vocabulary::Vocabulary;

/// A training message after analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenizedMessage {
    pub label: Label,
    pub tokens: Vec<String>,
}

impl TokenizedMessage {
    pub fn new(label: Label, tokens: Vec<String>) -> Self {
        TokenizedMessage { label, tokens }
    }
}

/// Word counts, token totals and message counts per label.
///
/// `word_counts[label][i]` is the number of occurrences of
/// `vocabulary.words()[i]` across all messages of `label`, repeats included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassStatistics {
    word_counts: PerLabel<Vec<u64>>,
    total_words: PerLabel<u64>,
    message_counts: PerLabel<usize>,
}

impl ClassStatistics {
    /// Occurrences of `word` in messages of `label`; 0 when out of vocabulary.
    pub fn word_count(&self, vocabulary: &Vocabulary, word: &str, label: Label) -> u64 {
        vocabulary
            .index_of(word)
            .and_then(|idx| self.word_counts[label].get(idx).copied())
            .unwrap_or(0)
    }

    /// Count vector for `label`, aligned with the vocabulary's word order.
    pub fn word_counts(&self, label: Label) -> &[u64] {
        &self.word_counts[label]
    }

    /// Raw number of word tokens across all messages of `label`.
    pub fn total_words(&self, label: Label) -> u64 {
        self.total_words[label]
    }

    pub fn message_count(&self, label: Label) -> usize {
        self.message_counts[label]
    }

    pub fn message_counts(&self) -> &PerLabel<usize> {
        &self.message_counts
    }

    pub fn total_messages(&self) -> usize {
        self.message_counts.spam + self.message_counts.ham
    }
}

/// Count word occurrences per label.
///
/// Every token counts toward its label's raw total. Only tokens present in
/// `vocabulary` get a per-word count; with a vocabulary built from the same
/// messages that is all of them.
pub fn count_frequencies(
    messages: &[TokenizedMessage],
    vocabulary: &Vocabulary,
) -> ClassStatistics {
    let mut word_counts = PerLabel::from_fn(|_| vec![0_u64; vocabulary.len()]);
    let mut total_words = PerLabel::<u64>::default();
    let mut message_counts = PerLabel::<usize>::default();

    for message in messages {
        let label = message.label;
        message_counts[label] += 1;
        total_words[label] += message.tokens.len() as u64;

        let counts = &mut word_counts[label];
        for token in &message.tokens {
            if let Some(idx) = vocabulary.index_of(token) {
                counts[idx] += 1;
            }
        }
    }

    ClassStatistics {
        word_counts,
        total_words,
        message_counts,
    }
}

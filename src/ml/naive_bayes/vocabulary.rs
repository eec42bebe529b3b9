//! Vocabulary: the distinct words observed in the training corpus.

use std::collections::BTreeSet;

use ahash::AHashMap;

use super::frequency::TokenizedMessage;

/// Set of unique training tokens, materialized as a sorted word list.
///
/// Each word has a stable index into [`Vocabulary::words`], which the
/// frequency counter uses to lay out per-label count vectors.
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    /// Words in ascending order, no duplicates.
    words: Vec<String>,
    /// Word -> index in `words`.
    index: AHashMap<String, usize>,
}

impl Vocabulary {
    /// Collect every distinct token across the given token lists.
    ///
    /// No frequency pruning and no stop words: a token seen once is in.
    pub fn build<'a, I>(token_lists: I) -> Self
    where
        I: IntoIterator<Item = &'a [String]>,
    {
        let unique: BTreeSet<&str> = token_lists
            .into_iter()
            .flat_map(|tokens| tokens.iter().map(String::as_str))
            .collect();

        let words: Vec<String> = unique.into_iter().map(str::to_owned).collect();
        let index = words
            .iter()
            .enumerate()
            .map(|(idx, word)| (word.clone(), idx))
            .collect();

        Vocabulary { words, index }
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// Index of `word` in [`Vocabulary::words`], if it is known.
    pub fn index_of(&self, word: &str) -> Option<usize> {
        self.index.get(word).copied()
    }

    /// All words, sorted.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

/// Build the vocabulary of a tokenized training corpus.
pub fn build_vocabulary(messages: &[TokenizedMessage]) -> Vocabulary {
    Vocabulary::build(messages.iter().map(|message| message.tokens.as_slice()))
}

/*!
 * Wordlist loading and deduplication
 *
 * Turns raw input words into the fixed vocabulary the mutation pipeline runs
 * over: deduplicated, sorted shortest-first, immutable after construction.
 */

use std::collections::HashSet;

/// Deduplicated input vocabulary, sorted ascending by word length.
///
/// Consumers downstream rely on shorter (simpler) candidates being emitted
/// earlier, so the length-only sort order is part of the contract. Ties keep
/// their encounter order (stable sort), but callers must not depend on that.
pub struct Vocabulary {
    words: Vec<Vec<u8>>,
    average_word_length: f64,
}

impl Vocabulary {
    /// Load a vocabulary from raw words.
    pub fn new<I>(words: I) -> Self
    where
        I: IntoIterator<Item = Vec<u8>>,
    {
        Self::with_key(words, |word| word)
    }

    /// Load a vocabulary, normalizing each word through `key` before
    /// deduplication (e.g. lowercasing so case duplicates collapse).
    ///
    /// The average word length is measured on the raw input, before `key`
    /// and before deduplication, since it estimates output record size.
    pub fn with_key<I, F>(words: I, key: F) -> Self
    where
        I: IntoIterator<Item = Vec<u8>>,
        F: Fn(Vec<u8>) -> Vec<u8>,
    {
        let mut total_words = 0u64;
        let mut total_word_size = 0u64;

        let mut seen = HashSet::new();
        let mut unique = Vec::new();
        for word in words {
            total_words += 1;
            total_word_size += word.len() as u64;

            let word = key(word);
            if seen.insert(word.clone()) {
                unique.push(word);
            }
        }
        unique.sort_by_key(|word| word.len());

        let average_word_length = if total_words == 0 {
            // nothing to measure; assume a typical password length
            8.0
        } else {
            total_word_size as f64 / total_words as f64
        };

        Self {
            words: unique,
            average_word_length,
        }
    }

    /// Number of unique words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Mean length of the raw (pre-dedup) input words, 8.0 when the input
    /// was empty.
    pub fn average_word_length(&self) -> f64 {
        self.average_word_length
    }

    pub fn words(&self) -> &[Vec<u8>] {
        &self.words
    }

    pub fn into_words(self) -> Vec<Vec<u8>> {
        self.words
    }
}

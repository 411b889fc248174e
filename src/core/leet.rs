/*!
 * Substitution stage
 *
 * Streams character-substitution variants for each incoming word. Every word
 * passes through at least once (the head of the common-table generator is the
 * word unchanged and is never withheld). While quota remains, the common
 * table is drained first, then the extended table picks up the less likely
 * substitutions, skipping anything the word already produced.
 */

use std::collections::HashSet;

use super::budget::Quota;
use super::tables::{LEET_COMMON, LEET_EXTENDED};
use super::variants::VariantGen;

enum Phase {
    Common,
    Extended,
}

struct WordState {
    word: Vec<u8>,
    gen: VariantGen,
    phase: Phase,

    /// Everything already yielded for this word, so the extended pass never
    /// repeats a common-table variant. Dropped when the word ends.
    produced: HashSet<Vec<u8>>,
}

/// Budget-gated substitution stage over an upstream word source.
pub struct LeetStage<I> {
    upstream: I,
    enabled: bool,
    quota: Quota,
    current: Option<WordState>,
}

impl<I> LeetStage<I>
where
    I: Iterator<Item = Vec<u8>>,
{
    pub fn new(upstream: I, enabled: bool, max_leet: u64) -> Self {
        Self {
            upstream,
            enabled,
            quota: Quota::new(max_leet),
            current: None,
        }
    }
}

impl<I> Iterator for LeetStage<I>
where
    I: Iterator<Item = Vec<u8>>,
{
    type Item = Vec<u8>;

    fn next(&mut self) -> Option<Vec<u8>> {
        loop {
            // drain the active word while allowed
            if let Some(state) = &mut self.current {
                if self.enabled && !self.quota.exhausted() {
                    loop {
                        match state.gen.next() {
                            Some(variant) => {
                                if matches!(state.phase, Phase::Extended)
                                    && state.produced.contains(&variant)
                                {
                                    continue;
                                }
                                self.quota.drain();
                                state.produced.insert(variant.clone());
                                return Some(variant);
                            }
                            None => match state.phase {
                                Phase::Common => {
                                    state.phase = Phase::Extended;
                                    state.gen = VariantGen::leet(&state.word, &LEET_EXTENDED);
                                }
                                Phase::Extended => break,
                            },
                        }
                    }
                }
                self.current = None;
            }

            let word = self.upstream.next()?;
            self.quota.replenish();

            // the first common-table variant is the word itself; it is
            // emitted no matter what, but still counts against the quota
            let mut gen = VariantGen::leet(&word, &LEET_COMMON);
            let first = gen.next().unwrap_or_default();
            self.quota.drain();

            let mut produced = HashSet::new();
            if self.enabled {
                produced.insert(first.clone());
            }
            self.current = Some(WordState {
                word,
                gen,
                phase: Phase::Common,
                produced,
            });
            return Some(first);
        }
    }
}

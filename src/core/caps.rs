/*!
 * Case-variation stage
 *
 * Streams capitalization variants for each incoming word: a canonical,
 * priority-ordered set of up to six case transforms, and optionally every
 * per-letter case combination after that. Both phases share the case-axis
 * quota and its cross-word carry-forward.
 */

use super::budget::Quota;
use super::variants::VariantGen;

/// How much case mutation the stage performs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CapMode {
    /// Pass words through untouched.
    Off,

    /// Canonical case transforms only.
    Common,

    /// Canonical transforms, then all case-bitmask combinations.
    Full,
}

struct WordState {
    /// Deduplicated canonical variants, most likely first. Doubles as the
    /// "already produced" filter for the bitmask phase.
    canonical: Vec<Vec<u8>>,
    idx: usize,
    bitmask: Option<VariantGen>,
}

/// Budget-gated case-variation stage over an upstream word source.
pub struct CapStage<I> {
    upstream: I,
    mode: CapMode,
    quota: Quota,
    current: Option<WordState>,
}

impl<I> CapStage<I>
where
    I: Iterator<Item = Vec<u8>>,
{
    pub fn new(upstream: I, mode: CapMode, max_cap: u64) -> Self {
        Self {
            upstream,
            mode,
            quota: Quota::new(max_cap),
            current: None,
        }
    }
}

impl<I> Iterator for CapStage<I>
where
    I: Iterator<Item = Vec<u8>>,
{
    type Item = Vec<u8>;

    fn next(&mut self) -> Option<Vec<u8>> {
        loop {
            if let Some(state) = &mut self.current {
                if !self.quota.exhausted() {
                    if state.idx < state.canonical.len() {
                        let variant = state.canonical[state.idx].clone();
                        state.idx += 1;
                        self.quota.drain();
                        return Some(variant);
                    }
                    if let Some(gen) = &mut state.bitmask {
                        while let Some(variant) = gen.next() {
                            if state.canonical.contains(&variant) {
                                continue;
                            }
                            self.quota.drain();
                            return Some(variant);
                        }
                    }
                }
                self.current = None;
            }

            let word = self.upstream.next()?;
            if self.mode == CapMode::Off {
                return Some(word);
            }

            self.quota.replenish();
            let bitmask = match self.mode {
                CapMode::Full => Some(VariantGen::capswap(&word)),
                _ => None,
            };
            self.current = Some(WordState {
                canonical: canonical_variants(&word),
                idx: 0,
                bitmask,
            });
        }
    }
}

/// The canonical case transforms of a word, most likely first, duplicates
/// suppressed. At most six entries.
pub fn canonical_variants(word: &[u8]) -> Vec<Vec<u8>> {
    let mut results: Vec<Vec<u8>> = Vec::with_capacity(6);
    for variant in [
        word.to_vec(),
        word.to_ascii_lowercase(),
        word.to_ascii_uppercase(),
        swapcase(word),
        capitalize(word),
        title(word),
    ] {
        if !results.contains(&variant) {
            results.push(variant);
        }
    }
    results
}

/// Every letter's case inverted.
pub fn swapcase(word: &[u8]) -> Vec<u8> {
    word.iter()
        .map(|&b| {
            if b.is_ascii_uppercase() {
                b.to_ascii_lowercase()
            } else {
                b.to_ascii_uppercase()
            }
        })
        .collect()
}

/// First byte uppercased, the rest lowercased.
pub fn capitalize(word: &[u8]) -> Vec<u8> {
    let mut out = word.to_ascii_lowercase();
    if let Some(first) = out.first_mut() {
        *first = first.to_ascii_uppercase();
    }
    out
}

/// First byte of each whitespace-delimited word uppercased, the rest
/// lowercased.
pub fn title(word: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(word.len());
    let mut word_start = true;
    for &b in word {
        if b.is_ascii_whitespace() {
            out.push(b);
            word_start = true;
        } else if word_start {
            out.push(b.to_ascii_uppercase());
            word_start = false;
        } else {
            out.push(b.to_ascii_lowercase());
        }
    }
    out
}

/*!
 * Permutation stage
 *
 * Produces the base stream of words the mutation stages consume: either the
 * vocabulary itself (optionally with each word doubled), or for permutation
 * depths above one, every ordered concatenation of vocabulary words up to
 * that depth. The combinatorial mode is exponential by design; the caller
 * opts into the blow-up via the depth parameter.
 */

use super::vocab::Vocabulary;

enum Mode {
    /// Depth <= 1: each word once, doubled copy right after it if enabled.
    PassThrough {
        idx: usize,
        double: bool,
        pending_double: Option<Vec<u8>>,
    },

    /// Depth > 1: odometer over word indices, one digit per concatenated
    /// word. Rightmost digit varies fastest, matching the lexicographic
    /// product order of the vocabulary.
    Product {
        depth: usize,
        max_depth: usize,
        odometer: Vec<usize>,
    },
}

/// Lazy, single-pass producer of base words. Owns the vocabulary.
pub struct PermStage {
    words: Vec<Vec<u8>>,
    mode: Mode,
}

impl PermStage {
    pub fn new(vocab: Vocabulary, perm_depth: usize, double: bool) -> Self {
        let mode = if perm_depth > 1 {
            Mode::Product {
                depth: 1,
                max_depth: perm_depth,
                odometer: vec![0],
            }
        } else {
            Mode::PassThrough {
                idx: 0,
                double,
                pending_double: None,
            }
        };
        Self {
            words: vocab.into_words(),
            mode,
        }
    }
}

impl Iterator for PermStage {
    type Item = Vec<u8>;

    fn next(&mut self) -> Option<Vec<u8>> {
        match &mut self.mode {
            Mode::PassThrough {
                idx,
                double,
                pending_double,
            } => {
                if let Some(doubled) = pending_double.take() {
                    return Some(doubled);
                }
                let word = self.words.get(*idx)?.clone();
                *idx += 1;
                if *double {
                    let mut doubled = word.clone();
                    doubled.extend_from_slice(&word);
                    *pending_double = Some(doubled);
                }
                Some(word)
            }

            Mode::Product {
                depth,
                max_depth,
                odometer,
            } => {
                if self.words.is_empty() || *depth > *max_depth {
                    return None;
                }

                let mut token = Vec::new();
                for &i in odometer.iter() {
                    token.extend_from_slice(&self.words[i]);
                }

                // advance the odometer, carrying right to left; a full
                // wrap-around moves on to the next depth
                let mut pos = odometer.len();
                loop {
                    if pos == 0 {
                        *depth += 1;
                        *odometer = vec![0; *depth];
                        break;
                    }
                    pos -= 1;
                    odometer[pos] += 1;
                    if odometer[pos] < self.words.len() {
                        break;
                    }
                    odometer[pos] = 0;
                }

                Some(token)
            }
        }
    }
}

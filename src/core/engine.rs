/*!
 * Mutation engine
 *
 * Ties the pipeline together: vocabulary -> permutation -> substitution ->
 * case variation. The engine resolves the output-size budget at construction
 * and is then consumed into a lazy, single-pass stream of candidate words.
 */

use anyhow::{bail, Result};

use super::budget::Budget;
use super::caps::{CapMode, CapStage};
use super::leet::LeetStage;
use super::permute::PermStage;
use super::vocab::Vocabulary;

/// Engine configuration. Immutable once the engine is built.
#[derive(Debug, Clone)]
pub struct MangleConfig {
    /// Maximum number of vocabulary words concatenated per candidate.
    /// 1 means no permutation.
    pub perm_depth: usize,

    /// Emit each word's self-concatenation after the word itself.
    /// Ignored when `perm_depth` > 1.
    pub double: bool,

    /// Character substitution ("leet") mutations.
    pub leet: bool,

    /// Common upper/lowercase variations.
    pub cap: bool,

    /// All per-letter case combinations. Implies `cap`.
    pub capswap: bool,

    /// Desired total output size in words. Derived when absent.
    pub target_size: Option<u64>,
}

impl Default for MangleConfig {
    fn default() -> Self {
        Self {
            perm_depth: 1,
            double: false,
            leet: false,
            cap: false,
            capswap: false,
            target_size: None,
        }
    }
}

impl MangleConfig {
    fn do_cap(&self) -> bool {
        self.cap || self.capswap
    }
}

/// A configured mutation engine over a fixed vocabulary.
///
/// Construction resolves the per-word quotas from the target output size.
/// Iterate with [`IntoIterator`]; the stream is finite and forward-only, so a
/// second pass needs a new engine over the same input.
pub struct Mangler {
    vocab: Vocabulary,
    config: MangleConfig,
    budget: Budget,
    target_size: u128,
    projected_len: u128,
}

impl Mangler {
    /// Build an engine from raw input words.
    ///
    /// # Errors
    /// Fails on a zero target size, or when the permutation depth overflows
    /// the projected input length. Empty input is not an error.
    pub fn new<W>(words: W, config: MangleConfig) -> Result<Self>
    where
        W: IntoIterator<Item = Vec<u8>>,
    {
        Self::from_vocabulary(Vocabulary::new(words), config)
    }

    /// Build an engine from an already-loaded vocabulary (e.g. one built
    /// with a normalization key).
    pub fn from_vocabulary(vocab: Vocabulary, config: MangleConfig) -> Result<Self> {
        if config.target_size == Some(0) {
            bail!("target output size must be a positive number of words");
        }

        let projected_len = projected_input_len(vocab.len(), config.perm_depth, config.double)?;

        let target_size = match config.target_size {
            Some(size) => size as u128,
            None => {
                // the estimate needs quotas and the quotas need a target, so
                // seed the estimate with the default quotas first
                let seeded = Budget::default().estimated_output(
                    projected_len.max(1),
                    config.leet,
                    config.do_cap(),
                    config.capswap,
                );
                seeded.saturating_mul(1000).max(100_000_000)
            }
        };

        let budget = Budget::allocate(
            target_size,
            projected_len,
            config.leet,
            config.do_cap(),
            config.capswap,
        );

        Ok(Self {
            vocab,
            config,
            budget,
            target_size,
            projected_len,
        })
    }

    /// Estimated total number of words the stream will yield, for progress
    /// reporting. Zero for an empty vocabulary.
    pub fn estimated_len(&self) -> u128 {
        self.budget.estimated_output(
            self.projected_len,
            self.config.leet,
            self.config.do_cap(),
            self.config.capswap,
        )
    }

    /// Mean length of the raw input words (pre-dedup), for output byte-size
    /// estimation.
    pub fn average_word_length(&self) -> f64 {
        self.vocab.average_word_length()
    }

    /// The resolved output-size target.
    pub fn target_size(&self) -> u128 {
        self.target_size
    }

    /// The per-word quotas the target resolved to.
    pub fn budget(&self) -> Budget {
        self.budget
    }

    /// Number of unique input words.
    pub fn word_count(&self) -> usize {
        self.vocab.len()
    }
}

/// Number of base words the permutation stage will emit, in checked 128-bit
/// arithmetic.
fn projected_input_len(words: usize, perm_depth: usize, double: bool) -> Result<u128> {
    let n = words as u128;
    let mut length = n;

    if perm_depth > 1 {
        for d in 2..=perm_depth {
            let term = n
                .checked_pow(d as u32)
                .and_then(|term| length.checked_add(term));
            match term {
                Some(sum) => length = sum,
                None => bail!(
                    "permutation depth {} overflows the projected input length for {} words",
                    perm_depth,
                    words
                ),
            }
        }
    } else if double {
        length *= 2;
    }

    Ok(length)
}

/// The candidate stream: permutation, then substitution, then case.
pub type MangleStream = CapStage<LeetStage<PermStage>>;

impl IntoIterator for Mangler {
    type Item = Vec<u8>;
    type IntoIter = MangleStream;

    fn into_iter(self) -> MangleStream {
        let cap_mode = if self.config.capswap {
            CapMode::Full
        } else if self.config.cap {
            CapMode::Common
        } else {
            CapMode::Off
        };

        let perm = PermStage::new(self.vocab, self.config.perm_depth, self.config.double);
        let leet = LeetStage::new(perm, self.config.leet, self.budget.max_leet);
        CapStage::new(leet, cap_mode, self.budget.max_cap)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(input: &[&[u8]]) -> Vec<Vec<u8>> {
        input.iter().map(|w| w.to_vec()).collect()
    }

    #[test]
    fn test_zero_target_is_a_config_error() {
        let config = MangleConfig {
            target_size: Some(0),
            ..Default::default()
        };
        assert!(Mangler::new(words(&[b"pass"]), config).is_err());
    }

    #[test]
    fn test_overflowing_depth_is_a_config_error() {
        let config = MangleConfig {
            perm_depth: 128,
            ..Default::default()
        };
        assert!(Mangler::new(words(&[b"a", b"b"]), config).is_err());
    }

    #[test]
    fn test_projected_input_len() {
        assert_eq!(projected_input_len(10, 1, false).unwrap(), 10);
        assert_eq!(projected_input_len(10, 1, true).unwrap(), 20);
        // 10 + 100 + 1000
        assert_eq!(projected_input_len(10, 3, false).unwrap(), 1110);
        // doubling is ignored in combinatorial mode
        assert_eq!(projected_input_len(10, 2, true).unwrap(), 110);
    }

    #[test]
    fn test_derived_default_target() {
        let config = MangleConfig {
            leet: true,
            ..Default::default()
        };
        let mangler = Mangler::new(words(&[b"pass"]), config).unwrap();
        // one word at the default quota estimates well under the floor
        assert_eq!(mangler.target_size(), 100_000_000);
        assert_eq!(mangler.budget().max_leet, 100_000_000);
    }

    #[test]
    fn test_explicit_target_splits_budget() {
        let config = MangleConfig {
            leet: true,
            capswap: true,
            target_size: Some(2_000),
            ..Default::default()
        };
        let mangler = Mangler::new(words(&[b"a", b"b", b"c", b"d", b"e",
                                           b"f", b"g", b"h", b"i", b"j"]), config).unwrap();
        assert_eq!(mangler.budget().max_leet, 10);
        assert_eq!(mangler.budget().max_cap, 20);
        assert_eq!(mangler.estimated_len(), 10 * 10 * 20);
    }

    #[test]
    fn test_empty_vocabulary_estimates_zero_and_yields_nothing() {
        let config = MangleConfig {
            leet: true,
            capswap: true,
            ..Default::default()
        };
        let mangler = Mangler::new(words(&[]), config).unwrap();
        assert_eq!(mangler.estimated_len(), 0);
        assert_eq!(mangler.into_iter().count(), 0);
    }

    #[test]
    fn test_stream_is_single_pass_by_construction() {
        let mangler = Mangler::new(words(&[b"pass"]), MangleConfig::default()).unwrap();
        let stream = mangler.into_iter();
        // the engine is consumed; a fresh engine is the only way to restart
        assert_eq!(stream.count(), 1);
    }
}

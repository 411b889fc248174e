/*!
 * Divide-and-conquer variant generation
 *
 * Lazy generator for per-character word variants. A word is split at its
 * midpoint, each half generates its own variants recursively, and the halves
 * are recombined pairwise. Only one variant exists at a time; the full
 * combinatorial product is never materialized.
 *
 * The substitution flavor alternates which half the outer loop iterates at
 * each recursion level, so output varies both ends of the word early instead
 * of exhausting one half's options first. The case-swap flavor keeps a fixed
 * order.
 */

use super::tables::SwapTable;

/// What a single-byte leaf yields after the unchanged byte.
#[derive(Clone, Copy)]
enum LeafMode {
    /// Table replacements, in table priority order.
    Swap(&'static SwapTable),

    /// The opposite-case byte for letters, nothing for other bytes.
    Case,
}

impl LeafMode {
    /// Substitution alternates the outer/inner halves per level.
    fn alternates(&self) -> bool {
        matches!(self, LeafMode::Swap(_))
    }
}

enum Node {
    /// Zero-length word: yields itself once. The recursion below never
    /// produces this; it only guards direct zero-length input.
    Empty { done: bool },

    /// Single byte: yields the byte, then its leaf-mode variants.
    Leaf { ch: u8, idx: usize },

    /// Two halves recombined pairwise. `inner` restarts for every `outer`
    /// item, so `inner_word` is kept to rebuild it.
    Split {
        outer: Box<Node>,
        outer_item: Option<Vec<u8>>,
        outer_is_right: bool,
        inner: Box<Node>,
        inner_word: Vec<u8>,
        inner_flip: bool,
    },
}

impl Node {
    fn new(word: &[u8], flip: bool, mode: LeafMode) -> Self {
        match word.len() {
            0 => Node::Empty { done: false },
            1 => Node::Leaf { ch: word[0], idx: 0 },
            len => {
                let mid = len / 2;
                let child_flip = if mode.alternates() { !flip } else { flip };
                let outer_is_right = !flip;
                let (outer_word, inner_word) = if outer_is_right {
                    (&word[mid..], &word[..mid])
                } else {
                    (&word[..mid], &word[mid..])
                };
                Node::Split {
                    outer: Box::new(Node::new(outer_word, child_flip, mode)),
                    outer_item: None,
                    outer_is_right,
                    inner: Box::new(Node::new(inner_word, child_flip, mode)),
                    inner_word: inner_word.to_vec(),
                    inner_flip: child_flip,
                }
            }
        }
    }

    fn next(&mut self, mode: LeafMode) -> Option<Vec<u8>> {
        match self {
            Node::Empty { done } => {
                if *done {
                    None
                } else {
                    *done = true;
                    Some(Vec::new())
                }
            }

            Node::Leaf { ch, idx } => {
                let variant = match mode {
                    _ if *idx == 0 => Some(*ch),
                    LeafMode::Swap(table) => table.swaps(*ch).get(*idx - 1).copied(),
                    LeafMode::Case => {
                        if *idx == 1 && ch.is_ascii_alphabetic() {
                            Some(swap_case(*ch))
                        } else {
                            None
                        }
                    }
                };
                let variant = variant?;
                *idx += 1;
                Some(vec![variant])
            }

            Node::Split {
                outer,
                outer_item,
                outer_is_right,
                inner,
                inner_word,
                inner_flip,
            } => {
                if outer_item.is_none() {
                    *outer_item = Some(outer.next(mode)?);
                }
                loop {
                    if let Some(inner_half) = inner.next(mode) {
                        let outer_half = outer_item.as_ref().expect("outer item set above");
                        // reassemble in left-to-right order
                        let mut word;
                        if *outer_is_right {
                            word = inner_half;
                            word.extend_from_slice(outer_half);
                        } else {
                            word = outer_half.clone();
                            word.extend_from_slice(&inner_half);
                        }
                        return Some(word);
                    }

                    // inner exhausted: next outer item, restart inner
                    *outer_item = Some(outer.next(mode)?);
                    **inner = Node::new(inner_word, *inner_flip, mode);
                }
            }
        }
    }
}

fn swap_case(ch: u8) -> u8 {
    if ch.is_ascii_uppercase() {
        ch.to_ascii_lowercase()
    } else {
        ch.to_ascii_uppercase()
    }
}

/// Lazy stream of variants for one word. The first item is always the word
/// unchanged.
pub struct VariantGen {
    mode: LeafMode,
    root: Node,
}

impl VariantGen {
    /// Character substitutions drawn from `table`.
    pub fn leet(word: &[u8], table: &'static SwapTable) -> Self {
        let mode = LeafMode::Swap(table);
        Self {
            root: Node::new(word, false, mode),
            mode,
        }
    }

    /// Every upper/lowercase combination of the word's letters.
    pub fn capswap(word: &[u8]) -> Self {
        let mode = LeafMode::Case;
        Self {
            root: Node::new(word, false, mode),
            mode,
        }
    }
}

impl Iterator for VariantGen {
    type Item = Vec<u8>;

    fn next(&mut self) -> Option<Vec<u8>> {
        self.root.next(self.mode)
    }
}

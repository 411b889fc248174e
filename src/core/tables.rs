/*!
 * "Leet" character substitution tables
 *
 * Two fixed priority tiers: a small high-confidence table used for the
 * guaranteed first pass over every word, and an extended superset used to
 * drain less common substitutions once the common ones are exhausted.
 */

/// Byte-indexed substitution table.
///
/// Each entry maps an input byte to its replacement bytes in priority order
/// (first replacement is the most likely). Bytes with no substitutions map to
/// an empty slice, so a lookup miss is an empty-slice check, never an error.
pub struct SwapTable {
    entries: [&'static [u8]; 256],
}

impl SwapTable {
    /// Replacement bytes for `b`, most likely first. Empty when none exist.
    #[inline]
    pub fn swaps(&self, b: u8) -> &'static [u8] {
        self.entries[b as usize]
    }
}

const fn build(pairs: &[(u8, &'static [u8])]) -> [&'static [u8]; 256] {
    let empty: &'static [u8] = b"";
    let mut entries = [empty; 256];
    let mut i = 0;
    while i < pairs.len() {
        entries[pairs[i].0 as usize] = pairs[i].1;
        i += 1;
    }
    entries
}

/// Small, high-confidence substitutions. Modify as needed.
pub static LEET_COMMON: SwapTable = SwapTable {
    entries: build(&[
        (b'a', b"@"),
        (b'A', b"@"),
        (b'e', b"3"),
        (b'E', b"3"),
        (b'i', b"1"),
        (b'I', b"1"),
        (b'o', b"0"),
        (b'O', b"0"),
        (b's', b"5$"),
        (b'S', b"5$"),
        (b't', b"7"),
        (b'T', b"7"),
    ]),
};

/// Superset of [`LEET_COMMON`] with the less likely substitutions added.
pub static LEET_EXTENDED: SwapTable = SwapTable {
    entries: build(&[
        (b'a', b"4@"),
        (b'A', b"4@"),
        (b'b', b"8"),
        (b'B', b"8"),
        (b'e', b"3"),
        (b'E', b"3"),
        (b'i', b"1"),
        (b'I', b"1"),
        (b'l', b"1"),
        (b'L', b"1"),
        (b'o', b"0"),
        (b'O', b"0"),
        (b's', b"5$"),
        (b'S', b"5$"),
        (b't', b"7"),
        (b'T', b"7"),
    ]),
};

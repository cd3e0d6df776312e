use std::fmt;
use std::fmt::Write;

/// How many bits each storage block holds.
const BLOCK_BITS: usize = u64::BITS as usize;

/// A code word under construction: a growable sequence of bits.
///
/// Bits are pushed in assignment order, that is the order in which the merges
/// producing them happened: the first pushed bit is the one closest to the
/// leaf, the last pushed bit is the one assigned at the root of the finished
/// tree. Reading the word root-to-leaf therefore means reading the pushed
/// bits in reverse, and that is the order [`bit`](Self::bit), the iterator
/// and the [`Display`](fmt::Display) rendering use.
///
/// # Note
/// The storage grows by 64-bit blocks, so code words deeper than the width
/// of a native integer are representable without any truncation.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct CodeWord {
    /// The pushed bits, packed least-significant-first into blocks.
    blocks: Vec<u64>,
    /// How many of the packed bits are significant.
    len: usize,
}

impl CodeWord {
    pub fn new() -> Self {
        Self::default()
    }

    /// The number of significant bits.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Appends a bit at the assignment frontier, which becomes the new
    /// most significant (root-most) bit of the word.
    pub fn push(&mut self, bit: bool) {
        if self.len % BLOCK_BITS == 0 {
            self.blocks.push(0);
        }
        if bit {
            self.blocks[self.len / BLOCK_BITS] |= 1u64 << (self.len % BLOCK_BITS);
        }
        self.len += 1;
    }

    /// The bit at `index` in assignment order (0 = first pushed).
    fn pushed_bit(&self, index: usize) -> bool {
        debug_assert!(index < self.len);
        (self.blocks[index / BLOCK_BITS] >> (index % BLOCK_BITS)) & 1 == 1
    }

    /// The bit at `index` counting from the root of the code tree.
    pub fn bit(&self, index: usize) -> bool {
        self.pushed_bit(self.len - 1 - index)
    }

    /// Iterates over the bits in root-to-leaf order.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).map(move |index| self.bit(index))
    }

    /// Whether this word, read root-to-leaf, is a prefix of `other`.
    ///
    /// Every word is a prefix of itself, and the empty word is a prefix of
    /// every word.
    pub fn is_prefix_of(&self, other: &CodeWord) -> bool {
        self.len <= other.len && (0..self.len).all(|index| self.bit(index) == other.bit(index))
    }

    /// The bits packed into a single integer, with the pushed-order bit `i`
    /// stored as bit `i` of the integer.
    ///
    /// Returns `None` once the word no longer fits 64 bits; it is never
    /// silently truncated.
    pub fn to_packed(&self) -> Option<u64> {
        match self.len <= BLOCK_BITS {
            true => Some(self.blocks.first().copied().unwrap_or(0)),
            false => None,
        }
    }
}

impl fmt::Display for CodeWord {
    /// Renders the word as a bit string of exactly [`len`](Self::len)
    /// characters, most significant (root) bit first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for index in 0..self.len {
            f.write_char(if self.bit(index) { '1' } else { '0' })?;
        }
        Ok(())
    }
}

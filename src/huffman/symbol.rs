use std::fmt;

use crate::huffman::code_word::CodeWord;

/// One alphabet element together with the code assigned to it so far.
///
/// A symbol is owned by exactly one [`CodeEntry`](crate::huffman::CodeEntry)
/// at a time and moves, never copies, into the entry produced by a merge. It
/// gains exactly one bit per merge that encloses it and is frozen once the
/// resolver reaches a single remaining entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CodeSymbol<T> {
    label: T,
    code: CodeWord,
}

impl<T> CodeSymbol<T> {
    /// Creates a symbol with an empty code word.
    pub(crate) fn new(label: T) -> Self {
        Self {
            label,
            code: CodeWord::new(),
        }
    }

    pub fn label(&self) -> &T {
        &self.label
    }

    pub fn code(&self) -> &CodeWord {
        &self.code
    }

    /// The number of significant bits assigned so far. Zero for a symbol
    /// that never took part in a merge (a one-symbol alphabet needs no bits).
    pub fn code_len(&self) -> usize {
        self.code.len()
    }

    /// Records which branch the enclosing merge put this symbol on.
    pub(crate) fn push_branch_bit(&mut self, bit: bool) {
        self.code.push(bit);
    }
}

impl<T: fmt::Display> fmt::Display for CodeSymbol<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.label, self.code)
    }
}

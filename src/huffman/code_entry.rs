use std::cmp::Ordering;

use crate::huffman::symbol::CodeSymbol;
use crate::Probability;

/// A node of the code tree under construction: the symbols that will share
/// this node's prefix from here on, plus their combined probability mass.
///
/// Entries are created either as leaves (one fresh symbol) or by
/// [`merge`](Self::merge), and merging conserves total mass: the new entry's
/// probability is exactly the sum of the two it consumed.
#[derive(Clone, Debug)]
pub struct CodeEntry<T> {
    /// The member symbols, in the order the merges brought them in. The
    /// order is deterministic but carries no meaning beyond that.
    symbols: Vec<CodeSymbol<T>>,

    /// The summed probability of the members, fixed at creation.
    probability: Probability,
}

impl<T> CodeEntry<T> {
    /// Creates a leaf entry holding a single fresh symbol.
    pub fn leaf(label: T, probability: Probability) -> Self {
        Self {
            symbols: vec![CodeSymbol::new(label)],
            probability,
        }
    }

    /// Merges two entries into the node that becomes their common parent.
    ///
    /// `lo` takes the 0 branch and `hi` the 1 branch: every member of either
    /// side gets one more significant bit recording which side it was on.
    /// Both operands are consumed, so an entry that has been merged away can
    /// never be selected again.
    pub fn merge(lo: Self, hi: Self) -> Self {
        let probability = lo.probability + hi.probability;
        let mut symbols = Vec::with_capacity(lo.symbols.len() + hi.symbols.len());

        for mut symbol in lo.symbols {
            symbol.push_branch_bit(false);
            symbols.push(symbol);
        }
        for mut symbol in hi.symbols {
            symbol.push_branch_bit(true);
            symbols.push(symbol);
        }

        Self {
            symbols,
            probability,
        }
    }

    pub fn probability(&self) -> Probability {
        self.probability
    }

    pub fn symbols(&self) -> &[CodeSymbol<T>] {
        &self.symbols
    }

    pub fn into_symbols(self) -> Vec<CodeSymbol<T>> {
        self.symbols
    }

    /// Iterates over the member labels in insertion order.
    pub fn labels(&self) -> impl Iterator<Item = &T> {
        self.symbols.iter().map(|symbol| symbol.label())
    }
}

// Entries are ordered by probability alone; ties between equal-probability
// entries are broken by the resolver's insertion sequence, not here.
impl<T> PartialEq for CodeEntry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.probability.total_cmp(&other.probability) == Ordering::Equal
    }
}

impl<T> Eq for CodeEntry<T> {}

impl<T> PartialOrd for CodeEntry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for CodeEntry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.probability.total_cmp(&other.probability)
    }
}

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use anyhow::{bail, Result};
use itertools::Itertools;
use log::{debug, info};

use crate::huffman::code_entry::CodeEntry;
use crate::huffman::symbol::CodeSymbol;
use crate::{Probability, COMPLETENESS_TOLERANCE};

/// A [`CodeEntry`] tagged with the sequence number it entered the pool with,
/// so that equal-probability entries are selected in insertion order — the
/// same order a stable sort of the pool by probability would produce, with
/// merged entries appended at the back.
#[derive(Debug)]
struct PoolEntry<T> {
    entry: CodeEntry<T>,
    seq: u64,
}

impl<T> PartialEq for PoolEntry<T> {
    fn eq(&self, other: &Self) -> bool {
        self.seq == other.seq && self.entry == other.entry
    }
}

impl<T> Eq for PoolEntry<T> {}

impl<T> PartialOrd for PoolEntry<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for PoolEntry<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed ordering: BinaryHeap is a max-heap and the pool must pop
        // its minima first.
        other
            .entry
            .cmp(&self.entry)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// The driver of the construction: holds the working pool of partial-tree
/// nodes and merges the two lowest-probability ones until a single entry —
/// the finished code tree, flattened into its symbols — remains.
///
/// The pool is a binary min-heap keyed by (probability, insertion sequence),
/// so each step costs O(log n) while reproducing exactly the selection order
/// of a full stable re-sort per step: among equal probabilities the
/// earlier-inserted entry wins and becomes the 0 branch.
pub struct Resolver<T> {
    pool: BinaryHeap<PoolEntry<T>>,

    /// Sequence number handed to the next insertion.
    next_seq: u64,

    /// Merge steps performed so far.
    steps: usize,
}

impl<T> Default for Resolver<T> {
    fn default() -> Self {
        Self {
            pool: BinaryHeap::new(),
            next_seq: 0,
            steps: 0,
        }
    }
}

impl<T> Resolver<T> {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, entry: CodeEntry<T>) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pool.push(PoolEntry { entry, seq });
    }

    /// Adds a leaf entry for `label` to the pool.
    ///
    /// # Note
    /// Returns an error if `probability` is not a finite value in [0, 1], or
    /// if the pool has already been merged down to a single entry — seeding
    /// a resolved resolver is rejected rather than left undefined.
    pub fn seed(&mut self, label: T, probability: Probability) -> Result<()> {
        if self.steps > 0 && self.is_resolved() {
            bail!("cannot seed a resolver that has already resolved");
        }
        if !(0.0..=1.0).contains(&probability) {
            bail!(
                "probability must be a finite value in [0, 1], got {}",
                probability
            );
        }
        self.push(CodeEntry::leaf(label, probability));
        Ok(())
    }

    /// The number of entries currently in the pool.
    pub fn pool_len(&self) -> usize {
        self.pool.len()
    }

    /// The summed probability mass of the pool. Every merge conserves it.
    pub fn total_mass(&self) -> Probability {
        self.pool
            .iter()
            .map(|pooled| pooled.entry.probability())
            .sum()
    }

    /// Whether the seeded masses form a full distribution, i.e. sum to one
    /// within [`COMPLETENESS_TOLERANCE`].
    ///
    /// This is a validation check on the input, not a step of the
    /// construction: the merge loop never consults it, and an incomplete
    /// distribution can still be driven to completion — the resulting code
    /// is structurally valid but optimal only for a full distribution.
    pub fn is_complete(&self) -> bool {
        (self.total_mass() - 1.0).abs() <= COMPLETENESS_TOLERANCE
    }

    /// Whether the pool holds exactly one entry, the finished code tree.
    pub fn is_resolved(&self) -> bool {
        self.pool.len() == 1
    }

    /// The number of merge steps performed so far.
    pub fn steps(&self) -> usize {
        self.steps
    }

    /// Performs one merge step: removes the two lowest-probability entries
    /// and inserts their merge, with the smaller (or, on a tie, the
    /// earlier-inserted) entry on the 0 branch.
    ///
    /// # Note
    /// Returns an error when the pool holds fewer than two entries, both for
    /// a resolver that has already resolved and for one never seeded. A
    /// silent no-op here would mask caller bugs.
    pub fn step(&mut self) -> Result<()> {
        if self.pool.len() < 2 {
            match self.pool.len() {
                1 => bail!("the resolver has already resolved, nothing left to merge"),
                _ => bail!("the pool is empty, seed it before stepping"),
            }
        }

        // The two pops can't fail, the pool holds at least two entries.
        let lo = self.pool.pop().unwrap();
        let hi = self.pool.pop().unwrap();

        debug!(
            "merging mass {:.6} ({} symbols, 0 branch) with mass {:.6} ({} symbols, 1 branch)",
            lo.entry.probability(),
            lo.entry.symbols().len(),
            hi.entry.probability(),
            hi.entry.symbols().len(),
        );

        self.push(CodeEntry::merge(lo.entry, hi.entry));
        self.steps += 1;
        Ok(())
    }

    /// Runs merge steps until a single entry remains and returns how many
    /// were performed: exactly `n - 1` for a pool holding `n` entries.
    pub fn drive(&mut self) -> Result<usize> {
        if self.pool.is_empty() {
            bail!("the pool is empty, seed it before driving");
        }

        let mut performed = 0;
        while !self.is_resolved() {
            self.step()?;
            performed += 1;
        }
        Ok(performed)
    }

    /// Borrows the final symbols with their assigned codes.
    ///
    /// Valid only once resolved; repeated calls return identical data.
    pub fn codes(&self) -> Result<&[CodeSymbol<T>]> {
        match self.pool.len() {
            1 => Ok(self.pool.peek().unwrap().entry.symbols()),
            0 => bail!("the pool is empty, there are no codes to extract"),
            n => bail!("the pool still holds {} entries, drive the resolver first", n),
        }
    }

    /// Consumes the resolver and returns the final symbols.
    pub fn into_codes(mut self) -> Result<Vec<CodeSymbol<T>>> {
        self.codes()?;
        Ok(self.pool.pop().unwrap().entry.into_symbols())
    }

    /// A read-only view of the pool in selection order: the probability and
    /// member labels of every entry. Diagnostic only.
    pub fn snapshot(&self) -> Vec<(Probability, Vec<&T>)> {
        self.pool
            .iter()
            .sorted_by(|a, b| a.entry.cmp(&b.entry).then_with(|| a.seq.cmp(&b.seq)))
            .map(|pooled| (pooled.entry.probability(), pooled.entry.labels().collect()))
            .collect()
    }

    /// Empties the pool so the resolver can be reused for a new alphabet.
    pub fn reset(&mut self) {
        self.pool.clear();
        self.next_seq = 0;
        self.steps = 0;
    }
}

/// Builds the full code table for `alphabet` in one call.
///
/// This is the strict path: the probabilities must form a full distribution
/// within [`COMPLETENESS_TOLERANCE`], and an empty alphabet is rejected.
/// Drive a [`Resolver`] manually to code an incomplete distribution anyway.
pub fn build_codes<T>(
    alphabet: impl IntoIterator<Item = (T, Probability)>,
) -> Result<Vec<CodeSymbol<T>>> {
    let mut resolver = Resolver::new();
    for (label, probability) in alphabet {
        resolver.seed(label, probability)?;
    }

    if resolver.pool_len() == 0 {
        bail!("the alphabet is empty");
    }
    if !resolver.is_complete() {
        bail!(
            "probabilities sum to {}, expected 1 within {:e}",
            resolver.total_mass(),
            COMPLETENESS_TOLERANCE
        );
    }

    let steps = resolver.drive()?;
    info!("resolved {} symbols in {} merge steps", steps + 1, steps);
    resolver.into_codes()
}

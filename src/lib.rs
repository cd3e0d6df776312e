pub mod huffman;
pub mod utils;

/// The type representing the probability mass attached to symbols and pool
/// entries.
pub type Probability = f64;

/// Tolerance used when checking that seeded probabilities form a full
/// distribution.
///
/// # Note
/// Summing floating-point masses accumulates rounding error, so the
/// completeness check compares the pool mass against 1.0 within this
/// tolerance rather than with exact equality.
pub const COMPLETENESS_TOLERANCE: Probability = 1e-9;

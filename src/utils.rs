use crate::Probability;

/// The Shannon entropy, in bits per symbol, of a probability distribution.
///
/// Zero-mass symbols contribute nothing to the sum.
pub fn entropy(probabilities: &[Probability]) -> f64 {
    probabilities
        .iter()
        .filter(|probability| **probability > 0.0)
        .map(|probability| -probability * probability.log2())
        .sum()
}

/// The probability-weighted average length of a code, given for every symbol
/// its code length and its probability.
///
/// For a code built from a full distribution this lies in [H, H + 1), with H
/// the entropy of the distribution.
pub fn average_code_length(
    codes: impl IntoIterator<Item = (usize, Probability)>,
) -> f64 {
    codes
        .into_iter()
        .map(|(length, probability)| length as f64 * probability)
        .sum()
}

pub mod resolver;

/// Alphabet sizes used to bench the full table construction.
const ALPHABET_SIZES: [usize; 4] = [16, 256, 4096, 65536];

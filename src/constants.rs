//! Default parameters for the dominant-peak pipeline
//!
//! These constants define the window and threshold defaults used when no
//! configuration file or command line override is given.

/// Smallest pattern size that leaves room for a peak and one neighbour on each side.
pub const MIN_PATTERN_SIZE: usize = 3;

/// Default dominance window in milliseconds (onsets closer than half of this merge).
pub const DEFAULT_PATTERN_MS: f32 = 10.0;

/// Default minimum value for a peak to be reported at all.
pub const DEFAULT_PEAK_THRESHOLD: f32 = 0.1;

/// Default number of samples per processing block.
pub const DEFAULT_BLOCK_SIZE: usize = 1024;

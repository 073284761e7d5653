//! Chunking-invariant streaming detection of dominant peaks.
//!
//! A dominant peak is a local maximum (or the center of a short plateau) that
//! is not exceeded by any sample within `L` samples on either side, with ties
//! going to the earlier position. [`StreamingPeakFinder`] reports the same
//! peaks no matter how the input is split into blocks, with bounded memory
//! and a latency of `L + 1` samples for isolated peaks.
//!
//! ```
//! use peakstream::StreamingPeakFinder;
//!
//! let samples = [0, 10, 10, 10, 8, 7, 5, 5, 5, 30, 0, 40, 0, 20, 5, 10, 0];
//! let mut finder = StreamingPeakFinder::new(7).unwrap();
//! let peaks = finder.process_signal(&samples, 4, 0);
//! let positions: Vec<u64> = peaks.iter().map(|peak| peak.stream_pos).collect();
//! assert_eq!(positions, vec![2, 11]);
//! ```

pub mod audio;
pub mod config;
pub mod constants;
pub mod container;
pub mod error;
pub mod output;
pub mod processing;
pub mod signal_processing;
pub mod stream_pos;
pub mod wav;

#[cfg(feature = "simulation")]
pub mod simulation;

pub use config::PeakStreamConfig;
pub use error::{PeakError, Result};
pub use processing::StreamingPeakFinder;
pub use signal_processing::DominantPeak;
pub use wav::save_wav;

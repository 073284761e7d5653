pub mod dominance;
pub mod find_peak;
pub mod peak;
pub mod peak_detector;
pub mod windowed_max;

pub use dominance::DominantPeakIsolator;
pub use find_peak::{find_peak, find_peak_with_lockout};
pub use peak::{DominantPeak, PeakKind, RawPeak};
pub use peak_detector::RawPeakDetector;
pub use windowed_max::WindowedMaxFinder;

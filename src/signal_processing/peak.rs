use crate::stream_pos::StreamPos;

/// Kind of a raw event reported by the peak/plateau detector
///
/// The derived ordering is used when two events land on the same stream
/// position: the higher kind wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum PeakKind {
    /// First sample of an ascending step. Only used to lock out earlier candidates.
    Rising,
    /// Last sample before a descending step. Locks out later candidates, never reported.
    Falling,
    /// Local maximum or plateau center.
    Peak,
}

/// Unfiltered event emitted by [`RawPeakDetector`](super::RawPeakDetector)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RawPeak<T> {
    pub stream_pos: StreamPos,
    pub value: T,
    pub kind: PeakKind,
}

impl<T> RawPeak<T> {
    pub fn new(stream_pos: StreamPos, value: T, kind: PeakKind) -> Self {
        Self {
            stream_pos,
            value,
            kind,
        }
    }
}

/// A peak that dominates every other sample within the lock-out distance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DominantPeak<T> {
    pub stream_pos: StreamPos,
    pub value: T,
}

impl<T> DominantPeak<T> {
    pub fn new(stream_pos: StreamPos, value: T) -> Self {
        Self { stream_pos, value }
    }
}

impl<T> From<RawPeak<T>> for DominantPeak<T> {
    fn from(raw: RawPeak<T>) -> Self {
        Self {
            stream_pos: raw.stream_pos,
            value: raw.value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_ordering_prefers_peak() {
        assert!(PeakKind::Peak > PeakKind::Falling);
        assert!(PeakKind::Falling > PeakKind::Rising);
        assert_eq!(PeakKind::Rising.max(PeakKind::Peak), PeakKind::Peak);
    }

    #[test]
    fn test_dominant_from_raw() {
        let raw = RawPeak::new(17, 0.5f32, PeakKind::Peak);
        let dominant = DominantPeak::from(raw);
        assert_eq!(dominant, DominantPeak::new(17, 0.5));
    }
}

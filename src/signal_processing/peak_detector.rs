use super::peak::{PeakKind, RawPeak};
use crate::stream_pos::{StreamPos, advance, rewind};

/// Raw peak and plateau detector for contiguous sample blocks
///
/// Tracks the previous sample and the length of the current run of equal
/// values, and reports three kinds of events:
///
/// - [`PeakKind::Rising`] at the first sample of every ascending step
/// - [`PeakKind::Peak`] at a local maximum, or at the center of a plateau of
///   at most `max_plateau_size` samples, once the following descent is seen
/// - [`PeakKind::Falling`] at the last sample before every descending step
///   that did not already produce a single-sample peak
///
/// Events below the threshold are not reported. Base latency is one sample:
/// whether a sample is a peak is known when the next sample arrives.
///
/// The first sample of the stream can never start a plateau because nothing
/// precedes it. Comparisons that are neither `<` nor `>` (including NaN)
/// count as equal.
#[derive(Debug, Clone)]
pub struct RawPeakDetector<T> {
    max_plateau_size: usize,
    last_value: Option<T>,
    /// 0: descending or stream start, 1..=max: open top, max + 1: too long
    plateau_size: usize,
}

impl<T: Copy + PartialOrd> RawPeakDetector<T> {
    /// Create a new detector
    ///
    /// # Arguments
    /// * `max_plateau_size` - Longest run of equal values still treated as a peak
    pub fn new(max_plateau_size: usize) -> Self {
        debug_assert!(max_plateau_size > 0, "max_plateau_size must be nonzero");
        Self {
            max_plateau_size: max_plateau_size.max(1),
            last_value: None,
            plateau_size: 0,
        }
    }

    pub fn max_plateau_size(&self) -> usize {
        self.max_plateau_size
    }

    /// Feed a block of consecutive samples
    ///
    /// Events are passed to `on_event` in nondecreasing stream position order.
    ///
    /// # Arguments
    /// * `samples` - Consecutive samples of the stream
    /// * `stream_pos` - Stream position of `samples[0]`
    /// * `threshold` - Minimum value of a reported event
    /// * `on_event` - Receives every raw event
    pub fn process<F>(&mut self, samples: &[T], stream_pos: StreamPos, threshold: T, mut on_event: F)
    where
        F: FnMut(RawPeak<T>),
    {
        for (offset, &value) in samples.iter().enumerate() {
            let pos = advance(stream_pos, offset);
            let Some(prev) = self.last_value.replace(value) else {
                self.plateau_size = 0;
                continue;
            };

            if value > prev {
                self.plateau_size = 1;
                if value >= threshold {
                    on_event(RawPeak::new(pos, value, PeakKind::Rising));
                }
            } else if value < prev {
                if prev >= threshold {
                    self.close_run(pos, prev, &mut on_event);
                }
                self.plateau_size = 0;
            } else if self.plateau_size > 0 {
                self.plateau_size = (self.plateau_size + 1).min(self.max_plateau_size + 1);
            }
        }
    }

    fn close_run<F>(&self, pos: StreamPos, prev: T, on_event: &mut F)
    where
        F: FnMut(RawPeak<T>),
    {
        let last = rewind(pos, 1);
        let size = self.plateau_size;
        if (1..=self.max_plateau_size).contains(&size) {
            on_event(RawPeak::new(rewind(pos, size / 2 + 1), prev, PeakKind::Peak));
            if size > 1 {
                // lock-out is measured from the end of the plateau
                on_event(RawPeak::new(last, prev, PeakKind::Falling));
            }
        } else {
            on_event(RawPeak::new(last, prev, PeakKind::Falling));
        }
    }

    /// Length and value of a still open top that would become a peak if the
    /// next sample is smaller
    pub fn pending_plateau(&self, threshold: T) -> Option<(usize, T)> {
        let value = self.last_value?;
        let open = (1..=self.max_plateau_size).contains(&self.plateau_size);
        (open && value >= threshold).then_some((self.plateau_size, value))
    }

    /// Forget the previous sample and any open plateau
    pub fn reset(&mut self) {
        self.last_value = None;
        self.plateau_size = 0;
    }
}

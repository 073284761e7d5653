use crate::constants::MIN_PATTERN_SIZE;
use crate::error::{PeakError, Result};
use crate::signal_processing::{DominantPeak, DominantPeakIsolator, RawPeakDetector};
use crate::stream_pos::{StreamPos, advance, rewind};

/// Streaming dominant-peak finder
///
/// Wires a [`RawPeakDetector`] into a [`DominantPeakIsolator`] and takes care
/// of block boundaries, so the reported peaks do not depend on how the stream
/// is split into blocks. A peak at `p` is reported once `p + L` has been
/// processed (plus the length of a plateau that is still open and would
/// dominate what is queued), where `L = pattern_size / 2`.
///
/// Blocks must be contiguous: each call starts where the previous one ended.
pub struct StreamingPeakFinder<T> {
    pattern_size: usize,
    detector: RawPeakDetector<T>,
    isolator: DominantPeakIsolator<T>,
    next_pos: Option<StreamPos>,
}

impl<T: Copy + PartialOrd> StreamingPeakFinder<T> {
    /// Create a new streaming peak finder
    ///
    /// # Arguments
    /// * `pattern_size` - Odd window width (at least 3); a peak must dominate
    ///   `pattern_size / 2` samples on each side
    pub fn new(pattern_size: usize) -> Result<Self> {
        let lockout_distance = Self::validate(pattern_size)?;
        let max_plateau_size = 2 * lockout_distance - 1;
        log::debug!(
            "Streaming peak finder: pattern size {}, lockout distance {}, max plateau {}",
            pattern_size,
            lockout_distance,
            max_plateau_size
        );

        Ok(Self {
            pattern_size,
            detector: RawPeakDetector::new(max_plateau_size),
            isolator: DominantPeakIsolator::new(lockout_distance),
            next_pos: None,
        })
    }

    fn validate(pattern_size: usize) -> Result<usize> {
        if pattern_size < MIN_PATTERN_SIZE || pattern_size % 2 == 0 {
            return Err(PeakError::InvalidPatternSize(pattern_size));
        }
        Ok(pattern_size / 2)
    }

    /// Switch to a new pattern size, discarding all pending state
    pub fn reconfigure(&mut self, pattern_size: usize) -> Result<()> {
        *self = Self::new(pattern_size)?;
        Ok(())
    }

    /// Discard all pending state, keeping the pattern size
    pub fn reset(&mut self) {
        self.detector.reset();
        self.isolator.reset();
        self.next_pos = None;
    }

    pub fn pattern_size(&self) -> usize {
        self.pattern_size
    }

    pub fn lockout_distance(&self) -> usize {
        self.isolator.lockout_distance()
    }

    pub fn max_plateau_size(&self) -> usize {
        self.detector.max_plateau_size()
    }

    /// Stream position expected for the first sample of the next block
    pub fn next_stream_pos(&self) -> Option<StreamPos> {
        self.next_pos
    }

    /// Process the next block of samples
    ///
    /// Dominant peaks that become final are passed to `on_peak` in stream
    /// position order before this returns.
    ///
    /// # Arguments
    /// * `samples` - Next block, must not be empty
    /// * `stream_pos` - Stream position of `samples[0]`
    /// * `threshold` - Minimum value of a reported peak
    /// * `on_peak` - Receives each dominant peak exactly once
    pub fn process<F>(&mut self, samples: &[T], stream_pos: StreamPos, threshold: T, mut on_peak: F)
    where
        F: FnMut(DominantPeak<T>),
    {
        debug_assert!(!samples.is_empty(), "empty block at stream position {stream_pos}");
        let Some(&first) = samples.first() else {
            return;
        };

        let mut emit = |peak: DominantPeak<T>| {
            log::trace!("Dominant peak at stream position {}", peak.stream_pos);
            on_peak(peak);
        };

        match self.next_pos {
            // The first sample has no predecessor, so it only locks out
            None => self.isolator.register_lockout(stream_pos, first, &mut emit),
            Some(expected) => debug_assert_eq!(
                expected, stream_pos,
                "blocks must be contiguous: expected stream position {expected}"
            ),
        }

        let isolator = &mut self.isolator;
        self.detector
            .process(samples, stream_pos, threshold, |event| isolator.on_raw_peak(event, &mut emit));

        let end = advance(stream_pos, samples.len());
        self.next_pos = Some(end);

        let latency = match self.detector.pending_plateau(threshold) {
            Some((size, value)) if self.isolator.latest_value().is_none_or(|latest| value > latest) => {
                size + 1
            }
            _ => 1,
        };
        self.isolator.purge_up_until(rewind(end, latency), &mut emit);
    }

    /// Split `samples` into blocks of `block_size`, continue the stream with
    /// them and collect the peaks found
    pub fn process_signal(&mut self, samples: &[T], block_size: usize, threshold: T) -> Vec<DominantPeak<T>> {
        let mut peaks = Vec::new();
        let mut stream_pos = self.next_pos.unwrap_or(0);
        for block in samples.chunks(block_size.max(1)) {
            self.process(block, stream_pos, threshold, |peak| peaks.push(peak));
            stream_pos = advance(stream_pos, block.len());
        }
        peaks
    }
}

use super::peak::{DominantPeak, PeakKind, RawPeak};
use crate::container::BoundedDeque;
use crate::stream_pos::{StreamPos, advance, is_at_or_after};

/// Greedy sliding-window isolator for dominant peaks
///
/// Consumes raw events in nondecreasing stream position order and reports
/// every [`PeakKind::Peak`] that is larger than all events within
/// `lockout_distance` samples after it and not exceeded or equalled by any
/// retained event within `lockout_distance` samples before it. Ties go to the
/// earlier position.
///
/// Two queues, both descending by value, hold the state:
///
/// - `candidates`: events younger than the lock-out distance, still open to
///   being overturned by a bigger event on their right
/// - `left_memory`: recently settled events, used to check left dominance of
///   the candidates that age out next
///
/// A candidate is settled once the newest event is `lockout_distance` samples
/// past it, so a peak is reported no earlier than that.
#[derive(Debug, Clone)]
pub struct DominantPeakIsolator<T> {
    lockout_distance: usize,
    candidates: BoundedDeque<RawPeak<T>>,
    left_memory: BoundedDeque<RawPeak<T>>,
}

impl<T: Copy + PartialOrd> DominantPeakIsolator<T> {
    /// Create a new isolator
    ///
    /// # Arguments
    /// * `lockout_distance` - Half width of the dominance window, at least 1
    pub fn new(lockout_distance: usize) -> Self {
        debug_assert!(lockout_distance > 0, "lockout_distance must be nonzero");
        let lockout_distance = lockout_distance.max(1);
        let pattern_size = 2 * lockout_distance + 1;
        Self {
            lockout_distance,
            candidates: BoundedDeque::with_capacity(pattern_size),
            left_memory: BoundedDeque::with_capacity(pattern_size),
        }
    }

    pub fn lockout_distance(&self) -> usize {
        self.lockout_distance
    }

    /// Value of the most recent event still waiting for right dominance
    pub fn latest_value(&self) -> Option<T> {
        self.candidates.back().map(|candidate| candidate.value)
    }

    /// Handle the next raw event
    ///
    /// Dominant peaks that become final because of this event are passed to
    /// `on_peak` before returning.
    pub fn on_raw_peak<F>(&mut self, event: RawPeak<T>, on_peak: &mut F)
    where
        F: FnMut(DominantPeak<T>),
    {
        let now = event.stream_pos;

        let merged = match self.candidates.back_mut() {
            Some(back) if back.stream_pos == now => {
                back.kind = back.kind.max(event.kind);
                true
            }
            _ => false,
        };

        if !merged {
            while let Some(back) = self.candidates.back() {
                let in_reach = is_at_or_after(advance(back.stream_pos, self.lockout_distance), now);
                if back.value < event.value && in_reach {
                    self.candidates.pop_back();
                } else {
                    break;
                }
            }

            if event.kind != PeakKind::Rising {
                self.candidates.push_back(event);
            }
        }

        self.age_out(now, on_peak);
    }

    /// Register a lock-out that is never reported itself
    ///
    /// Used for the first sample of a stream, which the raw detector cannot
    /// judge because it has no predecessor.
    pub fn register_lockout<F>(&mut self, stream_pos: StreamPos, value: T, on_peak: &mut F)
    where
        F: FnMut(DominantPeak<T>),
    {
        self.on_raw_peak(RawPeak::new(stream_pos, value, PeakKind::Falling), on_peak);
    }

    /// Settle every candidate that no event at or before `stream_pos` can
    /// overturn any more
    ///
    /// The caller guarantees that no further events at positions up to and
    /// including `stream_pos` will arrive. A position in the past is harmless.
    pub fn purge_up_until<F>(&mut self, stream_pos: StreamPos, on_peak: &mut F)
    where
        F: FnMut(DominantPeak<T>),
    {
        self.age_out(stream_pos, on_peak);

        let horizon = 3 * self.lockout_distance + 1;
        while let Some(old) = self.left_memory.front() {
            if is_at_or_after(advance(old.stream_pos, horizon), stream_pos) {
                break;
            }
            self.left_memory.pop_front();
        }
    }

    fn age_out<F>(&mut self, now: StreamPos, on_peak: &mut F)
    where
        F: FnMut(DominantPeak<T>),
    {
        while let Some(&front) = self.candidates.front() {
            if !is_at_or_after(now, advance(front.stream_pos, self.lockout_distance)) {
                break;
            }
            self.candidates.pop_front();
            self.settle(front, on_peak);
        }
    }

    fn settle<F>(&mut self, candidate: RawPeak<T>, on_peak: &mut F)
    where
        F: FnMut(DominantPeak<T>),
    {
        while let Some(old) = self.left_memory.front() {
            if is_at_or_after(advance(old.stream_pos, self.lockout_distance), candidate.stream_pos) {
                break;
            }
            self.left_memory.pop_front();
        }

        while let Some(old) = self.left_memory.back() {
            if old.value < candidate.value {
                self.left_memory.pop_back();
            } else {
                break;
            }
        }

        if self.left_memory.is_empty() && candidate.kind == PeakKind::Peak {
            on_peak(candidate.into());
        }
        self.left_memory.push_back(candidate);
    }

    /// Drop all pending candidates and lock-outs
    pub fn reset(&mut self) {
        self.candidates.clear();
        self.left_memory.clear();
    }
}

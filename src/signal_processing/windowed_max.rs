use crate::container::BoundedDeque;
use crate::stream_pos::{StreamPos, advance, is_at_or_after};

/// Sliding-window maximum over a sample stream
///
/// Reports the maximum of every full window of `window_size` consecutive
/// samples. The answer for a window is available once the sample after it
/// arrives, or through [`finalize`](Self::finalize) for the last window.
///
/// Keeps a queue of `(position, value)` pairs with strictly descending values,
/// so each sample is pushed and popped at most once.
#[derive(Debug, Clone)]
pub struct WindowedMaxFinder<T> {
    window_size: usize,
    queue: BoundedDeque<(StreamPos, T)>,
    next_pos: StreamPos,
    filled: usize,
}

impl<T: Copy + PartialOrd> WindowedMaxFinder<T> {
    /// Create a new windowed maximum finder
    ///
    /// # Arguments
    /// * `window_size` - Number of samples per window, at least 1
    pub fn new(window_size: usize) -> Self {
        debug_assert!(window_size > 0, "window_size must be nonzero");
        let window_size = window_size.max(1);
        Self {
            window_size,
            queue: BoundedDeque::with_capacity(window_size + 1),
            next_pos: 0,
            filled: 0,
        }
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    /// Add a new sample
    ///
    /// # Returns
    /// Maximum of the full window ending just before `value`, if that many
    /// samples have been seen
    pub fn add(&mut self, value: T) -> Option<T> {
        let previous_max = self.current();

        while let Some(&(_, back)) = self.queue.back() {
            if back <= value {
                self.queue.pop_back();
            } else {
                break;
            }
        }

        let now = self.next_pos;
        self.queue.push_back((now, value));
        self.next_pos = advance(now, 1);
        self.filled = self.filled.saturating_add(1);

        while let Some(&(pos, _)) = self.queue.front() {
            if is_at_or_after(now, advance(pos, self.window_size)) {
                self.queue.pop_front();
            } else {
                break;
            }
        }

        previous_max
    }

    /// Maximum of the window ending at the most recent sample
    pub fn finalize(&self) -> Option<T> {
        self.current()
    }

    fn current(&self) -> Option<T> {
        if self.filled < self.window_size {
            return None;
        }
        self.queue.front().map(|&(_, value)| value)
    }

    /// Run a whole buffer through the finder, including the final window
    pub fn process_buffer(&mut self, buffer: &[T]) -> Vec<T> {
        let mut maxima: Vec<T> = buffer.iter().filter_map(|&value| self.add(value)).collect();
        maxima.extend(self.finalize());
        maxima
    }

    pub fn reset(&mut self) {
        self.queue.clear();
        self.next_pos = 0;
        self.filled = 0;
    }
}

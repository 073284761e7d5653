/// Fixed-capacity double-ended queue backed by ring storage
///
/// All slots are allocated up front, so pushing and popping at either end is
/// O(1) and never reallocates. This keeps the per-sample path of the peak
/// finder free of heap traffic.
///
/// Pushing onto a full deque is a caller bug. Debug builds panic; release
/// builds discard the element at the opposite end to make room.
#[derive(Debug, Clone)]
pub struct BoundedDeque<T> {
    slots: Box<[Option<T>]>,
    head: usize,
    len: usize,
}

impl<T> BoundedDeque<T> {
    /// Create an empty deque holding at most `capacity` elements
    pub fn with_capacity(capacity: usize) -> Self {
        debug_assert!(capacity > 0, "BoundedDeque needs a nonzero capacity");
        let capacity = capacity.max(1);
        Self {
            slots: std::iter::repeat_with(|| None).take(capacity).collect(),
            head: 0,
            len: 0,
        }
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn is_full(&self) -> bool {
        self.len == self.capacity()
    }

    fn slot(&self, index: usize) -> usize {
        (self.head + index) % self.capacity()
    }

    pub fn push_back(&mut self, value: T) {
        debug_assert!(!self.is_full(), "BoundedDeque overflow (capacity {})", self.capacity());
        if self.is_full() {
            self.pop_front();
        }
        let slot = self.slot(self.len);
        self.slots[slot] = Some(value);
        self.len += 1;
    }

    pub fn push_front(&mut self, value: T) {
        debug_assert!(!self.is_full(), "BoundedDeque overflow (capacity {})", self.capacity());
        if self.is_full() {
            self.pop_back();
        }
        self.head = (self.head + self.capacity() - 1) % self.capacity();
        self.slots[self.head] = Some(value);
        self.len += 1;
    }

    pub fn pop_front(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let value = self.slots[self.head].take();
        self.head = (self.head + 1) % self.capacity();
        self.len -= 1;
        value
    }

    pub fn pop_back(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let slot = self.slot(self.len - 1);
        self.len -= 1;
        self.slots[slot].take()
    }

    pub fn front(&self) -> Option<&T> {
        self.get(0)
    }

    pub fn back(&self) -> Option<&T> {
        self.len.checked_sub(1).and_then(|last| self.get(last))
    }

    pub fn back_mut(&mut self) -> Option<&mut T> {
        let last = self.len.checked_sub(1)?;
        let slot = self.slot(last);
        self.slots[slot].as_mut()
    }

    /// Element at `index`, counted from the front
    pub fn get(&self, index: usize) -> Option<&T> {
        if index >= self.len {
            return None;
        }
        self.slots[self.slot(index)].as_ref()
    }

    /// Iterate from front to back
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        (0..self.len).filter_map(move |i| self.get(i))
    }

    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
        self.head = 0;
    }
}

impl<T> std::ops::Index<usize> for BoundedDeque<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Some(value) => value,
            None => panic!("index {index} out of range for BoundedDeque of length {}", self.len),
        }
    }
}

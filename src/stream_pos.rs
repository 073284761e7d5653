//! Wrap-safe stream position arithmetic.
//!
//! Positions are unsigned sample counters that wrap around after `2^64`
//! samples. Ordering is decided on the ring: `a` is at or after `b` iff
//! `(a - b) mod 2^64 <= 2^63`. This is correct as long as the two positions
//! being compared are less than half the ring apart, which every window in
//! this crate guarantees by many orders of magnitude.

/// Absolute position of a sample in the stream.
pub type StreamPos = u64;

const HALF_RANGE: u64 = 1 << 63;

/// `a` is at or after `b` on the position ring
#[inline]
pub fn is_at_or_after(a: StreamPos, b: StreamPos) -> bool {
    a.wrapping_sub(b) <= HALF_RANGE
}

/// `a` is strictly before `b` on the position ring
#[inline]
pub fn is_before(a: StreamPos, b: StreamPos) -> bool {
    !is_at_or_after(a, b)
}

/// Advance `pos` by `offset` samples, wrapping at the end of the ring
#[inline]
pub fn advance(pos: StreamPos, offset: usize) -> StreamPos {
    pos.wrapping_add(offset as u64)
}

/// Move `pos` back by `offset` samples, wrapping at the start of the ring
#[inline]
pub fn rewind(pos: StreamPos, offset: usize) -> StreamPos {
    pos.wrapping_sub(offset as u64)
}

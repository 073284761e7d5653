mod reference;

use reference::{check_peaks, check_peaks_with_threshold};

const MULTI_PEAK_SEQUENCE: [i32; 33] = [
    0, 10, 10, 10, 8, 7, 5, 5, 5, 30, 0, 40, 0, 20, 5, 10, // 0x00..0x0F
    0, 10, 10, 10, 8, 7, 5, 5, 5, 30, 0, 40, 0, 20, 5, 10, // 0x10..0x1F
    0,
];

#[test]
fn test_multi_peak_sequence() {
    check_peaks(&MULTI_PEAK_SEQUENCE, 3, 1, &[0x2, 0xB, 0x1B]);
    check_peaks(&MULTI_PEAK_SEQUENCE, 3, 3, &[0x2, 0xB, 0x1B]);
    check_peaks_with_threshold(&MULTI_PEAK_SEQUENCE, 3, 3, &[0xB, 0x1B], 40);
}

#[test]
fn test_long_lockout() {
    check_peaks(&MULTI_PEAK_SEQUENCE, 8, 1, &[0xB]);
}

#[test]
fn test_boundaries() {
    // The first sample only locks out; the last peak needs L samples after it
    check_peaks(&[1, 0, 0, 0, 0, 0, 0], 3, 1, &[]);
    check_peaks(&[0, 1, 0, 0, 0, 0, 0], 3, 1, &[1]);
    check_peaks(&[0, 0, 1, 0, 0, 0, 0], 3, 1, &[2]);
    check_peaks(&[0, 0, 0, 1, 0, 0, 0], 3, 1, &[3]);
    check_peaks(&[0, 0, 0, 0, 1, 0, 0], 3, 1, &[]);
    check_peaks(&[0, 0, 0, 0, 0, 1, 0], 3, 1, &[]);
    check_peaks(&[0, 0, 0, 0, 0, 0, 1], 3, 1, &[]);

    check_peaks(&[0, 0, 1, 0, 0, 1, 0, 0], 2, 1, &[2, 5]);
    check_peaks(&[0, 1, 0, 0, 1, 0, 0], 2, 1, &[1, 4]);
    check_peaks(&[1, 0, 0, 1, 0, 0], 2, 1, &[3]);
    check_peaks(&[0, 1, 0, 0, 1, 0], 2, 1, &[1]);
    check_peaks(&[0, 1, 0, 0, 1], 2, 1, &[1]);
}

#[test]
fn test_decreasing_start_is_not_a_peak() {
    check_peaks(&[5, 4, 3, 2, 1, 0], 2, 1, &[]);
    check_peaks(&[5, 4, 3, 2, 1, 0, 4, 0, 0], 2, 1, &[6]);
}

#[test]
fn test_plateaus() {
    // longest plateau is 2L - 1 samples
    check_peaks(&[0, 1, 0, 0], 2, 1, &[1]);
    check_peaks(&[0, 1, 1, 0, 0], 2, 1, &[1]);
    check_peaks(&[0, 1, 1, 1, 0, 0], 2, 1, &[2]);
    check_peaks(&[0, 1, 1, 1, 1, 0, 0], 2, 1, &[]);
    check_peaks(&[0, 1, 1, 1, 1, 1, 0, 0], 2, 1, &[]);

    check_peaks(&[0, 2, 2, 0, 0], 1, 1, &[]);
    check_peaks(&[0, 1, 1, 1, 1, 0], 1, 1, &[]);
}

#[test]
fn test_threshold() {
    check_peaks_with_threshold(&[0, 1, 0], 1, 1, &[], 2);
    check_peaks_with_threshold(&[0, 2, 0], 1, 1, &[1], 2);
    check_peaks_with_threshold(&[0, 2, 0, 3, 0, 0], 1, 2, &[1, 3], 2);
}

#[test]
fn test_constant() {
    check_peaks(&[0, 0, 0, 0], 1, 1, &[]);
    check_peaks(&[1, 1, 1, 1], 2, 2, &[]);
}

#[test]
fn test_strictly_monotonic() {
    check_peaks(&[0, 1, 2, 3, 4], 1, 1, &[]);
    check_peaks(&[0, 1, 2, 3, 4, 5], 2, 1, &[]);
    check_peaks(&[0, 1, 2, 3, 4, 5], 2, 2, &[]);

    check_peaks(&[4, 3, 2, 1, 0], 1, 1, &[]);
    check_peaks(&[5, 4, 3, 2, 1, 0], 2, 1, &[]);
    check_peaks(&[5, 4, 3, 2, 1, 0], 2, 2, &[]);
}

#[test]
fn test_monotonic_with_plateaus() {
    check_peaks(&[0, 1, 1, 1, 1], 1, 1, &[]);
    check_peaks(&[0, 0, 1, 1, 1], 1, 1, &[]);
    check_peaks(&[0, 0, 0, 1, 1], 1, 1, &[]);
    check_peaks(&[0, 0, 0, 0, 1], 1, 1, &[]);

    check_peaks(&[0, 1, 1, 1, 1, 1], 2, 2, &[]);
    check_peaks(&[0, 0, 1, 1, 1, 1], 2, 2, &[]);
    check_peaks(&[0, 0, 0, 1, 1, 1], 2, 2, &[]);
    check_peaks(&[0, 0, 0, 0, 1, 1], 2, 2, &[]);
    check_peaks(&[0, 0, 0, 0, 0, 1], 2, 2, &[]);

    check_peaks(&[1, 1, 1, 1, 0], 1, 1, &[]);
    check_peaks(&[1, 1, 1, 0, 0], 1, 1, &[]);
    check_peaks(&[1, 1, 0, 0, 0], 1, 1, &[]);
    check_peaks(&[1, 0, 0, 0, 0], 1, 1, &[]);

    check_peaks(&[1, 1, 1, 1, 1, 0], 2, 2, &[]);
    check_peaks(&[1, 1, 1, 1, 0, 0], 2, 2, &[]);
    check_peaks(&[1, 1, 1, 0, 0, 0], 2, 2, &[]);
    check_peaks(&[1, 1, 0, 0, 0, 0], 2, 2, &[]);
    check_peaks(&[1, 0, 0, 0, 0, 0], 2, 2, &[]);
}

#[test]
fn test_equal_peaks() {
    // far enough apart
    check_peaks(&[0, 1, 0, 1, 0, 1, 0, 1, 0], 1, 1, &[1, 3, 5, 7]);
    // every peak locks out the next one, the first wins
    check_peaks(&[0, 1, 0, 1, 0, 1, 0, 1, 0], 2, 1, &[1]);
}

#[test]
fn test_increasing_and_decreasing_peaks() {
    check_peaks(&[0, 1, 0, 2, 0, 3, 0, 4, 0], 2, 1, &[]);
    check_peaks(&[0, 4, 0, 3, 0, 2, 0, 1, 0], 2, 1, &[1]);
}

#[test]
fn test_triple_peaks() {
    // same height, too close
    check_peaks(&[0, 2, 0, 0, 2, 0, 2, 0], 4, 1, &[1]);
    // middle peak dominated by both neighbours
    check_peaks(&[0, 2, 0, 0, 1, 0, 2, 0, 0, 0, 0], 4, 1, &[1, 6]);
    // middle peak dominated by the previous one
    check_peaks(&[0, 2, 0, 1, 0, 0, 2, 0, 0], 2, 1, &[1, 6]);
    // middle peak dominated by the next one
    check_peaks(&[0, 2, 0, 0, 1, 0, 2, 0, 0], 2, 1, &[1, 6]);

    check_peaks(&[0, 4, 0, 2, 0, 1, 1, 1, 0, 0, 0, 0], 3, 3, &[1]);
}

#[test]
fn test_plateau_sequences() {
    check_peaks(&[0, 1, 1, 1, 0, 1, 1, 1, 0, 1, 1, 1, 0, 0], 2, 1, &[2, 6, 10]);

    // lock-out runs from the end of a plateau to the next peak
    check_peaks(&[0, 1, 1, 1, 0, 1, 0, 1, 1, 1, 0, 0], 2, 1, &[2, 8]);

    // and from a larger value to the start of a plateau
    check_peaks(&[0, 6, 0, 1, 1, 1, 0, 0], 2, 1, &[1, 4]);
}

#[test]
fn test_lockout() {
    check_peaks(&[0, 1, 0, 2, 0, 3, 0, 4, 0, 5], 1, 1, &[1, 3, 5, 7]);
    check_peaks(
        &[0, 0, 1, 0, 0, 2, 0, 0, 0, 3, 0, 0, 4, 0, 0, 0, 5, 0, 0, 0, 6],
        3,
        1,
        &[5, 12, 16],
    );
    check_peaks(&[0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 1, 0], 5, 2, &[2]);
    check_peaks(&[1, 0, 1, 0, 0, 0], 2, 1, &[]);

    // a maximum at the very end is not a peak
    check_peaks(&[0, 1, 5, 0, 6], 2, 1, &[]);

    // a ramp exceeds the previous maximum just after its lock-out ends
    check_peaks(&[0, 0, 0, 0, 0, 0, 0, 4, 0, 0, 0, 0, 0, 1, 2, 5], 7, 1, &[7]);
    check_peaks(&[0, 0, 0, 0, 0, 0, 0, 4, 0, 0, 0, 0, 0, 1, 2, 5], 7, 4, &[7]);

    // a rising slope locks out the smaller peak before it
    check_peaks(&[0, 1, 0, 2, 3, 0, 0], 2, 1, &[4]);
    check_peaks(&[0, 1, 0, 2, 3, 0, 0, 0], 2, 8, &[4]);

    // a falling slope locks out a later maximum of the same value
    check_peaks(&[0, 0, 2, 1, 0, 1, 0, 0], 2, 2, &[2]);

    check_peaks(&[0, 5, 0, 0, 0, 4, 0, 0, 0, 0, 0, 0, 0, 0, 0], 5, 5, &[1]);

    // plateau at the very start
    check_peaks(&[2, 2, 0, 0, 1, 0, 0, 0], 3, 2, &[]);

    // single sample against a plateau after a ramp
    check_peaks(&[0, 0, 0, 3, 1, 2, 3, 3], 4, 2, &[3]);
}

#[test]
fn test_block_larger_than_lockout() {
    check_peaks(&[1, 0, 0, 0, 0, 0, 0, 0, 0, 0], 2, 10, &[]);
    check_peaks(&[0, 1, 0, 0, 0, 0, 0, 0, 0, 0], 2, 10, &[1]);
    check_peaks(&[0, 1, 0, 2, 0, 3, 0, 4, 0, 0], 2, 10, &[7]);
    check_peaks(&[0, 1, 0, 0, 1, 0, 0, 1, 0, 0], 2, 10, &[1, 4, 7]);
}

#[test]
fn test_found_by_fuzzing() {
    // recurring maxima in the lock-out free start
    check_peaks(&[27, 37, 6, 32, 23, 7, 6, 49, 40, 43, 9, 44, 11, 48, 29], 5, 5, &[1, 7]);

    // purging around an open plateau
    check_peaks(&[0, 3, 0, 4, 0, 1, 0, 1, 1, 1, 0], 4, 1, &[3]);
    check_peaks(&[0, 3, 0, 4, 0, 1, 0, 1, 1, 0], 4, 5, &[3]);

    check_peaks(
        &[42, 1, 47, 38, 17, 5, 6, 45, 9, 18, 24, 15, 31, 46, 14, 22],
        2,
        4,
        &[2, 7, 13],
    );

    // candidates moving from right to left dominance storage
    check_peaks(&[9, 10, 7, 4, 9, 9, 8, 5], 4, 2, &[1]);
}

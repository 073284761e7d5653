//! Slow reference finder and helpers shared by the integration tests.
#![allow(dead_code)]

use peakstream::StreamingPeakFinder;
use peakstream::signal_processing::find_peak;

/// Dominant peaks by brute force
///
/// A sample `c` is reported iff `find_peak` over the window
/// `[max(0, c - L), c + L]` lands on `c`, its plateau is at most `2L - 1`
/// long, its value meets the threshold, and `c + L` lies inside the data.
pub fn reference_peaks(samples: &[i32], lockout_distance: usize, threshold: i32) -> Vec<usize> {
    let mut peaks = Vec::new();
    for candidate in 0..samples.len() {
        let end = candidate + lockout_distance;
        if end >= samples.len() {
            break;
        }
        let begin = candidate.saturating_sub(lockout_distance);
        let window = &samples[begin..=end];

        if find_peak(window) != Some(candidate - begin) {
            continue;
        }
        if plateau_len(samples, candidate) > 2 * lockout_distance - 1 {
            continue;
        }
        if samples[candidate] < threshold {
            continue;
        }
        peaks.push(candidate);
    }
    peaks
}

fn plateau_len(samples: &[i32], index: usize) -> usize {
    let value = samples[index];
    let left = samples[..index].iter().rev().take_while(|&&v| v == value).count();
    let right = samples[index + 1..].iter().take_while(|&&v| v == value).count();
    left + 1 + right
}

/// Check that every peak is the `find_peak` result of its own lock-out window
pub fn verify_dominance(samples: &[i32], lockout_distance: usize, peaks: &[usize]) {
    for &peak in peaks {
        let begin = peak - peak.min(lockout_distance);
        let end = peak + lockout_distance;
        assert!(end < samples.len(), "peak {} too close to the end", peak);
        assert_eq!(
            find_peak(&samples[begin..=end]),
            Some(peak - begin),
            "peak {} does not dominate its window",
            peak
        );
    }
}

/// Feed `samples` to a streaming finder in blocks of the given sizes (cycled),
/// starting at `start_pos`; returns peak indices relative to the start
pub fn run_chunked(
    samples: &[i32],
    lockout_distance: usize,
    block_sizes: &[usize],
    threshold: i32,
    start_pos: u64,
) -> Vec<usize> {
    let mut finder = StreamingPeakFinder::new(2 * lockout_distance + 1).unwrap();
    let mut peaks = Vec::new();
    let mut offset = 0;

    for &block_size in block_sizes.iter().cycle() {
        if offset >= samples.len() {
            break;
        }
        let end = (offset + block_size.max(1)).min(samples.len());
        let stream_pos = start_pos.wrapping_add(offset as u64);

        finder.process(&samples[offset..end], stream_pos, threshold, |peak| {
            let index = peak.stream_pos.wrapping_sub(start_pos) as usize;
            assert!(index < end, "peak {} reported before it was seen", index);
            assert_eq!(peak.value, samples[index]);
            assert!(peak.value >= threshold);
            peaks.push(index);
        });
        offset = end;
    }
    peaks
}

pub fn run_streaming(samples: &[i32], lockout_distance: usize, block_size: usize, threshold: i32) -> Vec<usize> {
    run_chunked(samples, lockout_distance, &[block_size], threshold, 0)
}

/// Check a literal case against the expected peaks, the reference finder and
/// the streaming finder at several block sizes
pub fn check_peaks(samples: &[i32], lockout_distance: usize, block_size: usize, expected: &[usize]) {
    check_peaks_with_threshold(samples, lockout_distance, block_size, expected, 0);
}

pub fn check_peaks_with_threshold(
    samples: &[i32],
    lockout_distance: usize,
    block_size: usize,
    expected: &[usize],
    threshold: i32,
) {
    let reference = reference_peaks(samples, lockout_distance, threshold);
    assert_eq!(reference, expected, "reference finder on {:?}", samples);
    verify_dominance(samples, lockout_distance, &reference);

    for size in [block_size, 1, samples.len()] {
        assert_eq!(
            run_streaming(samples, lockout_distance, size, threshold),
            reference,
            "streaming finder on {:?}, L = {}, block size {}",
            samples,
            lockout_distance,
            size
        );
    }
}

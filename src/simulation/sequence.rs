use rand::RngExt;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Reproducible integer sequence in `0..=max_value` with frequent repeats
///
/// About a quarter of the samples repeat their predecessor, so ties and
/// plateaus of all lengths show up often.
pub fn random_sequence(seed: u64, len: usize, max_value: i32) -> Vec<i32> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut sequence: Vec<i32> = Vec::with_capacity(len);

    for _ in 0..len {
        let value = match sequence.last() {
            Some(&prev) if rng.random_range(0..4) == 0 => prev,
            _ => rng.random_range(0..=max_value.max(0)),
        };
        sequence.push(value);
    }
    sequence
}

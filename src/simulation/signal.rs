use rand::RngExt;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Synthetic onset signal: decaying clicks over optional uniform noise
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(default)]
pub struct ClickTrainSpec {
    pub sample_rate: u32,
    /// Total length in samples
    pub num_samples: usize,
    /// Sample index where each click starts
    pub onsets: Vec<usize>,
    /// Click peak amplitude
    pub amplitude: f32,
    /// Samples from click start to its maximum
    pub attack_samples: usize,
    /// Exponential decay time constant in milliseconds
    pub decay_ms: f32,
    /// Half-width of the uniform noise floor (0 disables noise)
    pub noise_amplitude: f32,
    pub seed: Option<u64>,
}

impl Default for ClickTrainSpec {
    fn default() -> Self {
        Self {
            sample_rate: 48000,
            num_samples: 48000,
            onsets: Vec::new(),
            amplitude: 0.8,
            attack_samples: 4,
            decay_ms: 5.0,
            noise_amplitude: 0.0,
            seed: None,
        }
    }
}

impl ClickTrainSpec {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Onsets every `interval` samples, starting at `first`, up to `num_samples`
pub fn regular_onsets(first: usize, interval: usize, num_samples: usize) -> Vec<usize> {
    (first..num_samples).step_by(interval.max(1)).collect()
}

fn create_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(s) => ChaCha8Rng::seed_from_u64(s),
        None => rand::make_rng(),
    }
}

/// Generate a click train
///
/// Each click rises linearly over `attack_samples` to `amplitude` and then
/// decays exponentially. Overlapping clicks add up.
///
/// # Returns
/// The signal, and the sample index of every click maximum that lies inside
/// the signal
pub fn generate_click_train(spec: &ClickTrainSpec) -> (Vec<f32>, Vec<usize>) {
    let mut signal = vec![0.0f32; spec.num_samples];
    let mut maxima = Vec::with_capacity(spec.onsets.len());

    let attack = spec.attack_samples.max(1);
    let decay_samples = (spec.decay_ms * spec.sample_rate as f32 / 1000.0).max(1.0);
    // Envelope below 1e-4 of the peak is not rendered
    let tail = (decay_samples * 9.3).ceil() as usize;

    for &onset in &spec.onsets {
        for n in 0..=attack + tail {
            let Some(sample) = signal.get_mut(onset + n) else {
                break;
            };
            let envelope = if n <= attack {
                n as f32 / attack as f32
            } else {
                (-((n - attack) as f32) / decay_samples).exp()
            };
            *sample += spec.amplitude * envelope;
        }
        if onset + attack < spec.num_samples {
            maxima.push(onset + attack);
        }
    }

    if spec.noise_amplitude > 0.0 {
        let mut rng = create_rng(spec.seed);
        for sample in signal.iter_mut() {
            *sample += (rng.random::<f32>() * 2.0 - 1.0) * spec.noise_amplitude;
        }
    }

    (signal, maxima)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_shape() {
        let spec = ClickTrainSpec {
            sample_rate: 8000,
            num_samples: 200,
            onsets: vec![10, 120],
            ..Default::default()
        };
        let (signal, maxima) = generate_click_train(&spec);

        assert_eq!(signal.len(), 200);
        assert_eq!(maxima, vec![14, 124]);
        approx::assert_relative_eq!(signal[14], 0.8, epsilon = 1e-6);
        assert_eq!(signal[10], 0.0);
        assert!(signal[13] < signal[14]);
        assert!(signal[15] < signal[14]);
        assert!(signal[100] < signal[60]);
    }

    #[test]
    fn test_maximum_outside_signal_is_dropped() {
        let spec = ClickTrainSpec {
            num_samples: 100,
            onsets: vec![50, 98],
            ..Default::default()
        };
        let (_, maxima) = generate_click_train(&spec);
        assert_eq!(maxima, vec![54]);
    }

    #[test]
    fn test_seeded_noise_reproducibility() {
        let spec = ClickTrainSpec {
            num_samples: 1000,
            onsets: vec![100],
            noise_amplitude: 0.01,
            ..Default::default()
        }
        .with_seed(12345);

        let (a, _) = generate_click_train(&spec);
        let (b, _) = generate_click_train(&spec);
        assert_eq!(a, b);
        assert!(a.iter().all(|s| s.abs() <= 0.8 + 0.01));
    }

    #[test]
    fn test_regular_onsets() {
        assert_eq!(regular_onsets(5, 10, 40), vec![5, 15, 25, 35]);
        assert!(regular_onsets(50, 10, 40).is_empty());
    }
}

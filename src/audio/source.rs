use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use hound::WavReader;

use crate::error::{PeakError, Result};

/// Source of consecutive mono sample blocks
pub trait AudioSource: Send {
    /// Next block of samples, or `None` once the source is exhausted
    fn next_block(&mut self) -> anyhow::Result<Option<Vec<f32>>>;
    fn sample_rate(&self) -> u32;
}

/// One channel of a WAV file, delivered in fixed-size blocks
///
/// Integer samples are normalised to [-1, 1]. The last block may be shorter
/// than `block_size`.
pub struct WavFileSource {
    samples: Vec<f32>,
    position: usize,
    block_size: usize,
    sample_rate: u32,
    channels: u16,
}

impl WavFileSource {
    /// Open a WAV file and extract one channel
    ///
    /// # Arguments
    /// * `path` - WAV file to read
    /// * `channel` - Zero-based channel index
    /// * `block_size` - Samples per block returned by [`AudioSource::next_block`]
    pub fn open<P: AsRef<Path>>(path: P, channel: usize, block_size: usize) -> Result<Self> {
        let reader = WavReader::open(path.as_ref())?;
        let spec = reader.spec();

        if channel >= spec.channels as usize {
            return Err(PeakError::ChannelOutOfRange {
                channel,
                channels: spec.channels,
            });
        }
        if block_size == 0 {
            return Err(PeakError::Config("block_size must be positive".to_string()));
        }

        let interleaved = Self::read_samples(reader, &spec)?;
        let samples: Vec<f32> = interleaved
            .into_iter()
            .skip(channel)
            .step_by(spec.channels as usize)
            .collect();

        log::info!(
            "Opened {}: {} Hz, {} channel(s), {:.2} s, using channel {}",
            path.as_ref().display(),
            spec.sample_rate,
            spec.channels,
            samples.len() as f32 / spec.sample_rate as f32,
            channel
        );

        Ok(Self {
            samples,
            position: 0,
            block_size,
            sample_rate: spec.sample_rate,
            channels: spec.channels,
        })
    }

    fn read_samples(mut reader: WavReader<BufReader<File>>, spec: &hound::WavSpec) -> Result<Vec<f32>> {
        let samples = match spec.sample_format {
            hound::SampleFormat::Float => reader.samples::<f32>().collect::<std::result::Result<Vec<_>, _>>()?,
            hound::SampleFormat::Int => {
                let max_val = 2_i64.pow(spec.bits_per_sample as u32 - 1) as f32;
                reader
                    .samples::<i32>()
                    .map(|s| s.map(|v| v as f32 / max_val))
                    .collect::<std::result::Result<Vec<_>, _>>()?
            }
        };
        Ok(samples)
    }

    /// Number of channels in the file
    pub fn channels(&self) -> u16 {
        self.channels
    }

    /// Length of the selected channel in samples
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }
}

impl AudioSource for WavFileSource {
    fn next_block(&mut self) -> anyhow::Result<Option<Vec<f32>>> {
        Ok(next_block_of(&self.samples, &mut self.position, self.block_size))
    }

    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }
}

/// In-memory source over a mono signal
pub struct SliceSource {
    samples: Vec<f32>,
    position: usize,
    block_size: usize,
    sample_rate: u32,
}

impl SliceSource {
    pub fn new(samples: Vec<f32>, sample_rate: u32, block_size: usize) -> Self {
        debug_assert!(block_size > 0, "block_size must be nonzero");
        Self {
            samples,
            position: 0,
            block_size: block_size.max(1),
            sample_rate,
        }
    }
}

impl AudioSource for SliceSource {
    fn next_block(&mut self) -> anyhow::Result<Option<Vec<f32>>> {
        Ok(next_block_of(&self.samples, &mut self.position, self.block_size))
    }

    fn sample_rate(&self) -> u32 {
        self.sample_rate
    }
}

fn next_block_of(samples: &[f32], position: &mut usize, block_size: usize) -> Option<Vec<f32>> {
    if *position >= samples.len() {
        return None;
    }

    let end = (*position + block_size).min(samples.len());
    let block = samples[*position..end].to_vec();
    *position = end;
    Some(block)
}

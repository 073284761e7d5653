//! Configuration for the peakstream pipeline.
//!
//! Every section has defaults, so a TOML file only needs the values that
//! differ:
//!
//! ```toml
//! [audio]
//! block_size = 512
//!
//! [peak]
//! pattern = "12.5ms"
//! threshold = 0.2
//! ```

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::constants::{DEFAULT_BLOCK_SIZE, DEFAULT_PATTERN_MS, DEFAULT_PEAK_THRESHOLD, MIN_PATTERN_SIZE};
use crate::error::{PeakError, Result};

/// Dominance window specification
///
/// Can be given as a sample count or as a duration that is resolved against
/// the sample rate of the input.
///
/// # Parsing formats
/// - `7` or `7smp` - pattern size in samples (odd, at least 3)
/// - `12.5ms` or `12.5 ms` - window duration in milliseconds
///
/// # Example
/// ```
/// use peakstream::config::PatternSpec;
///
/// let spec: PatternSpec = "1ms".parse().unwrap();
/// assert_eq!(spec.pattern_size(48000).unwrap(), 49);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, serde::Deserialize)]
#[serde(try_from = "String")]
pub enum PatternSpec {
    Samples(usize),
    Millis(f32),
}

impl PatternSpec {
    /// Resolve to an odd pattern size in samples
    ///
    /// Durations are rounded to the nearest sample count and bumped to the
    /// next odd value, with a floor of 3. Explicit sample counts are used as
    /// given and must already be valid.
    pub fn pattern_size(&self, sample_rate: u32) -> Result<usize> {
        match *self {
            Self::Samples(size) => {
                if size < MIN_PATTERN_SIZE || size % 2 == 0 {
                    return Err(PeakError::InvalidPatternSize(size));
                }
                Ok(size)
            }
            Self::Millis(ms) => {
                let samples = (ms * sample_rate as f32 / 1000.0).round() as usize;
                Ok((samples | 1).max(MIN_PATTERN_SIZE))
            }
        }
    }
}

impl Default for PatternSpec {
    fn default() -> Self {
        Self::Millis(DEFAULT_PATTERN_MS)
    }
}

impl fmt::Display for PatternSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Samples(size) => write!(f, "{}smp", size),
            Self::Millis(ms) => write!(f, "{}ms", ms),
        }
    }
}

impl FromStr for PatternSpec {
    type Err = PeakError;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();

        if let Some(num) = s.strip_suffix("ms") {
            let ms: f32 = num
                .trim()
                .parse()
                .map_err(|_| PeakError::InvalidWindow(format!("invalid duration: {}", s)))?;
            if !ms.is_finite() || ms <= 0.0 {
                return Err(PeakError::InvalidWindow("duration must be positive".to_string()));
            }
            return Ok(Self::Millis(ms));
        }

        let num = s.strip_suffix("smp").unwrap_or(s);
        let size: usize = num
            .trim()
            .parse()
            .map_err(|_| PeakError::InvalidWindow(format!("invalid pattern size: {}", s)))?;
        Ok(Self::Samples(size))
    }
}

impl TryFrom<String> for PatternSpec {
    type Error = PeakError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

/// Complete pipeline configuration
///
/// # Example
/// ```
/// use peakstream::config::PeakStreamConfig;
///
/// let config = PeakStreamConfig::from_toml_str("[peak]\nthreshold = 0.3\n").unwrap();
/// assert_eq!(config.peak.threshold, 0.3);
/// assert_eq!(config.audio.block_size, 1024);
/// ```
#[derive(Debug, Clone, Default, serde::Deserialize)]
#[serde(default)]
pub struct PeakStreamConfig {
    /// Sample source configuration
    pub audio: AudioConfig,
    /// Dominant-peak detection configuration
    pub peak: PeakConfig,
}

/// Sample source configuration
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    /// Samples per processing block
    pub block_size: usize,
    /// Channel to analyse in multi-channel input
    pub channel: usize,
}

/// Dominant-peak detection configuration
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(default)]
pub struct PeakConfig {
    /// Dominance window
    pub pattern: PatternSpec,
    /// Minimum value of a reported peak
    pub threshold: f32,
    /// Detect on absolute sample values so negative excursions count too
    pub rectify: bool,
}

impl PeakStreamConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        toml::from_str(content).map_err(|e| PeakError::Config(e.to_string()))
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Check the configuration against a source and resolve the pattern size
    pub fn validate(&self, sample_rate: u32) -> Result<usize> {
        if self.audio.block_size == 0 {
            return Err(PeakError::Config("block_size must be positive".to_string()));
        }
        if !self.peak.threshold.is_finite() {
            return Err(PeakError::Config("threshold must be finite".to_string()));
        }
        self.peak.pattern.pattern_size(sample_rate)
    }
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            block_size: DEFAULT_BLOCK_SIZE,
            channel: 0,
        }
    }
}

impl Default for PeakConfig {
    fn default() -> Self {
        Self {
            pattern: PatternSpec::default(),
            threshold: DEFAULT_PEAK_THRESHOLD,
            rectify: true,
        }
    }
}

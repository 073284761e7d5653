use thiserror::Error;

#[derive(Error, Debug)]
pub enum PeakError {
    #[error("Invalid pattern size {0}: must be odd and at least 3")]
    InvalidPatternSize(usize),

    #[error("Invalid window specification: {0}")]
    InvalidWindow(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Channel {channel} out of range: source has {channels} channel(s)")]
    ChannelOutOfRange { channel: usize, channels: u16 },

    #[error("WAV error: {0}")]
    Wav(#[from] hound::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PeakError>;

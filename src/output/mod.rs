mod csv;
mod json;
mod text;

pub use self::csv::CsvFormatter;
pub use self::json::JsonFormatter;
pub use self::text::TextFormatter;

use crate::signal_processing::DominantPeak;
use crate::stream_pos::StreamPos;

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Csv,
}

/// One reported dominant peak, ready for printing
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct PeakOutput {
    pub stream_pos: StreamPos,
    pub time_secs: f64,
    pub value: f32,
}

impl PeakOutput {
    pub fn new(peak: &DominantPeak<f32>, sample_rate: u32) -> Self {
        Self {
            stream_pos: peak.stream_pos,
            time_secs: peak.stream_pos as f64 / sample_rate as f64,
            value: peak.value,
        }
    }
}

pub trait Formatter: Send {
    fn format(&self, output: &PeakOutput) -> String;

    fn header(&self) -> Option<&'static str> {
        None
    }
}

pub fn create_formatter(format: OutputFormat, verbose: bool) -> Box<dyn Formatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(verbose)),
        OutputFormat::Json => Box::new(JsonFormatter),
        OutputFormat::Csv => Box::new(CsvFormatter),
    }
}

use super::{Formatter, PeakOutput};

pub struct CsvFormatter;

impl Formatter for CsvFormatter {
    fn format(&self, output: &PeakOutput) -> String {
        format!("{},{:.6},{:.6}", output.stream_pos, output.time_secs, output.value)
    }

    fn header(&self) -> Option<&'static str> {
        Some("stream_pos,time_secs,value")
    }
}

use super::{Formatter, PeakOutput};

pub struct TextFormatter {
    verbose: bool,
}

impl TextFormatter {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl Formatter for TextFormatter {
    fn format(&self, output: &PeakOutput) -> String {
        if self.verbose {
            format!(
                "Peak @ {} (t = {:.6} s): value {:.4}",
                output.stream_pos, output.time_secs, output.value
            )
        } else {
            format!("Peak @ {}: {:.4}", output.stream_pos, output.value)
        }
    }
}

use super::{Formatter, PeakOutput};

/// One JSON object per line
pub struct JsonFormatter;

impl Formatter for JsonFormatter {
    fn format(&self, output: &PeakOutput) -> String {
        serde_json::to_string(output).unwrap_or_else(|e| format!(r#"{{"error":"{}"}}"#, e))
    }
}

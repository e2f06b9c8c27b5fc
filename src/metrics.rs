use std::time::Duration;

use metrics::{counter, histogram};

/// Metric names and recording helpers.
///
/// Nothing is exported unless the embedding application installs a
/// `metrics` recorder; without one every call is a no-op.
#[derive(Debug, Clone, Copy)]
pub struct MetricsCollector {
    /// Rows read from the store
    pub rows_read_total: &'static str,
    /// Time spent reading and decoding rows
    pub read_duration: &'static str,
    /// Code extraction attempts, labeled by outcome
    pub codes_extracted_total: &'static str,
    /// Clipboard writes, labeled by status
    pub clipboard_writes_total: &'static str,
    /// Errors, labeled by kind
    pub errors_total: &'static str,
}

impl Default for MetricsCollector {
    fn default() -> Self {
        Self {
            rows_read_total: "msg_code_rows_read_total",
            read_duration: "msg_code_read_duration_seconds",
            codes_extracted_total: "msg_code_codes_extracted_total",
            clipboard_writes_total: "msg_code_clipboard_writes_total",
            errors_total: "msg_code_errors_total",
        }
    }
}

impl MetricsCollector {
    /// Record a completed store read
    pub fn record_read(&self, rows: usize, duration: Duration) {
        counter!(self.rows_read_total).increment(rows as u64);
        histogram!(self.read_duration).record(duration.as_secs_f64());
    }

    /// Record whether the newest message contained a code
    pub fn record_code_extraction(&self, found: bool) {
        let outcome = if found { "found" } else { "not_found" };
        counter!(self.codes_extracted_total, "outcome" => outcome).increment(1);
    }

    /// Record a clipboard write attempt
    pub fn record_clipboard_write(&self, success: bool) {
        let status = if success { "success" } else { "error" };
        counter!(self.clipboard_writes_total, "status" => status).increment(1);
        if !success {
            self.record_error("clipboard");
        }
    }

    /// Record an error by kind
    pub fn record_error(&self, kind: &'static str) {
        counter!(self.errors_total, "type" => kind).increment(1);
    }
}

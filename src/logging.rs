use std::path::Path;

use tracing::debug;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::{non_blocking, rolling};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer, Registry};

use crate::error::{MsgCodeError, Result};

/// Initialize structured logging.
///
/// Console output goes to stderr so stdout stays reserved for listed
/// messages. When `log_file` is given, a JSON layer also writes to a daily
/// rolling file in that file's directory; keep the returned guard alive
/// until exit so buffered lines are flushed.
pub fn init_logging(log_level: Option<&str>, log_file: Option<&Path>, json: bool) -> Result<Option<WorkerGuard>> {
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level.unwrap_or("warn")))
        .map_err(|e| MsgCodeError::InvalidConfig(format!("Failed to create log filter: {e}")))?;

    let console_layer = if json {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .json()
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_ansi(true)
            .with_target(true)
            .boxed()
    };

    let registry = Registry::default().with(env_filter).with(console_layer);

    let guard = if let Some(log_path) = log_file {
        let directory = log_path.parent().unwrap_or_else(|| Path::new("."));
        let file_name = log_path
            .file_name()
            .map_or_else(|| "msg-code.log".into(), |name| name.to_string_lossy().into_owned());
        let (non_blocking_appender, guard) = non_blocking(rolling::daily(directory, file_name));

        let file_layer = tracing_subscriber::fmt::layer()
            .with_writer(non_blocking_appender)
            .with_ansi(false)
            .with_target(true)
            .json();

        registry
            .with(file_layer)
            .try_init()
            .map_err(|e| MsgCodeError::InvalidConfig(format!("Failed to install logger: {e}")))?;
        Some(guard)
    } else {
        registry
            .try_init()
            .map_err(|e| MsgCodeError::InvalidConfig(format!("Failed to install logger: {e}")))?;
        None
    };

    debug!("Logging system initialized");
    Ok(guard)
}

/// Performance timing utilities
pub struct OperationTimer {
    operation: &'static str,
    start: std::time::Instant,
}

impl OperationTimer {
    /// Start timing `operation`
    #[must_use]
    pub fn new(operation: &'static str) -> Self {
        Self {
            operation,
            start: std::time::Instant::now(),
        }
    }

    /// Log and return the elapsed time
    pub fn finish(self) -> std::time::Duration {
        let duration = self.start.elapsed();
        debug!(
            operation = self.operation,
            duration_ms = duration.as_millis(),
            "Operation completed"
        );
        duration
    }
}

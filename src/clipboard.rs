//! Clipboard output through an external helper process.

use std::io::Write;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::error::{MsgCodeError, Result};

/// Helper used when none is configured
pub const DEFAULT_CLIPBOARD_COMMAND: &str = "pbcopy";

/// Destination for extracted text
#[cfg_attr(test, mockall::automock)]
pub trait ClipboardSink {
    /// Replace the clipboard contents with `text`
    fn write_text(&self, text: &str) -> Result<()>;
}

/// Clipboard backed by a helper that reads the new contents from stdin
#[derive(Debug, Clone)]
pub struct CommandClipboard {
    program: String,
    args: Vec<String>,
}

impl CommandClipboard {
    /// Clipboard that pipes into `program args...`
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Program that will be spawned
    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }
}

impl Default for CommandClipboard {
    fn default() -> Self {
        Self::new(DEFAULT_CLIPBOARD_COMMAND, Vec::new())
    }
}

impl ClipboardSink for CommandClipboard {
    fn write_text(&self, text: &str) -> Result<()> {
        debug!(program = %self.program, bytes = text.len(), "Spawning clipboard helper");

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .spawn()
            .map_err(|e| MsgCodeError::Clipboard(format!("failed to spawn {}: {e}", self.program)))?;

        // stdin is dropped at the end of this block so the helper sees EOF
        let write_result = match child.stdin.take() {
            Some(mut stdin) => stdin
                .write_all(text.as_bytes())
                .and_then(|()| stdin.flush())
                .map_err(|e| MsgCodeError::Clipboard(format!("failed to write to {}: {e}", self.program))),
            None => Err(MsgCodeError::Clipboard(format!("no stdin pipe for {}", self.program))),
        };

        let status = child
            .wait()
            .map_err(|e| MsgCodeError::Clipboard(format!("failed to wait for {}: {e}", self.program)))?;
        write_result?;

        if !status.success() {
            return Err(MsgCodeError::Clipboard(format!("{} exited with {status}", self.program)));
        }

        Ok(())
    }
}

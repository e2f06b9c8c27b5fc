//! The read-and-transform pipeline.
//!
//! Rows come out of a [`MessageRepository`], each is decoded against a chat
//! mapping loaded once per call, and the result is either returned for
//! listing or reduced to the newest message's verification code.

use tracing::{debug, info, warn};

use crate::body::extract_body;
use crate::chat_names::resolve_group_name;
use crate::clipboard::ClipboardSink;
use crate::error::Result;
use crate::logging::OperationTimer;
use crate::metrics::MetricsCollector;
use crate::models::{ChatMapping, Message, RawMessageRow, ReadOptions};
use crate::repository::MessageRepository;
use crate::timestamp::{human_readable_body, normalize_timestamp};
use crate::verification::CodeExtractor;

/// Outcome of a clipboard run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyOutcome {
    /// The store had no messages; the clipboard was not touched
    NoMessages,
    /// The code (possibly empty) was written to the clipboard
    Copied(String),
}

/// Decode one raw row into a display message
#[must_use]
pub fn build_message(row: &RawMessageRow, chats: &ChatMapping, options: &ReadOptions) -> Message {
    let date = normalize_timestamp(row.date);
    let mut body = extract_body(row.text.as_deref(), row.attributed_body.as_deref());
    if options.human_readable {
        body = human_readable_body(&date, &body);
    }

    let phone_number = match row.handle.as_deref() {
        Some(handle) if !handle.is_empty() => handle.to_string(),
        _ if row.is_from_me => options.self_label.clone(),
        _ => String::new(),
    };

    let cache_roomname = row.cache_roomnames.clone().unwrap_or_default();
    let group_chat_name = resolve_group_name(&cache_roomname, chats);

    Message {
        row_id: row.row_id,
        date,
        body,
        phone_number,
        is_from_me: row.is_from_me,
        cache_roomname,
        group_chat_name,
    }
}

/// Message pipeline over a repository
pub struct MessageService<R> {
    repository: R,
    extractor: CodeExtractor,
    metrics: MetricsCollector,
}

impl<R: MessageRepository> MessageService<R> {
    /// Service using the default 4 to 6 digit code window
    pub fn new(repository: R) -> Self {
        Self::with_extractor(repository, CodeExtractor::default())
    }

    /// Service with a custom code extractor
    pub fn with_extractor(repository: R, extractor: CodeExtractor) -> Self {
        Self {
            repository,
            extractor,
            metrics: MetricsCollector::default(),
        }
    }

    /// Read and decode messages.
    ///
    /// Any query or decode failure aborts the whole read; no partial list is
    /// returned.
    pub fn list_messages(&self, options: &ReadOptions) -> Result<Vec<Message>> {
        let timer = OperationTimer::new("read_messages");

        let rows = self.repository.fetch_rows(options.limit).inspect_err(|e| self.metrics.record_error(e.kind()))?;
        let chats = self
            .repository
            .fetch_chat_mapping()
            .inspect_err(|e| self.metrics.record_error(e.kind()))?;
        debug!(rows = rows.len(), rooms = chats.len(), "Fetched rows and chat mapping");

        let messages: Vec<Message> = rows.iter().map(|row| build_message(row, &chats, options)).collect();

        self.metrics.record_read(messages.len(), timer.finish());
        info!(count = messages.len(), "Read messages");
        Ok(messages)
    }

    /// Verification code of the newest message.
    ///
    /// `None` when the store has no messages; `Some("")` when the newest
    /// message has no code.
    pub fn latest_code(&self) -> Result<Option<String>> {
        let messages = self.list_messages(&ReadOptions::newest())?;
        let Some(newest) = messages.first() else {
            return Ok(None);
        };

        let code = self.extractor.extract(&newest.body);
        self.metrics.record_code_extraction(!code.is_empty());
        debug!(row_id = newest.row_id, found = !code.is_empty(), "Extracted verification code");
        Ok(Some(code))
    }

    /// Copy the newest message's verification code to `sink`.
    ///
    /// An empty code is still written, clearing the clipboard.
    pub fn copy_latest_code(&self, sink: &dyn ClipboardSink) -> Result<CopyOutcome> {
        let Some(code) = self.latest_code()? else {
            warn!("No messages in store; clipboard left unchanged");
            return Ok(CopyOutcome::NoMessages);
        };

        if code.is_empty() {
            warn!("Newest message has no verification code");
        }

        let timer = OperationTimer::new("clipboard_write");
        let result = sink.write_text(&code);
        self.metrics.record_clipboard_write(result.is_ok());
        timer.finish();
        result?;

        Ok(CopyOutcome::Copied(code))
    }
}

//! Rendering of listed messages.
//!
//! `txt` prints one labeled block per message followed by a blank line;
//! `csv` and `json` carry the same fields for scripting.

use std::io::Write;

use csv::Writer;

use crate::error::Result;
use crate::models::{Message, OutputFormat};

/// Column headers shared by the txt labels and the CSV header row
pub const FIELD_LABELS: [&str; 7] = [
    "RowID",
    "Body",
    "PhoneNumber",
    "IsFromMe",
    "CacheRoomname",
    "GroupChatName",
    "Date",
];

/// Write `messages` to `writer` in `format`.
pub fn write_messages<W: Write>(writer: &mut W, messages: &[Message], format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Txt => write_txt(writer, messages),
        OutputFormat::Csv => write_csv(writer, messages),
        OutputFormat::Json => write_json(writer, messages),
    }
}

fn field_values(message: &Message) -> [String; 7] {
    [
        message.row_id.to_string(),
        message.body.clone(),
        message.phone_number.clone(),
        message.is_from_me.to_string(),
        message.cache_roomname.clone(),
        message.group_chat_name.clone(),
        message.date.clone(),
    ]
}

fn write_txt<W: Write>(writer: &mut W, messages: &[Message]) -> Result<()> {
    for message in messages {
        for (label, value) in FIELD_LABELS.iter().zip(field_values(message)) {
            writeln!(writer, "{label}: {value}")?;
        }
        writeln!(writer)?;
    }
    writer.flush()?;
    Ok(())
}

fn write_csv<W: Write>(writer: &mut W, messages: &[Message]) -> Result<()> {
    let mut csv_writer = Writer::from_writer(writer);
    csv_writer.write_record(FIELD_LABELS)?;
    for message in messages {
        csv_writer.write_record(field_values(message))?;
    }
    csv_writer.flush()?;
    Ok(())
}

fn write_json<W: Write>(writer: &mut W, messages: &[Message]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *writer, messages)?;
    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Message {
        Message {
            row_id: 42,
            date: "2024-03-01 09:15:00".to_string(),
            body: "Your code is 482913".to_string(),
            phone_number: "+15551234567".to_string(),
            is_from_me: false,
            cache_roomname: "chat99".to_string(),
            group_chat_name: "Family".to_string(),
        }
    }

    #[test]
    fn test_txt_block_layout() {
        let mut out = Vec::new();
        write_messages(&mut out, &[sample()], OutputFormat::Txt).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(
            text,
            "RowID: 42\nBody: Your code is 482913\nPhoneNumber: +15551234567\nIsFromMe: false\n\
             CacheRoomname: chat99\nGroupChatName: Family\nDate: 2024-03-01 09:15:00\n\n"
        );
    }

    #[test]
    fn test_txt_empty_list_writes_nothing() {
        let mut out = Vec::new();
        write_messages(&mut out, &[], OutputFormat::Txt).unwrap();
        assert!(out.is_empty());
    }
}

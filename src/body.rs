//! Message body extraction.
//!
//! Messages store their text either in the plain `text` column or, for
//! newer rows, inside `attributedBody`: a serialized archive of typed
//! objects. The archive is not parsed. Instead the string payload is cut out
//! between known class-name markers, which is good enough for most short
//! messages and produces garbage or an empty string for the rest.

const NUMBER_MARKER: &[u8] = b"NSNumber";
const STRING_MARKER: &[u8] = b"NSString";
const DICTIONARY_MARKER: &[u8] = b"NSDictionary";

/// Bytes of archive framing left before the string payload
const LEADING_FRAMING: usize = 6;
/// Bytes of archive framing left after the string payload
const TRAILING_FRAMING: usize = 12;

/// Derive the display body of a message.
///
/// The plain-text column wins whenever it is present, even if empty. The
/// rich-text payload is only consulted when the plain text is null; if both
/// are null the body is empty.
#[must_use]
pub fn extract_body(text: Option<&str>, attributed_body: Option<&[u8]>) -> String {
    match (text, attributed_body) {
        (Some(text), _) => text.to_string(),
        (None, Some(payload)) => extract_rich_text(payload),
        (None, None) => String::new(),
    }
}

/// Cut the string payload out of a serialized rich-text archive.
///
/// Stages, each aborting early when its marker is missing:
/// 1. keep everything before the first `NSNumber`
/// 2. keep everything after the first `NSString`
/// 3. keep everything before the first `NSDictionary`, then drop the
///    6 leading and 12 trailing framing bytes if at least 18 remain
///
/// A second `NSString` before `NSNumber` does not end the middle stage; it
/// stays in the slice handed to stage 3.
#[must_use]
pub fn extract_rich_text(payload: &[u8]) -> String {
    String::from_utf8_lossy(rich_text_slice(payload)).into_owned()
}

fn rich_text_slice(payload: &[u8]) -> &[u8] {
    let Some(end) = find(payload, NUMBER_MARKER) else {
        return payload;
    };
    let body = &payload[..end];

    let Some(start) = find(body, STRING_MARKER) else {
        return body;
    };
    let body = &body[start + STRING_MARKER.len()..];

    let Some(end) = find(body, DICTIONARY_MARKER) else {
        return body;
    };
    let body = &body[..end];

    if body.len() >= LEADING_FRAMING + TRAILING_FRAMING {
        &body[LEADING_FRAMING..body.len() - TRAILING_FRAMING]
    } else {
        body
    }
}

fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}

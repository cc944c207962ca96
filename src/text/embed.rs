//! Insert a marker-wrapped payload into cover text.

use crate::encoding::{END_MARKER, START_MARKER};

/// Embed `payload` in `cover`.
///
/// The payload is wrapped in start and end markers and inserted right after
/// the first space, or prepended when the cover has no space. An empty
/// payload returns the cover unchanged.
///
/// # Example
///
/// ```
/// use nullwidth::encoding::{encode, END_MARKER, START_MARKER};
/// use nullwidth::text::embed;
///
/// let payload = encode(b"a");
/// let composite = embed("Hello World", &payload);
///
/// assert_eq!(
///     composite,
///     format!("Hello {}{}{}World", START_MARKER, payload, END_MARKER)
/// );
/// ```
pub fn embed(cover: &str, payload: &str) -> String {
    if payload.is_empty() {
        return cover.to_string();
    }

    let wrapped_len = payload.len() + START_MARKER.len_utf8() + END_MARKER.len_utf8();
    let mut composite = String::with_capacity(cover.len() + wrapped_len);

    let (head, tail) = match cover.find(' ') {
        Some(idx) => cover.split_at(idx + 1),
        None => ("", cover),
    };

    composite.push_str(head);
    composite.push(START_MARKER);
    composite.push_str(payload);
    composite.push(END_MARKER);
    composite.push_str(tail);

    composite
}

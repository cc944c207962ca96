//! Locate and isolate a marker-wrapped payload inside arbitrary text.

use crate::encoding::{Symbol, END_MARKER, START_MARKER};
use log::debug;
use std::ops::Range;

/// Byte range of a hidden span, excluding both markers.
pub type Span = Range<usize>;

/// Progress of the marker search.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Search {
    SeekStart,
    SeekEnd { from: usize },
    Done(Span),
}

/// Find the hidden span in `text`.
///
/// The first start marker opens the span and the first end marker after it
/// closes it. Markers repeated inside the span do not restart the search.
/// Returns `None` when either marker is missing.
pub fn locate(text: &str) -> Option<Span> {
    let mut state = Search::SeekStart;

    loop {
        state = match state {
            Search::SeekStart => match text.find(START_MARKER) {
                Some(idx) => Search::SeekEnd {
                    from: idx + START_MARKER.len_utf8(),
                },
                None => {
                    debug!("No start marker found");
                    return None;
                }
            },
            Search::SeekEnd { from } => match text[from..].find(END_MARKER) {
                Some(offset) => Search::Done(from..from + offset),
                None => {
                    debug!("No end marker after start marker at byte {}", from);
                    return None;
                }
            },
            Search::Done(span) => return Some(span),
        };
    }
}

/// Extract the payload hidden in `text`.
///
/// Only bit-symbols between the markers are kept; filler, nested markers and
/// ordinary characters are filtered out. Returns an empty string when no
/// complete span exists.
///
/// # Example
///
/// ```
/// use nullwidth::encoding::{decode, encode};
/// use nullwidth::text::{embed, extract};
///
/// let composite = embed("Meet me at noon", &encode(b"uptime"));
/// assert_eq!(decode(&extract(&composite)), b"uptime");
/// assert_eq!(extract("no markers here"), "");
/// ```
pub fn extract(text: &str) -> String {
    match locate(text) {
        Some(span) => text[span]
            .chars()
            .filter(|&c| Symbol::classify(c).is_bit())
            .collect(),
        None => String::new(),
    }
}

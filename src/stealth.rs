//! End-to-end hide and reveal built on the codec and the marker protocol.

use crate::encoding::{decode_with_stats, encode, Decoded};
use crate::error::Result;
use crate::text::{embed, extract};
use log::debug;
use serde::Serialize;

/// Hide `message` inside `cover`.
pub fn hide(message: &[u8], cover: &str) -> String {
    let payload = encode(message);
    debug!(
        "Encoded {} bytes into {} bit-symbols",
        message.len(),
        payload.chars().count()
    );
    embed(cover, &payload)
}

/// What was recovered from a piece of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Revealed {
    /// Bit-symbols handed to the decoder.
    pub payload_len: usize,
    /// Decoder output and counters.
    pub decoded: Decoded,
}

impl Revealed {
    /// Whether any complete byte was recovered.
    pub fn is_empty(&self) -> bool {
        self.decoded.bytes.is_empty()
    }

    /// Recovered message as text.
    pub fn message(&self) -> String {
        self.decoded.to_text()
    }

    /// Serializable summary of this result.
    pub fn report(&self) -> RevealReport {
        RevealReport {
            message: self.message(),
            bytes: self.decoded.bytes.len(),
            payload_symbols: self.payload_len,
            ignored: self.decoded.ignored,
            dropped_bits: self.decoded.dropped_bits,
        }
    }
}

/// JSON-friendly summary of a reveal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RevealReport {
    pub message: String,
    pub bytes: usize,
    pub payload_symbols: usize,
    pub ignored: usize,
    pub dropped_bits: usize,
}

impl RevealReport {
    /// Render as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// Recover a message from `text`.
///
/// With `raw` set the marker search is skipped and every bit-symbol in the
/// text is decoded.
pub fn reveal(text: &str, raw: bool) -> Revealed {
    let payload = if raw {
        text.to_string()
    } else {
        let payload = extract(text);
        if payload.is_empty() {
            debug!("No hidden payload found between markers");
        }
        payload
    };

    let decoded = decode_with_stats(&payload);
    let payload_len = if raw {
        decoded.bit_symbols
    } else {
        payload.chars().count()
    };

    Revealed {
        payload_len,
        decoded,
    }
}

/// Check that `composite` carries exactly `message`.
pub fn verify(composite: &str, message: &[u8]) -> bool {
    let revealed = reveal(composite, false);
    if revealed.decoded.bytes != message {
        debug!(
            "Verification mismatch: expected {} bytes, recovered {}",
            message.len(),
            revealed.decoded.bytes.len()
        );
        return false;
    }
    true
}

/// Result of a hide run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HideOutcome {
    /// The message was empty; nothing was hidden.
    NoMessage,
    /// The message was embedded and checked by revealing it again.
    Hidden { composite: String, verified: bool },
}

/// Hide `message` in `cover` and check that it can be revealed again.
pub fn hide_checked(message: &str, cover: &str) -> HideOutcome {
    if message.is_empty() {
        return HideOutcome::NoMessage;
    }

    let composite = hide(message.as_bytes(), cover);
    let verified = verify(&composite, message.as_bytes());
    HideOutcome::Hidden {
        composite,
        verified,
    }
}

/// Result of a reveal run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RevealOutcome {
    /// The input text was empty.
    EmptyInput,
    /// No complete byte could be recovered.
    NoMessage(Revealed),
    /// A message was recovered.
    Message(Revealed),
}

impl RevealOutcome {
    /// The reveal result, unless the input was empty.
    pub fn revealed(&self) -> Option<&Revealed> {
        match self {
            RevealOutcome::EmptyInput => None,
            RevealOutcome::NoMessage(revealed) | RevealOutcome::Message(revealed) => Some(revealed),
        }
    }
}

/// Recover a message from `text`, classifying the no-data cases.
pub fn reveal_text(text: &str, raw: bool) -> RevealOutcome {
    if text.is_empty() {
        return RevealOutcome::EmptyInput;
    }

    let revealed = reveal(text, raw);
    if revealed.is_empty() {
        RevealOutcome::NoMessage(revealed)
    } else {
        RevealOutcome::Message(revealed)
    }
}

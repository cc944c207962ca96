//! nullwidth
//!
//! Hides byte strings in ordinary text using zero-width Unicode code points,
//! and recovers them from copies of that text that may have been re-typed,
//! copy-pasted or partially mangled on the way.
//!
//! # Features
//!
//! - **Bit encoding**: each byte becomes 8 invisible bit-symbols, MSB first
//! - **Noise tolerance**: decoding skips anything that is not a bit-symbol
//! - **Marker protocol**: a single marker-delimited span per cover text
//!
//! # Architecture
//!
//! ```text
//! Message → Encode (bit-symbols) → Embed (cover text) → Composite text
//! Composite text → Extract (markers) → Decode (bit-symbols) → Message
//! ```
//!
//! # Example
//!
//! ```rust
//! use nullwidth::{hide, reveal};
//!
//! let composite = hide(b"meet at dawn", "Lovely weather today");
//! assert_eq!(composite.chars().filter(|c| c.is_ascii()).collect::<String>(),
//!            "Lovely weather today");
//!
//! let revealed = reveal(&composite, false);
//! assert_eq!(revealed.message(), "meet at dawn");
//! ```

pub mod config;
pub mod encoding;
pub mod error;
pub mod input;
pub mod stealth;
pub mod text;

pub use config::{HideOptions, RevealOptions};
pub use error::{Error, Result};
pub use stealth::{
    hide, hide_checked, reveal, reveal_text, verify, HideOutcome, RevealOutcome, RevealReport,
    Revealed,
};

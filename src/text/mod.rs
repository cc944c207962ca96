//! Hiding payloads in cover text.
//!
//! A payload travels as `START_MARKER · bit-symbols · END_MARKER` inserted at a
//! single point in otherwise untouched text.

mod embed;
mod extract;

pub use embed::embed;
pub use extract::{extract, locate, Span};

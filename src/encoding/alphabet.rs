//! The invisible alphabet and code point classification.

/// ZERO WIDTH SPACE, represents a 0 bit.
pub const BIT_ZERO: char = '\u{200B}';

/// ZERO WIDTH NON-JOINER, represents a 1 bit.
pub const BIT_ONE: char = '\u{200C}';

/// ZERO WIDTH JOINER, reserved. Never emitted, always ignored.
pub const FILLER: char = '\u{200D}';

/// LEFT-TO-RIGHT MARK, opens a hidden payload span.
pub const START_MARKER: char = '\u{200E}';

/// RIGHT-TO-LEFT MARK, closes a hidden payload span.
pub const END_MARKER: char = '\u{200F}';

/// Role of a single code point within hidden text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Symbol {
    Zero,
    One,
    Filler,
    Start,
    End,
    /// Any ordinary character.
    Other,
}

impl Symbol {
    /// Classify a code point.
    pub fn classify(c: char) -> Self {
        match c {
            BIT_ZERO => Symbol::Zero,
            BIT_ONE => Symbol::One,
            FILLER => Symbol::Filler,
            START_MARKER => Symbol::Start,
            END_MARKER => Symbol::End,
            _ => Symbol::Other,
        }
    }

    /// The bit carried by this symbol, if it carries one.
    pub fn bit(self) -> Option<bool> {
        match self {
            Symbol::Zero => Some(false),
            Symbol::One => Some(true),
            _ => None,
        }
    }

    /// Whether this symbol carries a bit.
    pub fn is_bit(self) -> bool {
        self.bit().is_some()
    }
}

/// The code point for a bit value.
pub fn bit_char(bit: bool) -> char {
    if bit {
        BIT_ONE
    } else {
        BIT_ZERO
    }
}

//! Reading messages, cover text and composite text.

use crate::error::Result;
use std::fs;
use std::io::{self, BufRead, Read};
use std::path::Path;

/// Read one line, trimmed of surrounding whitespace.
///
/// End of input yields an empty string.
pub fn read_line<R: BufRead>(reader: &mut R) -> Result<String> {
    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Read lines until a blank line or end of input.
///
/// Lines keep their inner content and are joined with `\n`; the terminating
/// blank line is consumed but not included.
pub fn read_block<R: BufRead>(reader: &mut R) -> Result<String> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            break;
        }
        lines.push(line);
    }
    Ok(lines.join("\n"))
}

/// Read all text from `path`, or from standard input when `path` is `None`.
///
/// Invalid UTF-8 is replaced with U+FFFD so stray bytes in the surrounding
/// text do not prevent recovering a payload.
pub fn read_source(path: Option<&Path>) -> Result<String> {
    let bytes = match path {
        Some(path) => fs::read(path)?,
        None => {
            let mut buffer = Vec::new();
            io::stdin().read_to_end(&mut buffer)?;
            buffer
        }
    };
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_read_line_trims() {
        let mut input = Cursor::new("  uname -a \nnext line\n");

        assert_eq!(read_line(&mut input).unwrap(), "uname -a");
        assert_eq!(read_line(&mut input).unwrap(), "next line");
        assert_eq!(read_line(&mut input).unwrap(), "");
    }

    #[test]
    fn test_read_block_stops_at_blank_line() {
        let mut input = Cursor::new("first line\r\nsecond line\n\nafter\n");

        assert_eq!(read_block(&mut input).unwrap(), "first line\nsecond line");
        assert_eq!(read_line(&mut input).unwrap(), "after");
    }

    #[test]
    fn test_read_block_until_eof() {
        let mut input = Cursor::new("only\nlines");
        assert_eq!(read_block(&mut input).unwrap(), "only\nlines");
    }

    #[test]
    fn test_read_block_empty() {
        let mut input = Cursor::new("");
        assert_eq!(read_block(&mut input).unwrap(), "");
    }

    #[test]
    fn test_read_line_invalid_utf8_fails() {
        let mut input = Cursor::new(vec![0xFF, 0xFE, b'\n']);
        assert!(read_line(&mut input).is_err());
    }
}

//! Line ending normalization
//!
//! Every `\r\n` pair and every lone `\r` becomes a single `\n`.

use std::borrow::Cow;

/// Normalize all line terminators in `text` to `\n`.
///
/// Returns the input unchanged (borrowed) when it contains no carriage return.
pub fn normalize_line_endings(text: &str) -> Cow<'_, str> {
    if !text.contains('\r') {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\r' {
            if chars.peek() == Some(&'\n') {
                chars.next();
            }
            out.push('\n');
        } else {
            out.push(c);
        }
    }

    Cow::Owned(out)
}

/// Count of non-LF line terminators by style
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LineEndingCounts {
    pub crlf: usize,
    pub cr: usize,
}

impl LineEndingCounts {
    /// Terminators that normalization replaces
    pub fn non_lf(&self) -> usize {
        self.crlf + self.cr
    }
}

/// Count CRLF and lone CR terminators in `text` without modifying it
pub fn count_line_endings(text: &str) -> LineEndingCounts {
    let bytes = text.as_bytes();
    let mut counts = LineEndingCounts::default();
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\r' if bytes.get(i + 1) == Some(&b'\n') => {
                counts.crlf += 1;
                i += 1;
            }
            b'\r' => counts.cr += 1,
            _ => {}
        }
        i += 1;
    }

    counts
}

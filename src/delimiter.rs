//! Line delimiter detection and body trimming

use std::fmt;

const BYTE_ORDER_MARK: char = '\u{feff}';

/// Trim whitespace and byte order marks from both ends
pub fn trim_padding(text: &str) -> &str {
    text.trim_matches(|c: char| c.is_whitespace() || c == BYTE_ORDER_MARK)
}

pub fn trim_padding_start(text: &str) -> &str {
    text.trim_start_matches(|c: char| c.is_whitespace() || c == BYTE_ORDER_MARK)
}

/// Line ending used by a message, chosen once and used for split and join
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Delimiter {
    /// `\r\n`
    CrLf,
    /// `\n`
    #[default]
    Lf,
}

impl Delimiter {
    /// Detect the delimiter from the first line break in `body`.
    ///
    /// Bodies without any line break default to [`Delimiter::Lf`].
    #[must_use]
    pub fn detect(body: &str) -> Self {
        match body.find('\n') {
            Some(pos) if body[..pos].ends_with('\r') => Self::CrLf,
            _ => Self::Lf,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::CrLf => "\r\n",
            Self::Lf => "\n",
        }
    }
}

impl fmt::Display for Delimiter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

//! Core types for signature extraction

use serde::{Deserialize, Serialize};
use std::fmt;

/// A message body split into its content and trailing signature
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extraction {
    /// Trimmed content before the signature
    pub text: String,

    /// Detected signature, phone sign-off included
    pub signature: Option<String>,
}

impl Extraction {
    /// A result carrying `text` verbatim and no signature
    pub fn unsigned(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            signature: None,
        }
    }

    #[must_use]
    pub const fn has_signature(&self) -> bool {
        self.signature.is_some()
    }
}

/// Classification of one candidate line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Marker {
    /// Could be a signature line
    Candidate,

    /// Starts with dashes followed by other text (signature or list item)
    Dashed,

    /// Too long to belong to a signature
    TooLong,
}

impl Marker {
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Candidate => 'c',
            Self::Dashed => 'd',
            Self::TooLong => 'l',
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

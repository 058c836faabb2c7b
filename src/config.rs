//! Tunables for the signature heuristic

use crate::error::{Result, SignatureError};
use serde::{Deserialize, Serialize};

/// Maximum number of non-empty trailing lines a signature may span
pub const SIGNATURE_MAX_LINES: usize = 11;

/// Lines longer than this (URLs excluded) are never signature lines
pub const TOO_LONG_SIGNATURE_LINE: usize = 80;

/// Configuration threaded through every extraction call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignatureConfig {
    /// Size of the candidate window, in non-empty lines
    pub max_lines: usize,

    /// Effective length above which a line is marked too long
    pub too_long_line: usize,

    /// Remove forwarded-message headers and mailing-list footers first
    pub strip_boilerplate: bool,
}

impl Default for SignatureConfig {
    fn default() -> Self {
        Self {
            max_lines: SIGNATURE_MAX_LINES,
            too_long_line: TOO_LONG_SIGNATURE_LINE,
            strip_boilerplate: true,
        }
    }
}

impl SignatureConfig {
    #[must_use]
    pub const fn with_max_lines(mut self, max_lines: usize) -> Self {
        self.max_lines = max_lines;
        self
    }

    #[must_use]
    pub const fn with_too_long_line(mut self, too_long_line: usize) -> Self {
        self.too_long_line = too_long_line;
        self
    }

    #[must_use]
    pub const fn with_boilerplate_stripping(mut self, enabled: bool) -> Self {
        self.strip_boilerplate = enabled;
        self
    }

    /// Reject values the heuristic cannot work with
    pub fn validate(&self) -> Result<()> {
        if self.max_lines == 0 {
            return Err(SignatureError::Config(
                "max_lines must be greater than 0".into(),
            ));
        }
        Ok(())
    }
}

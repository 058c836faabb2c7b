// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

//! Email Signature Extraction
//!
//! A rule-based extractor that splits a plain-text email body into its
//! content and its trailing signature block.
//!
//! # Pipeline
//!
//! - Line delimiter detection (`\r\n` or `\n`)
//! - Forwarded-header and mailing-list footer removal
//! - Phone client sign-offs (`Sent from my iPhone`)
//! - Candidate window over the last non-empty lines
//! - Per-line markers and a marker pattern picking the signature region
//! - Sign-off words and separator lines locating the exact start
//!
//! # Example
//!
//! ```rust
//! use email_signature::{SignatureConfig, extract_signature, extract_signature_with};
//!
//! let extraction = extract_signature("Hey!\n\nSent from my iPhone!");
//! assert_eq!(extraction.text, "Hey!");
//! assert_eq!(extraction.signature.as_deref(), Some("Sent from my iPhone!"));
//!
//! let config = SignatureConfig::default().with_too_long_line(60);
//! let extraction = extract_signature_with("Wow. Awesome!\n--\nBob Smith", &config);
//! assert_eq!(extraction.signature.as_deref(), Some("--\nBob Smith"));
//! ```

mod boilerplate;
mod candidate;
mod config;
mod delimiter;
mod error;
mod extract;
mod phone;
mod types;
mod url;

pub use boilerplate::strip_boilerplate;
pub use candidate::{
    candidate_indices, mark_candidate_indices, mark_line, process_marked_candidate_indices,
    signature_candidate,
};
pub use config::{SIGNATURE_MAX_LINES, SignatureConfig, TOO_LONG_SIGNATURE_LINE};
pub use delimiter::Delimiter;
pub use error::{Result, SignatureError};
pub use extract::{extract_signature, extract_signature_with, signature_start, try_extract_signature};
pub use phone::split_phone_signature;
pub use types::{Extraction, Marker};
pub use url::{URL_BACKTRACK_LIMIT, line_length_ignoring_urls};

//! Signature extraction pipeline

use crate::boilerplate::strip_boilerplate;
use crate::candidate::signature_candidate;
use crate::config::SignatureConfig;
use crate::delimiter::{Delimiter, trim_padding};
use crate::error::{Result, SignatureError};
use crate::phone::split_phone_signature;
use crate::types::Extraction;
use regex::Regex;
use std::borrow::Cow;
use tracing::{debug, warn};

// Lines that open a signature: separators and common sign-off words.
static SIGNATURE_REGEX: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    Regex::new(concat!(
        r"(?imR)",
        r"^[ \t]*(?:-+[ \t]*[a-z \.]*|[-_*]{2,})[ \t]*$",
        r"|^thank(?:s| you)[\s,!]*$",
        r"|^regards[\s,!]*$",
        r"|^cheers[\s,!]*$",
        r"|^best[ a-z]*[\s,!]*$",
        // French
        r"|^merci[\s,!]*$",
        r"|^(?:mes\s+)?remerciements[\s,!]*$",
        r"|^(?:bien|très\s+)?cordialement[\s,!]*$",
        r"|^(?:mes\s+)?meilleur(?:e)?(?:s)?[ a-z]*[\s,!]*$",
        r"|^(?:veuillez recevoir|je vous prie)?.*(?:mes\s+)?salutations[ a-zé,]*[\s,!]*$",
    ))
    .unwrap()
});

/// Byte offset in `candidate` of the first line that opens a signature
#[must_use]
pub fn signature_start(candidate: &str) -> Option<usize> {
    SIGNATURE_REGEX.find(candidate).map(|found| found.start())
}

/// Split `body` into text and signature with the default configuration.
///
/// Never fails: any internal fault yields the body untouched and no signature.
///
/// ```
/// use email_signature::extract_signature;
///
/// let extraction = extract_signature("Hey man! How r u?\n\n--\nRegards,\nRoman");
/// assert_eq!(extraction.text, "Hey man! How r u?");
/// assert_eq!(extraction.signature.as_deref(), Some("--\nRegards,\nRoman"));
///
/// let extraction = extract_signature("Hey man!");
/// assert_eq!(extraction.text, "Hey man!");
/// assert_eq!(extraction.signature, None);
/// ```
#[must_use]
pub fn extract_signature(body: &str) -> Extraction {
    extract_signature_with(body, &SignatureConfig::default())
}

/// Split `body` into text and signature.
///
/// Never fails: any internal fault yields the body untouched and no signature.
#[must_use]
pub fn extract_signature_with(body: &str, config: &SignatureConfig) -> Extraction {
    match try_extract_signature(body, config) {
        Ok(extraction) => extraction,
        Err(e) => {
            warn!(error = %e, "Signature extraction failed, keeping body as is");
            Extraction::unsigned(body)
        }
    }
}

/// The extraction pipeline, with internal faults reported to the caller.
pub fn try_extract_signature(body: &str, config: &SignatureConfig) -> Result<Extraction> {
    config.validate()?;

    let delimiter = Delimiter::detect(body);

    let body = if config.strip_boilerplate {
        strip_boilerplate(body)
    } else {
        Cow::Borrowed(body)
    };

    let (stripped_body, phone_signature) = split_phone_signature(&body)?;

    let lines: Vec<&str> = stripped_body.split(delimiter.as_str()).collect();
    debug!(?lines, "Split message body");

    let candidate = signature_candidate(&lines, config)?.join(delimiter.as_str());
    debug!(%candidate, "Signature candidate");

    let Some(start) = signature_start(&candidate) else {
        return Ok(Extraction {
            text: trim_padding(stripped_body).to_string(),
            signature: phone_signature.map(str::to_string),
        });
    };

    // The candidate is a suffix of the stripped body, so cutting the
    // signature off the body keeps blank lines that preceded it.
    let signature = &candidate[start..];
    let text = stripped_body
        .strip_suffix(signature)
        .ok_or(SignatureError::Boundary)?;
    debug!(signature, "Found signature");

    let signature = match phone_signature {
        Some(phone_signature) => format!("{signature}{phone_signature}"),
        None => signature.to_string(),
    };

    Ok(Extraction {
        text: trim_padding(text).to_string(),
        signature: Some(signature),
    })
}

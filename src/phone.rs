//! Sign-offs appended by mobile mail clients (`Sent from my iPhone`)

use crate::delimiter::{trim_padding, trim_padding_start};
use crate::error::{Result, SignatureError};
use regex::Regex;
use tracing::debug;

static PHONE_SIGNATURE_REGEX: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    Regex::new(concat!(
        r"(?imR)",
        r"^sent\sfrom\smy[\s,!0-9a-z_]*$",
        r"|^sent[ ]from[ ]Mailbox[ ]for[ ]iPhone.*$",
        r"|^sent[ ](?:\S*[ ])?from[ ]my[ ]BlackBerry.*$",
        r"|^Enviado[ ]desde[ ]mi[ ](?:\S+[ ]){0,2}BlackBerry.*$",
        r"|^envoyé\sdepuis.*$",
    ))
    .unwrap()
});

/// Split a body into its working text and trailing phone signature.
///
/// The last phone sign-off line in `body` starts the phone signature, which
/// runs to the end of the message. Both halves are cut from the trimmed body;
/// the working text is not trimmed again so line structure is kept.
pub fn split_phone_signature(body: &str) -> Result<(&str, Option<&str>)> {
    let trimmed = trim_padding(body);

    let Some(found) = PHONE_SIGNATURE_REGEX.find_iter(body).last() else {
        return Ok((trimmed, None));
    };

    let leading = body.len() - trim_padding_start(body).len();
    let (text, phone_signature) = found
        .start()
        .checked_sub(leading)
        .and_then(|offset| trimmed.split_at_checked(offset))
        .ok_or(SignatureError::Boundary)?;

    debug!(phone_signature, "Found phone signature");
    Ok((text, Some(phone_signature)))
}

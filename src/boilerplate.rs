//! Removal of machine-generated blocks that would otherwise look like signatures

use regex::Regex;
use std::borrow::Cow;
use tracing::debug;

// Header lines are consumed without their trailing break so the blank lines
// around a forwarded block survive.
static FORWARDED_HEADER_REGEX: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    Regex::new(
        r"(?mi)^(?:-+ ?Forwarded message ?-+|Begin forwarded message:)[ \t]*(?:\r?\n(?:From|Date|Subject|To|Cc|Bcc|Reply-To|Sent):[^\r\n]*)*",
    )
    .unwrap()
});

static GOOGLE_GROUPS_FOOTER_REGEX: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    Regex::new(
        r"(?m)(?:^-+[ \t]*\r?\n)?^You received this message because you are subscribed to the Google Groups[^\r\n]*(?:\r?\n(?:To |For more options)[^\r\n]*)*",
    )
    .unwrap()
});

/// Strip forwarded-message header blocks and Google Groups footers.
///
/// Returns the input unchanged (borrowed) when neither is present.
#[must_use]
pub fn strip_boilerplate(body: &str) -> Cow<'_, str> {
    let without_forwards = FORWARDED_HEADER_REGEX.replace_all(body, "");

    let without_footer = match GOOGLE_GROUPS_FOOTER_REGEX.replace_all(&without_forwards, "") {
        Cow::Owned(stripped) => Some(stripped),
        Cow::Borrowed(_) => None,
    };

    let stripped = without_footer.map_or(without_forwards, Cow::Owned);
    if let Cow::Owned(s) = &stripped {
        debug!("Stripped {} bytes of boilerplate", body.len() - s.len());
    }
    stripped
}

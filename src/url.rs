//! URL-aware line length

use crate::error::{Result, SignatureError};
use fancy_regex::{Regex, RegexBuilder};

/// Backtracking steps allowed per URL search before the line is rejected
pub const URL_BACKTRACK_LIMIT: usize = 1_000_000;

// dperini's URL pattern (https://gist.github.com/dperini/729294). The private
// and loopback exclusions need lookahead, hence fancy-regex. Host and domain
// labels are written as `x(-*x)*` so a label has one way to match.
static URL_REGEX: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    RegexBuilder::new(concat!(
        r"(?i)",
        // protocol
        r"(?:(?:https?|ftp)://)",
        // user:pass
        r"(?:\S+(?::\S*)?@)?",
        r"(?:",
        // private and local networks
        r"(?!(?:10|127)(?:\.[0-9]{1,3}){3})",
        r"(?!(?:169\.254|192\.168)(?:\.[0-9]{1,3}){2})",
        r"(?!172\.(?:1[6-9]|2[0-9]|3[0-1])(?:\.[0-9]{1,3}){2})",
        // dotted octets, no network, broadcast or reserved addresses
        r"(?:[1-9][0-9]?|1[0-9][0-9]|2[01][0-9]|22[0-3])",
        r"(?:\.(?:1?[0-9]{1,2}|2[0-4][0-9]|25[0-5])){2}",
        r"(?:\.(?:[1-9][0-9]?|1[0-9][0-9]|2[0-4][0-9]|25[0-4]))",
        r"|",
        // host
        r"(?:[a-z\x{a1}-\x{10ffff}0-9](?:-*[a-z\x{a1}-\x{10ffff}0-9])*)",
        // domain
        r"(?:\.[a-z\x{a1}-\x{10ffff}0-9](?:-*[a-z\x{a1}-\x{10ffff}0-9])*)*",
        // tld
        r"(?:\.(?:[a-z\x{a1}-\x{10ffff}]{2,}))",
        r")",
        // port
        r"(?::[0-9]{2,5})?",
        // path
        r"(?:/\S*)?",
    ))
    .backtrack_limit(URL_BACKTRACK_LIMIT)
    .build()
    .unwrap()
});

/// Length of `line` in characters, not counting any URL it contains.
///
/// A short sign-off line carrying one long link stays short. Input that makes
/// the search exceed [`URL_BACKTRACK_LIMIT`] is an error.
pub fn line_length_ignoring_urls(line: &str) -> Result<usize> {
    let mut url_chars = 0;
    for found in URL_REGEX.find_iter(line) {
        let found = found.map_err(|e| SignatureError::UrlPattern(e.to_string()))?;
        url_chars += found.as_str().chars().count();
    }
    Ok(line.chars().count() - url_chars)
}

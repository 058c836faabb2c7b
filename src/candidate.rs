//! Selection of the trailing lines that may hold a signature
//!
//! Candidate lines must:
//!
//! - be among the last `max_lines` non-empty lines,
//! - not include the first non-empty line,
//! - not be longer than `too_long_line` once URLs are discounted,
//! - not include more than one line that starts with dashes.

use crate::config::SignatureConfig;
use crate::delimiter::trim_padding;
use crate::error::{Result, SignatureError};
use crate::types::Marker;
use crate::url::line_length_ignoring_urls;
use regex::Regex;
use tracing::debug;

// Markers read newest line first. Every group starts where the match starts,
// so the group end is the number of newest lines to keep.
static MARKER_REGEX: std::sync::LazyLock<Regex> = std::sync::LazyLock::new(|| {
    Regex::new(r"(c+d)[^d]|(c+d)$|(c+)|(d)[^d]|(d)$").unwrap()
});

/// Return the lines that could hold a signature.
///
/// The result is the suffix of `lines` starting at the first retained
/// candidate, blank lines included, or empty when no signature is possible.
pub fn signature_candidate<'a, S: AsRef<str>>(
    lines: &'a [S],
    config: &SignatureConfig,
) -> Result<&'a [S]> {
    let indices = candidate_indices(lines, config);
    if indices.is_empty() {
        return Ok(&[]);
    }

    let markers = mark_candidate_indices(lines, &indices, config)?;
    let retained = process_marked_candidate_indices(&indices, &markers);
    debug!(?retained, "Retained candidate indices");

    Ok(match retained.first() {
        Some(&first) => &lines[first..],
        None => &[],
    })
}

/// Indices of the last `max_lines` non-empty lines, first one excluded.
#[must_use]
pub fn candidate_indices<S: AsRef<str>>(lines: &[S], config: &SignatureConfig) -> Vec<usize> {
    let non_empty: Vec<usize> = lines
        .iter()
        .enumerate()
        .filter(|(_, line)| !trim_padding(line.as_ref()).is_empty())
        .map(|(index, _)| index)
        .collect();

    // an empty or one-line message has no signature
    if non_empty.len() <= 1 {
        return Vec::new();
    }

    let candidates = &non_empty[1..];
    let start = candidates.len().saturating_sub(config.max_lines);
    candidates[start..].to_vec()
}

/// Classify one trimmed line.
pub fn mark_line(line: &str, config: &SignatureConfig) -> Result<Marker> {
    if line_length_ignoring_urls(line)? > config.too_long_line {
        return Ok(Marker::TooLong);
    }

    let undashed = line.trim_start_matches('-');
    if undashed.len() < line.len() && !undashed.is_empty() {
        Ok(Marker::Dashed)
    } else {
        Ok(Marker::Candidate)
    }
}

/// Mark candidate lines, newest first.
///
/// ```
/// use email_signature::{SignatureConfig, mark_candidate_indices};
///
/// let markers = mark_candidate_indices(&["Some text", "", "-", "Bob"], &[0, 2, 3], &SignatureConfig::default());
/// assert_eq!(markers.unwrap(), "ccc");
/// ```
pub fn mark_candidate_indices<S: AsRef<str>>(
    lines: &[S],
    indices: &[usize],
    config: &SignatureConfig,
) -> Result<String> {
    let markers = indices
        .iter()
        .rev()
        .map(|&index| {
            let line = lines.get(index).ok_or(SignatureError::LineIndex {
                index,
                len: lines.len(),
            })?;
            mark_line(trim_padding(line.as_ref()), config).map(Marker::as_char)
        })
        .collect::<Result<String>>()?;

    debug!(%markers, "Marked candidate lines");
    Ok(markers)
}

/// Keep the trailing candidate indices selected by the marker pattern.
///
/// ```
/// use email_signature::process_marked_candidate_indices;
///
/// assert_eq!(process_marked_candidate_indices(&[9, 12, 14, 15, 17], "ccdcl"), vec![14, 15, 17]);
/// ```
#[must_use]
pub fn process_marked_candidate_indices(indices: &[usize], markers: &str) -> Vec<usize> {
    let Some(captures) = MARKER_REGEX.captures(markers) else {
        return Vec::new();
    };

    let Some(kept) = captures.iter().skip(1).flatten().next() else {
        return Vec::new();
    };

    let start = indices.len().saturating_sub(kept.end());
    indices[start..].to_vec()
}

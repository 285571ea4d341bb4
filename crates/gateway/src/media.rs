//! Media path handling
//!
//! Connector records store attachment locations either as a path relative
//! to the media root (`/images/A1.png`) or as an absolute URL. Paths coming
//! back from the upload endpoint are normalized here before they are saved.

use std::sync::LazyLock;

use regex::Regex;

/// URL prefix under which the backend serves media
pub const MEDIA_PREFIX: &str = "/media";

static ABSOLUTE_URL: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"(?i)^https?://[^/\s]+").ok());

/// Whether `value` is an absolute http(s) URL
pub fn is_absolute_url(value: &str) -> bool {
    match ABSOLUTE_URL.as_ref() {
        Some(re) => re.is_match(value),
        None => {
            let lower = value.to_ascii_lowercase();
            lower.starts_with("http://") || lower.starts_with("https://")
        }
    }
}

/// Normalize a stored media path
///
/// Absolute URLs are returned untouched. Otherwise a leading `media/`
/// segment is dropped, repeated slashes collapse, and the result starts
/// with exactly one slash. Blank input yields `None`.
pub fn normalize_media_path(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if is_absolute_url(value) {
        return Some(value.to_string());
    }

    let segments: Vec<&str> = value.split('/').filter(|s| !s.is_empty()).collect();
    let segments = match segments.split_first() {
        Some((first, rest)) if first.eq_ignore_ascii_case("media") => rest,
        _ => &segments[..],
    };
    Some(format!("/{}", segments.join("/")))
}

/// URL at which a stored media path can be displayed
///
/// Absolute URLs pass through; relative paths resolve under the media
/// prefix of `origin`.
pub fn media_url(origin: &str, path: &str) -> Option<String> {
    let path = normalize_media_path(path)?;
    if is_absolute_url(&path) {
        return Some(path);
    }
    Some(format!(
        "{}{}{}",
        origin.trim_end_matches('/'),
        MEDIA_PREFIX,
        path
    ))
}

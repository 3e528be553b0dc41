//! Full-name counterparts of the code operations.
//!
//! A full name is structurally parallel to a code (one segment per depth)
//! but carries opaque human-readable names joined by a caller-supplied
//! `hyphen` string instead of numeric ordinals joined by `.`. The hyphen may
//! be any length, so the string-based removal subtracts
//! `parent.len() + hyphen.len()` rather than a fixed one-character
//! separator. None of these operations depend on the configured segment
//! width, so they are free functions rather than [`PathCodec`] methods.
//!
//! [`PathCodec`]: crate::PathCodec

use crate::codec::non_empty;
use crate::error::{Error, Result};

/// Append `child` below `parent`, joined by `hyphen`. An absent parent
/// returns `child` unchanged, with no leading delimiter.
pub fn merge_full_name(
    parent: Option<&str>,
    child: &str,
    hyphen: &str,
) -> Result<String> {
    if child.is_empty() {
        return Err(Error::InvalidArgument(
            "child full name must not be empty".into(),
        ));
    }
    match non_empty(parent) {
        None => Ok(child.to_owned()),
        Some(parent) => Ok(format!("{parent}{hyphen}{child}")),
    }
}

/// Strip a known `parent` prefix from `full_name`.
///
/// Assumes `full_name` begins with `parent` followed by one `hyphen`; the
/// prefix is not checked, and a violated assumption produces a wrong result
/// rather than an error.
pub fn remove_parent_full_name(
    full_name: &str,
    parent: Option<&str>,
    hyphen: &str,
) -> Result<Option<String>> {
    if full_name.is_empty() {
        return Err(Error::InvalidArgument(
            "full name must not be empty".into(),
        ));
    }
    let Some(parent) = non_empty(parent) else {
        return Ok(Some(full_name.to_owned()));
    };
    if full_name.len() == parent.len() {
        return Ok(None);
    }
    let rest = full_name.get(parent.len() + hyphen.len()..).unwrap_or("");
    if rest.is_empty() {
        Ok(None)
    } else {
        Ok(Some(rest.to_owned()))
    }
}

/// Strip the first `parent_level` hyphen-delimited segments from
/// `full_name`.
pub fn remove_parent_full_name_by_level(
    full_name: &str,
    parent_level: usize,
    hyphen: &str,
) -> Result<Option<String>> {
    if full_name.is_empty() {
        return Err(Error::InvalidArgument(
            "full name must not be empty".into(),
        ));
    }
    let segments: Vec<&str> = full_name.split(hyphen).collect();
    if parent_level > segments.len() {
        return Err(Error::InvalidArgument(format!(
            "parent level {parent_level} exceeds full name depth {}",
            segments.len()
        )));
    }
    let rest = segments[parent_level..].join(hyphen);
    if rest.is_empty() {
        Ok(None)
    } else {
        Ok(Some(rest))
    }
}

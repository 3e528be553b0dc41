use crate::error::{Error, Result};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Separator between code segments.
pub const CODE_SEPARATOR: &str = ".";

/// Treat `None` and `""` uniformly as "no code" / "no full name".
pub(crate) fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Stateless codec over materialized-path codes.
///
/// The only configuration is the segment width every generated ordinal is
/// zero-padded to; it is fixed at construction and shared by all operations.
/// A number wider than the configured width is not an error: the segment
/// simply exceeds the width, and lexicographic ordering degrades for that
/// subtree only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PathCodec {
    code_length: usize,
}

impl PathCodec {
    /// Create a codec padding every segment to `code_length` digits.
    pub fn new(code_length: usize) -> Result<Self> {
        if code_length == 0 {
            return Err(Error::InvalidArgument(
                "code length must be positive".into(),
            ));
        }
        Ok(Self { code_length })
    }

    pub fn code_length(&self) -> usize {
        self.code_length
    }

    fn encode_segment(&self, number: u64) -> String {
        format!("{number:0width$}", width = self.code_length)
    }

    /// Build a code from 1-based sibling ordinals, one per depth.
    ///
    /// An empty sequence means "no code" and yields `None`, the
    /// representation used for root-level parents throughout this crate.
    pub fn create_code(&self, numbers: &[u64]) -> Option<String> {
        if numbers.is_empty() {
            return None;
        }
        Some(
            numbers
                .iter()
                .map(|&n| self.encode_segment(n))
                .collect::<Vec<_>>()
                .join(CODE_SEPARATOR),
        )
    }

    /// Inverse of [`create_code`](Self::create_code): parse a code back into
    /// its ordinals. An empty code decodes to an empty sequence.
    pub fn decode_code(&self, code: &str) -> Result<Vec<u64>> {
        if code.is_empty() {
            return Ok(Vec::new());
        }
        code.split(CODE_SEPARATOR)
            .map(|segment| {
                segment.parse().map_err(|_| {
                    Error::InvalidArgument(format!(
                        "code segment {segment:?} is not numeric"
                    ))
                })
            })
            .collect()
    }

    /// Append `child` below `parent`. An absent parent means `child` is at
    /// the root and comes back unchanged, with no leading separator.
    pub fn merge_code(&self, parent: Option<&str>, child: &str) -> Result<String> {
        if child.is_empty() {
            return Err(Error::InvalidArgument(
                "child code must not be empty".into(),
            ));
        }
        match non_empty(parent) {
            None => Ok(child.to_owned()),
            Some(parent) => Ok(format!("{parent}{CODE_SEPARATOR}{child}")),
        }
    }

    /// Strip a known `parent` prefix from `code`.
    ///
    /// Assumes `code` begins with `parent` followed by one separator; the
    /// prefix is not checked, and a violated assumption produces a wrong
    /// result rather than an error. Equal lengths mean the child carries
    /// nothing beyond the parent, which decomposes to "no code".
    pub fn remove_parent_code(
        &self,
        code: &str,
        parent: Option<&str>,
    ) -> Result<Option<String>> {
        if code.is_empty() {
            return Err(Error::InvalidArgument("code must not be empty".into()));
        }
        let Some(parent) = non_empty(parent) else {
            return Ok(Some(code.to_owned()));
        };
        if code.len() == parent.len() {
            return Ok(None);
        }
        let rest = code
            .get(parent.len() + CODE_SEPARATOR.len()..)
            .unwrap_or("");
        if rest.is_empty() {
            Ok(None)
        } else {
            Ok(Some(rest.to_owned()))
        }
    }

    /// Strip the first `parent_level` segments from `code`.
    ///
    /// Consuming every segment yields "no code"; asking for more levels than
    /// the code has is a contract violation.
    pub fn remove_parent_code_by_level(
        &self,
        code: &str,
        parent_level: usize,
    ) -> Result<Option<String>> {
        if code.is_empty() {
            return Err(Error::InvalidArgument("code must not be empty".into()));
        }
        let segments: Vec<&str> = code.split(CODE_SEPARATOR).collect();
        if parent_level > segments.len() {
            return Err(Error::InvalidArgument(format!(
                "parent level {parent_level} exceeds code depth {}",
                segments.len()
            )));
        }
        let rest = segments[parent_level..].join(CODE_SEPARATOR);
        if rest.is_empty() {
            Ok(None)
        } else {
            Ok(Some(rest))
        }
    }

    /// The sibling code immediately after `code` at the same depth.
    ///
    /// Increments the last segment and re-encodes it at the configured
    /// width. Crossing the width (e.g. `"99999"` at width 5) widens the
    /// segment silently instead of failing.
    pub fn next_code(&self, code: &str) -> Result<String> {
        if code.is_empty() {
            return Err(Error::InvalidArgument("code must not be empty".into()));
        }
        let last = self.last_code(code)?;
        let number: u64 = last.parse().map_err(|_| {
            Error::InvalidArgument(format!("code segment {last:?} is not numeric"))
        })?;
        let bumped = self.encode_segment(number.saturating_add(1));
        let parent = self.parent_code(code)?;
        self.merge_code(parent.as_deref(), &bumped)
    }

    /// The final segment of `code`.
    pub fn last_code(&self, code: &str) -> Result<String> {
        if code.is_empty() {
            return Err(Error::InvalidArgument("code must not be empty".into()));
        }
        let last = code.rsplit(CODE_SEPARATOR).next().unwrap_or(code);
        Ok(last.to_owned())
    }

    /// Everything but the final segment, or `None` for a depth-1 code —
    /// the signal that the caller has reached a root.
    pub fn parent_code(&self, code: &str) -> Result<Option<String>> {
        if code.is_empty() {
            return Err(Error::InvalidArgument("code must not be empty".into()));
        }
        Ok(code
            .rfind(CODE_SEPARATOR)
            .map(|idx| code[..idx].to_owned()))
    }

    /// Whether `a` and `b` share a parent. Two depth-1 codes are siblings
    /// under the implicit root.
    pub fn is_sibling_of(&self, a: &str, b: &str) -> Result<bool> {
        Ok(self.parent_code(a)? == self.parent_code(b)?)
    }
}

/// Number of segments in `code`; an absent or empty code has depth 0.
pub fn depth(code: Option<&str>) -> usize {
    match non_empty(code) {
        None => 0,
        Some(code) => code.split(CODE_SEPARATOR).count(),
    }
}

/// Whether `ancestor` contains `code`, honoring segment boundaries: a code
/// is its own ancestor, and the absent root contains everything, but
/// `"0000"` is not an ancestor of `"00001.00002"`.
pub fn is_ancestor_of(ancestor: Option<&str>, code: &str) -> bool {
    let Some(ancestor) = non_empty(ancestor) else {
        return true;
    };
    code == ancestor
        || (code.starts_with(ancestor)
            && code[ancestor.len()..].starts_with(CODE_SEPARATOR))
}

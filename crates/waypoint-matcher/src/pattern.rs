//! Path pattern parsing
//!
//! Pattern syntax:
//! - `settings`: static segment, matched verbatim
//! - `:tab`: named capture, matches one non-empty segment
//! - `*`: trailing wildcard, matches zero or more remaining segments
//!
//! Paths and patterns are split on `/` with empty segments dropped, so
//! `/a/b/`, `/a//b` and `a/b` all have the segments `["a", "b"]`.

use percent_encoding::percent_decode_str;
use std::collections::HashMap;

use crate::error::PatternError;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Static(String),
    Capture(String),
    Wildcard,
}

/// Ranking used to pick a winner when several patterns match one path.
///
/// Ordered field by field: static segment count, then fixed (non-wildcard)
/// segment count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Specificity {
    pub static_segments: usize,
    pub fixed_segments: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    source: String,
    segments: Vec<Segment>,
}

/// Split a path into its non-empty segments
pub fn split_segments(path: &str) -> impl Iterator<Item = &str> {
    path.split('/').filter(|s| !s.is_empty())
}

impl PathPattern {
    pub fn parse(pattern: &str) -> Result<Self> {
        let parts: Vec<&str> = split_segments(pattern).collect();
        let mut segments = Vec::with_capacity(parts.len());

        for (index, part) in parts.iter().enumerate() {
            if *part == "*" {
                if index + 1 != parts.len() {
                    return Err(PatternError::MisplacedWildcard(pattern.to_string()));
                }
                segments.push(Segment::Wildcard);
            } else if let Some(name) = part.strip_prefix(':') {
                if name.is_empty() {
                    return Err(PatternError::EmptyCaptureName(pattern.to_string()));
                }
                let duplicate = segments
                    .iter()
                    .any(|s| matches!(s, Segment::Capture(existing) if existing == name));
                if duplicate {
                    return Err(PatternError::DuplicateCapture {
                        pattern: pattern.to_string(),
                        name: name.to_string(),
                    });
                }
                segments.push(Segment::Capture(name.to_string()));
            } else {
                segments.push(Segment::Static((*part).to_string()));
            }
        }

        Ok(Self {
            source: pattern.to_string(),
            segments,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn has_wildcard(&self) -> bool {
        matches!(self.segments.last(), Some(Segment::Wildcard))
    }

    /// Names of the captures, in pattern order
    pub fn capture_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Capture(name) => Some(name.as_str()),
            _ => None,
        })
    }

    pub fn specificity(&self) -> Specificity {
        let fixed = self.fixed_segments();
        Specificity {
            static_segments: fixed
                .iter()
                .filter(|s| matches!(s, Segment::Static(_)))
                .count(),
            fixed_segments: fixed.len(),
        }
    }

    /// Match a concrete path, returning the bound captures on success
    pub fn matches(&self, path: &str) -> Option<HashMap<String, String>> {
        let parts: Vec<&str> = split_segments(path).collect();
        let fixed = self.fixed_segments();

        let count_ok = if self.has_wildcard() {
            parts.len() >= fixed.len()
        } else {
            parts.len() == fixed.len()
        };
        if !count_ok {
            return None;
        }

        let mut params = HashMap::new();
        for (segment, part) in fixed.iter().zip(parts.iter()) {
            match segment {
                Segment::Static(expected) => {
                    if expected != part {
                        return None;
                    }
                }
                Segment::Capture(name) => {
                    params.insert(name.clone(), decode_segment(part));
                }
                // Only ever the last segment, and excluded from `fixed`
                Segment::Wildcard => {}
            }
        }

        Some(params)
    }

    fn fixed_segments(&self) -> &[Segment] {
        if self.has_wildcard() {
            &self.segments[..self.segments.len() - 1]
        } else {
            &self.segments
        }
    }
}

impl std::fmt::Display for PathPattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.source)
    }
}

impl std::str::FromStr for PathPattern {
    type Err = PatternError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(s)
    }
}

fn decode_segment(raw: &str) -> String {
    match percent_decode_str(raw).decode_utf8() {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => raw.to_string(),
    }
}

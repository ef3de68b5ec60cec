//! Screen resolution
//!
//! `match_path` picks the registered screen for a location; `find_parent`
//! walks a path upwards to the nearest registered ancestor.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::pattern::{split_segments, PathPattern, Specificity};
use crate::screen::Screen;

/// The screen a path resolved to, plus its captured parameters
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchedPath {
    pub id: String,
    pub params: HashMap<String, String>,
}

/// Resolve `path` against `screens`.
///
/// When several screens match, the most specific pattern wins; ties go to the
/// screen registered first.
pub fn match_path(path: &str, screens: &[Screen]) -> Option<MatchedPath> {
    let mut best: Option<(Specificity, MatchedPath)> = None;

    for screen in screens {
        let Some(pattern) = parse_screen_pattern(screen) else {
            continue;
        };
        let Some(params) = pattern.matches(path) else {
            continue;
        };

        let specificity = pattern.specificity();
        // Strictly greater, so earlier registrations keep ties
        let better = best
            .as_ref()
            .is_none_or(|(current, _)| specificity > *current);

        if better {
            best = Some((
                specificity,
                MatchedPath {
                    id: screen.id.clone(),
                    params,
                },
            ));
        }
    }

    best.map(|(_, matched)| matched)
}

/// Find the nearest ancestor of `path` that some registered screen matches.
///
/// Only absolute paths have parents. The parent of `/a` is `/`; the root has
/// none.
pub fn find_parent(path: &str, screens: &[Screen]) -> Option<String> {
    if !path.starts_with('/') {
        return None;
    }

    let mut parts: Vec<&str> = split_segments(path).collect();

    while parts.pop().is_some() {
        let candidate = format!("/{}", parts.join("/"));
        let registered = screens.iter().any(|screen| {
            parse_screen_pattern(screen).is_some_and(|pattern| pattern.matches(&candidate).is_some())
        });

        if registered {
            return Some(candidate);
        }
    }

    None
}

fn parse_screen_pattern(screen: &Screen) -> Option<PathPattern> {
    match screen.pattern() {
        Ok(pattern) => Some(pattern),
        Err(e) => {
            tracing::debug!(screen_id = %screen.id, error = %e, "Skipping screen with invalid pattern");
            None
        }
    }
}

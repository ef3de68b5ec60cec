//! Waypoint Matcher
//!
//! Path patterns for navigator screens:
//! - Resolve a path to the most specific registered screen
//! - Extract named `:captures` as parameters
//! - Find the nearest registered ancestor for back navigation

mod error;
mod matcher;
mod pattern;
mod screen;

pub use error::PatternError;
pub use matcher::{find_parent, match_path, MatchedPath};
pub use pattern::{split_segments, PathPattern, Specificity};
pub use screen::Screen;

pub type Result<T> = std::result::Result<T, PatternError>;

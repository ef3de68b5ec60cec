//! Waypoint Core
//!
//! Host layer for the Waypoint navigator. A [`Navigator`] owns one router's
//! state, serializes every navigation through the reducer and publishes a
//! [`NavigatorSnapshot`] of `{location, params, match}` to consumers.

mod config;
mod deprecation;
mod error;
mod focus;
mod navigator;
mod snapshot;

pub use config::Config;
pub use deprecation::{DeprecationInfo, DeprecationSink, TracingDeprecationSink};
pub use error::CoreError;
pub use focus::{attribute_selector, FocusIntent};
pub use navigator::Navigator;
pub use snapshot::NavigatorSnapshot;

// Re-export the state machine and matcher
pub use waypoint_matcher::{find_parent, match_path, MatchedPath, PathPattern, PatternError, Screen};
pub use waypoint_router::{
    reduce, NavigateOptions, NavigateToParentOptions, NavigatorLocation, RouterAction, RouterState,
};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}

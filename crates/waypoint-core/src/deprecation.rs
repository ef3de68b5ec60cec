//! Deprecation notices
//!
//! Deprecated entry points report through an injected [`DeprecationSink`]
//! on every call. The default sink logs a warning.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DeprecationInfo {
    /// Version the API was deprecated in
    pub since: &'static str,
    /// What to call instead
    pub alternative: &'static str,
}

pub(crate) const GO_TO_PARENT_API: &str = "Navigator::go_to_parent";

pub(crate) const GO_TO_PARENT: DeprecationInfo = DeprecationInfo {
    since: "0.1.0",
    alternative: "Navigator::go_back",
};

pub trait DeprecationSink: Send + Sync {
    fn deprecated(&self, api: &str, info: &DeprecationInfo);
}

/// Reports deprecated calls as `tracing` warnings
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDeprecationSink;

impl DeprecationSink for TracingDeprecationSink {
    fn deprecated(&self, api: &str, info: &DeprecationInfo) {
        tracing::warn!(
            api = %api,
            since = %info.since,
            alternative = %info.alternative,
            "Deprecated navigator API called"
        );
    }
}

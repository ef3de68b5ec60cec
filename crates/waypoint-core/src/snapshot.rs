//! Published navigator view
//!
//! One snapshot is built per transition that changes the location or the
//! matched screen, and handed to consumers as `Arc<NavigatorSnapshot>`.

use serde::Serialize;
use std::collections::HashMap;
use std::sync::Arc;

use waypoint_router::{MatchedPath, NavigatorLocation, RouterState};

#[derive(Debug, Clone, Serialize)]
pub struct NavigatorSnapshot {
    pub location: Arc<NavigatorLocation>,
    /// Params of the matched screen; empty when nothing matched
    pub params: HashMap<String, String>,
    /// Id of the matched screen
    #[serde(rename = "match")]
    pub matched: Option<String>,
    #[serde(skip)]
    matched_path: Option<Arc<MatchedPath>>,
}

impl NavigatorSnapshot {
    pub(crate) fn from_state(state: &RouterState) -> Self {
        let matched_path = state.matched_path().cloned();

        Self {
            location: Arc::clone(state.current_location()),
            params: matched_path
                .as_ref()
                .map(|m| m.params.clone())
                .unwrap_or_default(),
            matched: matched_path.as_ref().map(|m| m.id.clone()),
            matched_path,
        }
    }

    /// Whether this snapshot already shows `state`'s location and match
    pub(crate) fn reflects(&self, state: &RouterState) -> bool {
        let same_match = match (&self.matched_path, state.matched_path()) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        };

        same_match && Arc::ptr_eq(&self.location, state.current_location())
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

//! Router State
//!
//! ```text
//! located-at(initial_path)
//!   ↓ goto / gotoparent
//! located-at(path)
//!   ↺ add / remove (location kept, match recomputed)
//! ```
//!
//! Every part is held behind an `Arc`. A part's handle changes only when its
//! content changes, so consumers can skip work with `Arc::ptr_eq`.

use std::collections::HashMap;
use std::sync::Arc;

use waypoint_matcher::{MatchedPath, Screen};

use crate::location::NavigatorLocation;

#[derive(Debug, Clone)]
pub struct RouterState {
    pub(crate) initial_path: Arc<str>,
    pub(crate) screens: Arc<Vec<Screen>>,
    pub(crate) current_location: Arc<NavigatorLocation>,
    pub(crate) matched_path: Option<Arc<MatchedPath>>,
    /// Path -> selector to refocus when navigating back to that path
    pub(crate) focus_selectors: Arc<HashMap<String, String>>,
}

impl RouterState {
    /// Fresh state: no screens, located at `initial_path`, no saved focus targets
    pub fn new(initial_path: impl Into<String>) -> Arc<Self> {
        let initial_path: String = initial_path.into();

        Arc::new(Self {
            current_location: Arc::new(NavigatorLocation::initial(initial_path.clone())),
            initial_path: Arc::from(initial_path),
            screens: Arc::new(Vec::new()),
            matched_path: None,
            focus_selectors: Arc::new(HashMap::new()),
        })
    }

    pub fn initial_path(&self) -> &str {
        &self.initial_path
    }

    /// Registered screens, in registration order
    pub fn screens(&self) -> &Arc<Vec<Screen>> {
        &self.screens
    }

    pub fn current_location(&self) -> &Arc<NavigatorLocation> {
        &self.current_location
    }

    pub fn matched_path(&self) -> Option<&Arc<MatchedPath>> {
        self.matched_path.as_ref()
    }

    pub fn focus_selectors(&self) -> &Arc<HashMap<String, String>> {
        &self.focus_selectors
    }

    /// Returns false in the "no location" state (empty path)
    pub fn has_location(&self) -> bool {
        !self.current_location.path.is_empty()
    }
}

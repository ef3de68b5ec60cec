//! Navigator location and navigation options
//!
//! Field names serialize in camelCase so a host bridge can exchange
//! options and locations as JSON. Unrecognized option keys are kept in
//! `extra` and copied onto the resulting location.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Keys owned by [`NavigatorLocation`]; caller fields with these names are dropped
const RESERVED_KEYS: [&str; 6] = [
    "path",
    "isBack",
    "hasRestoredFocus",
    "focusTargetSelector",
    "skipFocus",
    "isInitial",
];

/// The router's current position plus transition metadata
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigatorLocation {
    pub path: String,
    /// Whether this location was reached by back navigation
    #[serde(default)]
    pub is_back: bool,
    /// Always false on a fresh location
    #[serde(default)]
    pub has_restored_focus: bool,
    /// Element to refocus, restored from a previous forward navigation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus_target_selector: Option<String>,
    #[serde(default)]
    pub skip_focus: bool,
    /// Whether `path` is the router's initial path
    #[serde(default)]
    pub is_initial: bool,
    /// Caller-supplied fields forwarded from [`NavigateOptions`]
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NavigatorLocation {
    /// The location a router starts at
    pub fn initial(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            is_initial: true,
            ..Self::default()
        }
    }

    /// Look up a caller-supplied field
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigateOptions {
    #[serde(default)]
    pub is_back: bool,
    #[serde(default)]
    pub skip_focus: bool,
    /// Copied onto the location as `replace`; the router does not act on it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replace: Option<bool>,
    /// Selector to refocus when navigating back to the path being left
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus_target_selector: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NavigateOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn back(mut self) -> Self {
        self.is_back = true;
        self
    }

    pub fn skip_focus(mut self) -> Self {
        self.skip_focus = true;
        self
    }

    pub fn replace(mut self) -> Self {
        self.replace = Some(true);
        self
    }

    pub fn focus_target(mut self, selector: impl Into<String>) -> Self {
        self.focus_target_selector = Some(selector.into());
        self
    }

    /// Attach an opaque field that is copied onto the resulting location
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// Options for parent navigation. `is_back` is always forced to true.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NavigateToParentOptions {
    #[serde(default)]
    pub skip_focus: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub replace: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus_target_selector: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl NavigateToParentOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn skip_focus(mut self) -> Self {
        self.skip_focus = true;
        self
    }

    pub fn focus_target(mut self, selector: impl Into<String>) -> Self {
        self.focus_target_selector = Some(selector.into());
        self
    }

    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

impl From<NavigateToParentOptions> for NavigateOptions {
    fn from(options: NavigateToParentOptions) -> Self {
        Self {
            is_back: true,
            skip_focus: options.skip_focus,
            replace: options.replace,
            focus_target_selector: options.focus_target_selector,
            extra: options.extra,
        }
    }
}

/// Drop caller fields that would shadow location fields
pub(crate) fn forwarded_fields(mut extra: Map<String, Value>) -> Map<String, Value> {
    extra.retain(|key, _| !RESERVED_KEYS.contains(&key.as_str()));
    extra
}

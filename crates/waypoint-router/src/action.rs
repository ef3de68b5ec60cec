//! Router actions

use waypoint_matcher::Screen;

use crate::location::{NavigateOptions, NavigateToParentOptions};

#[derive(Debug, Clone, PartialEq)]
pub enum RouterAction {
    /// Register a screen; ignored if its path is already taken
    Add(Screen),
    /// Unregister the screen with this screen's id
    Remove(Screen),
    /// Navigate to a path
    GoTo {
        path: String,
        options: NavigateOptions,
    },
    /// Navigate back to the nearest registered ancestor
    GoToParent(NavigateToParentOptions),
}

impl RouterAction {
    pub fn go_to(path: impl Into<String>, options: NavigateOptions) -> Self {
        Self::GoTo {
            path: path.into(),
            options,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            RouterAction::Add(_) => "add",
            RouterAction::Remove(_) => "remove",
            RouterAction::GoTo { .. } => "goto",
            RouterAction::GoToParent(_) => "gotoparent",
        }
    }
}

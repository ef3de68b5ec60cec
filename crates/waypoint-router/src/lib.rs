//! Waypoint Router
//!
//! The navigator's state machine. A router holds registered screens, the
//! current location, the screen that location resolves to and the saved
//! focus targets for back navigation. [`reduce`] is the only way to move
//! between states.

mod action;
mod location;
mod reducer;
mod state;

pub use action::RouterAction;
pub use location::{NavigateOptions, NavigateToParentOptions, NavigatorLocation};
pub use reducer::reduce;
pub use state::RouterState;

pub use waypoint_matcher::{MatchedPath, Screen};

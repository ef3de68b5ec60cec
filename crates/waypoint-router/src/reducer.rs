//! Router reducer
//!
//! `reduce` never mutates its input. It returns the same `Arc` when an action
//! changes neither the screens nor the location, and reuses every unchanged
//! part of the state otherwise.

use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;

use waypoint_matcher::{find_parent, match_path, MatchedPath, Screen};

use crate::action::RouterAction;
use crate::location::{forwarded_fields, NavigateOptions, NavigateToParentOptions, NavigatorLocation};
use crate::state::RouterState;

type FocusSelectors = Arc<HashMap<String, String>>;

/// Apply `action` to `state`
pub fn reduce(state: &Arc<RouterState>, action: RouterAction) -> Arc<RouterState> {
    let kind = action.kind();
    let mut screens = Arc::clone(&state.screens);
    let mut location = Arc::clone(&state.current_location);
    let mut focus_selectors = Arc::clone(&state.focus_selectors);

    match action {
        RouterAction::Add(screen) => screens = add_screen(state, screen),
        RouterAction::Remove(screen) => screens = remove_screen(state, &screen),
        RouterAction::GoTo { path, options } => {
            (location, focus_selectors) = go_to(state, path, options);
        }
        RouterAction::GoToParent(options) => {
            (location, focus_selectors) = go_to_parent(state, options);
        }
    }

    if Arc::ptr_eq(&screens, &state.screens) && Arc::ptr_eq(&location, &state.current_location) {
        return Arc::clone(state);
    }

    let matched_path = resolve_match(state, &location, &screens);

    tracing::debug!(
        action = kind,
        path = %location.path,
        matched = matched_path.as_ref().map(|m| m.id.as_str()).unwrap_or("-"),
        screen_count = screens.len(),
        "Router transition"
    );

    Arc::new(RouterState {
        initial_path: Arc::clone(&state.initial_path),
        screens,
        current_location: location,
        matched_path,
        focus_selectors,
    })
}

fn add_screen(state: &RouterState, screen: Screen) -> Arc<Vec<Screen>> {
    if let Some(existing) = state.screens.iter().find(|s| s.path == screen.path) {
        tracing::warn!(
            screen_id = %screen.id,
            existing_id = %existing.id,
            path = %screen.path,
            "Screen path already registered; keeping the existing screen"
        );
        return Arc::clone(&state.screens);
    }

    let mut screens = Vec::with_capacity(state.screens.len() + 1);
    screens.extend(state.screens.iter().cloned());
    screens.push(screen);
    Arc::new(screens)
}

fn remove_screen(state: &RouterState, screen: &Screen) -> Arc<Vec<Screen>> {
    if !state.screens.iter().any(|s| s.id == screen.id) {
        return Arc::clone(&state.screens);
    }

    Arc::new(
        state
            .screens
            .iter()
            .filter(|s| s.id != screen.id)
            .cloned()
            .collect(),
    )
}

fn go_to(
    state: &RouterState,
    path: String,
    options: NavigateOptions,
) -> (Arc<NavigatorLocation>, FocusSelectors) {
    let current = &state.current_location;
    if current.path == path {
        return (Arc::clone(current), Arc::clone(&state.focus_selectors));
    }

    let NavigateOptions {
        is_back,
        skip_focus,
        replace,
        focus_target_selector,
        extra,
    } = options;

    // Cloned at most once, and only if this transition writes to it
    let mut focus_selectors = Arc::clone(&state.focus_selectors);

    let outgoing_target = focus_target_selector.filter(|s| !s.is_empty());
    if let Some(selector) = outgoing_target {
        if !current.path.is_empty() {
            Arc::make_mut(&mut focus_selectors).insert(current.path.clone(), selector);
        }
    }

    // Entering a path always consumes its saved selector; only back navigation uses it
    let mut restored_target = None;
    if focus_selectors.contains_key(&path) {
        let saved = Arc::make_mut(&mut focus_selectors).remove(&path);
        if is_back {
            restored_target = saved;
        }
    }

    let mut extra = forwarded_fields(extra);
    if let Some(replace) = replace {
        extra.insert("replace".to_string(), Value::Bool(replace));
    }

    let location = NavigatorLocation {
        is_initial: path.as_str() == &*state.initial_path,
        path,
        is_back,
        has_restored_focus: false,
        focus_target_selector: restored_target,
        skip_focus,
        extra,
    };

    (Arc::new(location), focus_selectors)
}

fn go_to_parent(
    state: &RouterState,
    options: NavigateToParentOptions,
) -> (Arc<NavigatorLocation>, FocusSelectors) {
    let unchanged = || {
        (
            Arc::clone(&state.current_location),
            Arc::clone(&state.focus_selectors),
        )
    };

    if !state.has_location() {
        return unchanged();
    }

    match find_parent(&state.current_location.path, &state.screens) {
        Some(parent) => go_to(state, parent, options.into()),
        None => unchanged(),
    }
}

fn resolve_match(
    state: &RouterState,
    location: &NavigatorLocation,
    screens: &[Screen],
) -> Option<Arc<MatchedPath>> {
    if location.path.is_empty() {
        return None;
    }

    let next = match_path(&location.path, screens)?;
    match &state.matched_path {
        Some(previous) if **previous == next => Some(Arc::clone(previous)),
        _ => Some(Arc::new(next)),
    }
}

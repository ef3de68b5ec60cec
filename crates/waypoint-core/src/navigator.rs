//! Navigator host
//!
//! Owns one router's state and is the only place actions are dispatched.
//! Clones share the same state, so a `Navigator` can be handed to every
//! consumer once and its methods stay valid for the router's lifetime.

use parking_lot::{Mutex, RwLock};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::watch;

use waypoint_router::{
    reduce, NavigateOptions, NavigateToParentOptions, NavigatorLocation, RouterAction, RouterState,
    Screen,
};

use crate::config::Config;
use crate::deprecation::{DeprecationSink, TracingDeprecationSink, GO_TO_PARENT, GO_TO_PARENT_API};
use crate::focus::{attribute_selector, FocusIntent};
use crate::snapshot::NavigatorSnapshot;
use crate::Result;

pub struct Navigator {
    config: Arc<Config>,
    /// Current state; replaced, never mutated
    state: Arc<RwLock<Arc<RouterState>>>,
    snapshots: Arc<watch::Sender<Arc<NavigatorSnapshot>>>,
    deprecations: Arc<dyn DeprecationSink>,
    /// Location focus was last restored for
    focus_restored_for: Arc<Mutex<Option<Arc<NavigatorLocation>>>>,
}

impl Navigator {
    /// Create a navigator at `initial_path` with default configuration
    pub fn new(initial_path: impl Into<String>) -> Self {
        Self::build(Config::new(initial_path))
    }

    pub fn from_config(config: Config) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: Config) -> Self {
        let state = RouterState::new(config.initial_path.clone());
        let (snapshots, _) = watch::channel(Arc::new(NavigatorSnapshot::from_state(&state)));

        tracing::info!(initial_path = %config.initial_path, "Created navigator");

        Self {
            config: Arc::new(config),
            state: Arc::new(RwLock::new(state)),
            snapshots: Arc::new(snapshots),
            deprecations: Arc::new(TracingDeprecationSink),
            focus_restored_for: Arc::new(Mutex::new(None)),
        }
    }

    /// Replace the sink deprecated calls report to
    pub fn with_deprecation_sink(mut self, sink: Arc<dyn DeprecationSink>) -> Self {
        self.deprecations = sink;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    // === Navigation ===

    pub fn go_to(&self, path: impl Into<String>, options: NavigateOptions) {
        self.dispatch(RouterAction::go_to(path, options));
    }

    /// Navigate to the nearest registered ancestor of the current path
    pub fn go_back(&self, options: NavigateToParentOptions) {
        self.dispatch(RouterAction::GoToParent(options));
    }

    #[deprecated(since = "0.1.0", note = "use `Navigator::go_back`")]
    pub fn go_to_parent(&self, options: NavigateToParentOptions) {
        self.deprecations.deprecated(GO_TO_PARENT_API, &GO_TO_PARENT);
        self.go_back(options);
    }

    // === Screens ===

    pub fn add_screen(&self, screen: Screen) {
        self.dispatch(RouterAction::Add(screen));
    }

    /// Like [`Navigator::add_screen`], but rejects malformed patterns when
    /// `validate_patterns` is enabled
    pub fn try_add_screen(&self, screen: Screen) -> Result<()> {
        if self.config.validate_patterns {
            screen.pattern()?;
        }
        self.add_screen(screen);
        Ok(())
    }

    pub fn remove_screen(&self, screen: &Screen) {
        self.dispatch(RouterAction::Remove(screen.clone()));
    }

    // === Read surface ===

    pub fn state(&self) -> Arc<RouterState> {
        Arc::clone(&self.state.read())
    }

    pub fn location(&self) -> Arc<NavigatorLocation> {
        Arc::clone(self.state.read().current_location())
    }

    pub fn params(&self) -> HashMap<String, String> {
        self.state
            .read()
            .matched_path()
            .map(|m| m.params.clone())
            .unwrap_or_default()
    }

    /// Id of the screen the current location resolves to
    pub fn matched(&self) -> Option<String> {
        self.state.read().matched_path().map(|m| m.id.clone())
    }

    pub fn snapshot(&self) -> Arc<NavigatorSnapshot> {
        Arc::clone(&self.snapshots.borrow())
    }

    /// Receive a new snapshot whenever the location or matched screen changes
    pub fn subscribe(&self) -> watch::Receiver<Arc<NavigatorSnapshot>> {
        self.snapshots.subscribe()
    }

    // === Focus ===

    /// Focus action for `screen_id` after the latest navigation.
    ///
    /// Yields at most once per location; later calls return `None` until
    /// the location changes.
    pub fn take_focus_intent(&self, screen_id: &str) -> Option<FocusIntent> {
        let state = self.state();
        let location = state.current_location();
        let is_match = state.matched_path().is_some_and(|m| m.id == screen_id);

        let mut restored = self.focus_restored_for.lock();
        if restored
            .as_ref()
            .is_some_and(|previous| Arc::ptr_eq(previous, location))
        {
            return None;
        }

        let intent = FocusIntent::for_location(location, is_match)?;
        *restored = Some(Arc::clone(location));

        tracing::debug!(screen_id = %screen_id, path = %location.path, ?intent, "Restoring focus");

        Some(intent)
    }

    /// Selector a navigation button to `path` records as its focus target
    pub fn focus_target_selector(&self, path: &str) -> String {
        attribute_selector(&self.config.focus_attribute, path)
    }

    fn dispatch(&self, action: RouterAction) {
        let mut state = self.state.write();
        let next = reduce(&state, action);
        if Arc::ptr_eq(&next, &state) {
            return;
        }
        *state = Arc::clone(&next);

        // Published under the write lock so snapshots arrive in dispatch order
        self.snapshots.send_if_modified(|current| {
            if current.reflects(&next) {
                return false;
            }
            *current = Arc::new(NavigatorSnapshot::from_state(&next));
            true
        });
    }
}

impl Clone for Navigator {
    fn clone(&self) -> Self {
        Self {
            config: Arc::clone(&self.config),
            state: Arc::clone(&self.state),
            snapshots: Arc::clone(&self.snapshots),
            deprecations: Arc::clone(&self.deprecations),
            focus_restored_for: Arc::clone(&self.focus_restored_for),
        }
    }
}

impl std::fmt::Debug for Navigator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Navigator")
            .field("config", &self.config)
            .field("state", &self.state.read())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deprecation::DeprecationInfo;
    use crate::CoreError;

    #[derive(Default)]
    struct RecordingSink {
        calls: Mutex<Vec<(String, DeprecationInfo)>>,
    }

    impl DeprecationSink for RecordingSink {
        fn deprecated(&self, api: &str, info: &DeprecationInfo) {
            self.calls.lock().push((api.to_string(), *info));
        }
    }

    fn navigator() -> Navigator {
        let navigator = Navigator::new("/");
        navigator.add_screen(Screen::with_id("root", "/"));
        navigator.add_screen(Screen::with_id("child", "/child"));
        navigator
    }

    #[test]
    fn test_end_to_end() {
        let navigator = navigator();

        navigator.go_to("/child", NavigateOptions::new());
        assert_eq!(navigator.location().path, "/child");
        assert_eq!(navigator.matched().as_deref(), Some("child"));
        assert!(navigator.params().is_empty());

        navigator.go_back(NavigateToParentOptions::new());
        let location = navigator.location();
        assert_eq!(location.path, "/");
        assert!(location.is_back);
        assert!(location.is_initial);
        assert_eq!(navigator.matched().as_deref(), Some("root"));
    }

    #[test]
    fn test_clones_share_state() {
        let navigator = navigator();
        let handle = navigator.clone();

        handle.go_to("/child", NavigateOptions::new());
        assert_eq!(navigator.location().path, "/child");
        assert!(Arc::ptr_eq(&navigator.state(), &handle.state()));
    }

    #[test]
    fn test_same_path_keeps_state() {
        let navigator = navigator();
        navigator.go_to("/child", NavigateOptions::new());
        let before = navigator.state();

        navigator.go_to("/child", NavigateOptions::new());
        assert!(Arc::ptr_eq(&before, &navigator.state()));
    }

    #[test]
    #[allow(deprecated)]
    fn test_go_to_parent_reports_every_call() {
        let sink = Arc::new(RecordingSink::default());
        let navigator = navigator().with_deprecation_sink(sink.clone());

        navigator.go_to("/child", NavigateOptions::new());
        navigator.go_to_parent(NavigateToParentOptions::new());
        assert_eq!(navigator.location().path, "/");
        assert!(navigator.location().is_back);

        // No parent from the root, but the call is still reported
        navigator.go_to_parent(NavigateToParentOptions::new());

        let calls = sink.calls.lock();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].0, "Navigator::go_to_parent");
        assert_eq!(calls[0].1.alternative, "Navigator::go_back");
        assert_eq!(calls[0].1.since, "0.1.0");
    }

    #[test]
    fn test_go_back_is_not_reported() {
        let sink = Arc::new(RecordingSink::default());
        let navigator = navigator().with_deprecation_sink(sink.clone());

        navigator.go_to("/child", NavigateOptions::new());
        navigator.go_back(NavigateToParentOptions::new());
        assert!(sink.calls.lock().is_empty());
    }

    #[test]
    fn test_subscribe_sees_navigation() {
        let navigator = navigator();
        let mut receiver = navigator.subscribe();
        assert!(!receiver.has_changed().unwrap());

        navigator.go_to("/child", NavigateOptions::new());
        assert!(receiver.has_changed().unwrap());

        let snapshot = receiver.borrow_and_update().clone();
        assert_eq!(snapshot.location.path, "/child");
        assert_eq!(snapshot.matched.as_deref(), Some("child"));
        assert!(Arc::ptr_eq(&snapshot, &navigator.snapshot()));
    }

    #[test]
    fn test_unrelated_screen_does_not_publish() {
        let navigator = navigator();
        let mut receiver = navigator.subscribe();

        navigator.add_screen(Screen::with_id("other", "/other"));
        assert!(!receiver.has_changed().unwrap());

        navigator.remove_screen(&Screen::with_id("root", "/"));
        assert!(receiver.has_changed().unwrap());
        assert!(receiver.borrow_and_update().matched.is_none());
    }

    #[test]
    fn test_focus_round_trip() {
        let navigator = navigator();
        let selector = navigator.focus_target_selector("/child");
        assert_eq!(selector, r#"[id="/child"]"#);

        // Initial forward location: nothing to restore
        assert_eq!(navigator.take_focus_intent("root"), None);

        navigator.go_to("/child", NavigateOptions::new().focus_target(selector.clone()));
        assert_eq!(navigator.take_focus_intent("root"), None);
        assert_eq!(
            navigator.take_focus_intent("child"),
            Some(FocusIntent::FirstFocusable)
        );
        assert_eq!(navigator.take_focus_intent("child"), None);

        navigator.go_back(NavigateToParentOptions::new());
        assert_eq!(
            navigator.take_focus_intent("root"),
            Some(FocusIntent::Selector(selector))
        );
        assert_eq!(navigator.take_focus_intent("root"), None);
    }

    #[test]
    fn test_try_add_screen_validates() {
        let navigator = Navigator::new("/");
        assert!(matches!(
            navigator.try_add_screen(Screen::with_id("bad", "/a/*/b")),
            Err(CoreError::Pattern(_))
        ));
        assert!(navigator.state().screens().is_empty());

        navigator.try_add_screen(Screen::with_id("ok", "/a/:id")).unwrap();
        assert_eq!(navigator.state().screens().len(), 1);

        let lenient = Navigator::from_config(Config {
            validate_patterns: false,
            ..Config::default()
        })
        .unwrap();
        lenient.try_add_screen(Screen::with_id("bad", "/a/*/b")).unwrap();
        assert_eq!(lenient.state().screens().len(), 1);
    }

    #[test]
    fn test_from_config() {
        let config = Config::from_json(r#"{ "initial_path": "/home", "focus_attribute": "data-nav" }"#)
            .unwrap();
        let navigator = Navigator::from_config(config).unwrap();
        assert_eq!(navigator.location().path, "/home");
        assert!(navigator.location().is_initial);
        assert_eq!(
            navigator.focus_target_selector("/home"),
            r#"[data-nav="/home"]"#
        );

        assert!(Navigator::from_config(Config::new("home")).is_err());
    }

    #[test]
    fn test_params_from_capture() {
        let navigator = Navigator::new("/");
        navigator.add_screen(Screen::with_id("product", "/product/:id"));
        navigator.go_to("/product/42", NavigateOptions::new());

        assert_eq!(navigator.matched().as_deref(), Some("product"));
        assert_eq!(navigator.params().get("id"), Some(&"42".to_string()));
        assert_eq!(navigator.snapshot().param("id"), Some("42"));
    }
}

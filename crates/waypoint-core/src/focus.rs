//! Focus restoration
//!
//! After a navigation the matched screen moves keyboard focus:
//! - Back navigation with a saved selector: focus that element
//! - Anything else: focus the screen's first focusable element
//!
//! Nothing happens on the initial forward location, when `skip_focus` is
//! set, or once focus was already restored for the location.

use waypoint_router::NavigatorLocation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FocusIntent {
    /// Focus the element matching this selector, falling back to the first
    /// focusable element if it is gone
    Selector(String),
    FirstFocusable,
}

impl FocusIntent {
    pub fn for_location(location: &NavigatorLocation, is_match: bool) -> Option<Self> {
        let initial_forward = location.is_initial && !location.is_back;
        if !is_match || initial_forward || location.has_restored_focus || location.skip_focus {
            return None;
        }

        match (&location.focus_target_selector, location.is_back) {
            (Some(selector), true) => Some(FocusIntent::Selector(selector.clone())),
            _ => Some(FocusIntent::FirstFocusable),
        }
    }
}

/// Build `[attribute="value"]`, escaping `"` and `\` in the value
pub fn attribute_selector(attribute: &str, value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        if matches!(c, '"' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    format!("[{}=\"{}\"]", attribute, escaped)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(path: &str) -> NavigatorLocation {
        NavigatorLocation {
            path: path.to_string(),
            ..NavigatorLocation::default()
        }
    }

    #[test]
    fn test_back_with_selector() {
        let mut loc = location("/");
        loc.is_back = true;
        loc.focus_target_selector = Some("#save".to_string());

        assert_eq!(
            FocusIntent::for_location(&loc, true),
            Some(FocusIntent::Selector("#save".to_string()))
        );
        assert_eq!(FocusIntent::for_location(&loc, false), None);
    }

    #[test]
    fn test_forward_focuses_first_element() {
        let loc = location("/child");
        assert_eq!(
            FocusIntent::for_location(&loc, true),
            Some(FocusIntent::FirstFocusable)
        );
    }

    #[test]
    fn test_skipped_cases() {
        let initial = NavigatorLocation::initial("/");
        assert_eq!(FocusIntent::for_location(&initial, true), None);

        let mut back_to_initial = NavigatorLocation::initial("/");
        back_to_initial.is_back = true;
        assert_eq!(
            FocusIntent::for_location(&back_to_initial, true),
            Some(FocusIntent::FirstFocusable)
        );

        let mut skip = location("/child");
        skip.skip_focus = true;
        assert_eq!(FocusIntent::for_location(&skip, true), None);

        let mut restored = location("/child");
        restored.has_restored_focus = true;
        assert_eq!(FocusIntent::for_location(&restored, true), None);
    }

    #[test]
    fn test_attribute_selector() {
        assert_eq!(attribute_selector("id", "/child"), r#"[id="/child"]"#);
        assert_eq!(
            attribute_selector("data-path", r#"/a"b\c"#),
            r#"[data-path="/a\"b\\c"]"#
        );
    }
}

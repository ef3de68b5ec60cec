//! Navigator configuration

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::Result;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path the navigator starts at
    pub initial_path: String,
    /// Attribute navigation buttons are located by when restoring focus
    pub focus_attribute: String,
    /// Reject screens with malformed patterns in `Navigator::try_add_screen`
    pub validate_patterns: bool,
}

impl Config {
    pub fn new(initial_path: impl Into<String>) -> Self {
        Self {
            initial_path: initial_path.into(),
            ..Self::default()
        }
    }

    /// Parse and validate a JSON configuration. Missing keys take defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.initial_path.starts_with('/') {
            return Err(CoreError::Config(format!(
                "initial_path must start with '/': {:?}",
                self.initial_path
            )));
        }

        let attribute_ok = !self.focus_attribute.is_empty()
            && !self
                .focus_attribute
                .chars()
                .any(|c| c.is_whitespace() || matches!(c, '"' | '\'' | '=' | '[' | ']'));
        if !attribute_ok {
            return Err(CoreError::Config(format!(
                "focus_attribute is not a valid attribute name: {:?}",
                self.focus_attribute
            )));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_path: "/".to_string(),
            focus_attribute: "id".to_string(),
            validate_patterns: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.initial_path, "/");
        assert_eq!(config.focus_attribute, "id");
        assert!(config.validate_patterns);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_fills_defaults() {
        let config = Config::from_json(r#"{ "initial_path": "/settings" }"#).unwrap();
        assert_eq!(config.initial_path, "/settings");
        assert_eq!(config.focus_attribute, "id");
    }

    #[test]
    fn test_from_json_rejects_bad_values() {
        assert!(matches!(
            Config::from_json(r#"{ "initial_path": "settings" }"#),
            Err(CoreError::Config(_))
        ));
        assert!(matches!(
            Config::from_json(r#"{ "focus_attribute": "data id" }"#),
            Err(CoreError::Config(_))
        ));
        assert!(matches!(
            Config::from_json("not json"),
            Err(CoreError::Serialization(_))
        ));
    }
}

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{
    DEFAULT_DARK_MODE_CLASS, DEFAULT_DARK_MODE_TOGGLE_ID, DEFAULT_DATE_ELEMENT_ID,
    DEFAULT_MENU_LINK_SELECTOR, DEFAULT_NAVBAR_SELECTOR, DEFAULT_SCROLL_DURATION_MS,
    DEFAULT_SCROLL_LINK_SELECTOR, DEFAULT_SIDEBAR_ID,
};

/// Errors raised when a page configuration cannot be used.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{field} must not be empty")]
    Empty { field: &'static str },
    #[error("{field} must be a single class name (got {value:?})")]
    InvalidClassName { field: &'static str, value: String },
    #[error("scroll duration must be greater than zero")]
    ZeroScrollDuration,
    #[error("invalid page configuration JSON: {0}")]
    Json(String),
}

/// Element ids, selectors and timings the page helpers bind to.
///
/// Every field has a default matching the stock templates, so a partial
/// JSON object (or none at all) is enough to configure a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageConfig {
    #[serde(default = "PageConfig::default_sidebar_id")]
    pub sidebar_id: String,
    #[serde(default = "PageConfig::default_menu_link_selector")]
    pub menu_link_selector: String,
    #[serde(default = "PageConfig::default_scroll_link_selector")]
    pub scroll_link_selector: String,
    #[serde(default = "PageConfig::default_navbar_selector")]
    pub navbar_selector: String,
    #[serde(default = "PageConfig::default_dark_mode_toggle_id")]
    pub dark_mode_toggle_id: String,
    #[serde(default = "PageConfig::default_dark_mode_class")]
    pub dark_mode_class: String,
    #[serde(default = "PageConfig::default_date_element_id")]
    pub date_element_id: String,
    #[serde(default = "PageConfig::default_scroll_duration_ms")]
    pub scroll_duration_ms: u32,
}

impl PageConfig {
    fn default_sidebar_id() -> String {
        DEFAULT_SIDEBAR_ID.to_string()
    }

    fn default_menu_link_selector() -> String {
        DEFAULT_MENU_LINK_SELECTOR.to_string()
    }

    fn default_scroll_link_selector() -> String {
        DEFAULT_SCROLL_LINK_SELECTOR.to_string()
    }

    fn default_navbar_selector() -> String {
        DEFAULT_NAVBAR_SELECTOR.to_string()
    }

    fn default_dark_mode_toggle_id() -> String {
        DEFAULT_DARK_MODE_TOGGLE_ID.to_string()
    }

    fn default_dark_mode_class() -> String {
        DEFAULT_DARK_MODE_CLASS.to_string()
    }

    fn default_date_element_id() -> String {
        DEFAULT_DATE_ELEMENT_ID.to_string()
    }

    const fn default_scroll_duration_ms() -> u32 {
        DEFAULT_SCROLL_DURATION_MS
    }

    /// Parse a configuration from a JSON object, filling in defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Json`] when the text is not a JSON object of
    /// the expected shape, or any validation error from [`Self::validate`].
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self =
            serde_json::from_str(json).map_err(|err| ConfigError::Json(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every id, selector and class is usable.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("sidebarId", &self.sidebar_id),
            ("menuLinkSelector", &self.menu_link_selector),
            ("scrollLinkSelector", &self.scroll_link_selector),
            ("navbarSelector", &self.navbar_selector),
            ("darkModeToggleId", &self.dark_mode_toggle_id),
            ("darkModeClass", &self.dark_mode_class),
            ("dateElementId", &self.date_element_id),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::Empty { field });
            }
        }
        if self.dark_mode_class.chars().any(char::is_whitespace) {
            return Err(ConfigError::InvalidClassName {
                field: "darkModeClass",
                value: self.dark_mode_class.clone(),
            });
        }
        if self.scroll_duration_ms == 0 {
            return Err(ConfigError::ZeroScrollDuration);
        }
        Ok(())
    }
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            sidebar_id: Self::default_sidebar_id(),
            menu_link_selector: Self::default_menu_link_selector(),
            scroll_link_selector: Self::default_scroll_link_selector(),
            navbar_selector: Self::default_navbar_selector(),
            dark_mode_toggle_id: Self::default_dark_mode_toggle_id(),
            dark_mode_class: Self::default_dark_mode_class(),
            date_element_id: Self::default_date_element_id(),
            scroll_duration_ms: Self::default_scroll_duration_ms(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_stock_templates() {
        let config = PageConfig::default();
        assert_eq!(config.sidebar_id, "sidebarMenu");
        assert_eq!(config.menu_link_selector, "#sidebarMenu .nav-link");
        assert_eq!(config.scroll_link_selector, ".smoothscroll");
        assert_eq!(config.navbar_selector, ".navbar");
        assert_eq!(config.dark_mode_toggle_id, "dark-mode-toggle");
        assert_eq!(config.dark_mode_class, "dark-mode");
        assert_eq!(config.date_element_id, "fecha");
        assert_eq!(config.scroll_duration_ms, 300);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config = PageConfig::from_json(r#"{"sidebarId":"nav-panel","scrollDurationMs":500}"#)
            .expect("partial config parses");
        assert_eq!(config.sidebar_id, "nav-panel");
        assert_eq!(config.scroll_duration_ms, 500);
        assert_eq!(config.date_element_id, "fecha");
    }

    #[test]
    fn empty_json_object_is_default() {
        assert_eq!(PageConfig::from_json("{}").unwrap(), PageConfig::default());
    }

    #[test]
    fn rejects_blank_ids() {
        let config = PageConfig {
            date_element_id: "  ".into(),
            ..PageConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::Empty {
                field: "dateElementId"
            })
        );
    }

    #[test]
    fn rejects_multi_word_class() {
        let config = PageConfig {
            dark_mode_class: "dark mode".into(),
            ..PageConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidClassName { .. })
        ));
    }

    #[test]
    fn rejects_zero_duration() {
        let err = PageConfig::from_json(r#"{"scrollDurationMs":0}"#).unwrap_err();
        assert_eq!(err, ConfigError::ZeroScrollDuration);
    }

    #[test]
    fn malformed_json_reports_parse_error() {
        let err = PageConfig::from_json("[1,2]").unwrap_err();
        assert!(matches!(err, ConfigError::Json(_)));
        assert!(err.to_string().starts_with("invalid page configuration JSON"));
    }
}

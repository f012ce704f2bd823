use pagekit_core::ConfigError;
use thiserror::Error;
use wasm_bindgen::JsValue;

use crate::dom::js_error_message;

/// Failures while reading or writing the page.
#[derive(Debug, Error)]
pub enum DomError {
    #[error("browser window is unavailable")]
    NoWindow,
    #[error("document is unavailable")]
    NoDocument,
    #[error("document has no root element")]
    NoRootElement,
    #[error("no element with id {id:?}")]
    MissingElement { id: String },
    #[error("element {id:?} is not an HTML element")]
    NotHtmlElement { id: String },
    #[error("invalid selector {selector:?}: {message}")]
    InvalidSelector { selector: String, message: String },
    #[error("invalid page options: {0}")]
    Options(String),
    #[error("JavaScript error: {0}")]
    Js(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
}

impl DomError {
    /// Wrap a thrown JavaScript value.
    #[must_use]
    pub fn from_js(value: &JsValue) -> Self {
        Self::Js(js_error_message(value))
    }

    pub(crate) fn missing(id: &str) -> Self {
        Self::MissingElement { id: id.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::DomError;
    use pagekit_core::ConfigError;

    #[test]
    fn messages_name_the_element() {
        assert_eq!(
            DomError::missing("section9").to_string(),
            "no element with id \"section9\""
        );
    }

    #[test]
    fn config_errors_pass_through() {
        let err = DomError::from(ConfigError::ZeroScrollDuration);
        assert_eq!(err.to_string(), "scroll duration must be greater than zero");
    }
}

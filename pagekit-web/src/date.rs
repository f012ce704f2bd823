use pagekit_core::{DisplayDate, PageConfig, today};

use crate::dom;
use crate::error::DomError;

/// Write `date` into the configured date element and return the rendered text.
///
/// # Errors
/// Returns [`DomError::MissingElement`] when the date element is absent.
pub fn render_date(config: &PageConfig, date: DisplayDate) -> Result<String, DomError> {
    let element = dom::element_by_id(&config.date_element_id)?;
    let text = date.to_string();
    element.set_text_content(Some(&text));
    Ok(text)
}

/// Write today's local date into the configured date element.
///
/// # Errors
/// Returns [`DomError::MissingElement`] when the date element is absent.
pub fn render_today(config: &PageConfig) -> Result<String, DomError> {
    render_date(config, today())
}

pub(crate) fn on_page_load(config: &PageConfig) {
    match render_today(config) {
        Ok(text) => log::debug!("date element set to {text}"),
        Err(err) => log::warn!("date not rendered: {err}"),
    }
}

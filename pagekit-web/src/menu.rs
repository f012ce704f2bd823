//! Sidebar collapse on menu link clicks.

use pagekit_core::{PageConfig, Visibility};

use crate::dom;
use crate::error::DomError;

/// Hide the sidebar panel.
///
/// # Errors
/// Returns an error when the sidebar element is missing or its style
/// cannot be written.
pub fn collapse_sidebar(config: &PageConfig) -> Result<(), DomError> {
    set_sidebar_visibility(config, Visibility::Hidden)
}

/// Write the sidebar's inline `visibility` style.
///
/// # Errors
/// Returns an error when the sidebar element is missing or its style
/// cannot be written.
pub fn set_sidebar_visibility(config: &PageConfig, visibility: Visibility) -> Result<(), DomError> {
    dom::html_element_by_id(&config.sidebar_id)?
        .style()
        .set_property(Visibility::PROPERTY, visibility.css_value())
        .map_err(|err| DomError::from_js(&err))
}

/// Current inline `visibility` of the sidebar.
///
/// # Errors
/// Returns an error when the sidebar element is missing.
pub fn sidebar_visibility(config: &PageConfig) -> Result<Visibility, DomError> {
    let value = dom::html_element_by_id(&config.sidebar_id)?
        .style()
        .get_property_value(Visibility::PROPERTY)
        .map_err(|err| DomError::from_js(&err))?;
    Ok(Visibility::from_css(&value))
}

pub(crate) fn on_menu_link_click(config: &PageConfig) {
    if let Err(err) = collapse_sidebar(config) {
        log::warn!("sidebar not collapsed: {err}");
    }
}

//! Dark-mode class on the root element.

use pagekit_core::{PageConfig, ThemeMode};

use crate::dom;
use crate::error::DomError;

/// Flip the dark-mode class on `<html>` and return the resulting mode.
///
/// Nothing is persisted: every page load starts from the markup's classes.
///
/// # Errors
/// Returns an error when the root element is unavailable or the class list
/// rejects the configured class name.
pub fn toggle_dark_mode(config: &PageConfig) -> Result<ThemeMode, DomError> {
    let present = dom::root_element()?
        .class_list()
        .toggle(&config.dark_mode_class)
        .map_err(|err| DomError::from_js(&err))?;
    Ok(ThemeMode::from_class_present(present))
}

/// Mode currently shown by the page.
///
/// # Errors
/// Returns an error when the root element is unavailable.
pub fn current_mode(config: &PageConfig) -> Result<ThemeMode, DomError> {
    let present = dom::root_element()?
        .class_list()
        .contains(&config.dark_mode_class);
    Ok(ThemeMode::from_class_present(present))
}

pub(crate) fn on_toggle_click(config: &PageConfig) {
    match toggle_dark_mode(config) {
        Ok(mode) => log::debug!("theme switched to {}", mode.label()),
        Err(err) => log::warn!("dark mode not toggled: {err}"),
    }
}

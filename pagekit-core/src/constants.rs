//! Default element ids, selectors and timings shared by the site templates.

// Element ids --------------------------------------------------------------
pub(crate) const DEFAULT_SIDEBAR_ID: &str = "sidebarMenu";
pub(crate) const DEFAULT_DARK_MODE_TOGGLE_ID: &str = "dark-mode-toggle";
pub(crate) const DEFAULT_DATE_ELEMENT_ID: &str = "fecha";

// Selectors ----------------------------------------------------------------
pub(crate) const DEFAULT_MENU_LINK_SELECTOR: &str = "#sidebarMenu .nav-link";
pub(crate) const DEFAULT_SCROLL_LINK_SELECTOR: &str = ".smoothscroll";
pub(crate) const DEFAULT_NAVBAR_SELECTOR: &str = ".navbar";

// Classes ------------------------------------------------------------------
pub(crate) const DEFAULT_DARK_MODE_CLASS: &str = "dark-mode";

// Timings ------------------------------------------------------------------
/// Smooth-scroll duration in milliseconds.
pub const DEFAULT_SCROLL_DURATION_MS: u32 = 300;

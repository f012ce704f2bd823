//! PageKit core
//!
//! Platform-agnostic page behaviour for the PageKit DOM helpers.
//! Everything here is plain Rust: the browser bindings live in `pagekit-web`
//! and only feed measured values into these functions.

pub mod config;
pub mod constants;
pub mod date;
pub mod menu;
pub mod scroll;
pub mod theme;

// Re-export commonly used types
pub use config::{ConfigError, PageConfig};
pub use date::{DisplayDate, format_display_date, today};
pub use menu::Visibility;
pub use scroll::{
    ScrollPlan, anchor_target, content_height, css_pixels, scroll_destination, swing,
};
pub use theme::ThemeMode;

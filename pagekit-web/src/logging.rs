//! Browser console logging through the `log` facade.

use log::Level;

use crate::dom;

/// Log level requested by the page's query string.
///
/// `?debug=1` (or a bare `?debug`) turns on debug output; anything else
/// logs at `Info`.
#[must_use]
pub fn level_for_query(search: &str) -> Level {
    let debug = search
        .trim_start_matches('?')
        .split('&')
        .any(|pair| matches!(pair, "debug" | "debug=1" | "debug=true"));
    if debug { Level::Debug } else { Level::Info }
}

/// Route `log` records to the browser console.
///
/// Safe to call more than once; later calls leave the first logger in place.
pub fn init() {
    let search = dom::window()
        .ok()
        .and_then(|win| win.location().search().ok())
        .unwrap_or_default();
    let level = level_for_query(&search);
    if console_log::init_with_level(level).is_ok() {
        log::debug!("console logging enabled at {level}");
    }
}

#[cfg(test)]
mod tests {
    use super::level_for_query;
    use log::Level;

    #[test]
    fn debug_flag_enables_debug_level() {
        assert_eq!(level_for_query("?debug=1"), Level::Debug);
        assert_eq!(level_for_query("?lang=en&debug"), Level::Debug);
    }

    #[test]
    fn other_queries_log_at_info() {
        assert_eq!(level_for_query(""), Level::Info);
        assert_eq!(level_for_query("?debug=0"), Level::Info);
        assert_eq!(level_for_query("?debugger=1"), Level::Info);
    }
}

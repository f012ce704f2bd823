//! Wiring of every page helper to the live document.

use std::cell::RefCell;
use std::rc::Rc;

use pagekit_core::PageConfig;

use crate::dom::{self, Listener};
use crate::error::DomError;
use crate::scroll::ScrollAnimator;
use crate::{date, menu, scroll, theme};

/// Listeners and animation state installed on the page.
///
/// Dropping the bindings detaches every listener.
pub struct PageBindings {
    config: Rc<PageConfig>,
    listeners: Vec<Listener>,
    animator: Rc<ScrollAnimator>,
    date_rendered: bool,
}

impl PageBindings {
    #[must_use]
    pub fn config(&self) -> &PageConfig {
        &self.config
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Number of listeners registered for `event`.
    #[must_use]
    pub fn listeners_for(&self, event: &str) -> usize {
        self.listeners
            .iter()
            .filter(|listener| listener.event() == event)
            .count()
    }

    /// Whether the date was written during install because the page had
    /// already finished loading.
    #[must_use]
    pub const fn date_rendered(&self) -> bool {
        self.date_rendered
    }

    #[must_use]
    pub fn scroll_in_progress(&self) -> bool {
        self.animator.is_running()
    }
}

/// Whether the document has finished loading, from `document.readyState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    Loading,
    Complete,
}

impl LoadState {
    #[must_use]
    pub fn from_ready_state(ready_state: &str) -> Self {
        if ready_state == "complete" {
            Self::Complete
        } else {
            Self::Loading
        }
    }

    /// Load state of the live document.
    ///
    /// # Errors
    /// Returns an error when the document is unavailable.
    pub fn current() -> Result<Self, DomError> {
        Ok(Self::from_ready_state(&dom::document()?.ready_state()))
    }
}

/// Validate `config` and attach the menu, scroll, dark-mode and date handlers.
///
/// Elements the page does not contain are skipped; only an unusable
/// configuration, an invalid selector, or a missing window is an error.
///
/// # Errors
/// Returns the first configuration or DOM failure encountered.
pub fn install(config: &PageConfig) -> Result<PageBindings, DomError> {
    install_for(config, LoadState::current()?)
}

/// Like [`install`], with the date written now for [`LoadState::Complete`]
/// or on the window `load` event for [`LoadState::Loading`].
///
/// # Errors
/// Returns the first configuration or DOM failure encountered.
pub fn install_for(config: &PageConfig, load_state: LoadState) -> Result<PageBindings, DomError> {
    config.validate()?;
    let config = Rc::new(config.clone());
    let animator = Rc::new(ScrollAnimator::new());
    let mut listeners = Vec::new();

    for link in dom::query_all(&config.menu_link_selector)? {
        let config = Rc::clone(&config);
        listeners.push(Listener::attach(&link, "click", move |_event| {
            menu::on_menu_link_click(&config);
        })?);
    }

    for link in dom::query_all(&config.scroll_link_selector)? {
        let config = Rc::clone(&config);
        let animator = Rc::clone(&animator);
        let target = link.clone();
        listeners.push(Listener::attach(&link, "click", move |event| {
            scroll::on_anchor_click(&event, &target, &config, &animator);
        })?);
    }

    match dom::element_by_id(&config.dark_mode_toggle_id) {
        Ok(toggle) => {
            let config = Rc::clone(&config);
            listeners.push(Listener::attach(&toggle, "click", move |_event| {
                theme::on_toggle_click(&config);
            })?);
        }
        Err(err) => log::debug!("dark mode toggle not bound: {err}"),
    }

    let date_rendered = if load_state == LoadState::Complete {
        date::on_page_load(&config);
        true
    } else {
        let config = Rc::clone(&config);
        listeners.push(Listener::attach(dom::window()?.as_ref(), "load", move |_event| {
            date::on_page_load(&config);
        })?);
        false
    };

    log::info!("page helpers installed ({} listeners)", listeners.len());
    Ok(PageBindings {
        config,
        listeners,
        animator,
        date_rendered,
    })
}

thread_local! {
    static ACTIVE: RefCell<Option<PageBindings>> = const { RefCell::new(None) };
}

/// Install `config` as the page's live bindings, replacing earlier ones.
///
/// # Errors
/// Returns the install failure; the previous bindings are detached either way.
pub fn activate(config: &PageConfig) -> Result<(), DomError> {
    ACTIVE.with(|active| active.borrow_mut().take());
    let bindings = install(config)?;
    ACTIVE.with(|active| *active.borrow_mut() = Some(bindings));
    Ok(())
}

/// Configuration of the live bindings, or the defaults when none are installed.
#[must_use]
pub fn active_config() -> PageConfig {
    ACTIVE.with(|active| {
        active
            .borrow()
            .as_ref()
            .map_or_else(PageConfig::default, |bindings| bindings.config().clone())
    })
}

/// Detach the live bindings, if any.
pub fn deactivate() {
    ACTIVE.with(|active| active.borrow_mut().take());
}

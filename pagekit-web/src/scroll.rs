//! Smooth scrolling to in-page anchors.
//!
//! Measurements come from the DOM, the easing from `pagekit_core::scroll`.
//! Frames are driven by `requestAnimationFrame`; a new click replaces the
//! animation in flight.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use pagekit_core::{PageConfig, ScrollPlan, anchor_target, scroll_destination};
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Element, Event};

use crate::dom;
use crate::error::DomError;

type FrameCallback = Closure<dyn FnMut(f64)>;

#[derive(Default)]
struct AnimationState {
    plan: Option<ScrollPlan>,
    started_at: Option<f64>,
    pending_frame: Option<i32>,
}

/// Runs one eased scroll at a time on the page's window.
pub struct ScrollAnimator {
    state: Rc<RefCell<AnimationState>>,
    frame: Rc<RefCell<Option<FrameCallback>>>,
}

impl ScrollAnimator {
    #[must_use]
    pub fn new() -> Self {
        let state = Rc::new(RefCell::new(AnimationState::default()));
        let frame: Rc<RefCell<Option<FrameCallback>>> = Rc::new(RefCell::new(None));

        let state_for_cb = Rc::clone(&state);
        let frame_for_cb: Weak<RefCell<Option<FrameCallback>>> = Rc::downgrade(&frame);
        let cb = Closure::wrap(Box::new(move |timestamp: f64| {
            if !advance(&state_for_cb, timestamp) {
                return;
            }
            if let Some(frame) = frame_for_cb.upgrade()
                && let Err(err) = request_frame(&state_for_cb, &frame)
            {
                log::warn!("scroll animation stopped: {err}");
                state_for_cb.borrow_mut().plan = None;
            }
        }) as Box<dyn FnMut(f64)>);
        *frame.borrow_mut() = Some(cb);

        Self { state, frame }
    }

    /// Begin `plan`, replacing any scroll still in progress.
    ///
    /// # Errors
    /// Returns an error if no animation frame can be requested.
    pub fn start(&self, plan: ScrollPlan) -> Result<(), DomError> {
        {
            let mut state = self.state.borrow_mut();
            state.plan = Some(plan);
            state.started_at = None;
        }
        request_frame(&self.state, &self.frame)
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state.borrow().plan.is_some()
    }
}

impl Default for ScrollAnimator {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ScrollAnimator {
    fn drop(&mut self) {
        if let Some(id) = self.state.borrow_mut().pending_frame.take()
            && let Some(win) = web_sys::window()
        {
            let _ = win.cancel_animation_frame(id);
        }
        self.frame.borrow_mut().take();
    }
}

fn request_frame(
    state: &RefCell<AnimationState>,
    frame: &RefCell<Option<FrameCallback>>,
) -> Result<(), DomError> {
    if state.borrow().pending_frame.is_some() {
        return Ok(());
    }
    let frame = frame.borrow();
    let Some(cb) = frame.as_ref() else {
        return Ok(());
    };
    let id = dom::window()?
        .request_animation_frame(cb.as_ref().unchecked_ref())
        .map_err(|err| DomError::from_js(&err))?;
    state.borrow_mut().pending_frame = Some(id);
    Ok(())
}

/// Apply the scroll position for `timestamp`; returns whether another frame is needed.
fn advance(state: &RefCell<AnimationState>, timestamp: f64) -> bool {
    let mut state = state.borrow_mut();
    state.pending_frame = None;
    let Some(plan) = state.plan else {
        return false;
    };
    let started_at = *state.started_at.get_or_insert(timestamp);
    let elapsed = timestamp - started_at;

    if let Some(win) = web_sys::window() {
        let x = win.scroll_x().unwrap_or(0.0);
        win.scroll_to_with_x_and_y(x, plan.position_at(elapsed));
    }

    if plan.is_finished(elapsed) {
        state.plan = None;
        state.started_at = None;
        false
    } else {
        true
    }
}

/// Vertical offset to scroll to so that the element with `anchor_id` sits
/// just below the fixed navigation bar.
///
/// The bar's content-box height is used, so its padding and border do not
/// shorten the scroll. A missing navigation bar counts as zero height.
///
/// # Errors
/// Returns [`DomError::MissingElement`] when the anchor target does not exist.
pub fn destination_for(anchor_id: &str, config: &PageConfig) -> Result<f64, DomError> {
    let target = dom::element_by_id(anchor_id)?;
    let navbar_height = match dom::query_one(&config.navbar_selector)? {
        Some(nav) => dom::content_box_height(&nav)?,
        None => 0.0,
    };
    Ok(scroll_destination(dom::document_top(&target)?, navbar_height))
}

/// Build the scroll from the current position to the anchor's destination.
///
/// # Errors
/// Returns an error when the anchor target is missing or the window cannot
/// report its scroll offset.
pub fn plan_for(anchor_id: &str, config: &PageConfig) -> Result<ScrollPlan, DomError> {
    let to = destination_for(anchor_id, config)?;
    let from = dom::window()?
        .scroll_y()
        .map_err(|err| DomError::from_js(&err))?;
    Ok(ScrollPlan::new(from, to, config.scroll_duration_ms))
}

/// Smooth-scroll to the element with `anchor_id`.
///
/// # Errors
/// Returns an error when the target is missing or no frame can be scheduled.
pub fn scroll_to_anchor(
    anchor_id: &str,
    config: &PageConfig,
    animator: &ScrollAnimator,
) -> Result<(), DomError> {
    animator.start(plan_for(anchor_id, config)?)
}

pub(crate) fn on_anchor_click(
    event: &Event,
    link: &Element,
    config: &PageConfig,
    animator: &ScrollAnimator,
) {
    let href = link.get_attribute("href").unwrap_or_default();
    let Some(anchor_id) = anchor_target(&href) else {
        log::debug!("link {href:?} has no in-page target");
        return;
    };
    match scroll_to_anchor(anchor_id, config, animator) {
        Ok(()) => event.prevent_default(),
        Err(err) => log::warn!("smooth scroll to #{anchor_id} skipped: {err}"),
    }
}

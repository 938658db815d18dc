//! Viewport observation for a single element.
//!
//! [`observe`] wraps the browser's `IntersectionObserver` and reports a
//! boolean "entered" signal whenever the element crosses the configured
//! threshold. Without an `IntersectionObserver` the element is reported as
//! visible straight away so nothing stays hidden forever.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::{debug, warn};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Reflect};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::Callback;

use crate::config;
use crate::error::{Result, SiteError};
use crate::reveal::geometry::{element_rect, intersection_ratio, intersects, window_viewport, Rect};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserveOptions {
    /// Fraction of the element's area that must be visible, `0.0..=1.0`.
    pub threshold: f64,
    /// Stop watching after the first "entered" report.
    pub trigger_once: bool,
    /// Applied to every side of the viewport; negative values shrink it.
    pub root_margin_px: i32,
}

impl Default for ObserveOptions {
    fn default() -> Self {
        Self {
            threshold: config::DEFAULT_THRESHOLD,
            trigger_once: true,
            root_margin_px: 0,
        }
    }
}

impl ObserveOptions {
    fn root_margin(&self) -> String {
        format!("{}px", self.root_margin_px)
    }
}

/// Turns raw intersection samples into change events.
///
/// Only transitions are reported. With `trigger_once` the tracker goes
/// quiet after the first `true`, and after [`VisibilityTracker::disengage`]
/// it never reports again.
#[derive(Debug, Clone)]
pub struct VisibilityTracker {
    options: ObserveOptions,
    last: Option<bool>,
    engaged: bool,
}

impl VisibilityTracker {
    pub fn new(options: ObserveOptions) -> Self {
        Self { options, last: None, engaged: true }
    }

    pub fn is_engaged(&self) -> bool {
        self.engaged
    }

    pub fn disengage(&mut self) {
        self.engaged = false;
    }

    /// Feed one sample. Returns the new state if it differs from the last one.
    pub fn sample(&mut self, intersecting: bool, ratio: f64) -> Option<bool> {
        if !self.engaged {
            return None;
        }
        // With a zero threshold an edge that merely touches the viewport counts
        let entered = intersecting && ratio >= self.options.threshold;
        if self.last == Some(entered) {
            return None;
        }
        // The first sample only matters when it says "visible"
        if self.last.is_none() && !entered {
            self.last = Some(false);
            return None;
        }
        self.last = Some(entered);
        if entered && self.options.trigger_once {
            self.engaged = false;
        }
        Some(entered)
    }
}

struct ObservationInner {
    tracker: VisibilityTracker,
    observer: Option<IntersectionObserver>,
    // Kept alive for as long as the observer may call it
    closure: Option<Closure<dyn FnMut(Array, IntersectionObserver)>>,
    callback: Callback<bool>,
}

impl ObservationInner {
    fn disconnect(&mut self) {
        if let Some(observer) = self.observer.as_ref() {
            observer.disconnect();
        }
    }
}

/// Handle returned by [`observe`]. Cancelling (or dropping) it stops all
/// further callbacks.
pub struct Observation {
    inner: Rc<RefCell<ObservationInner>>,
}

impl Observation {
    fn new(options: ObserveOptions, callback: Callback<bool>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ObservationInner {
                tracker: VisibilityTracker::new(options),
                observer: None,
                closure: None,
                callback,
            })),
        }
    }

    /// Stop watching. Safe to call any number of times, including after the
    /// element has left the page or the observer disengaged on its own.
    pub fn cancel(&self) {
        let Ok(mut inner) = self.inner.try_borrow_mut() else {
            return;
        };
        inner.tracker.disengage();
        inner.disconnect();
        inner.observer = None;
        inner.closure = None;
    }

    pub fn is_active(&self) -> bool {
        self.inner.borrow().tracker.is_engaged()
    }

    fn deliver(inner: &Rc<RefCell<ObservationInner>>, intersecting: bool, ratio: f64) {
        let (event, callback) = {
            let mut state = inner.borrow_mut();
            let event = state.tracker.sample(intersecting, ratio);
            if !state.tracker.is_engaged() {
                state.disconnect();
            }
            (event, state.callback.clone())
        };
        // Borrow released: the callback may cancel this observation
        if let Some(entered) = event {
            callback.emit(entered);
        }
    }

    /// Check where the element sits right now, before any observer report.
    fn check_initial(&self, element: Rect, viewport: Rect, root_margin_px: i32) {
        let touching = intersects(element, viewport, root_margin_px);
        let ratio = intersection_ratio(element, viewport, root_margin_px);
        Self::deliver(&self.inner, touching, ratio);
    }

    fn fail_open(inner: &Rc<RefCell<ObservationInner>>, err: &SiteError) {
        warn!("{err}; revealing immediately");
        Self::deliver(inner, true, 1.0);
    }
}

impl Drop for Observation {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn intersection_observer_available() -> Result<web_sys::Window> {
    let window = web_sys::window()
        .ok_or_else(|| SiteError::ObservationUnavailable("no window".to_string()))?;
    let present = Reflect::has(&window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false);
    if present {
        Ok(window)
    } else {
        Err(SiteError::ObservationUnavailable(
            "IntersectionObserver is not supported".to_string(),
        ))
    }
}

fn connect(
    element: &Element,
    options: ObserveOptions,
    weak: Weak<RefCell<ObservationInner>>,
) -> Result<(IntersectionObserver, Closure<dyn FnMut(Array, IntersectionObserver)>)> {
    let closure = Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
        let Some(inner) = weak.upgrade() else {
            return;
        };
        // Entries arrive oldest first; the last one is the current state
        let latest = entries
            .iter()
            .filter_map(|e| e.dyn_into::<IntersectionObserverEntry>().ok())
            .last();
        if let Some(entry) = latest {
            Observation::deliver(&inner, entry.is_intersecting(), entry.intersection_ratio());
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(&options.root_margin());

    let observer = IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &init)
        .map_err(|e| SiteError::ObservationUnavailable(format!("{e:?}")))?;
    observer.observe(element);
    Ok((observer, closure))
}

/// Watch `element` and call `callback` with `true` when it enters the
/// viewport (and with `false` when it leaves, if `trigger_once` is off).
///
/// An element that is already on screen is reported before this returns.
pub fn observe(element: &Element, options: ObserveOptions, callback: Callback<bool>) -> Observation {
    let observation = Observation::new(options, callback);

    let window = match intersection_observer_available() {
        Ok(window) => window,
        Err(err) => {
            Observation::fail_open(&observation.inner, &err);
            return observation;
        }
    };

    // Initial check so units above the fold don't wait for the observer's
    // first asynchronous report
    if let Some(viewport) = window_viewport(&window) {
        observation.check_initial(element_rect(element), viewport, options.root_margin_px);
    }
    if !observation.is_active() {
        debug!("element visible at mount, observer not needed");
        return observation;
    }

    match connect(element, options, Rc::downgrade(&observation.inner)) {
        Ok((observer, closure)) => {
            let mut inner = observation.inner.borrow_mut();
            inner.observer = Some(observer);
            inner.closure = Some(closure);
        }
        Err(err) => Observation::fail_open(&observation.inner, &err),
    }
    observation
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recorder() -> (Callback<bool>, Rc<RefCell<Vec<bool>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        (Callback::from(move |v| sink.borrow_mut().push(v)), seen)
    }

    #[test]
    fn trigger_once_reports_entry_a_single_time() {
        let mut tracker = VisibilityTracker::new(ObserveOptions::default());
        assert_eq!(tracker.sample(true, 0.5), Some(true));
        assert!(!tracker.is_engaged());
        assert_eq!(tracker.sample(false, 0.0), None);
        assert_eq!(tracker.sample(true, 1.0), None);
    }

    #[test]
    fn initial_hidden_sample_is_silent() {
        let mut tracker = VisibilityTracker::new(ObserveOptions::default());
        assert_eq!(tracker.sample(false, 0.0), None);
        assert_eq!(tracker.sample(true, 0.3), Some(true));
    }

    #[test]
    fn below_threshold_is_not_entered() {
        let options = ObserveOptions { threshold: 0.5, ..ObserveOptions::default() };
        let mut tracker = VisibilityTracker::new(options);
        assert_eq!(tracker.sample(true, 0.2), None);
        assert_eq!(tracker.sample(true, 0.6), Some(true));
    }

    #[test]
    fn repeating_tracker_reports_every_change() {
        let options = ObserveOptions { trigger_once: false, ..ObserveOptions::default() };
        let mut tracker = VisibilityTracker::new(options);
        assert_eq!(tracker.sample(true, 1.0), Some(true));
        assert_eq!(tracker.sample(true, 0.9), None);
        assert_eq!(tracker.sample(false, 0.0), Some(false));
        assert_eq!(tracker.sample(true, 0.4), Some(true));
        assert!(tracker.is_engaged());
    }

    #[test]
    fn zero_threshold_counts_edge_contact() {
        let options = ObserveOptions { threshold: 0.0, ..ObserveOptions::default() };
        let mut tracker = VisibilityTracker::new(options);
        let viewport = Rect::new(0.0, 0.0, 1000.0, 800.0);
        let el = Rect::new(0.0, 800.0, 100.0, 300.0);
        let ratio = intersection_ratio(el, viewport, 0);
        assert_eq!(tracker.sample(intersects(el, viewport, 0), ratio), Some(true));
        assert!(!tracker.is_engaged());
    }

    #[test]
    fn nonzero_threshold_ignores_edge_contact() {
        let mut tracker = VisibilityTracker::new(ObserveOptions::default());
        assert_eq!(tracker.sample(true, 0.0), None);
    }

    #[test]
    fn element_on_screen_at_mount_reports_once() {
        let (callback, seen) = recorder();
        let observation = Observation::new(ObserveOptions::default(), callback);
        let viewport = Rect::new(0.0, 0.0, 1000.0, 800.0);
        observation.check_initial(Rect::new(0.0, 100.0, 400.0, 200.0), viewport, -40);
        assert_eq!(*seen.borrow(), vec![true]);
        assert!(!observation.is_active());

        // The observer's own first report afterwards changes nothing
        Observation::deliver(&observation.inner, true, 1.0);
        assert_eq!(*seen.borrow(), vec![true]);
    }

    #[test]
    fn repeating_initial_check_then_observer_report_is_deduplicated() {
        let (callback, seen) = recorder();
        let options = ObserveOptions { trigger_once: false, ..ObserveOptions::default() };
        let observation = Observation::new(options, callback);
        let viewport = Rect::new(0.0, 0.0, 1000.0, 800.0);
        observation.check_initial(Rect::new(0.0, 100.0, 400.0, 200.0), viewport, 0);
        assert!(observation.is_active());
        Observation::deliver(&observation.inner, true, 1.0);
        assert_eq!(*seen.borrow(), vec![true]);
    }

    #[test]
    fn element_below_fold_at_mount_stays_silent() {
        let (callback, seen) = recorder();
        let observation = Observation::new(ObserveOptions::default(), callback);
        let viewport = Rect::new(0.0, 0.0, 1000.0, 800.0);
        observation.check_initial(Rect::new(0.0, 1500.0, 400.0, 200.0), viewport, 0);
        assert!(seen.borrow().is_empty());
        assert!(observation.is_active());
        Observation::deliver(&observation.inner, true, 0.5);
        assert_eq!(*seen.borrow(), vec![true]);
    }

    #[test]
    fn fail_open_reports_visible() {
        let (callback, seen) = recorder();
        let observation = Observation::new(ObserveOptions::default(), callback);
        Observation::fail_open(
            &observation.inner,
            &SiteError::ObservationUnavailable("test".to_string()),
        );
        assert_eq!(*seen.borrow(), vec![true]);
        assert!(!observation.is_active());
    }

    #[test]
    fn cancelled_observation_stays_silent() {
        let (callback, seen) = recorder();
        let observation = Observation::new(ObserveOptions::default(), callback);
        observation.cancel();
        observation.cancel();
        Observation::deliver(&observation.inner, true, 1.0);
        assert!(seen.borrow().is_empty());
    }
}

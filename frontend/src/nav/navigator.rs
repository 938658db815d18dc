use log::debug;
use web_sys::{ScrollBehavior, ScrollToOptions};

use crate::error::SiteError;

/// A named anchor on the page and the header space to leave above it.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationTarget {
    pub section_id: String,
    pub label: String,
    pub scroll_offset_px: f64,
}

/// Where the page can scroll to.
pub trait ScrollSurface {
    /// Top of the anchor with this id in document coordinates, if it exists.
    fn anchor_top(&self, section_id: &str) -> Option<f64>;

    /// Start a smooth scroll. Must yield to manual scrolling.
    fn smooth_scroll_to(&self, y: f64);
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavOutcome {
    Scrolled { target_y: f64 },
    NotFound,
}

/// `anchor_top - offset`, never above the top of the page.
pub fn scroll_target(anchor_top: f64, offset_px: f64) -> f64 {
    (anchor_top - offset_px).max(0.0)
}

pub struct ScrollNavigator<S: ScrollSurface> {
    surface: S,
}

impl<S: ScrollSurface> ScrollNavigator<S> {
    pub fn new(surface: S) -> Self {
        Self { surface }
    }

    /// Scroll so the anchor sits just below the sticky header. Unknown ids
    /// do nothing.
    pub fn go_to(&self, target: &NavigationTarget) -> NavOutcome {
        match self.resolve(target) {
            Ok(target_y) => {
                self.surface.smooth_scroll_to(target_y);
                NavOutcome::Scrolled { target_y }
            }
            Err(err) => {
                debug!("{err}; ignoring navigation");
                NavOutcome::NotFound
            }
        }
    }

    fn resolve(&self, target: &NavigationTarget) -> Result<f64, SiteError> {
        let top = self
            .surface
            .anchor_top(&target.section_id)
            .ok_or_else(|| SiteError::TargetNotFound(target.section_id.clone()))?;
        Ok(scroll_target(top, target.scroll_offset_px))
    }
}

/// The live browser window.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowSurface;

impl ScrollSurface for WindowSurface {
    fn anchor_top(&self, section_id: &str) -> Option<f64> {
        let window = web_sys::window()?;
        let anchor = window.document()?.get_element_by_id(section_id)?;
        let scroll_y = window.scroll_y().unwrap_or(0.0);
        Some(anchor.get_bounding_client_rect().top() + scroll_y)
    }

    fn smooth_scroll_to(&self, y: f64) {
        let Some(window) = web_sys::window() else {
            return;
        };
        let options = ScrollToOptions::new();
        options.set_top(y);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashMap;

    use super::*;

    #[derive(Default)]
    struct FakePage {
        anchors: HashMap<String, f64>,
        scroll_y: RefCell<f64>,
        scrolls: RefCell<Vec<f64>>,
    }

    impl FakePage {
        fn with_anchor(mut self, id: &str, top: f64) -> Self {
            self.anchors.insert(id.to_string(), top);
            self
        }
    }

    impl ScrollSurface for &FakePage {
        fn anchor_top(&self, section_id: &str) -> Option<f64> {
            self.anchors.get(section_id).copied()
        }

        fn smooth_scroll_to(&self, y: f64) {
            *self.scroll_y.borrow_mut() = y;
            self.scrolls.borrow_mut().push(y);
        }
    }

    fn target(id: &str, offset: f64) -> NavigationTarget {
        NavigationTarget { section_id: id.to_string(), label: id.to_string(), scroll_offset_px: offset }
    }

    #[test]
    fn offset_is_subtracted_from_anchor() {
        let page = FakePage::default().with_anchor("section-x", 500.0);
        let nav = ScrollNavigator::new(&page);
        assert_eq!(nav.go_to(&target("section-x", 100.0)), NavOutcome::Scrolled { target_y: 400.0 });
        assert_eq!(*page.scroll_y.borrow(), 400.0);
    }

    #[test]
    fn unknown_section_leaves_scroll_alone() {
        let page = FakePage::default().with_anchor("pricing", 900.0);
        *page.scroll_y.borrow_mut() = 250.0;
        let nav = ScrollNavigator::new(&page);
        assert_eq!(nav.go_to(&target("nonexistent", 100.0)), NavOutcome::NotFound);
        assert_eq!(*page.scroll_y.borrow(), 250.0);
        assert!(page.scrolls.borrow().is_empty());
    }

    #[test]
    fn target_above_page_top_is_clamped() {
        let page = FakePage::default().with_anchor("hero", 40.0);
        let nav = ScrollNavigator::new(&page);
        assert_eq!(nav.go_to(&target("hero", 132.0)), NavOutcome::Scrolled { target_y: 0.0 });
    }

    #[test]
    fn last_call_wins() {
        let page = FakePage::default().with_anchor("a", 1000.0).with_anchor("b", 2000.0);
        let nav = ScrollNavigator::new(&page);
        nav.go_to(&target("a", 0.0));
        nav.go_to(&target("b", 0.0));
        assert_eq!(*page.scroll_y.borrow(), 2000.0);
        assert_eq!(*page.scrolls.borrow(), vec![1000.0, 2000.0]);
    }
}

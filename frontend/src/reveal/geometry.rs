use web_sys::{DomRect, Element, Window};

/// Axis-aligned box in viewport coordinates (CSS pixels).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width: width.max(0.0), height: height.max(0.0) }
    }

    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Grow (or shrink, for negative values) the box on every side.
    pub fn expand(&self, margin_px: i32) -> Self {
        let m = f64::from(margin_px);
        Rect::new(self.left - m, self.top - m, self.width + 2.0 * m, self.height + 2.0 * m)
    }

    fn intersection(&self, other: &Rect) -> Option<Rect> {
        let left = self.left.max(other.left);
        let top = self.top.max(other.top);
        let right = self.right().min(other.right());
        let bottom = self.bottom().min(other.bottom());
        if right < left || bottom < top {
            return None;
        }
        Some(Rect::new(left, top, right - left, bottom - top))
    }
}

impl From<DomRect> for Rect {
    fn from(r: DomRect) -> Self {
        Rect::new(r.left(), r.top(), r.width(), r.height())
    }
}

/// Share of `element` inside `viewport` after applying `root_margin_px`,
/// in `0.0..=1.0`.
///
/// A zero-area element that touches the viewport counts as fully visible,
/// matching how browsers report empty anchors.
pub fn intersection_ratio(element: Rect, viewport: Rect, root_margin_px: i32) -> f64 {
    let root = viewport.expand(root_margin_px);
    match element.intersection(&root) {
        None => 0.0,
        Some(_) if element.area() == 0.0 => 1.0,
        Some(overlap) => (overlap.area() / element.area()).clamp(0.0, 1.0),
    }
}

/// Whether `element` overlaps or touches `viewport` after applying
/// `root_margin_px`.
pub fn intersects(element: Rect, viewport: Rect, root_margin_px: i32) -> bool {
    element.intersection(&viewport.expand(root_margin_px)).is_some()
}

/// The window's layout viewport, or `None` outside an interactive page.
pub fn window_viewport(window: &Window) -> Option<Rect> {
    let width = window.inner_width().ok()?.as_f64()?;
    let height = window.inner_height().ok()?.as_f64()?;
    Some(Rect::new(0.0, 0.0, width, height))
}

/// Where `element` currently sits relative to the viewport.
pub fn element_rect(element: &Element) -> Rect {
    element.get_bounding_client_rect().into()
}

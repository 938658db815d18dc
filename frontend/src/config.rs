use log::Level;

/// Fraction of an element that has to be visible before it counts as entered.
pub const DEFAULT_THRESHOLD: f64 = 0.1;

/// Stagger containers trigger a little earlier than single units.
pub const DEFAULT_GROUP_THRESHOLD: f64 = 0.0;

/// Negative margin shrinks the viewport so reveals wait until the element
/// is a bit further in.
pub const DEFAULT_ROOT_MARGIN_PX: i32 = -40;

pub const DEFAULT_STAGGER_BASE_MS: u32 = 0;
pub const DEFAULT_STAGGER_STEP_MS: u32 = 100;

/// Height reserved for the fixed top nav plus the sticky category bar.
pub const NAV_SCROLL_OFFSET_PX: f64 = 132.0;

/// Scroll distance after which the top nav switches to its solid style.
pub const NAV_SCROLLED_AFTER_PX: i32 = 80;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose while developing locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

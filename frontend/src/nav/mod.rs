pub mod category_bar;
pub mod navigator;

pub use category_bar::CategoryBar;
pub use navigator::{NavigationTarget, ScrollNavigator, WindowSurface};

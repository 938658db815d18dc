pub mod controller;
pub mod geometry;
pub mod hooks;
pub mod observer;
pub mod scheduler;
pub mod stagger;

pub use hooks::{use_reveal, use_stagger, RevealOptions, StaggerOptions};
pub use observer::ObserveOptions;
pub use stagger::StaggerSchedule;

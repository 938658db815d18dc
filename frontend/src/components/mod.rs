pub mod reveal;

pub use reveal::Reveal;

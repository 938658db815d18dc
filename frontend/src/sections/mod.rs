pub mod comparison;
pub mod feature_grid;
pub mod hero;
pub mod steps;

pub use comparison::ComparisonSection;
pub use feature_grid::FeatureGridSection;
pub use hero::HeroSection;
pub use steps::StepsSection;

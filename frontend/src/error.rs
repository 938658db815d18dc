use thiserror::Error;

/// Everything that can go wrong in the reveal, navigation and content layers.
///
/// None of these are fatal to the page. Observation and navigation errors are
/// recovered where they happen; content errors fall back to a plain notice.
#[derive(Debug, Error)]
pub enum SiteError {
    #[error("intersection observation unavailable: {0}")]
    ObservationUnavailable(String),

    #[error("no anchor for section `{0}`")]
    TargetNotFound(String),

    #[error("site content is malformed: {0}")]
    Content(#[from] serde_json::Error),

    #[error("section id `{section}` appears more than once on page `{page}`")]
    DuplicateSection { page: String, section: String },
}

pub type Result<T> = std::result::Result<T, SiteError>;

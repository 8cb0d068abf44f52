/// Simplified error system - no over-engineering!
///
/// Nothing in this viewer is fatal: every error ends as a logged skip, never a
/// surfaced failure (missing DOM nodes, absent chart library, detached pads).
#[derive(Debug, Clone)]
pub enum PresentationError {
    DomError(String),
    ChartingError(String),
    InputError(String),
}

impl std::fmt::Display for PresentationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PresentationError::DomError(msg) => write!(f, "DOM Error: {}", msg),
            PresentationError::ChartingError(msg) => write!(f, "Charting Error: {}", msg),
            PresentationError::InputError(msg) => write!(f, "Input Error: {}", msg),
        }
    }
}

impl std::error::Error for PresentationError {}

// Simple convenience type aliases
pub type DomResult<T> = Result<T, PresentationError>;
pub type ChartingResult<T> = Result<T, PresentationError>;

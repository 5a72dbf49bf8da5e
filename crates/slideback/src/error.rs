//! Construction-time errors.

/// Fatal precondition violations detected when the engine is built.
///
/// Everything that can go wrong after construction degrades silently
/// (gesture ignored) or is handled by the abort path; only a missing
/// host screen is unrecoverable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideBackError {
    /// The overlay environment carries no host content container.
    MissingHostScreen,
}

impl std::fmt::Display for SlideBackError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SlideBackError::MissingHostScreen => {
                write!(f, "slide back requires the host screen's content container")
            }
        }
    }
}

impl std::error::Error for SlideBackError {}

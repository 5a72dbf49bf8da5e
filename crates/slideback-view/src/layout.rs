//! Layout parameters preserved across view relocation.

/// One layout dimension.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Length {
    /// Fill the parent container.
    MatchParent,
    /// Fixed size in physical pixels.
    Px(f32),
}

/// How a view is sized inside its container.
///
/// The relocator records the host content view's original parameters
/// before the borrow and reapplies them on restore.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutParams {
    pub width: Length,
    pub height: Length,
}

impl LayoutParams {
    pub const MATCH_PARENT: LayoutParams = LayoutParams {
        width: Length::MatchParent,
        height: Length::MatchParent,
    };

    pub const fn new(width: Length, height: Length) -> Self {
        Self { width, height }
    }

    /// Fixed-width strip that fills the parent vertically.
    pub const fn strip(width_px: f32) -> Self {
        Self {
            width: Length::Px(width_px),
            height: Length::MatchParent,
        }
    }
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self::MATCH_PARENT
    }
}

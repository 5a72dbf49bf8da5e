//! Shared gesture constants for the edge swipe.
//!
//! Values are density-independent where the platform convention is dp
//! (edge zone, touch slop) and raw pixels where the original visual was
//! specified in pixels. Hosts on unusual displays can override the slop
//! through the overlay environment.

/// Density-independent pixels.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Dp(pub f32);

impl Dp {
    pub fn to_px(&self, density: f32) -> f32 {
        self.0 * density
    }

    pub fn from_px(px: f32, density: f32) -> Self {
        Self(px / density)
    }
}

/// Width of the edge activation zone.
///
/// A gesture may only begin with a press inside `[0, edge]`; presses
/// further into the screen belong to the overlay's own content.
pub const EDGE_SIZE: Dp = Dp(20.0);

/// Minimum pointer travel before a press becomes a drag.
///
/// 8 dp matches the platform's standard touch slop; large enough to
/// ignore finger jitter, small enough that an intentional drag feels
/// immediate.
pub const TOUCH_SLOP: Dp = Dp(8.0);

/// Edge zone width in physical pixels for the given display density.
///
/// Rounds the way the platform rounds dp-to-px conversions, so the zone
/// boundary is deterministic for a fixed density.
pub fn scaled_edge_width(density: f32) -> f32 {
    (EDGE_SIZE.to_px(density) + 0.5).floor()
}

//! Easing curves for the resolve animation.

/// Easing function applied to the linear animation fraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Easing {
    /// No easing.
    Linear,
    /// Deceleration curve: fast start, slow settle.
    ///
    /// Equivalent to the platform's decelerate interpolator with factor 2:
    /// `1 - (1 - t)^4`.
    Decelerate,
}

impl Easing {
    /// Apply the easing to a linear fraction in `[0, 1]`.
    pub fn transform(&self, fraction: f32) -> f32 {
        let fraction = fraction.clamp(0.0, 1.0);
        match self {
            Easing::Linear => fraction,
            Easing::Decelerate => 1.0 - (1.0 - fraction).powi(4),
        }
    }
}

//! Shared gesture session state.

pub use slideback_input::GestureState;

/// Accumulates horizontal drag distance for the current gesture.
///
/// The cumulative distance is clamped to zero so dragging back past the
/// press point never produces a negative offset.
#[derive(Debug, Clone, Copy)]
pub struct DragAccumulator {
    last_pointer_x: f32,
    distance_x: f32,
}

impl DragAccumulator {
    pub fn new() -> Self {
        Self {
            last_pointer_x: 0.0,
            distance_x: 0.0,
        }
    }

    /// Start a fresh accumulation at the press position.
    pub fn begin_at(&mut self, x: f32) {
        self.last_pointer_x = x;
        self.distance_x = 0.0;
    }

    /// Fold the next pointer position into the cumulative distance and
    /// return the updated value.
    pub fn advance_to(&mut self, x: f32) -> f32 {
        let delta = x - self.last_pointer_x;
        self.last_pointer_x = x;
        self.distance_x = (self.distance_x + delta).max(0.0);
        self.distance_x
    }

    pub fn distance_x(&self) -> f32 {
        self.distance_x
    }

    pub fn reset(&mut self) {
        self.last_pointer_x = 0.0;
        self.distance_x = 0.0;
    }
}

impl Default for DragAccumulator {
    fn default() -> Self {
        Self::new()
    }
}

/// The mutable state one gesture flows through: the lifecycle state plus
/// the drag accumulator. Owned by the engine; one instance per overlay.
#[derive(Debug)]
pub struct GestureSession {
    pub state: GestureState,
    pub drag: DragAccumulator,
}

impl GestureSession {
    pub fn new() -> Self {
        Self {
            state: GestureState::Idle,
            drag: DragAccumulator::new(),
        }
    }

    /// Back to rest: idle state, zeroed accumulator.
    pub fn reset(&mut self) {
        self.state = GestureState::Idle;
        self.drag.reset();
    }
}

impl Default for GestureSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
#[path = "tests/session_tests.rs"]
mod tests;

//! Raw touch events as delivered by the host platform.

/// Raw pointer actions, mirroring the platform's motion event vocabulary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TouchAction {
    /// Primary pointer pressed.
    Down,
    /// A secondary pointer pressed while the primary is still down.
    PointerDown,
    /// Any pointer moved.
    Move,
    /// A pointer other than the last one lifted.
    PointerUp,
    /// The last pointer lifted.
    Up,
    /// The gesture stream was cancelled by the platform.
    Cancel,
    /// The pointer went down or up outside the window bounds.
    Outside,
}

/// A single raw touch event.
///
/// Only the horizontal axis drives the slide-back gesture, so events carry
/// the raw screen-space x coordinate of the pointer they describe plus the
/// index of that pointer within the sequence (0 is the primary pointer).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchEvent {
    pub action: TouchAction,
    pub pointer_index: usize,
    pub raw_x: f32,
}

impl TouchEvent {
    pub fn new(action: TouchAction, pointer_index: usize, raw_x: f32) -> Self {
        Self {
            action,
            pointer_index,
            raw_x,
        }
    }

    /// Primary pointer press at `raw_x`.
    pub fn down(raw_x: f32) -> Self {
        Self::new(TouchAction::Down, 0, raw_x)
    }

    /// Pointer movement for the pointer at `pointer_index`.
    pub fn moved(pointer_index: usize, raw_x: f32) -> Self {
        Self::new(TouchAction::Move, pointer_index, raw_x)
    }

    /// Primary pointer release at `raw_x`.
    pub fn up(raw_x: f32) -> Self {
        Self::new(TouchAction::Up, 0, raw_x)
    }

    pub fn pointer_down(pointer_index: usize, raw_x: f32) -> Self {
        Self::new(TouchAction::PointerDown, pointer_index, raw_x)
    }

    pub fn pointer_up(pointer_index: usize, raw_x: f32) -> Self {
        Self::new(TouchAction::PointerUp, pointer_index, raw_x)
    }

    pub fn cancel(raw_x: f32) -> Self {
        Self::new(TouchAction::Cancel, 0, raw_x)
    }

    /// Whether this event ends a pointer's participation in the gesture.
    pub fn is_release(&self) -> bool {
        matches!(
            self.action,
            TouchAction::Up | TouchAction::PointerUp | TouchAction::Cancel | TouchAction::Outside
        )
    }
}

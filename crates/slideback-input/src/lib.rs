//! Raw touch input model and edge-swipe classification for Slideback.
//!
//! The host forwards every raw touch event it receives; [`TouchGate`]
//! turns that stream into a small set of semantic signals the swipe
//! engine consumes. The gate owns no view state, only the activation
//! zone and slop bookkeeping for the current pointer sequence.

pub mod event;
pub mod gate;
pub mod gesture_constants;

pub use event::{TouchAction, TouchEvent};
pub use gate::{GestureState, Signal, TouchGate};
pub use gesture_constants::{scaled_edge_width, Dp, EDGE_SIZE, TOUCH_SLOP};

pub mod prelude {
    pub use crate::event::{TouchAction, TouchEvent};
    pub use crate::gate::{GestureState, Signal, TouchGate};
}

//! Frame-clock driven tween animation for Slideback.
//!
//! The resolve animation of a swipe gesture is a single tween that moves
//! three view layers in lockstep. Frames are delivered through a
//! [`FrameScheduler`] the host pumps with its own frame timing, so the
//! completion callback always arrives on the thread that drains frames.

pub mod easing;
pub mod frame_clock;
pub mod slide_animator;
pub mod spec;

pub use easing::Easing;
pub use frame_clock::{
    FrameCallbackId, FrameCallbackRegistration, FrameClock, FrameScheduler, StdFrameDriver,
};
pub use slide_animator::{LayerTween, SlideAnimator, LAYER_COUNT};
pub use spec::AnimationSpec;

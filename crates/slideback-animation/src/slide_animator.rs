//! The three-layer resolve animation.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::trace;

use crate::frame_clock::{FrameCallbackRegistration, FrameClock};
use crate::spec::AnimationSpec;

/// Number of layers animated in lockstep: host preview, shadow strip,
/// overlay content.
pub const LAYER_COUNT: usize = 3;

/// Start and end offset of one layer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayerTween {
    pub start: f32,
    pub end: f32,
}

impl LayerTween {
    pub fn new(start: f32, end: f32) -> Self {
        Self { start, end }
    }

    fn at(&self, progress: f32) -> f32 {
        self.start + (self.end - self.start) * progress
    }
}

/// Drives [`LAYER_COUNT`] layer offsets from their current positions to
/// their resting positions over one fixed-duration tween.
///
/// `on_frame` receives the eased offsets every frame; `on_end` fires at
/// most once, after the final frame has snapped every layer to its exact
/// end offset. [`SlideAnimator::cancel`] revokes the pending frame and
/// suppresses `on_end` entirely; the caller performs its own cleanup.
pub struct SlideAnimator {
    inner: Rc<RefCell<AnimatorInner>>,
}

struct AnimatorInner {
    clock: FrameClock,
    spec: AnimationSpec,
    tweens: [LayerTween; LAYER_COUNT],
    on_frame: Box<dyn FnMut(&[f32; LAYER_COUNT])>,
    on_end: Option<Box<dyn FnOnce()>>,
    start_time_nanos: Option<u64>,
    registration: Option<FrameCallbackRegistration>,
    running: bool,
}

impl SlideAnimator {
    pub fn start(
        clock: FrameClock,
        spec: AnimationSpec,
        tweens: [LayerTween; LAYER_COUNT],
        on_frame: impl FnMut(&[f32; LAYER_COUNT]) + 'static,
        on_end: impl FnOnce() + 'static,
    ) -> Self {
        trace!("slide animation start: {:?} {:?}", spec, tweens);
        let inner = Rc::new(RefCell::new(AnimatorInner {
            clock,
            spec,
            tweens,
            on_frame: Box::new(on_frame),
            on_end: Some(Box::new(on_end)),
            start_time_nanos: None,
            registration: None,
            running: true,
        }));
        Self::schedule_frame(&inner);
        Self { inner }
    }

    pub fn is_running(&self) -> bool {
        self.inner.borrow().running
    }

    /// Stop the animation mid-flight. The pending frame callback is
    /// revoked and `on_end` never fires.
    pub fn cancel(&self) {
        let mut inner = self.inner.borrow_mut();
        inner.running = false;
        inner.on_end = None;
        if let Some(registration) = inner.registration.take() {
            registration.cancel();
        }
    }

    fn schedule_frame(this: &Rc<RefCell<AnimatorInner>>) {
        let clock = this.borrow().clock.clone();
        let weak: Weak<RefCell<AnimatorInner>> = Rc::downgrade(this);
        let registration = clock.with_frame_nanos(move |frame_time_nanos| {
            if let Some(strong) = weak.upgrade() {
                Self::on_frame(&strong, frame_time_nanos);
            }
        });
        this.borrow_mut().registration = Some(registration);
    }

    fn on_frame(this: &Rc<RefCell<AnimatorInner>>, frame_time_nanos: u64) {
        let mut end_callback = None;
        let mut schedule_next = false;
        {
            let mut inner = this.borrow_mut();
            inner.registration = None;
            if !inner.running {
                return;
            }

            let start_time = *inner.start_time_nanos.get_or_insert(frame_time_nanos);
            let elapsed_nanos = frame_time_nanos.saturating_sub(start_time);
            let duration_nanos = (inner.spec.duration_millis * 1_000_000).max(1);
            let linear_progress = (elapsed_nanos as f32 / duration_nanos as f32).clamp(0.0, 1.0);

            let offsets = if linear_progress >= 1.0 {
                // exact resting offsets, independent of easing rounding
                let tweens = &inner.tweens;
                [tweens[0].end, tweens[1].end, tweens[2].end]
            } else {
                let progress = inner.spec.easing.transform(linear_progress);
                let tweens = &inner.tweens;
                [
                    tweens[0].at(progress),
                    tweens[1].at(progress),
                    tweens[2].at(progress),
                ]
            };
            (inner.on_frame)(&offsets);

            if linear_progress >= 1.0 {
                inner.running = false;
                end_callback = inner.on_end.take();
            } else {
                schedule_next = true;
            }
        }

        if schedule_next {
            Self::schedule_frame(this);
        }
        if let Some(end) = end_callback {
            trace!("slide animation finished");
            end();
        }
    }
}

#[cfg(test)]
#[path = "tests/animation_tests.rs"]
mod tests;

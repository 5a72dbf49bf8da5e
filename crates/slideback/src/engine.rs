//! The swipe gesture state machine.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use log::{debug, trace};

use slideback_animation::{AnimationSpec, Easing, FrameClock, LayerTween, SlideAnimator};
use slideback_input::{GestureState, Signal, TouchEvent, TouchGate};
use slideback_view::{Color, ViewRelocator, ViewTriple, SHADOW_WIDTH};

use crate::error::SlideBackError;
use crate::host::{OverlayEnvironment, SlideBackHost};
use crate::session::GestureSession;

/// The gesture engine. Cheap to clone; all clones share one state
/// machine.
///
/// Single-threaded by construction: touch classification, state
/// transitions, and view mutation all happen on the thread that forwards
/// events and drains the frame scheduler. The animation-completion
/// callback is the only asynchronous re-entry point.
#[derive(Clone)]
pub struct SwipeEngine {
    inner: Rc<RefCell<EngineInner>>,
}

struct EngineInner {
    host: Rc<dyn SlideBackHost>,
    session: GestureSession,
    gate: TouchGate,
    relocator: ViewRelocator,
    clock: FrameClock,
    animator: Option<SlideAnimator>,
    screen_width_px: i32,
    window_background: Color,
    enabled: bool,
}

impl SwipeEngine {
    /// Build an engine for one overlay.
    ///
    /// Fails when the environment carries no host content container;
    /// every later failure mode degrades silently instead.
    pub fn new(
        host: Rc<dyn SlideBackHost>,
        env: OverlayEnvironment,
        clock: FrameClock,
    ) -> Result<Self, SlideBackError> {
        let host_container = env
            .host_container
            .ok_or(SlideBackError::MissingHostScreen)?;
        let enabled = host.support_slide_back();
        let gate = match env.touch_slop_px {
            Some(slop) => TouchGate::with_slop(env.density, slop),
            None => TouchGate::new(env.density),
        };
        debug!(
            "swipe engine: enabled={} edge={}px slop={}px width={}px",
            enabled,
            gate.edge_width_px(),
            gate.touch_slop_px(),
            env.screen_width_px
        );
        Ok(Self {
            inner: Rc::new(RefCell::new(EngineInner {
                host,
                session: GestureSession::new(),
                gate,
                relocator: ViewRelocator::new(host_container, env.overlay_container),
                clock,
                animator: None,
                screen_width_px: env.screen_width_px,
                window_background: env.window_background,
                enabled,
            })),
        })
    }

    /// Process one raw touch event. Returns whether the event was fully
    /// consumed; `false` means the overlay should dispatch it normally.
    pub fn on_touch_event(&self, event: &TouchEvent) -> bool {
        let weak = Rc::downgrade(&self.inner);
        self.inner.borrow_mut().on_touch_event(event, &weak)
    }

    /// Force everything back to rest right now: cancel any in-flight
    /// animation without waiting for its callback, return the borrowed
    /// view, drop the shadow. Safe from any state and idempotent.
    pub fn abort_immediately(&self) {
        self.inner.borrow_mut().abort();
    }

    pub fn state(&self) -> GestureState {
        self.inner.borrow().session.state
    }

    /// Cumulative drag distance of the current gesture, in pixels.
    pub fn drag_distance(&self) -> f32 {
        self.inner.borrow().session.drag.distance_x()
    }
}

impl EngineInner {
    fn on_touch_event(&mut self, event: &TouchEvent, weak: &Weak<RefCell<EngineInner>>) -> bool {
        if !self.enabled {
            return false;
        }
        if self.session.state == GestureState::Animating {
            // input is frozen until the resolve animation ends
            return true;
        }

        match self.gate.classify(event, self.session.state) {
            Signal::Ignore => {
                // a secondary pointer wandering mid-drag is swallowed;
                // everything else passes through untouched
                self.session.state == GestureState::Sliding && event.pointer_index != 0
            }
            Signal::MultiDown | Signal::MultiUp => self.session.state == GestureState::Sliding,
            Signal::Down => {
                self.on_press(event.raw_x);
                // the press itself is never consumed; a tap must still
                // reach the overlay's content
                false
            }
            Signal::Move(x) => self.on_move(x),
            Signal::Up => self.on_release(weak),
        }
    }

    fn on_press(&mut self, x: f32) {
        self.host.dismiss_soft_input();
        self.session.drag.begin_at(x);

        if !self.relocator.borrow_host_content() {
            // nothing to preview: degrade to "outside the zone" so the
            // rest of this sequence flows to the content untouched
            debug!("press in zone but host content unavailable; gesture disabled");
            self.gate.deactivate();
            self.session.reset();
            return;
        }
        self.relocator.attach_shadow();

        if let Some(front) = self.relocator.front_view() {
            if front.background().is_none() {
                if self.window_background.is_transparent() {
                    debug!("front layer fallback background is transparent");
                }
                front.set_background(Some(self.window_background));
            }
        }

        trace!("gesture armed at x={x}");
        self.session.state = GestureState::ArmedInZone;
    }

    fn on_move(&mut self, x: f32) -> bool {
        match self.session.state {
            GestureState::ArmedInZone => {
                self.session.state = GestureState::Sliding;
                debug!("drag started at x={x}");
                // the content below already saw the press; cancel it out
                // exactly once before the layers start moving
                self.host.dispatch_cancel_below();
                self.on_sliding(x);
                true
            }
            GestureState::Sliding => {
                self.on_sliding(x);
                true
            }
            _ => false,
        }
    }

    fn on_sliding(&mut self, x: f32) {
        let Some(ViewTriple {
            host_preview: Some(preview),
            shadow: Some(shadow),
            overlay_content: front,
        }) = self.relocator.layers()
        else {
            // a layer went missing mid-drag: give up without animating
            debug!("layer missing while sliding; abandoning gesture");
            self.cleanup_without_animation();
            return;
        };

        let distance = self.session.drag.advance_to(x);
        let third = (self.screen_width_px / 3) as f32;
        preview.set_translation_x(-third + distance / 3.0);
        shadow.set_translation_x(distance - SHADOW_WIDTH);
        front.set_translation_x(distance);
    }

    fn on_release(&mut self, weak: &Weak<RefCell<EngineInner>>) -> bool {
        if self.session.drag.distance_x() == 0.0 {
            // a tap, or a drag that returned to the press point: no
            // animation, just put everything back
            trace!("release without accumulated distance; treating as tap");
            self.cleanup_without_animation();
            return false;
        }

        match self.session.state {
            GestureState::Sliding => {
                self.start_resolve_animation(weak);
                true
            }
            _ => false,
        }
    }

    /// Point of no return: strictly more than a third of the screen.
    fn commit_threshold(&self) -> f32 {
        (self.screen_width_px / 3) as f32
    }

    fn start_resolve_animation(&mut self, weak: &Weak<RefCell<EngineInner>>) {
        let Some(ViewTriple {
            host_preview: Some(preview),
            shadow,
            overlay_content: front,
        }) = self.relocator.layers()
        else {
            self.cleanup_without_animation();
            return;
        };

        let distance = self.session.drag.distance_x();
        let canceled = distance <= self.commit_threshold();
        let width = self.screen_width_px as f32;
        let third = (self.screen_width_px / 3) as f32;

        let tweens = [
            LayerTween::new(
                distance / 3.0 - third,
                if canceled { -third } else { 0.0 },
            ),
            LayerTween::new(
                distance - SHADOW_WIDTH,
                if canceled { SHADOW_WIDTH } else { width + SHADOW_WIDTH },
            ),
            LayerTween::new(distance, if canceled { 0.0 } else { width }),
        ];
        let spec = AnimationSpec::tween(if canceled { 150 } else { 300 }, Easing::Decelerate);
        debug!(
            "resolving gesture: distance={distance} -> {}",
            if canceled { "cancel" } else { "commit" }
        );

        let on_frame = move |offsets: &[f32; 3]| {
            preview.set_translation_x(offsets[0]);
            if let Some(shadow) = &shadow {
                shadow.set_translation_x(offsets[1]);
            }
            front.set_translation_x(offsets[2]);
        };
        let on_end = {
            let weak = weak.clone();
            move || {
                let Some(inner) = weak.upgrade() else {
                    return;
                };
                // release the borrow before notifying: the host may
                // re-enter abort_immediately while dismissing itself
                let notify = inner.borrow_mut().finish_resolve(canceled);
                if let Some(host) = notify {
                    host.on_swipe_back_finished();
                }
            }
        };

        self.animator = Some(SlideAnimator::start(
            self.clock.clone(),
            spec,
            tweens,
            on_frame,
            on_end,
        ));
        self.session.state = GestureState::Animating;
    }

    /// Runs when the resolve animation completes. Returns the host to
    /// notify, if the gesture committed.
    fn finish_resolve(&mut self, canceled: bool) -> Option<Rc<dyn SlideBackHost>> {
        self.animator = None;
        if canceled {
            // exact resting offsets, defending against rounding drift
            if let Some(preview) = self.relocator.host_content() {
                preview.set_translation_x(0.0);
            }
            if let Some(shadow) = self.relocator.shadow_view() {
                shadow.set_translation_x(-SHADOW_WIDTH);
            }
            if let Some(front) = self.relocator.front_view() {
                front.set_translation_x(0.0);
            }
            self.cleanup_without_animation();
            debug!("gesture cancelled; overlay restored");
            None
        } else {
            self.relocator.detach_shadow();
            self.relocator.restore_host_content();
            self.session.reset();
            debug!("gesture committed; notifying host");
            Some(Rc::clone(&self.host))
        }
    }

    fn cleanup_without_animation(&mut self) {
        self.relocator.detach_shadow();
        self.relocator.restore_host_content();
        self.session.reset();
    }

    fn abort(&mut self) {
        if let Some(animator) = self.animator.take() {
            animator.cancel();
        }
        self.relocator.detach_shadow();
        if let Some(preview) = self.relocator.host_content() {
            preview.set_translation_x(0.0);
        }
        if let Some(front) = self.relocator.front_view() {
            front.set_translation_x(0.0);
        }
        self.relocator.restore_host_content();
        self.session.reset();
        self.gate.deactivate();
        debug!("swipe engine aborted");
    }
}

#[cfg(test)]
#[path = "tests/engine_tests.rs"]
mod tests;

//! One-shot frame callbacks and the scheduler that delivers them.
//!
//! The host owns the frame loop; it calls
//! [`FrameScheduler::drain_frame_callbacks`] once per frame with the
//! frame time in nanoseconds. Everything stays on the draining thread,
//! which is the same thread that mutates views and engine state.

use std::cell::RefCell;
use std::mem;
use std::rc::Rc;

use web_time::Instant;

pub type FrameCallbackId = u64;

type FrameCallback = Box<dyn FnOnce(u64)>;

struct SchedulerInner {
    next_id: FrameCallbackId,
    callbacks: Vec<(FrameCallbackId, FrameCallback)>,
}

/// Queue of one-shot frame callbacks.
#[derive(Clone)]
pub struct FrameScheduler {
    inner: Rc<RefCell<SchedulerInner>>,
}

impl FrameScheduler {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(SchedulerInner {
                next_id: 1,
                callbacks: Vec::new(),
            })),
        }
    }

    pub fn clock(&self) -> FrameClock {
        FrameClock {
            scheduler: self.clone(),
        }
    }

    /// Whether any callback is waiting for the next frame.
    pub fn has_pending(&self) -> bool {
        !self.inner.borrow().callbacks.is_empty()
    }

    /// Run every callback registered before this call with the given
    /// frame time. Callbacks registered while draining (an animation
    /// re-arming itself) run on the next drain.
    pub fn drain_frame_callbacks(&self, frame_time_nanos: u64) {
        let callbacks = mem::take(&mut self.inner.borrow_mut().callbacks);
        for (_, callback) in callbacks {
            callback(frame_time_nanos);
        }
    }

    fn register(&self, callback: FrameCallback) -> FrameCallbackId {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.callbacks.push((id, callback));
        id
    }

    fn cancel(&self, id: FrameCallbackId) {
        let mut inner = self.inner.borrow_mut();
        if let Some(index) = inner.callbacks.iter().position(|(cb_id, _)| *cb_id == id) {
            inner.callbacks.remove(index);
        }
    }
}

impl Default for FrameScheduler {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle for registering frame callbacks against a [`FrameScheduler`].
#[derive(Clone)]
pub struct FrameClock {
    scheduler: FrameScheduler,
}

impl FrameClock {
    /// Run `callback` with the next frame's time in nanoseconds.
    pub fn with_frame_nanos(
        &self,
        callback: impl FnOnce(u64) + 'static,
    ) -> FrameCallbackRegistration {
        let id = self.scheduler.register(Box::new(callback));
        FrameCallbackRegistration {
            scheduler: self.scheduler.clone(),
            id: Some(id),
        }
    }
}

/// Keeps a registered frame callback alive; dropping it cancels the
/// callback if it has not fired yet.
pub struct FrameCallbackRegistration {
    scheduler: FrameScheduler,
    id: Option<FrameCallbackId>,
}

impl FrameCallbackRegistration {
    pub fn cancel(mut self) {
        if let Some(id) = self.id.take() {
            self.scheduler.cancel(id);
        }
    }
}

impl Drop for FrameCallbackRegistration {
    fn drop(&mut self) {
        if let Some(id) = self.id.take() {
            self.scheduler.cancel(id);
        }
    }
}

/// Pumps a [`FrameScheduler`] from wall-clock time, for hosts without a
/// frame loop of their own.
pub struct StdFrameDriver {
    scheduler: FrameScheduler,
    start: Instant,
}

impl StdFrameDriver {
    pub fn new(scheduler: FrameScheduler) -> Self {
        Self {
            scheduler,
            start: Instant::now(),
        }
    }

    /// Deliver one frame at the current time. Returns whether any
    /// callback was pending before the frame.
    pub fn pump(&self) -> bool {
        if !self.scheduler.has_pending() {
            return false;
        }
        let nanos = self.start.elapsed().as_nanos() as u64;
        self.scheduler.drain_frame_callbacks(nanos);
        true
    }
}

//! Swipe-to-dismiss ("slide back") gesture engine for a full-screen
//! overlay stacked above a host screen.
//!
//! The host forwards every raw touch event to [`SwipeEngine::on_touch_event`]
//! before its own dispatch and treats a `true` return as fully consumed.
//! While a gesture tracks the finger, the engine borrows the host screen's
//! content view underneath the overlay and moves three layers (host
//! preview, shadow strip, overlay content) from a single accumulated drag
//! distance. Releasing the finger resolves into a commit (overlay slides
//! out, host is notified once) or a cancel (overlay snaps back) via a
//! frame-clock tween.
//!
//! ```no_run
//! use std::rc::Rc;
//! use slideback::{
//!     Container, FrameScheduler, OverlayEnvironment, SlideBackHost, SwipeEngine, TouchEvent,
//! };
//!
//! struct Host;
//! impl SlideBackHost for Host {
//!     fn support_slide_back(&self) -> bool {
//!         true
//!     }
//!     fn on_swipe_back_finished(&self) {
//!         // close the overlay
//!     }
//! }
//!
//! let scheduler = FrameScheduler::new();
//! let env = OverlayEnvironment::new(900, 1600, 2.0)
//!     .host_container(Container::new("host"))
//!     .overlay_container(Container::new("overlay"));
//! let engine = SwipeEngine::new(Rc::new(Host), env, scheduler.clock()).unwrap();
//! let consumed = engine.on_touch_event(&TouchEvent::down(8.0));
//! # let _ = consumed;
//! ```

pub mod engine;
pub mod error;
pub mod host;
pub mod session;

pub use engine::SwipeEngine;
pub use error::SlideBackError;
pub use host::{OverlayEnvironment, SlideBackHost};
pub use session::{DragAccumulator, GestureSession};

pub use slideback_animation::{AnimationSpec, Easing, FrameClock, FrameScheduler, StdFrameDriver};
pub use slideback_input::{GestureState, Signal, TouchAction, TouchEvent, TouchGate};
pub use slideback_view::{Color, Container, LayoutParams, Length, View, ViewTriple, SHADOW_WIDTH};

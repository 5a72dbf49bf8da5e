//! The capability seam between the engine and the overlay that owns it.

use slideback_view::{Color, Container};

/// Capabilities the owning overlay provides to the engine.
///
/// `dispatch_cancel_below` and `dismiss_soft_input` are input-dispatch
/// primitives; they must not call back into the engine synchronously.
/// `on_swipe_back_finished` is invoked after the engine has fully reset,
/// so the host may dismiss itself (and call
/// [`crate::SwipeEngine::abort_immediately`]) from within it.
pub trait SlideBackHost {
    /// Whether the edge swipe is enabled for this overlay. Sampled once
    /// at engine construction, not re-checked mid-gesture.
    fn support_slide_back(&self) -> bool;

    /// Called exactly once per committed swipe, after the resolve
    /// animation completes and all views have been restored. The host is
    /// expected to close the overlay; the engine closes nothing itself.
    fn on_swipe_back_finished(&self);

    /// Deliver a synthetic cancel to the content beneath the gate so it
    /// abandons the gesture stream the engine just took over. Invoked
    /// once, at the exact event where a press turns into a drag.
    fn dispatch_cancel_below(&self) {}

    /// Hide any soft keyboard before views start moving.
    fn dismiss_soft_input(&self) {}
}

/// Display metrics and view containers the host supplies up front.
#[derive(Clone)]
pub struct OverlayEnvironment {
    pub screen_width_px: i32,
    pub screen_height_px: i32,
    pub density: f32,
    /// The host screen's content container. Required; its first child is
    /// the view borrowed during a gesture.
    pub host_container: Option<Container>,
    /// The overlay's own content container.
    pub overlay_container: Container,
    /// Background painted onto the overlay's content layer when it has
    /// none of its own, so the borrowed view does not shine through.
    pub window_background: Color,
    /// Platform touch slop in pixels; defaults to 8 dp when absent.
    pub touch_slop_px: Option<f32>,
}

impl OverlayEnvironment {
    pub fn new(screen_width_px: i32, screen_height_px: i32, density: f32) -> Self {
        Self {
            screen_width_px,
            screen_height_px,
            density,
            host_container: None,
            overlay_container: Container::new("overlay"),
            window_background: Color::TRANSPARENT,
            touch_slop_px: None,
        }
    }

    pub fn host_container(mut self, container: Container) -> Self {
        self.host_container = Some(container);
        self
    }

    pub fn overlay_container(mut self, container: Container) -> Self {
        self.overlay_container = container;
        self
    }

    pub fn window_background(mut self, color: Color) -> Self {
        self.window_background = color;
        self
    }

    pub fn touch_slop_px(mut self, slop: f32) -> Self {
        self.touch_slop_px = Some(slop);
        self
    }
}

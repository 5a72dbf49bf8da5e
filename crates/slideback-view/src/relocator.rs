//! Relocation of the host content view and the depth-cue shadow strip.

use log::debug;

use crate::color::Color;
use crate::container::Container;
use crate::layout::LayoutParams;
use crate::view::View;

/// Width of the shadow strip in physical pixels.
pub const SHADOW_WIDTH: f32 = 50.0;

const SHADOW_COLOR: Color = Color::rgba(0.0, 0.0, 0.0, 0.8);

/// Snapshot of the three animated layers, back to front.
///
/// The borrowed host preview and the shadow strip exist only while a
/// gesture is in flight; the overlay's own content is always present.
#[derive(Clone, Debug)]
pub struct ViewTriple {
    pub host_preview: Option<View>,
    pub shadow: Option<View>,
    pub overlay_content: View,
}

/// Moves the host screen's content view under the overlay for the
/// duration of a gesture and puts it back afterwards.
///
/// While a borrow is active the overlay container holds, back to front:
/// the shadow strip (if attached), the borrowed host content, then the
/// overlay's own content. The borrowed view is parented in exactly one
/// container at any time; the relocator is the only code that moves it.
pub struct ViewRelocator {
    host_container: Container,
    overlay_container: Container,
    host_content: Option<View>,
    saved_params: Option<LayoutParams>,
    shadow: Option<View>,
}

impl ViewRelocator {
    pub fn new(host_container: Container, overlay_container: Container) -> Self {
        Self {
            host_container,
            overlay_container,
            host_content: None,
            saved_params: None,
            shadow: None,
        }
    }

    /// Detach the host's root content view and insert it as the overlay's
    /// back-most child, remembering its original layout parameters.
    ///
    /// Returns `false` without touching anything when the overlay has no
    /// content of its own, when a borrow is already active (three or more
    /// overlay children), or when the host has nothing to lend.
    pub fn borrow_host_content(&mut self) -> bool {
        if self.overlay_container.child_count() == 0 {
            self.host_content = None;
            return false;
        }
        if self.overlay_container.child_count() >= 3 {
            // a previous borrow is still in place
            return false;
        }
        let Some(content) = self.host_container.child_at(0) else {
            self.host_content = None;
            return false;
        };

        self.host_container.remove_child(&content);
        self.saved_params = Some(content.layout_params());
        self.overlay_container
            .add_child(content.clone(), 0, LayoutParams::MATCH_PARENT);
        debug!("borrowed host content view {:?}", content);
        self.host_content = Some(content);
        true
    }

    /// Return the borrowed view to the host container with its original
    /// layout parameters. No-op when nothing is borrowed.
    pub fn restore_host_content(&mut self) {
        let Some(content) = self.host_content.take() else {
            return;
        };
        self.overlay_container.remove_child(&content);
        let params = self.saved_params.take().unwrap_or_default();
        let index = self.host_container.child_count();
        self.host_container.add_child(content.clone(), index, params);
        debug!("restored host content view {:?}", content);
    }

    /// Lazily create the shadow strip just off the left edge and insert
    /// it as the overlay's back-most child. An already-parented shadow is
    /// removed and recreated rather than reused.
    pub fn attach_shadow(&mut self) {
        if let Some(shadow) = &self.shadow {
            if shadow.is_parented() {
                self.detach_shadow();
            }
        }
        let shadow = View::with_layout("shadow", LayoutParams::strip(SHADOW_WIDTH));
        shadow.set_background(Some(SHADOW_COLOR));
        shadow.set_translation_x(-SHADOW_WIDTH);
        self.overlay_container
            .add_child(shadow.clone(), 0, LayoutParams::strip(SHADOW_WIDTH));
        self.shadow = Some(shadow);
    }

    /// Remove and discard the shadow strip; safe to call when none exists.
    pub fn detach_shadow(&mut self) {
        if let Some(shadow) = self.shadow.take() {
            self.overlay_container.remove_child(&shadow);
        }
    }

    /// The overlay's own content: the child immediately above whatever
    /// combination of borrowed view and shadow is currently present.
    pub fn front_view(&self) -> Option<View> {
        let mut index = 0;
        if self.host_content.is_some() {
            index += 1;
        }
        if self.shadow.is_some() {
            index += 1;
        }
        self.overlay_container.child_at(index)
    }

    /// Current layer handles, or `None` when the overlay has no content
    /// view at the expected index.
    pub fn layers(&self) -> Option<ViewTriple> {
        Some(ViewTriple {
            host_preview: self.host_content.clone(),
            shadow: self.shadow.clone(),
            overlay_content: self.front_view()?,
        })
    }

    pub fn host_content(&self) -> Option<View> {
        self.host_content.clone()
    }

    pub fn shadow_view(&self) -> Option<View> {
        self.shadow.clone()
    }

    pub fn is_borrow_active(&self) -> bool {
        self.host_content.is_some()
    }
}

#[cfg(test)]
#[path = "tests/relocator_tests.rs"]
mod tests;

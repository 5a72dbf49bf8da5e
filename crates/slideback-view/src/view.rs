//! Cheap view handles over shared mutable view state.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use crate::color::Color;
use crate::layout::LayoutParams;

static NEXT_VIEW_ID: AtomicU64 = AtomicU64::new(1);

/// Handle to a single view. Clones share the same underlying state, so a
/// handle can be captured by animation callbacks while the relocator
/// keeps its own.
#[derive(Clone)]
pub struct View {
    inner: Rc<RefCell<ViewInner>>,
}

struct ViewInner {
    id: u64,
    label: &'static str,
    translation_x: f32,
    background: Option<Color>,
    layout: LayoutParams,
    /// Id of the container currently holding this view, if any. Written
    /// only by `Container`; a view is parented by at most one container.
    parent: Option<u64>,
}

impl View {
    pub fn new(label: &'static str) -> Self {
        Self::with_layout(label, LayoutParams::default())
    }

    pub fn with_layout(label: &'static str, layout: LayoutParams) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ViewInner {
                id: NEXT_VIEW_ID.fetch_add(1, Ordering::Relaxed),
                label,
                translation_x: 0.0,
                background: None,
                layout,
                parent: None,
            })),
        }
    }

    pub fn id(&self) -> u64 {
        self.inner.borrow().id
    }

    pub fn label(&self) -> &'static str {
        self.inner.borrow().label
    }

    pub fn translation_x(&self) -> f32 {
        self.inner.borrow().translation_x
    }

    pub fn set_translation_x(&self, x: f32) {
        self.inner.borrow_mut().translation_x = x;
    }

    pub fn background(&self) -> Option<Color> {
        self.inner.borrow().background
    }

    pub fn set_background(&self, color: Option<Color>) {
        self.inner.borrow_mut().background = color;
    }

    pub fn layout_params(&self) -> LayoutParams {
        self.inner.borrow().layout
    }

    pub fn set_layout_params(&self, layout: LayoutParams) {
        self.inner.borrow_mut().layout = layout;
    }

    pub fn is_parented(&self) -> bool {
        self.inner.borrow().parent.is_some()
    }

    pub(crate) fn parent_id(&self) -> Option<u64> {
        self.inner.borrow().parent
    }

    pub(crate) fn set_parent_id(&self, parent: Option<u64>) {
        self.inner.borrow_mut().parent = parent;
    }

    /// Whether two handles refer to the same view.
    pub fn ptr_eq(&self, other: &View) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl std::fmt::Debug for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("View")
            .field("id", &inner.id)
            .field("label", &inner.label)
            .field("translation_x", &inner.translation_x)
            .finish()
    }
}

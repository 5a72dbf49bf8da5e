//! Ordered view containers.

use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

use smallvec::SmallVec;

use crate::layout::LayoutParams;
use crate::view::View;

static NEXT_CONTAINER_ID: AtomicU64 = AtomicU64::new(1);

/// Handle to an ordered child list. Index 0 is the back-most child.
///
/// This is the view-tree mutation primitive the gesture consumes: insert,
/// remove, and index queries. Anything richer (layout, drawing, z-order
/// tricks) stays with the host platform.
#[derive(Clone)]
pub struct Container {
    inner: Rc<RefCell<ContainerInner>>,
}

struct ContainerInner {
    id: u64,
    label: &'static str,
    children: SmallVec<[View; 3]>,
}

impl Container {
    pub fn new(label: &'static str) -> Self {
        Self {
            inner: Rc::new(RefCell::new(ContainerInner {
                id: NEXT_CONTAINER_ID.fetch_add(1, Ordering::Relaxed),
                label,
                children: SmallVec::new(),
            })),
        }
    }

    pub fn label(&self) -> &'static str {
        self.inner.borrow().label
    }

    pub fn child_count(&self) -> usize {
        self.inner.borrow().children.len()
    }

    pub fn child_at(&self, index: usize) -> Option<View> {
        self.inner.borrow().children.get(index).cloned()
    }

    pub fn index_of(&self, view: &View) -> Option<usize> {
        self.inner
            .borrow()
            .children
            .iter()
            .position(|child| child.ptr_eq(view))
    }

    pub fn contains(&self, view: &View) -> bool {
        self.index_of(view).is_some()
    }

    /// Insert `view` at `index` with the given layout parameters.
    ///
    /// The view must not be parented elsewhere; the relocator always
    /// detaches before reattaching.
    pub fn add_child(&self, view: View, index: usize, layout: LayoutParams) {
        debug_assert!(
            view.parent_id().is_none(),
            "view {:?} is already parented",
            view
        );
        let mut inner = self.inner.borrow_mut();
        let index = index.min(inner.children.len());
        view.set_layout_params(layout);
        view.set_parent_id(Some(inner.id));
        inner.children.insert(index, view);
    }

    /// Append `view`, keeping its current layout parameters.
    pub fn append_child(&self, view: View) {
        let layout = view.layout_params();
        let index = self.child_count();
        self.add_child(view, index, layout);
    }

    /// Remove `view` if present. Returns whether it was a child.
    pub fn remove_child(&self, view: &View) -> bool {
        let mut inner = self.inner.borrow_mut();
        match inner.children.iter().position(|child| child.ptr_eq(view)) {
            Some(index) => {
                inner.children.remove(index);
                view.set_parent_id(None);
                true
            }
            None => false,
        }
    }
}

impl std::fmt::Debug for Container {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Container")
            .field("label", &inner.label)
            .field("children", &inner.children.len())
            .finish()
    }
}

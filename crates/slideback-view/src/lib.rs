//! Retained view handles and view relocation for Slideback.
//!
//! The host platform owns real widgets; this crate models the minimal
//! view-tree surface the swipe gesture needs: cheap view handles with a
//! horizontal translation, ordered containers, and the [`ViewRelocator`]
//! that temporarily moves the host screen's content view underneath the
//! overlay while a gesture is in flight.

pub mod color;
pub mod container;
pub mod layout;
pub mod relocator;
pub mod view;

pub use color::Color;
pub use container::Container;
pub use layout::{LayoutParams, Length};
pub use relocator::{ViewRelocator, ViewTriple, SHADOW_WIDTH};
pub use view::View;

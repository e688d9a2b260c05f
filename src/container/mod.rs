//! Reference holders, one per [`Strategy`].
//!
//! Every container implements [`ReferenceContainer`], which is all the
//! guarded closures of [`CaptureItem`] need to know about it.

use crate::{CaptureItem, RefCounted, Strategy};

mod captured;
mod shared;
mod strong;
mod unowned;
mod weak;

pub use captured::Captured;
pub use shared::Shared;
pub use strong::Strong;
pub use unowned::Unowned;
pub use weak::Weak;

pub trait ReferenceContainer {
    /// Strong pointer handed to guarded closures.
    type Pointer: RefCounted;

    /// Strong pointer to the object if it is still alive.
    ///
    /// # Panics
    ///
    /// Unowned containers panic if their object was dropped.
    fn object(&self) -> Option<Self::Pointer>;

    /// Point the container at another object, or at nothing.
    ///
    /// Unowned containers can't be empty and ignore `None`.
    fn set_object(&mut self, object: Option<Self::Pointer>);

    fn strategy(&self) -> Strategy;

    /// Wrap the container to build guarded closures out of it.
    fn capture(self) -> CaptureItem<Self>
    where
        Self: Sized,
    {
        CaptureItem::new(self)
    }
}

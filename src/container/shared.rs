use core::fmt;

use alloc::sync::Arc;

use parking_lot::RwLock;

use crate::{ReferenceContainer, Strategy};

/// A container behind a shared slot.
///
/// Clones point to the same slot, so closures guarded by one clone see
/// every later [`Shared::assign`] or [`Shared::clear`] made through
/// another. Handy when the object a closure should capture is only
/// created after the closure itself.
///
/// ```
/// use std::rc::Rc;
/// use capture_guard::{ReferenceContainer, Shared, Weak};
///
/// let slot = Shared::new(Weak::<Rc<String>>::empty());
/// let len = slot.clone().capture().fn_or(0, |s: Rc<String>, ()| s.len());
/// assert_eq!(len(()), 0);
///
/// let object = Rc::new("four".to_owned());
/// slot.assign(&object);
/// assert_eq!(len(()), 4);
/// ```
pub struct Shared<C> {
    slot: Arc<RwLock<C>>,
}

impl<C: ReferenceContainer> Shared<C> {
    pub fn new(container: C) -> Self {
        Shared {
            slot: Arc::new(RwLock::new(container)),
        }
    }

    pub fn assign(&self, object: &C::Pointer) {
        self.slot.write().set_object(Some(object.clone()));
    }

    pub fn clear(&self) {
        self.slot.write().set_object(None);
    }

    /// Replace the whole container, possibly switching the strategy.
    pub fn replace(&self, container: C) -> C {
        core::mem::replace(&mut *self.slot.write(), container)
    }

    /// Copy of the current container, detached from the slot.
    pub fn unboxed(&self) -> C
    where
        C: Clone,
    {
        self.slot.read().clone()
    }
}

impl<C: ReferenceContainer> ReferenceContainer for Shared<C> {
    type Pointer = C::Pointer;

    fn object(&self) -> Option<C::Pointer> {
        self.slot.read().object()
    }

    fn set_object(&mut self, object: Option<C::Pointer>) {
        self.slot.write().set_object(object);
    }

    fn strategy(&self) -> Strategy {
        self.slot.read().strategy()
    }
}

impl<C> Clone for Shared<C> {
    fn clone(&self) -> Self {
        Shared {
            slot: Arc::clone(&self.slot),
        }
    }
}

impl<C: ReferenceContainer + Default> Default for Shared<C> {
    fn default() -> Self {
        Shared::new(C::default())
    }
}

impl<C: fmt::Debug> fmt::Debug for Shared<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Shared").field(&*self.slot.read()).finish()
    }
}

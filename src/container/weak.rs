use core::fmt;

use crate::{RefCounted, ReferenceContainer, Strategy};

/// Holds an object without keeping it alive.
///
/// ```
/// use std::rc::Rc;
/// use capture_guard::{ReferenceContainer, Weak};
///
/// let object = Rc::new(5);
/// let weak = Weak::new(&object);
/// assert_eq!(weak.object().as_deref(), Some(&5));
///
/// drop(object);
/// assert!(weak.object().is_none());
/// ```
pub struct Weak<P: RefCounted> {
    handle: P::Weak,
}

impl<P: RefCounted> Weak<P> {
    pub fn new(object: &P) -> Self {
        Weak {
            handle: P::downgrade(object),
        }
    }

    pub fn empty() -> Self {
        Weak {
            handle: P::empty_weak(),
        }
    }

    /// Create an object which may weakly capture itself while being
    /// built.
    ///
    /// Closures guarded by the passed container fall back until
    /// `data_fn` returns, and reach the finished object afterwards.
    ///
    /// ```
    /// use std::sync::Arc;
    /// use capture_guard::{ReferenceContainer, Weak};
    ///
    /// struct Button {
    ///     title: String,
    ///     on_tap: Box<dyn Fn(()) -> Option<String> + Send + Sync>,
    /// }
    ///
    /// let button = Weak::<Arc<Button>>::cyclic(|this| Button {
    ///     title: "ok".to_owned(),
    ///     on_tap: Box::new(this.capture().fn_(|this: Arc<Button>, ()| this.title.clone())),
    /// });
    /// assert_eq!((button.on_tap)(()).as_deref(), Some("ok"));
    /// ```
    pub fn cyclic<F>(data_fn: F) -> P
    where
        F: FnOnce(Self) -> P::Target,
        P::Target: Sized,
    {
        P::new_cyclic(|handle| {
            data_fn(Weak {
                handle: handle.clone(),
            })
        })
    }

    pub fn is_alive(&self) -> bool {
        P::upgrade(&self.handle).is_some()
    }

    pub(crate) fn handle(&self) -> &P::Weak {
        &self.handle
    }
}

impl<P: RefCounted> ReferenceContainer for Weak<P> {
    type Pointer = P;

    fn object(&self) -> Option<P> {
        P::upgrade(&self.handle)
    }

    fn set_object(&mut self, object: Option<P>) {
        self.handle = match object {
            Some(object) => P::downgrade(&object),
            None => P::empty_weak(),
        };
    }

    fn strategy(&self) -> Strategy {
        Strategy::Weak
    }
}

impl<P: RefCounted> Clone for Weak<P> {
    fn clone(&self) -> Self {
        Weak {
            handle: self.handle.clone(),
        }
    }
}

impl<P: RefCounted> Default for Weak<P> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<P: RefCounted> From<&P> for Weak<P> {
    fn from(object: &P) -> Self {
        Weak::new(object)
    }
}

impl<P: RefCounted> fmt::Debug for Weak<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Weak")
            .field("alive", &self.is_alive())
            .finish()
    }
}

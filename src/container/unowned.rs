use core::fmt;

use crate::{Error, RefCounted, ReferenceContainer, Result, Strategy, Weak};

/// Holds an object without keeping it alive, assuming it will outlive
/// the container.
///
/// Unlike [`Weak`] it is never empty, and reading it after the object was
/// dropped is a bug: [`ReferenceContainer::object`] panics in that case.
/// Use [`Unowned::try_object`] to observe the failure instead.
pub struct Unowned<P: RefCounted> {
    handle: P::Weak,
}

impl<P: RefCounted> Unowned<P> {
    pub fn new(object: &P) -> Self {
        Unowned {
            handle: P::downgrade(object),
        }
    }

    /// Same as [`Weak::cyclic`], except guarded closures called before
    /// `data_fn` returns panic instead of falling back.
    pub fn cyclic<F>(data_fn: F) -> P
    where
        F: FnOnce(Self) -> P::Target,
        P::Target: Sized,
    {
        Weak::<P>::cyclic(|weak| {
            data_fn(Unowned {
                handle: weak.handle().clone(),
            })
        })
    }

    pub fn try_object(&self) -> Result<P> {
        P::upgrade(&self.handle).ok_or(Error::Deallocated)
    }

    /// Strong pointer to the object.
    ///
    /// # Panics
    ///
    /// If the object was already dropped.
    pub fn get(&self) -> P {
        match self.try_object() {
            Ok(object) => object,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<P: RefCounted> ReferenceContainer for Unowned<P> {
    type Pointer = P;

    fn object(&self) -> Option<P> {
        Some(self.get())
    }

    fn set_object(&mut self, object: Option<P>) {
        if let Some(object) = object {
            self.handle = P::downgrade(&object);
        }
    }

    fn strategy(&self) -> Strategy {
        Strategy::Unowned
    }
}

impl<P: RefCounted> Clone for Unowned<P> {
    fn clone(&self) -> Self {
        Unowned {
            handle: self.handle.clone(),
        }
    }
}

impl<P: RefCounted> From<&P> for Unowned<P> {
    fn from(object: &P) -> Self {
        Unowned::new(object)
    }
}

impl<P: RefCounted> fmt::Debug for Unowned<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Unowned")
            .field("alive", &self.try_object().is_ok())
            .finish()
    }
}

use core::fmt;

use crate::{RefCounted, ReferenceContainer, Strategy};

/// Holds an object and keeps it alive.
pub struct Strong<P: RefCounted> {
    object: Option<P>,
}

impl<P: RefCounted> Strong<P> {
    pub fn new(object: &P) -> Self {
        Strong {
            object: Some(object.clone()),
        }
    }

    pub fn empty() -> Self {
        Strong { object: None }
    }

    /// Release the object, returning it.
    pub fn take(&mut self) -> Option<P> {
        self.object.take()
    }
}

impl<P: RefCounted> ReferenceContainer for Strong<P> {
    type Pointer = P;

    fn object(&self) -> Option<P> {
        self.object.clone()
    }

    fn set_object(&mut self, object: Option<P>) {
        self.object = object;
    }

    fn strategy(&self) -> Strategy {
        Strategy::Strong
    }
}

impl<P: RefCounted> Clone for Strong<P> {
    fn clone(&self) -> Self {
        Strong {
            object: self.object.clone(),
        }
    }
}

impl<P: RefCounted> Default for Strong<P> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<P: RefCounted> From<P> for Strong<P> {
    fn from(object: P) -> Self {
        Strong {
            object: Some(object),
        }
    }
}

impl<P: RefCounted> fmt::Debug for Strong<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Strong")
            .field("present", &self.object.is_some())
            .finish()
    }
}

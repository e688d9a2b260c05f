use core::fmt;

use log::debug;

use crate::{Error, RefCounted, ReferenceContainer, Result, Strategy, Strong, Unowned, Weak};

/// Container with a strategy picked at run time.
pub enum Captured<P: RefCounted> {
    Weak(Weak<P>),
    Strong(Strong<P>),
    Unowned(Unowned<P>),
}

impl<P: RefCounted> Captured<P> {
    pub fn new(object: &P, strategy: Strategy) -> Self {
        match strategy {
            Strategy::Weak => Captured::Weak(Weak::new(object)),
            Strategy::Strong => Captured::Strong(Strong::new(object)),
            Strategy::Unowned => Captured::Unowned(Unowned::new(object)),
        }
    }

    /// Captures strongly if `strong` is set, weakly otherwise.
    pub fn with_flag(object: Option<&P>, strong: bool) -> Self {
        match (object, strong) {
            (Some(object), true) => Captured::Strong(Strong::new(object)),
            (None, true) => Captured::Strong(Strong::empty()),
            (Some(object), false) => Captured::Weak(Weak::new(object)),
            (None, false) => Captured::Weak(Weak::empty()),
        }
    }

    /// Fails for [`Strategy::Unowned`] when there is no object, as unowned
    /// references can't be empty.
    pub fn try_from_option(object: Option<&P>, strategy: Strategy) -> Result<Self> {
        match (object, strategy) {
            (Some(object), strategy) => Ok(Captured::new(object, strategy)),
            (None, Strategy::Unowned) => Err(Error::MissingObject { strategy }),
            (None, strategy) => Ok(Captured::with_flag(None, strategy.is_owning())),
        }
    }

    /// Same as [`Captured::try_from_option`], but an absent object
    /// requested as [`Strategy::Unowned`] is captured weakly instead.
    pub fn from_option(object: Option<&P>, strategy: Strategy) -> Self {
        Self::try_from_option(object, strategy).unwrap_or_else(|err| {
            debug!("{err}, capturing weakly instead");
            Captured::Weak(Weak::empty())
        })
    }
}

impl<P: RefCounted> ReferenceContainer for Captured<P> {
    type Pointer = P;

    fn object(&self) -> Option<P> {
        match self {
            Captured::Weak(inner) => inner.object(),
            Captured::Strong(inner) => inner.object(),
            Captured::Unowned(inner) => inner.object(),
        }
    }

    fn set_object(&mut self, object: Option<P>) {
        match self {
            Captured::Weak(inner) => inner.set_object(object),
            Captured::Strong(inner) => inner.set_object(object),
            Captured::Unowned(inner) => inner.set_object(object),
        }
    }

    fn strategy(&self) -> Strategy {
        match self {
            Captured::Weak(_) => Strategy::Weak,
            Captured::Strong(_) => Strategy::Strong,
            Captured::Unowned(_) => Strategy::Unowned,
        }
    }
}

impl<P: RefCounted> Clone for Captured<P> {
    fn clone(&self) -> Self {
        match self {
            Captured::Weak(inner) => Captured::Weak(inner.clone()),
            Captured::Strong(inner) => Captured::Strong(inner.clone()),
            Captured::Unowned(inner) => Captured::Unowned(inner.clone()),
        }
    }
}

impl<P: RefCounted> Default for Captured<P> {
    fn default() -> Self {
        Captured::Weak(Weak::empty())
    }
}

impl<P: RefCounted> From<Weak<P>> for Captured<P> {
    fn from(inner: Weak<P>) -> Self {
        Captured::Weak(inner)
    }
}

impl<P: RefCounted> From<Strong<P>> for Captured<P> {
    fn from(inner: Strong<P>) -> Self {
        Captured::Strong(inner)
    }
}

impl<P: RefCounted> From<Unowned<P>> for Captured<P> {
    fn from(inner: Unowned<P>) -> Self {
        Captured::Unowned(inner)
    }
}

impl<P: RefCounted> fmt::Debug for Captured<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Captured::Weak(inner) => fmt::Debug::fmt(inner, f),
            Captured::Strong(inner) => fmt::Debug::fmt(inner, f),
            Captured::Unowned(inner) => fmt::Debug::fmt(inner, f),
        }
    }
}

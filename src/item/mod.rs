//! Guarded closures.
//!
//! A [`CaptureItem`] turns a closure taking the captured object into a
//! closure which only receives the object's input. On every call it
//! reads the object out of its container first, and if the object is
//! gone it returns a fallback instead of calling the closure.

use log::{debug, trace};

use crate::{Captured, RefCounted, ReferenceContainer, Result, Strategy};

mod func;
mod future;

pub use future::{GuardedFuture, GuardedFutureOr};

pub struct CaptureItem<C> {
    container: C,
}

impl<C: ReferenceContainer> CaptureItem<C> {
    pub fn new(container: C) -> Self {
        CaptureItem { container }
    }

    pub fn object(&self) -> Option<C::Pointer> {
        self.container.object()
    }

    pub fn strategy(&self) -> Strategy {
        self.container.strategy()
    }

    pub fn into_inner(self) -> C {
        self.container
    }

    /// Capture the same object with another strategy.
    ///
    /// An absent object requested as [`Strategy::Unowned`] is captured
    /// weakly instead.
    pub fn as_strategy(&self, strategy: Strategy) -> CaptureItem<Captured<C::Pointer>> {
        CaptureItem::new(Captured::from_option(self.object().as_ref(), strategy))
    }

    /// Capture the same object with another strategy, failing with
    /// [`Error::MissingObject`](crate::Error::MissingObject) if it is
    /// absent and [`Strategy::Unowned`] was requested.
    pub fn try_as_strategy(
        &self,
        strategy: Strategy,
    ) -> Result<CaptureItem<Captured<C::Pointer>>> {
        Captured::try_from_option(self.object().as_ref(), strategy)
            .map(CaptureItem::new)
            .map_err(|err| {
                debug!("refusing to override {} capture: {err}", self.strategy());
                err
            })
    }
}

impl<P: RefCounted> CaptureItem<Captured<P>> {
    /// Convert any container into a type erased item.
    pub fn erased<C>(container: C) -> Self
    where
        C: Into<Captured<P>>,
    {
        CaptureItem::new(container.into())
    }
}

impl<C: Clone> Clone for CaptureItem<C> {
    fn clone(&self) -> Self {
        CaptureItem {
            container: self.container.clone(),
        }
    }
}

impl<C: core::fmt::Debug> core::fmt::Debug for CaptureItem<C> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_tuple("CaptureItem").field(&self.container).finish()
    }
}

fn fell_back(strategy: Strategy) {
    trace!("captured object is gone, {strategy} capture guard returned fallback");
}

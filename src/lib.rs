//! # Capture guard
//!
//! Capture shared objects inside closures as weak, strong or unowned
//! references. The returned closures check whether the object is still
//! alive before every call, and return a fallback instead of calling
//! your closure when it is gone.
//!
//! ## Examples
//!
//! Weak capture
//!
//! ```
//! use std::sync::{Arc, Mutex};
//! use std::thread;
//!
//! use capture_guard::Capturable;
//!
//! struct Counter {
//!     value: Mutex<u32>,
//! }
//!
//! let counter = Arc::new(Counter { value: Mutex::new(0) });
//!
//! // Doesn't keep `counter` alive.
//! let increment = counter.capture().fn_(|counter: Arc<Counter>, by: u32| {
//!     *counter.value.lock().unwrap() += by;
//! });
//!
//! let increment = thread::spawn(move || {
//!     increment(2);
//!     increment
//! })
//! .join()
//! .unwrap();
//! assert_eq!(*counter.value.lock().unwrap(), 2);
//!
//! drop(counter);
//! // Object is gone, so the closure isn't called.
//! assert_eq!(increment(2), None);
//! ```
//!
//! Picking strategies
//!
//! ```
//! use std::rc::Rc;
//!
//! use capture_guard::{Capturable, Strategy};
//!
//! let name = Rc::new(String::from("guard"));
//!
//! let weak = name.capture().fn_or(0, |name: Rc<String>, ()| name.len());
//! let strong = name
//!     .capture_as(Strategy::Strong)
//!     .fn_or(0, |name: Rc<String>, ()| name.len());
//!
//! drop(name);
//! // Strong capture keeps `name` alive, so the weak one still sees it.
//! assert_eq!(strong(()), 5);
//! assert_eq!(weak(()), 5);
//!
//! drop(strong);
//! assert_eq!(weak(()), 0);
//! ```

extern crate alloc;

pub mod container;
mod error;
pub mod item;
mod pointer_like;
mod strategy;

pub use crate::container::{Captured, ReferenceContainer, Shared, Strong, Unowned, Weak};
pub use crate::error::{Error, Result};
pub use crate::item::{CaptureItem, GuardedFuture, GuardedFutureOr};
pub use crate::pointer_like::RefCounted;
pub use crate::strategy::Strategy;

/// Capture conversions for shared pointers, implemented for every
/// [`RefCounted`] pointer.
pub trait Capturable: RefCounted {
    /// Capture weakly.
    fn capture(&self) -> CaptureItem<Captured<Self>> {
        self.capture_as(Strategy::Weak)
    }

    /// Capture with the given strategy.
    fn capture_as(&self, strategy: Strategy) -> CaptureItem<Captured<Self>> {
        CaptureItem::new(Captured::new(self, strategy))
    }
}

impl<P: RefCounted> Capturable for P {}

/// Weakly capture `object` in `f`.
///
/// The returned closure returns `None` once `object` is dropped.
pub fn capture<P, F, I, O>(object: &P, f: F) -> impl Fn(I) -> Option<O>
where
    P: RefCounted,
    F: Fn(P, I) -> O,
{
    Weak::new(object).capture().fn_(f)
}

/// Weakly capture `object` in `f`, returning a clone of `default` once
/// `object` is dropped.
pub fn capture_or<P, F, I, O>(object: &P, default: O, f: F) -> impl Fn(I) -> O
where
    P: RefCounted,
    F: Fn(P, I) -> O,
    O: Clone,
{
    Weak::new(object).capture().fn_or(default, f)
}

/// Weakly capture `object` in `f`, returning the result of `default`
/// once `object` is dropped.
pub fn capture_or_else<P, F, D, I, O>(object: &P, default: D, f: F) -> impl Fn(I) -> O
where
    P: RefCounted,
    F: Fn(P, I) -> O,
    D: Fn() -> O,
{
    Weak::new(object).capture().fn_or_else(default, f)
}

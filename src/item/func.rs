use crate::{CaptureItem, ReferenceContainer};

use super::fell_back;

impl<C: ReferenceContainer> CaptureItem<C> {
    /// Returns `None` instead of calling `f` once the object is gone.
    pub fn fn_<F, I, O>(self, f: F) -> impl Fn(I) -> Option<O>
    where
        F: Fn(C::Pointer, I) -> O,
    {
        self.fn_or_else(|| None, move |object, input| Some(f(object, input)))
    }

    /// Returns a clone of `default` instead of calling `f` once the object
    /// is gone.
    pub fn fn_or<F, I, O>(self, default: O, f: F) -> impl Fn(I) -> O
    where
        F: Fn(C::Pointer, I) -> O,
        O: Clone,
    {
        self.fn_or_else(move || default.clone(), f)
    }

    pub fn fn_or_else<F, D, I, O>(self, default: D, f: F) -> impl Fn(I) -> O
    where
        F: Fn(C::Pointer, I) -> O,
        D: Fn() -> O,
    {
        let container = self.container;
        move |input| match container.object() {
            Some(object) => f(object, input),
            None => {
                fell_back(container.strategy());
                default()
            }
        }
    }

    pub fn fn_mut<F, I, O>(self, mut f: F) -> impl FnMut(I) -> Option<O>
    where
        F: FnMut(C::Pointer, I) -> O,
    {
        self.fn_mut_or_else(|| None, move |object, input| Some(f(object, input)))
    }

    pub fn fn_mut_or_else<F, D, I, O>(self, mut default: D, mut f: F) -> impl FnMut(I) -> O
    where
        F: FnMut(C::Pointer, I) -> O,
        D: FnMut() -> O,
    {
        let container = self.container;
        move |input| match container.object() {
            Some(object) => f(object, input),
            None => {
                fell_back(container.strategy());
                default()
            }
        }
    }

    pub fn fn_once<F, I, O>(self, f: F) -> impl FnOnce(I) -> Option<O>
    where
        F: FnOnce(C::Pointer, I) -> O,
    {
        self.fn_once_or_else(|| None, move |object, input| Some(f(object, input)))
    }

    pub fn fn_once_or_else<F, D, I, O>(self, default: D, f: F) -> impl FnOnce(I) -> O
    where
        F: FnOnce(C::Pointer, I) -> O,
        D: FnOnce() -> O,
    {
        let container = self.container;
        move |input| match container.object() {
            Some(object) => f(object, input),
            None => {
                fell_back(container.strategy());
                default()
            }
        }
    }

    /// Guards a fallible closure. Its errors are passed through, while a
    /// gone object results in `Ok(None)`.
    pub fn try_fn<F, I, O, E>(self, f: F) -> impl Fn(I) -> Result<Option<O>, E>
    where
        F: Fn(C::Pointer, I) -> Result<O, E>,
    {
        self.fn_or_else(|| Ok(None), move |object, input| f(object, input).map(Some))
    }

    pub fn try_fn_or_else<F, D, I, O, E>(self, default: D, f: F) -> impl Fn(I) -> Result<O, E>
    where
        F: Fn(C::Pointer, I) -> Result<O, E>,
        D: Fn() -> O,
    {
        self.fn_or_else(move || Ok(default()), f)
    }
}

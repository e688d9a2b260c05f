use core::future::Future;
use core::mem;
use core::pin::Pin;
use core::task::{self, ready};

use alloc::sync::Arc;

use crate::{CaptureItem, ReferenceContainer};

use super::fell_back;

impl<C: ReferenceContainer + Clone> CaptureItem<C> {
    /// Guards an async closure.
    ///
    /// The object is looked up when the returned future is first polled,
    /// not when it is created, and then kept alive until `f`'s future
    /// completes. Resolves to `None` if the object was gone by then.
    pub fn future_fn<F, I, Fut>(self, f: F) -> impl Fn(I) -> GuardedFuture<C, F, I, Fut>
    where
        F: Fn(C::Pointer, I) -> Fut,
        Fut: Future,
    {
        let container = self.container;
        let f = Arc::new(f);
        move |input| GuardedFuture::new(container.clone(), Arc::clone(&f), input)
    }

    pub fn future_fn_or_else<F, D, I, Fut>(
        self,
        default: D,
        f: F,
    ) -> impl Fn(I) -> GuardedFutureOr<C, F, D, I, Fut>
    where
        F: Fn(C::Pointer, I) -> Fut,
        D: Fn() -> Fut::Output,
        Fut: Future,
    {
        let guarded = self.future_fn(f);
        let default = Arc::new(default);
        move |input| GuardedFutureOr {
            inner: guarded(input),
            default: Arc::clone(&default),
        }
    }
}

/// Future returned from closures built by [`CaptureItem::future_fn`].
pub struct GuardedFuture<C: ReferenceContainer, F, I, Fut> {
    state: State<C, F, I, Fut>,
}

enum State<C: ReferenceContainer, F, I, Fut> {
    Pending {
        container: C,
        f: Arc<F>,
        input: I,
    },
    // `fut` is the only pinned field
    Running {
        fut: Fut,
        // drop after `fut`
        _object: C::Pointer,
    },
    Done,
}

impl<C: ReferenceContainer, F, I, Fut> GuardedFuture<C, F, I, Fut> {
    fn new(container: C, f: Arc<F>, input: I) -> Self {
        GuardedFuture {
            state: State::Pending { container, f, input },
        }
    }
}

impl<C, F, I, Fut> Future for GuardedFuture<C, F, I, Fut>
where
    C: ReferenceContainer,
    F: Fn(C::Pointer, I) -> Fut,
    Fut: Future,
{
    type Output = Option<Fut::Output>;

    fn poll(self: Pin<&mut Self>, cx: &mut task::Context<'_>) -> task::Poll<Self::Output> {
        // SAFETY: nothing is moved out of `State::Running`
        let this = unsafe { self.get_unchecked_mut() };
        if let State::Pending { .. } = this.state {
            let State::Pending { container, f, input } = mem::replace(&mut this.state, State::Done)
            else {
                unreachable!()
            };
            match container.object() {
                Some(object) => {
                    let fut = (*f)(object.clone(), input);
                    this.state = State::Running {
                        fut,
                        _object: object,
                    };
                }
                None => {
                    fell_back(container.strategy());
                    return task::Poll::Ready(None);
                }
            }
        }
        let State::Running { fut, .. } = &mut this.state else {
            panic!("`GuardedFuture` polled after completion")
        };
        // SAFETY: `fut` stays in place until `this.state` is overwritten
        // below, which drops it
        let output = ready!(unsafe { Pin::new_unchecked(fut) }.poll(cx));
        this.state = State::Done;
        task::Poll::Ready(Some(output))
    }
}

/// Future returned from closures built by [`CaptureItem::future_fn_or_else`].
pub struct GuardedFutureOr<C: ReferenceContainer, F, D, I, Fut> {
    inner: GuardedFuture<C, F, I, Fut>,
    default: Arc<D>,
}

impl<C, F, D, I, Fut> Future for GuardedFutureOr<C, F, D, I, Fut>
where
    C: ReferenceContainer,
    F: Fn(C::Pointer, I) -> Fut,
    D: Fn() -> Fut::Output,
    Fut: Future,
{
    type Output = Fut::Output;

    fn poll(self: Pin<&mut Self>, cx: &mut task::Context<'_>) -> task::Poll<Self::Output> {
        // SAFETY: `inner` is structurally pinned, `default` is never pinned
        let this = unsafe { self.get_unchecked_mut() };
        let inner = unsafe { Pin::new_unchecked(&mut this.inner) };
        inner
            .poll(cx)
            .map(|output| output.unwrap_or_else(|| (*this.default)()))
    }
}

use core::ops::Deref;

use alloc::rc::Rc;
use alloc::sync::Arc;

/// Trait over reference counted smart pointers which can hand out weak
/// handles to their allocation. Allows containers to be generic over
/// [`Rc`] and [`Arc`].
///
/// Picking [`Arc`] makes every container and guarded closure built on
/// top of it [`Send`] and [`Sync`] as long as the pointee is, while [`Rc`]
/// keeps all of them on the current thread.
pub trait RefCounted: Clone + Deref {
    /// Non-owning handle to the same allocation.
    type Weak: Clone;

    /// Create a weak handle without touching the strong count.
    fn downgrade(this: &Self) -> Self::Weak;

    /// Try to recover a strong pointer, failing if the pointee was
    /// already dropped.
    fn upgrade(weak: &Self::Weak) -> Option<Self>;

    /// Weak handle which never upgrades.
    fn empty_weak() -> Self::Weak;

    /// Construct a new pointer while giving `data_fn` access to a weak
    /// handle to it. The handle won't upgrade until `data_fn` returns.
    fn new_cyclic<F>(data_fn: F) -> Self
    where
        F: FnOnce(&Self::Weak) -> Self::Target,
        Self::Target: Sized;

    /// Whether both pointers point to the same allocation.
    fn ptr_eq(this: &Self, other: &Self) -> bool;
}

impl<T> RefCounted for Rc<T> {
    type Weak = alloc::rc::Weak<T>;

    fn downgrade(this: &Self) -> Self::Weak {
        Rc::downgrade(this)
    }

    fn upgrade(weak: &Self::Weak) -> Option<Self> {
        weak.upgrade()
    }

    fn empty_weak() -> Self::Weak {
        alloc::rc::Weak::new()
    }

    fn new_cyclic<F>(data_fn: F) -> Self
    where
        F: FnOnce(&Self::Weak) -> Self::Target,
    {
        Rc::new_cyclic(data_fn)
    }

    fn ptr_eq(this: &Self, other: &Self) -> bool {
        Rc::ptr_eq(this, other)
    }
}

impl<T> RefCounted for Arc<T> {
    type Weak = alloc::sync::Weak<T>;

    fn downgrade(this: &Self) -> Self::Weak {
        Arc::downgrade(this)
    }

    fn upgrade(weak: &Self::Weak) -> Option<Self> {
        weak.upgrade()
    }

    fn empty_weak() -> Self::Weak {
        alloc::sync::Weak::new()
    }

    fn new_cyclic<F>(data_fn: F) -> Self
    where
        F: FnOnce(&Self::Weak) -> Self::Target,
    {
        Arc::new_cyclic(data_fn)
    }

    fn ptr_eq(this: &Self, other: &Self) -> bool {
        Arc::ptr_eq(this, other)
    }
}

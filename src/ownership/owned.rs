// Copyright (c) 2026 Robert L. Snyder, Sierra Vista, AZ
// Licensed under the MIT License. See LICENSE file in the project root for details.

//! The `Owned<T>` handle.

use std::fmt;
use std::mem;

use thiserror::Error;

/// Raised when an empty handle is dereferenced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("attempted to access the value of an empty owning handle")]
pub struct EmptyAccessError;

/// Exclusive owner of at most one heap allocation.
///
/// The handle is deliberately not `Clone`: the only ways to move the
/// allocation elsewhere are a Rust move, [`Owned::take`], [`Owned::swap`]
/// or [`Owned::release`]. Dropping the handle drops the held value once.
pub struct Owned<T: ?Sized> {
    slot: Option<Box<T>>,
}

impl<T: ?Sized> Owned<T> {
    /// Take ownership of an existing allocation
    pub fn new(value: Box<T>) -> Self {
        Self { slot: Some(value) }
    }

    /// Create a handle that owns nothing
    pub fn empty() -> Self {
        Self { slot: None }
    }

    /// Whether the handle currently owns a value
    pub fn is_some(&self) -> bool {
        self.slot.is_some()
    }

    /// Whether the handle is empty
    pub fn is_empty(&self) -> bool {
        self.slot.is_none()
    }

    /// Borrow the held value
    pub fn get(&self) -> Result<&T, EmptyAccessError> {
        self.slot.as_deref().ok_or(EmptyAccessError)
    }

    /// Mutably borrow the held value
    pub fn get_mut(&mut self) -> Result<&mut T, EmptyAccessError> {
        self.slot.as_deref_mut().ok_or(EmptyAccessError)
    }

    /// Borrow the held value without failing
    pub fn as_option(&self) -> Option<&T> {
        self.slot.as_deref()
    }

    /// Consume the handle and return the allocation it owns
    pub fn into_inner(mut self) -> Result<Box<T>, EmptyAccessError> {
        self.slot.take().ok_or(EmptyAccessError)
    }

    /// Give up ownership without dropping the value.
    ///
    /// The handle is empty afterwards and the caller owns the box.
    pub fn release(&mut self) -> Option<Box<T>> {
        self.slot.take()
    }

    /// Drop the current value (if any) and adopt `value`
    pub fn reset(&mut self, value: Option<Box<T>>) {
        // Drop the old value before installing the new one.
        drop(self.slot.take());
        self.slot = value;
    }

    /// Move the allocation out into a new handle, leaving this one empty
    pub fn take(&mut self) -> Owned<T> {
        Owned {
            slot: self.slot.take(),
        }
    }

    /// Exchange allocations with another handle
    pub fn swap(&mut self, other: &mut Owned<T>) {
        mem::swap(&mut self.slot, &mut other.slot);
    }
}

impl<T> Owned<T> {
    /// Allocate `value` on the heap and own it
    pub fn from_value(value: T) -> Self {
        Self::new(Box::new(value))
    }
}

impl<T: ?Sized> Default for Owned<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: ?Sized> From<Box<T>> for Owned<T> {
    fn from(value: Box<T>) -> Self {
        Self::new(value)
    }
}

impl<T: ?Sized + fmt::Debug> fmt::Debug for Owned<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.slot.as_deref() {
            Some(value) => f.debug_tuple("Owned").field(&value).finish(),
            None => f.write_str("Owned(<empty>)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    /// Counts how many instances were created and dropped
    #[derive(Default)]
    struct Ledger {
        created: AtomicUsize,
        dropped: AtomicUsize,
    }

    impl Ledger {
        fn created(&self) -> usize {
            self.created.load(Ordering::SeqCst)
        }

        fn dropped(&self) -> usize {
            self.dropped.load(Ordering::SeqCst)
        }
    }

    struct Counted {
        value: i32,
        ledger: Arc<Ledger>,
    }

    impl Counted {
        fn boxed(value: i32, ledger: &Arc<Ledger>) -> Box<Self> {
            ledger.created.fetch_add(1, Ordering::SeqCst);
            Box::new(Self {
                value,
                ledger: Arc::clone(ledger),
            })
        }
    }

    impl Drop for Counted {
        fn drop(&mut self) {
            self.ledger.dropped.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_empty_handle_is_false() {
        let handle: Owned<i32> = Owned::empty();
        assert!(handle.is_empty());
        assert!(!handle.is_some());

        let default: Owned<i32> = Owned::default();
        assert!(default.is_empty());
    }

    #[test]
    fn test_get_returns_held_value() {
        let handle = Owned::from_value(42);
        assert!(handle.is_some());
        assert_eq!(*handle.get().unwrap(), 42);
    }

    #[test]
    fn test_member_access_through_get_mut() {
        struct Probe {
            x: i32,
        }

        impl Probe {
            fn bump(&mut self) -> i32 {
                self.x += 1;
                self.x
            }
        }

        let mut handle = Owned::from_value(Probe { x: 7 });
        assert_eq!(handle.get_mut().unwrap().bump(), 8);
        assert_eq!(handle.get().unwrap().x, 8);
    }

    #[test]
    fn test_empty_access_fails_everywhere() {
        let mut handle: Owned<i32> = Owned::empty();
        assert_eq!(handle.get(), Err(EmptyAccessError));
        assert_eq!(handle.get_mut(), Err(EmptyAccessError));
        assert_eq!(handle.into_inner(), Err(EmptyAccessError));
    }

    #[test]
    fn test_take_leaves_source_empty() {
        let ledger = Arc::new(Ledger::default());
        let mut src = Owned::new(Counted::boxed(10, &ledger));
        let addr = src.get().unwrap() as *const Counted;

        let dst = src.take();

        assert!(src.is_empty());
        assert_eq!(dst.get().unwrap().value, 10);
        assert_eq!(dst.get().unwrap() as *const Counted, addr);
        assert_eq!(ledger.created(), 1);
        assert_eq!(ledger.dropped(), 0);
    }

    #[test]
    fn test_move_assignment_drops_previous_target() {
        let ledger = Arc::new(Ledger::default());
        let mut src = Owned::new(Counted::boxed(5, &ledger));
        let mut dst = Owned::new(Counted::boxed(1, &ledger));
        assert_eq!(dst.get().unwrap().value, 1);

        dst = src.take();

        assert_eq!(ledger.dropped(), 1);
        assert!(src.is_empty());
        assert_eq!(dst.get().unwrap().value, 5);

        drop(dst);
        assert_eq!(ledger.dropped(), 2);
    }

    #[test]
    fn test_release_hands_over_without_dropping() {
        let ledger = Arc::new(Ledger::default());
        let mut handle = Owned::new(Counted::boxed(99, &ledger));

        let raw = handle.release().unwrap();
        assert!(handle.is_empty());
        assert_eq!(raw.value, 99);
        assert_eq!(ledger.dropped(), 0);

        drop(handle);
        assert_eq!(ledger.dropped(), 0);

        drop(raw);
        assert_eq!(ledger.dropped(), 1);
    }

    #[test]
    fn test_release_on_empty_returns_none() {
        let mut handle: Owned<i32> = Owned::empty();
        assert!(handle.release().is_none());
        assert!(handle.is_empty());
    }

    #[test]
    fn test_reset_replaces_and_clears() {
        let ledger = Arc::new(Ledger::default());
        let mut handle = Owned::new(Counted::boxed(1, &ledger));

        handle.reset(Some(Counted::boxed(2, &ledger)));
        assert_eq!(ledger.dropped(), 1);
        assert_eq!(handle.get().unwrap().value, 2);

        handle.reset(None);
        assert_eq!(ledger.dropped(), 2);
        assert!(handle.is_empty());

        handle.reset(None);
        assert_eq!(ledger.dropped(), 2);
    }

    #[test]
    fn test_swap_exchanges_without_allocating() {
        let ledger = Arc::new(Ledger::default());
        let mut a = Owned::new(Counted::boxed(11, &ledger));
        let mut b = Owned::new(Counted::boxed(22, &ledger));

        a.swap(&mut b);

        assert_eq!(a.get().unwrap().value, 22);
        assert_eq!(b.get().unwrap().value, 11);
        assert_eq!(ledger.created(), 2);
        assert_eq!(ledger.dropped(), 0);

        let mut empty = Owned::empty();
        a.swap(&mut empty);
        assert!(a.is_empty());
        assert_eq!(empty.get().unwrap().value, 22);
    }

    #[test]
    fn test_every_allocation_dropped_exactly_once() {
        let ledger = Arc::new(Ledger::default());
        {
            let mut a = Owned::new(Counted::boxed(1, &ledger));
            let mut b = Owned::empty();

            a.reset(Some(Counted::boxed(2, &ledger)));
            b.swap(&mut a);
            let mut c = b.take();
            let released = c.release();
            c.reset(released);
            a.reset(Some(Counted::boxed(3, &ledger)));
            a.swap(&mut c);
            let _moved = a;
            b.reset(None);
            c.reset(Some(Counted::boxed(4, &ledger)));
        }
        assert_eq!(ledger.created(), 4);
        assert_eq!(ledger.dropped(), 4);
    }

    #[test]
    fn test_unsized_trait_object() {
        trait Speak {
            fn speak(&self) -> String;
        }

        struct Dog;

        impl Speak for Dog {
            fn speak(&self) -> String {
                "woof".to_string()
            }
        }

        let handle: Owned<dyn Speak> = Owned::new(Box::new(Dog));
        assert_eq!(handle.get().unwrap().speak(), "woof");
    }

    #[test]
    fn test_debug_format() {
        assert_eq!(format!("{:?}", Owned::from_value(3)), "Owned(3)");
        assert_eq!(format!("{:?}", Owned::<i32>::empty()), "Owned(<empty>)");
    }
}

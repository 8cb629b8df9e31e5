//! # Delegate: a fixed-size, copyable handle to a single callable target.
//!
//! A [`Delegate`] represents one callable of shape `fn(&T)` in two flavors:
//!
//! - **Free function**: `Delegate::function(handler)` where `handler: fn(&T)`.
//! - **Bound method**: `Delegate::bound(&obj, O::on_event)` where the method
//!   takes `&O` as its receiver, e.g. `fn on_event(&self, arg: &T)`.
//!
//! Both flavors live in the same three-word representation (object slot,
//! callee slot, trampoline), so a single delegate type serves both without
//! boxing, virtual dispatch, or name-based lookup. Delegates are `Copy` and
//! compare by *registration identity*: same bound object (or both free) and
//! same underlying function, never by behavioral equivalence. That identity
//! is what [`Sender::remove`](crate::Sender::remove) scans for.
//!
//! ## Lifetimes instead of dangling-pointer contracts
//! A bound delegate borrows its object for `'a`. The borrow checker keeps the
//! object alive (and un-mutated) for as long as the delegate, or any sender
//! holding a copy of it, exists. There is no "caller must deregister before
//! destruction" rule to get wrong: forgetting it is a compile error, not
//! undefined behavior.
//!
//! Mutating listeners use interior mutability (`Cell`, `RefCell`) behind the
//! shared receiver, as usual for shared borrows.
//!
//! ## Example
//! ```rust
//! use std::cell::Cell;
//! use fanout::Delegate;
//!
//! fn on_tick(tick: &u32) {
//!     let _ = tick;
//! }
//!
//! struct Counter {
//!     seen: Cell<u32>,
//! }
//!
//! impl Counter {
//!     fn record(&self, tick: &u32) {
//!         self.seen.set(self.seen.get() + *tick);
//!     }
//! }
//!
//! let counter = Counter { seen: Cell::new(0) };
//!
//! let free = Delegate::function(on_tick);
//! let bound = Delegate::bound(&counter, Counter::record);
//!
//! free.call(&1);
//! bound.call(&2);
//! assert_eq!(counter.seen.get(), 2);
//!
//! assert_ne!(free, bound);
//! assert_eq!(bound, Delegate::bound(&counter, Counter::record));
//! ```

use std::fmt;
use std::marker::PhantomData;
use std::mem;
use std::ptr;

/// A fixed-size, copyable, comparable handle to one callable of shape `fn(&T)`.
///
/// Exactly one of the two modes is active per instance, chosen at
/// construction and immutable afterward:
///
/// | Mode          | object slot        | callee slot            |
/// |---------------|--------------------|------------------------|
/// | free function | null               | the `fn(&T)` address   |
/// | bound method  | erased `&'a O`     | the `fn(&O, &T)` address |
///
/// Invocation goes through a per-mode trampoline resolved at construction
/// time, so `call` itself never branches on the mode.
///
/// The delegate never owns the bound object; `'a` is the borrow that keeps
/// the referent alive. Free-function delegates are valid for any `'a`.
///
/// Capturing closures are deliberately not representable: the handle must
/// stay fixed-size, heap-free, and comparable by identity. Capture-free
/// closures coerce to `fn(&T)` and work as free functions.
pub struct Delegate<'a, T> {
    /// Null for free functions, the erased receiver for bound methods.
    object: *const (),
    /// Erased code address; its concrete fn-pointer type is known only to
    /// `invoke`.
    callee: *const (),
    /// Mode-specific trampoline that reconstitutes `callee` (and `object`)
    /// to their concrete types.
    invoke: unsafe fn(*const (), *const (), &T),
    _borrow: PhantomData<&'a ()>,
}

impl<'a, T> Delegate<'a, T> {
    /// Creates a delegate targeting a free function.
    ///
    /// Capture-free closures coerce to `fn(&T)` and are accepted; capturing
    /// closures are rejected at compile time.
    pub fn function(handler: fn(&T)) -> Self {
        Self {
            object: ptr::null(),
            callee: handler as *const (),
            invoke: invoke_function::<T>,
            _borrow: PhantomData,
        }
    }

    /// Creates a delegate targeting `method` called on `object`.
    ///
    /// `method` is any function taking `&O` first, typically a method path
    /// like `O::on_event`. The receiver is borrowed for `'a`; the delegate
    /// (and any sender holding it) cannot outlive that borrow.
    pub fn bound<O>(object: &'a O, method: fn(&O, &T)) -> Self {
        Self {
            object: ptr::from_ref(object).cast::<()>(),
            callee: method as *const (),
            invoke: invoke_bound::<O, T>,
            _borrow: PhantomData,
        }
    }

    /// Invokes the target with `arg`.
    pub fn call(&self, arg: &T) {
        // SAFETY: `object` and `callee` were erased from exactly the types
        // the stored trampoline reconstitutes, and the `'a` borrow keeps a
        // bound receiver alive and un-mutated for the life of `self`.
        unsafe { (self.invoke)(self.object, self.callee, arg) }
    }

    /// Returns `true` for bound-method delegates, `false` for free functions.
    pub fn is_bound(&self) -> bool {
        !self.object.is_null()
    }
}

/// Trampoline for free-function delegates; `object` is always null here.
unsafe fn invoke_function<T>(_object: *const (), callee: *const (), arg: &T) {
    // SAFETY: `callee` was produced by `Delegate::function` from a `fn(&T)`.
    let handler: fn(&T) = unsafe { mem::transmute(callee) };
    handler(arg);
}

/// Trampoline for bound-method delegates.
unsafe fn invoke_bound<O, T>(object: *const (), callee: *const (), arg: &T) {
    // SAFETY: `callee` was produced by `Delegate::bound::<O>` from a
    // `fn(&O, &T)`, and `object` from a `&'a O` still live per the
    // delegate's lifetime parameter.
    let method: fn(&O, &T) = unsafe { mem::transmute(callee) };
    let receiver: &O = unsafe { &*object.cast::<O>() };
    method(receiver, arg);
}

/// Registration identity: same object slot (both null, or the same instance)
/// and bit-equal callee slot. Two delegates with identical side effects but
/// different targets compare unequal.
impl<'a, T> PartialEq for Delegate<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        self.object == other.object && self.callee == other.callee
    }
}

impl<'a, T> Eq for Delegate<'a, T> {}

// Manual impls: the derives would demand `T: Clone` / `T: Copy`, but the
// payload type is only ever passed by reference.
impl<'a, T> Clone for Delegate<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for Delegate<'a, T> {}

impl<'a, T> fmt::Debug for Delegate<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Delegate")
            .field("mode", &if self.is_bound() { "bound" } else { "function" })
            .field("object", &self.object)
            .field("callee", &self.callee)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn noop(_: &u32) {}

    fn other_noop(_: &u32) {
        // Body differs from `noop` so the two functions cannot share a code
        // address under deduplicating linkers.
        std::hint::black_box(0u32);
    }

    struct Probe {
        last: Cell<u32>,
        hits: Cell<u32>,
    }

    impl Probe {
        fn new() -> Self {
            Self {
                last: Cell::new(0),
                hits: Cell::new(0),
            }
        }

        fn record(&self, arg: &u32) {
            self.last.set(*arg);
            self.hits.set(self.hits.get() + 1);
        }

        fn record_again(&self, arg: &u32) {
            self.last.set(arg.wrapping_mul(2));
        }
    }

    #[test]
    fn test_function_delegate_invokes_target() {
        thread_local! {
            static RECEIVED: Cell<u32> = const { Cell::new(0) };
        }

        fn handler(arg: &u32) {
            RECEIVED.with(|r| r.set(*arg));
        }

        let d = Delegate::function(handler);
        d.call(&42);
        assert_eq!(RECEIVED.with(Cell::get), 42);
        assert!(!d.is_bound());
    }

    #[test]
    fn test_bound_delegate_invokes_on_receiver() {
        let probe = Probe::new();
        let d = Delegate::bound(&probe, Probe::record);
        d.call(&7);
        d.call(&9);
        assert_eq!(probe.last.get(), 9);
        assert_eq!(probe.hits.get(), 2);
        assert!(d.is_bound());
    }

    #[test]
    fn test_equality_is_reflexive_across_constructions() {
        let probe = Probe::new();
        assert_eq!(Delegate::<u32>::function(noop), Delegate::function(noop));
        assert_eq!(
            Delegate::bound(&probe, Probe::record),
            Delegate::bound(&probe, Probe::record),
        );
    }

    #[test]
    fn test_different_functions_compare_unequal() {
        assert_ne!(
            Delegate::<u32>::function(noop),
            Delegate::function(other_noop),
        );
    }

    #[test]
    fn test_same_method_different_instances_compare_unequal() {
        let a = Probe::new();
        let b = Probe::new();
        assert_ne!(
            Delegate::bound(&a, Probe::record),
            Delegate::bound(&b, Probe::record),
        );
    }

    #[test]
    fn test_same_instance_different_methods_compare_unequal() {
        let probe = Probe::new();
        assert_ne!(
            Delegate::bound(&probe, Probe::record),
            Delegate::bound(&probe, Probe::record_again),
        );
    }

    #[test]
    fn test_free_and_bound_never_compare_equal() {
        let probe = Probe::new();
        assert_ne!(
            Delegate::function(noop),
            Delegate::bound(&probe, Probe::record),
        );
    }

    #[test]
    fn test_copies_stay_equal_and_callable() {
        let probe = Probe::new();
        let d = Delegate::bound(&probe, Probe::record);
        let copy = d;
        assert_eq!(d, copy);
        copy.call(&3);
        assert_eq!(probe.last.get(), 3);
    }

}

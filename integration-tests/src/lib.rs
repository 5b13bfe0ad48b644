//! Shared fixtures for the cross-crate tests.

use std::{cell::Cell, rc::Rc};

use strand_core::host::{
    HostError, ObjectRef, Value,
    native::{NativeFunction, NativeHost},
};

/// A host callable that counts its calls and can be told to fail.
///
/// The function evaluates `f(x)` for one numeric argument. Once the call
/// count reaches `fail_on`, it raises `ValueError` instead.
pub struct Counted {
    pub object: ObjectRef,
    pub calls: Rc<Cell<usize>>,
}

impl Counted {
    /// Wraps `f` so that it never fails.
    pub fn new(f: impl Fn(f64) -> f64 + 'static) -> Self {
        Self::failing_on(usize::MAX, f)
    }

    /// Wraps `f` so that call number `fail_on` (counting from one) raises.
    pub fn failing_on(fail_on: usize, f: impl Fn(f64) -> f64 + 'static) -> Self {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);

        let object: ObjectRef = Rc::new(NativeFunction::new(move |args: &[Value]| {
            counter.set(counter.get() + 1);
            if counter.get() >= fail_on {
                return Err(HostError::new("ValueError", "refused"));
            }
            let x = args
                .first()
                .and_then(Value::to_f64)
                .ok_or_else(|| HostError::new("TypeError", "expected a number"))?;
            Ok(Some(Value::Float(f(x))))
        }));

        Self { object, calls }
    }

    /// Returns the number of calls made so far.
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

/// Returns a fresh host with no pending error.
pub fn host() -> NativeHost {
    NativeHost::new()
}

//! An in-process host backed by Rust closures.
//!
//! [`NativeHost`] provides the error indicator and [`NativeFunction`] turns a
//! closure into a callable host object. Together they let native algorithms
//! be driven through the same host contract an embedded interpreter would
//! implement.

use std::{cell::RefCell, fmt, rc::Rc};

use super::{Host, HostError, HostObject, ObjectRef, Value};

/// A host whose error indicator is a single pending slot.
#[derive(Debug, Default)]
pub struct NativeHost {
    pending: RefCell<Option<HostError>>,
}

impl NativeHost {
    /// Creates a host with no pending error.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the pending error, replacing any previous one.
    pub fn raise(&self, error: HostError) {
        *self.pending.borrow_mut() = Some(error);
    }

    /// Clears and returns the pending error.
    pub fn clear(&self) -> Option<HostError> {
        self.pending.borrow_mut().take()
    }
}

impl Host for NativeHost {
    fn pending_error(&self) -> Option<HostError> {
        self.pending.borrow().clone()
    }
}

/// A callable host object backed by a closure over host values.
pub struct NativeFunction<F> {
    func: F,
}

impl<F> NativeFunction<F>
where
    F: Fn(&[Value]) -> Result<Option<Value>, HostError>,
{
    /// Wraps a closure as a host function.
    pub fn new(func: F) -> Self {
        Self { func }
    }
}

impl<F> HostObject for NativeFunction<F>
where
    F: Fn(&[Value]) -> Result<Option<Value>, HostError>,
{
    fn is_callable(&self) -> bool {
        true
    }

    fn call(&self, args: &[Value]) -> Result<Option<Value>, HostError> {
        (self.func)(args)
    }
}

impl<F> fmt::Debug for NativeFunction<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeFunction").finish_non_exhaustive()
    }
}

/// A host object that holds a value and cannot be called.
#[derive(Debug, Clone, PartialEq)]
pub struct Opaque(pub Value);

impl HostObject for Opaque {
    fn is_callable(&self) -> bool {
        false
    }

    fn call(&self, _args: &[Value]) -> Result<Option<Value>, HostError> {
        Err(HostError::new(
            "TypeError",
            format!("'{}' object is not callable", self.0.type_name()),
        ))
    }
}

/// Creates a host function of one numeric argument that returns a float.
///
/// The function raises `TypeError` unless called with exactly one argument
/// convertible to `f64`.
pub fn scalar_function<F>(f: F) -> ObjectRef
where
    F: Fn(f64) -> f64 + 'static,
{
    Rc::new(NativeFunction::new(move |args: &[Value]| match args {
        [arg] => {
            let x = arg.to_f64().ok_or_else(|| {
                HostError::new(
                    "TypeError",
                    format!("must be real number, not {}", arg.type_name()),
                )
            })?;
            Ok(Some(Value::Float(f(x))))
        }
        _ => Err(HostError::new(
            "TypeError",
            format!("expected 1 argument, got {}", args.len()),
        )),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn raise_and_clear_pending_error() {
        let host = NativeHost::new();
        assert!(host.pending_error().is_none());

        host.raise(HostError::new("KeyboardInterrupt", ""));
        assert_eq!(
            host.pending_error().map(|e| e.kind().to_owned()),
            Some("KeyboardInterrupt".to_owned())
        );

        let cleared = host.clear().expect("error was pending");
        assert_eq!(cleared.kind(), "KeyboardInterrupt");
        assert!(host.pending_error().is_none());
    }

    #[test]
    fn scalar_function_evaluates_numeric_argument() {
        let cube = scalar_function(|x| x * x * x);
        assert!(cube.is_callable());

        let result = cube.call(&[Value::Int(2)]).unwrap().unwrap();
        assert_relative_eq!(result.to_f64().unwrap(), 8.0);
    }

    #[test]
    fn scalar_function_rejects_bad_arguments() {
        let identity = scalar_function(|x| x);

        let err = identity.call(&[]).unwrap_err();
        assert_eq!(err.kind(), "TypeError");

        let err = identity.call(&[Value::from("two")]).unwrap_err();
        assert_eq!(err.message(), "must be real number, not str");
    }

    #[test]
    fn opaque_object_is_not_callable() {
        let object = Opaque(Value::Int(7));
        assert!(!object.is_callable());

        let err = object.call(&[Value::Float(1.0)]).unwrap_err();
        assert_eq!(err.message(), "'int' object is not callable");
    }
}

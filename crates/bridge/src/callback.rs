use std::fmt;

use strand_core::{
    ScalarFn,
    host::{Host, ObjectRef, Value},
};
use tracing::debug;

use crate::{ConversionError, Error, InvocationError, ValidationError};

/// A host callable adapted into a native scalar function.
///
/// The callback holds one counted reference to the host object for its whole
/// lifetime and releases it when dropped, on every exit path. It is not
/// `Clone`: each callback owns exactly one reference.
///
/// Each evaluation calls the object with a single float argument and converts
/// the result back to a double. A callback never calls into a host that
/// already has an error pending.
pub struct Callback<'h, H: Host + ?Sized> {
    host: &'h H,
    func: ObjectRef,
}

impl<'h, H: Host + ?Sized> Callback<'h, H> {
    /// Wraps a host object, validating that it can be called.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if the object is null or not callable.
    pub fn new(host: &'h H, func: Option<&ObjectRef>) -> Result<Self, Error> {
        let func = func.ok_or(ValidationError::NullObject)?;
        if !func.is_callable() {
            return Err(ValidationError::NotCallable.into());
        }
        Ok(Self {
            host,
            func: ObjectRef::clone(func),
        })
    }

    /// Calls the wrapped object at `x`.
    ///
    /// # Errors
    ///
    /// Returns an [`InvocationError`] if an error is pending in the host, if
    /// the call raises, or if it returns no result, and a [`ConversionError`]
    /// if the result is not numeric.
    pub fn evaluate(&self, x: f64) -> Result<f64, Error> {
        if let Some(pending) = self.host.pending_error() {
            return Err(InvocationError::Pending(pending).into());
        }

        let result = self.func.call(&[Value::Float(x)]).map_err(|error| {
            debug!(x, %error, "callable raised");
            InvocationError::Raised(error)
        })?;
        let value = result.ok_or(InvocationError::NoResult)?;

        if let Some(pending) = self.host.pending_error() {
            return Err(InvocationError::Pending(pending).into());
        }

        value.to_f64().ok_or_else(|| {
            let type_name = value.type_name();
            debug!(x, type_name, "callable returned a non-numeric value");
            ConversionError { type_name }.into()
        })
    }
}

impl<H: Host + ?Sized> ScalarFn for Callback<'_, H> {
    type Error = Error;

    fn eval(&self, x: f64) -> Result<f64, Self::Error> {
        self.evaluate(x)
    }
}

impl<H: Host + ?Sized> fmt::Debug for Callback<'_, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::{cell::Cell, rc::Rc};

    use approx::assert_relative_eq;
    use strand_core::host::{
        HostError,
        native::{NativeFunction, NativeHost, Opaque, scalar_function},
    };

    #[test]
    fn evaluates_host_function() {
        let host = NativeHost::new();
        let square = scalar_function(|x| x * x);

        let callback = Callback::new(&host, Some(&square)).unwrap();

        assert_relative_eq!(callback.evaluate(3.0).unwrap(), 9.0);
        assert_relative_eq!(callback.eval(-0.5).unwrap(), 0.25);
    }

    #[test]
    fn holds_one_reference_for_its_lifetime() {
        let host = NativeHost::new();
        let func = scalar_function(|x| x);
        assert_eq!(Rc::strong_count(&func), 1);

        let callback = Callback::new(&host, Some(&func)).unwrap();
        assert_eq!(Rc::strong_count(&func), 2);

        let _ = callback.evaluate(1.0);
        let _ = callback.evaluate(f64::NAN);
        assert_eq!(Rc::strong_count(&func), 2);

        drop(callback);
        assert_eq!(Rc::strong_count(&func), 1);
    }

    #[test]
    fn releases_reference_after_failed_calls() {
        let host = NativeHost::new();
        let func: ObjectRef = Rc::new(NativeFunction::new(|_: &[Value]| {
            Err(HostError::new("RuntimeError", "boom"))
        }));

        {
            let callback = Callback::new(&host, Some(&func)).unwrap();
            assert!(callback.evaluate(0.0).is_err());
        }
        assert_eq!(Rc::strong_count(&func), 1);
    }

    #[test]
    fn rejects_null_and_non_callable_objects() {
        let host = NativeHost::new();

        let err = Callback::new(&host, None).unwrap_err();
        assert_eq!(err, Error::Validation(ValidationError::NullObject));

        let value: ObjectRef = Rc::new(Opaque(Value::Int(3)));
        let err = Callback::new(&host, Some(&value)).unwrap_err();
        assert_eq!(err, Error::Validation(ValidationError::NotCallable));
        assert_eq!(Rc::strong_count(&value), 1);
    }

    #[test]
    fn pending_error_prevents_the_call() {
        let host = NativeHost::new();
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let func: ObjectRef = Rc::new(NativeFunction::new(move |_: &[Value]| {
            counter.set(counter.get() + 1);
            Ok(Some(Value::Float(1.0)))
        }));
        let callback = Callback::new(&host, Some(&func)).unwrap();

        host.raise(HostError::new("KeyboardInterrupt", ""));
        let err = callback.evaluate(0.0).unwrap_err();

        assert!(matches!(
            err,
            Error::Invocation(InvocationError::Pending(ref e)) if e.kind() == "KeyboardInterrupt"
        ));
        assert_eq!(calls.get(), 0);

        host.clear();
        assert_relative_eq!(callback.evaluate(0.0).unwrap(), 1.0);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn error_raised_during_successful_call_is_reported() {
        let host = Rc::new(NativeHost::new());
        let inner = Rc::clone(&host);
        let func: ObjectRef = Rc::new(NativeFunction::new(move |_: &[Value]| {
            inner.raise(HostError::new("Warning", "raised as error"));
            Ok(Some(Value::Float(1.0)))
        }));
        let callback = Callback::new(host.as_ref(), Some(&func)).unwrap();

        let err = callback.evaluate(0.0).unwrap_err();
        assert!(matches!(err, Error::Invocation(InvocationError::Pending(_))));
    }

    #[test]
    fn distinguishes_failure_from_bad_return_type() {
        let host = NativeHost::new();

        let raises: ObjectRef = Rc::new(NativeFunction::new(|_: &[Value]| {
            Err(HostError::new("ZeroDivisionError", "division by zero"))
        }));
        let err = Callback::new(&host, Some(&raises))
            .unwrap()
            .evaluate(0.0)
            .unwrap_err();
        assert!(matches!(err, Error::Invocation(InvocationError::Raised(_))));

        let returns_none: ObjectRef = Rc::new(NativeFunction::new(|_: &[Value]| Ok(None)));
        let err = Callback::new(&host, Some(&returns_none))
            .unwrap()
            .evaluate(0.0)
            .unwrap_err();
        assert_eq!(err, Error::Invocation(InvocationError::NoResult));

        let returns_str: ObjectRef =
            Rc::new(NativeFunction::new(|_: &[Value]| Ok(Some(Value::from("1.5")))));
        let err = Callback::new(&host, Some(&returns_str))
            .unwrap()
            .evaluate(0.0)
            .unwrap_err();
        assert_eq!(err, Error::Conversion(ConversionError { type_name: "str" }));
    }

    #[test]
    fn integer_results_convert() {
        let host = NativeHost::new();
        let func: ObjectRef = Rc::new(NativeFunction::new(|_: &[Value]| Ok(Some(Value::Int(4)))));

        let callback = Callback::new(&host, Some(&func)).unwrap();
        assert_relative_eq!(callback.evaluate(0.0).unwrap(), 4.0);
    }
}

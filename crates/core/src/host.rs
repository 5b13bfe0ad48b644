//! Object model of a scripting host.
//!
//! A host (an embedded interpreter, a foreign runtime, or the in-process
//! [`native`] host) owns objects that native code can hold counted references
//! to and call. Only the contract the bridge relies on is modeled here:
//!
//! - [`Value`] — the values that cross the boundary as arguments and results
//! - [`HostObject`] — an object that may be callable
//! - [`ObjectRef`] — a counted reference that keeps a host object alive
//! - [`Host`] — the host's error indicator
//!
//! A null object is modeled as `None` wherever an `Option<&ObjectRef>` is
//! accepted.

pub mod native;

use std::{fmt, rc::Rc};

use thiserror::Error;

/// A counted reference to a host object.
///
/// Cloning the reference increments the count and dropping it decrements the
/// count. The object lives as long as any reference does.
pub type ObjectRef = Rc<dyn HostObject>;

/// A value exchanged with the host.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
}

impl Value {
    /// Converts the value to a double using the host's numeric protocol.
    ///
    /// Floats convert directly, integers and booleans are widened, and all
    /// other values are rejected.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn to_f64(&self) -> Option<f64> {
        match self {
            Value::Float(v) => Some(*v),
            Value::Int(v) => Some(*v as f64),
            Value::Bool(v) => Some(if *v { 1.0 } else { 0.0 }),
            Value::None | Value::Str(_) => None,
        }
    }

    /// Returns the host-level name of the value's type.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::None => "NoneType",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
        }
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Float(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_owned())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::None => f.write_str("None"),
            Value::Bool(v) => write!(f, "{v}"),
            Value::Int(v) => write!(f, "{v}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Str(v) => write!(f, "{v:?}"),
        }
    }
}

/// An error raised inside the host.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct HostError {
    kind: String,
    message: String,
}

impl HostError {
    /// Creates a host error of the given kind (for example `"ValueError"`).
    pub fn new(kind: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: kind.into(),
            message: message.into(),
        }
    }

    /// Returns the kind of the error.
    #[must_use]
    pub fn kind(&self) -> &str {
        &self.kind
    }

    /// Returns the error message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// An object owned by the host.
pub trait HostObject {
    /// Returns true if the object can be called.
    fn is_callable(&self) -> bool;

    /// Calls the object with positional arguments.
    ///
    /// `Ok(None)` means the call completed without producing a result.
    ///
    /// # Errors
    ///
    /// Returns the [`HostError`] raised by the call.
    fn call(&self, args: &[Value]) -> Result<Option<Value>, HostError>;
}

/// The host runtime, as seen from native code.
pub trait Host {
    /// Returns the error currently raised in the host, if any.
    ///
    /// Native code must not call into a host that has an error pending.
    fn pending_error(&self) -> Option<HostError>;
}

impl<H: Host + ?Sized> Host for &H {
    fn pending_error(&self) -> Option<HostError> {
        (**self).pending_error()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn numeric_values_convert_to_f64() {
        assert_relative_eq!(Value::Float(2.5).to_f64().unwrap(), 2.5);
        assert_relative_eq!(Value::Int(-3).to_f64().unwrap(), -3.0);
        assert_relative_eq!(Value::Bool(true).to_f64().unwrap(), 1.0);
        assert_relative_eq!(Value::Bool(false).to_f64().unwrap(), 0.0);
    }

    #[test]
    fn non_numeric_values_do_not_convert() {
        assert_eq!(Value::None.to_f64(), None);
        assert_eq!(Value::from("1.0").to_f64(), None);
    }

    #[test]
    fn type_names_follow_host_conventions() {
        assert_eq!(Value::None.type_name(), "NoneType");
        assert_eq!(Value::from(1_i64).type_name(), "int");
        assert_eq!(Value::from(1.0).type_name(), "float");
        assert_eq!(Value::from("x").type_name(), "str");
    }

    #[test]
    fn host_error_displays_kind_and_message() {
        let err = HostError::new("ZeroDivisionError", "division by zero");
        assert_eq!(err.to_string(), "ZeroDivisionError: division by zero");
        assert_eq!(err.kind(), "ZeroDivisionError");
        assert_eq!(err.message(), "division by zero");
    }
}

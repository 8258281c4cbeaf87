use std::fmt;

use crate::error::HostError;
use crate::types::TypeDescriptor;

/// Scalar read out of the inspected process, in its native representation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Scalar {
    Float(f32),
    Double(f64),
    Signed(i64),
    Unsigned(u64),
    Bool(bool),
}

impl Scalar {
    /// Widens the scalar to `f64` for display. Children keep the native value.
    pub fn widen(self) -> f64 {
        match self {
            Scalar::Float(v) => v as f64,
            Scalar::Double(v) => v,
            Scalar::Signed(v) => v as f64,
            Scalar::Unsigned(v) => v as f64,
            Scalar::Bool(v) => {
                if v {
                    1.0
                } else {
                    0.0
                }
            }
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Float(v) => write!(f, "{}", v),
            Scalar::Double(v) => write!(f, "{}", v),
            Scalar::Signed(v) => write!(f, "{}", v),
            Scalar::Unsigned(v) => write!(f, "{}", v),
            Scalar::Bool(v) => write!(f, "{}", v),
        }
    }
}

/// Handle to a typed region of the inspected process, provided by the host.
///
/// Handles are cheap to clone and are only valid for a single render call.
/// Every read goes to live memory; implementations must not cache.
pub trait InspectedValue: Clone {
    fn type_descriptor(&self) -> &TypeDescriptor;

    fn address(&self) -> u64;

    /// Reinterprets the same bytes as another type.
    fn cast(&self, ty: &TypeDescriptor) -> Result<Self, HostError>;

    fn field(&self, name: &str) -> Result<Self, HostError>;

    /// Element `index` of an array-typed value.
    fn element(&self, index: usize) -> Result<Self, HostError>;

    /// Reads `count` contiguous elements of type `element` starting at this
    /// value's address. Must fail rather than read outside valid memory.
    fn read_array(&self, element: &TypeDescriptor, count: usize) -> Result<Vec<Self>, HostError>;

    /// Dereferences a scalar-typed value.
    fn scalar(&self) -> Result<Scalar, HostError>;
}

use std::error::Error;
use std::fmt;

use crate::math::ShapeError;

/// Failure reported by the host while reading the inspected process.
#[derive(Debug, Clone, PartialEq)]
pub enum HostError {
    /// Read of `len` bytes at `address` falls outside readable memory.
    OutOfBounds { address: u64, len: usize },
    /// The value's type has no field with this name.
    NoSuchField { type_name: String, field: String },
    /// Indexing into a value whose type is not an array.
    NotAnArray(String),
    /// Index outside the declared range of an array type.
    IndexOutOfRange { type_name: String, index: usize },
    /// Dereferencing a value whose type is not a scalar.
    NotAScalar(String),
    /// Scalar with a byte width the host cannot decode.
    UnsupportedScalarSize { type_name: String, size: usize },
}

impl fmt::Display for HostError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            HostError::OutOfBounds { address, len } => {
                write!(f, "cannot access {} bytes at address {:#x}", len, address)
            }
            HostError::NoSuchField { type_name, field } => {
                write!(f, "type `{}` has no field named `{}`", type_name, field)
            }
            HostError::NotAnArray(name) => write!(f, "type `{}` is not an array", name),
            HostError::IndexOutOfRange { type_name, index } => {
                write!(f, "index {} is out of range for `{}`", index, type_name)
            }
            HostError::NotAScalar(name) => write!(f, "type `{}` is not a scalar", name),
            HostError::UnsupportedScalarSize { type_name, size } => write!(
                f,
                "scalar type `{}` has unsupported size {}",
                type_name, size
            ),
        }
    }
}

impl Error for HostError {}

/// Error raised while rendering a single inspected value.
#[derive(Debug, Clone, PartialEq)]
pub enum VisualizeError {
    /// Propagated unchanged from the host memory layer.
    Host(HostError),
    /// A template argument the visualizer depends on is missing or of the wrong kind.
    MissingTemplateArgument { type_name: String, index: usize },
    /// The declared vector length is zero or negative.
    InvalidLength { type_name: String, len: i64 },
    /// Column storage of a matrix is not a fixed-size array.
    MissingColumns(String),
    /// Matrix columns declare different lengths.
    RaggedMatrix(ShapeError),
}

impl fmt::Display for VisualizeError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            VisualizeError::Host(err) => write!(f, "memory read failed: {}", err),
            VisualizeError::MissingTemplateArgument { type_name, index } => write!(
                f,
                "type `{}` is missing template argument {}",
                type_name, index
            ),
            VisualizeError::InvalidLength { type_name, len } => {
                write!(f, "type `{}` declares invalid length {}", type_name, len)
            }
            VisualizeError::MissingColumns(name) => {
                write!(f, "matrix type `{}` has no column array", name)
            }
            VisualizeError::RaggedMatrix(err) => write!(f, "inconsistent matrix columns: {}", err),
        }
    }
}

impl Error for VisualizeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            VisualizeError::Host(err) => Some(err),
            VisualizeError::RaggedMatrix(err) => Some(err),
            _ => None,
        }
    }
}

impl From<HostError> for VisualizeError {
    fn from(value: HostError) -> Self {
        VisualizeError::Host(value)
    }
}

impl From<ShapeError> for VisualizeError {
    fn from(value: ShapeError) -> Self {
        VisualizeError::RaggedMatrix(value)
    }
}

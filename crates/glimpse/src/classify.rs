//! Element classification and shape extraction from type metadata.
use crate::error::VisualizeError;
use crate::types::TypeDescriptor;

/// Scalar kind backing a vector's or matrix's entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    Float,
    Double,
    Int,
    Bool,
    Unknown,
}

impl ElementKind {
    pub fn from_type_name(name: &str) -> Self {
        match name.trim() {
            "float" => ElementKind::Float,
            "double" => ElementKind::Double,
            "int" => ElementKind::Int,
            "bool" => ElementKind::Bool,
            _ => ElementKind::Unknown,
        }
    }

    /// Classifies a descriptor by the name of its underlying (alias-free) type.
    pub fn from_descriptor(ty: &TypeDescriptor) -> Self {
        Self::from_type_name(ty.strip_aliases().name())
    }

    /// Prefix used in summaries, as in glm's `vec3` / `dvec3` / `ivec3`.
    pub fn tag(self) -> &'static str {
        match self {
            ElementKind::Float => "",
            ElementKind::Double => "d",
            ElementKind::Int => "i",
            ElementKind::Bool => "b",
            ElementKind::Unknown => "t",
        }
    }
}

pub fn classify(type_name: &str) -> &'static str {
    ElementKind::from_type_name(type_name).tag()
}

/// Declared dimensions of a vector type.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorShape {
    pub len: usize,
    pub element: TypeDescriptor,
}

impl VectorShape {
    pub fn kind(&self) -> ElementKind {
        ElementKind::from_descriptor(&self.element)
    }
}

/// Reads length (template argument 0) and element type (template argument 1).
///
/// Both must be present: a missing length, or an element argument that is
/// missing or not a type, is `MissingTemplateArgument`, since the element
/// stride cannot be known. Only a resolvable element type with an
/// unrecognised name falls back to the `t` tag.
pub fn vector_shape(ty: &TypeDescriptor) -> Result<VectorShape, VisualizeError> {
    let missing = |index| VisualizeError::MissingTemplateArgument {
        type_name: ty.name().to_string(),
        index,
    };
    let len = ty
        .template_argument(0)
        .and_then(|arg| arg.as_value())
        .ok_or_else(|| missing(0))?;
    if len < 1 {
        return Err(VisualizeError::InvalidLength {
            type_name: ty.name().to_string(),
            len,
        });
    }
    let element = ty
        .template_argument(1)
        .and_then(|arg| arg.as_type())
        .ok_or_else(|| missing(1))?;
    Ok(VectorShape {
        len: len as usize,
        element: element.clone(),
    })
}

/// Name of the member holding a matrix's column array.
pub const MATRIX_COLUMNS_FIELD: &str = "value";

/// Column count of a matrix: the inclusive upper bound of its column array plus one.
pub fn matrix_columns(ty: &TypeDescriptor) -> Result<usize, VisualizeError> {
    let (_, high) = ty
        .field(MATRIX_COLUMNS_FIELD)
        .and_then(|field| field.ty.range())
        .ok_or_else(|| VisualizeError::MissingColumns(ty.name().to_string()))?;
    Ok((high + 1).max(0) as usize)
}

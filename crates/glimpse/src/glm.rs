//! Descriptors shaped like glm's `vec<L, T, Q>` and `mat<C, R, T, Q>`.
//!
//! Hosts that do not get type metadata from debug info (tests, the CLI
//! driver) use these to describe values laid out the way glm lays them out.
use crate::classify::{ElementKind, MATRIX_COLUMNS_FIELD};
use crate::types::{Encoding, Field, TemplateArg, TypeDescriptor, TypeKind};

const QUALIFIER: &str = "(glm::qualifier)0";

/// Scalar descriptor for one of the recognised element kinds.
pub fn scalar_type(kind: ElementKind) -> TypeDescriptor {
    match kind {
        ElementKind::Float => TypeDescriptor::scalar("float", 4, Encoding::Float),
        ElementKind::Double => TypeDescriptor::scalar("double", 8, Encoding::Float),
        ElementKind::Int => TypeDescriptor::scalar("int", 4, Encoding::Signed),
        ElementKind::Bool => TypeDescriptor::scalar("bool", 1, Encoding::Bool),
        ElementKind::Unknown => TypeDescriptor::scalar("short", 2, Encoding::Signed),
    }
}

pub fn vec_type(len: usize, element: &TypeDescriptor) -> TypeDescriptor {
    TypeDescriptor::new(
        format!("glm::vec<{}, {}, {}>", len, element.name(), QUALIFIER),
        len.saturating_mul(element.size()),
        TypeKind::Struct {
            template_args: vec![
                TemplateArg::Value(len as i64),
                TemplateArg::Type(element.clone()),
                TemplateArg::Value(0),
            ],
            fields: Vec::new(),
        },
    )
}

/// `cols` column vectors of `rows` elements, stored in a `value` array.
pub fn mat_type(cols: usize, rows: usize, element: &TypeDescriptor) -> TypeDescriptor {
    let column = vec_type(rows, element);
    let storage = TypeDescriptor::array_of(&column, cols);
    TypeDescriptor::new(
        format!("glm::mat<{}, {}, {}, {}>", cols, rows, element.name(), QUALIFIER),
        storage.size(),
        TypeKind::Struct {
            template_args: vec![
                TemplateArg::Value(cols as i64),
                TemplateArg::Value(rows as i64),
                TemplateArg::Type(element.clone()),
                TemplateArg::Value(0),
            ],
            fields: vec![Field {
                name: MATRIX_COLUMNS_FIELD.to_string(),
                offset: 0,
                ty: storage,
            }],
        },
    )
}

//! Structured type metadata supplied by the host.
//!
//! A `TypeDescriptor` carries the printed name of a type, its byte size, and
//! a `TypeKind` describing how its bytes are laid out. Visualizers only read
//! descriptors; hosts build them (or deserialize them from a snapshot file).
use serde::{Deserialize, Serialize};

/// Encoding of a scalar's bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Encoding {
    Float,
    Signed,
    Unsigned,
    Bool,
}

/// A template argument: either a constant (`3` in `vec<3, float>`) or a type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateArg {
    Value(i64),
    Type(TypeDescriptor),
}

impl TemplateArg {
    pub fn as_value(&self) -> Option<i64> {
        match self {
            TemplateArg::Value(v) => Some(*v),
            TemplateArg::Type(_) => None,
        }
    }

    pub fn as_type(&self) -> Option<&TypeDescriptor> {
        match self {
            TemplateArg::Type(ty) => Some(ty),
            TemplateArg::Value(_) => None,
        }
    }

    /// True when the argument is itself a template instantiation.
    pub fn is_parameterized(&self) -> bool {
        match self {
            TemplateArg::Value(_) => false,
            TemplateArg::Type(ty) => ty.is_parameterized(),
        }
    }
}

/// Named member of an aggregate at a fixed byte offset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub name: String,
    pub offset: usize,
    pub ty: TypeDescriptor,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    Scalar(Encoding),
    /// Fixed-size array with inclusive index bounds `low..=high`.
    Array {
        element: Box<TypeDescriptor>,
        low: i64,
        high: i64,
    },
    Struct {
        #[serde(default)]
        template_args: Vec<TemplateArg>,
        #[serde(default)]
        fields: Vec<Field>,
    },
    /// Typedef or qualified name for another type.
    Alias(Box<TypeDescriptor>),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    name: String,
    size: usize,
    kind: TypeKind,
}

impl TypeDescriptor {
    pub fn new(name: impl Into<String>, size: usize, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            size,
            kind,
        }
    }

    pub fn scalar(name: impl Into<String>, size: usize, encoding: Encoding) -> Self {
        Self::new(name, size, TypeKind::Scalar(encoding))
    }

    pub fn alias(name: impl Into<String>, target: TypeDescriptor) -> Self {
        let size = target.size;
        Self::new(name, size, TypeKind::Alias(Box::new(target)))
    }

    /// Array type holding `len` elements, i.e. inclusive range `0..=len-1`.
    pub fn array_of(element: &TypeDescriptor, len: usize) -> Self {
        let high = i64::try_from(len).unwrap_or(i64::MAX) - 1;
        Self::new(
            format!("{} [{}]", element.name, len),
            element.size.saturating_mul(len),
            TypeKind::Array {
                element: Box::new(element.clone()),
                low: 0,
                high,
            },
        )
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn kind(&self) -> &TypeKind {
        &self.kind
    }

    /// Follows aliases down to the underlying type.
    pub fn strip_aliases(&self) -> &TypeDescriptor {
        let mut ty = self;
        while let TypeKind::Alias(target) = &ty.kind {
            ty = target;
        }
        ty
    }

    /// Name without its template parameter list: `glm::vec` for `glm::vec<3, float>`.
    pub fn template_base(&self) -> &str {
        match self.name.find('<') {
            Some(idx) => self.name[..idx].trim_end(),
            None => &self.name,
        }
    }

    pub fn template_args(&self) -> &[TemplateArg] {
        match &self.strip_aliases().kind {
            TypeKind::Struct { template_args, .. } => template_args,
            _ => &[],
        }
    }

    pub fn template_argument(&self, index: usize) -> Option<&TemplateArg> {
        self.template_args().get(index)
    }

    pub fn is_parameterized(&self) -> bool {
        !self.template_args().is_empty()
    }

    pub fn field(&self, name: &str) -> Option<&Field> {
        match &self.strip_aliases().kind {
            TypeKind::Struct { fields, .. } => fields.iter().find(|f| f.name == name),
            _ => None,
        }
    }

    /// Inclusive index bounds of an array type.
    pub fn range(&self) -> Option<(i64, i64)> {
        match &self.strip_aliases().kind {
            TypeKind::Array { low, high, .. } => Some((*low, *high)),
            _ => None,
        }
    }

    pub fn array_element(&self) -> Option<&TypeDescriptor> {
        match &self.strip_aliases().kind {
            TypeKind::Array { element, .. } => Some(element),
            _ => None,
        }
    }

    pub fn encoding(&self) -> Option<Encoding> {
        match &self.strip_aliases().kind {
            TypeKind::Scalar(encoding) => Some(*encoding),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn float() -> TypeDescriptor {
        TypeDescriptor::scalar("float", 4, Encoding::Float)
    }

    #[test]
    fn array_of_uses_inclusive_upper_bound() {
        let arr = TypeDescriptor::array_of(&float(), 4);
        assert_eq!(arr.range(), Some((0, 3)));
        assert_eq!(arr.size(), 16);
        assert_eq!(arr.array_element(), Some(&float()));
    }

    #[test]
    fn template_base_strips_parameters() {
        let ty = TypeDescriptor::new(
            "glm::vec<2, float, glm::packed_highp>",
            8,
            TypeKind::Struct {
                template_args: vec![TemplateArg::Value(2), TemplateArg::Type(float())],
                fields: vec![],
            },
        );
        assert_eq!(ty.template_base(), "glm::vec");
        assert_eq!(ty.template_argument(0).and_then(TemplateArg::as_value), Some(2));
        assert!(ty.template_argument(5).is_none());
    }

    #[test]
    fn aliases_resolve_to_target() {
        let alias = TypeDescriptor::alias("GLfloat", float());
        assert_eq!(alias.strip_aliases().name(), "float");
        assert_eq!(alias.encoding(), Some(Encoding::Float));
        assert_eq!(alias.size(), 4);
    }
}

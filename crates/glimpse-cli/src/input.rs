//! Literal values from the command line laid out as glm vectors and matrices.
use std::path::Path;
use std::str::FromStr;

use anyhow::{bail, ensure, Context, Result};

use glimpse::glm::{mat_type, scalar_type, vec_type};
use glimpse::snapshot::{RootValue, SnapshotBuilder, SnapshotFile};
use glimpse::{ElementKind, Encoding, TypeDescriptor};

/// Base address given to snapshots built from literals.
pub const LITERAL_BASE_ADDRESS: u64 = 0x1000;

/// Element types accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementType {
    Float,
    Double,
    Int,
    Bool,
    Short,
    Unsigned,
}

impl ElementType {
    pub fn descriptor(self) -> TypeDescriptor {
        match self {
            ElementType::Float => scalar_type(ElementKind::Float),
            ElementType::Double => scalar_type(ElementKind::Double),
            ElementType::Int => scalar_type(ElementKind::Int),
            ElementType::Bool => scalar_type(ElementKind::Bool),
            ElementType::Short => TypeDescriptor::scalar("short", 2, Encoding::Signed),
            ElementType::Unsigned => TypeDescriptor::scalar("unsigned int", 4, Encoding::Unsigned),
        }
    }

    /// Parses `literal` and appends its bytes to `builder`.
    fn push(self, builder: &mut SnapshotBuilder, literal: &str) -> Result<u64> {
        let literal = literal.trim();
        let address = match self {
            ElementType::Float => builder.push_f32(parse(literal, self)?),
            ElementType::Double => builder.push_f64(parse(literal, self)?),
            ElementType::Int => builder.push_i32(parse(literal, self)?),
            ElementType::Short => builder.push_i16(parse(literal, self)?),
            ElementType::Unsigned => builder.push_u32(parse(literal, self)?),
            ElementType::Bool => match literal {
                "true" | "1" => builder.push_bool(true),
                "false" | "0" => builder.push_bool(false),
                _ => bail!("Invalid {:?} literal: {}", self, literal),
            },
        };
        Ok(address)
    }
}

fn parse<T>(literal: &str, element: ElementType) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    literal
        .parse()
        .with_context(|| format!("Invalid {:?} literal: {}", element, literal))
}

impl FromStr for ElementType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "float" => Ok(ElementType::Float),
            "double" => Ok(ElementType::Double),
            "int" => Ok(ElementType::Int),
            "bool" => Ok(ElementType::Bool),
            "short" => Ok(ElementType::Short),
            "unsigned" => Ok(ElementType::Unsigned),
            _ => Err(format!(
                "Unknown element type: {}. Expected one of float, double, int, bool, short, unsigned",
                s
            )),
        }
    }
}

fn push_all(element: ElementType, literals: &[String]) -> Result<(SnapshotBuilder, u64)> {
    let mut builder = SnapshotBuilder::new(LITERAL_BASE_ADDRESS);
    let address = builder.cursor();
    for literal in literals {
        element.push(&mut builder, literal)?;
    }
    Ok((builder, address))
}

/// A glm vector holding `literals`.
pub fn vector_snapshot(element: ElementType, literals: &[String]) -> Result<SnapshotFile> {
    ensure!(!literals.is_empty(), "A vector needs at least one value");
    let (builder, address) = push_all(element, literals)?;
    Ok(SnapshotFile {
        snapshot: builder.build(),
        root: RootValue {
            ty: vec_type(literals.len(), &element.descriptor()),
            address,
        },
    })
}

/// A glm matrix with `rows` elements per column; `literals` are column-major.
pub fn matrix_snapshot(
    element: ElementType,
    rows: usize,
    literals: &[String],
) -> Result<SnapshotFile> {
    ensure!(rows > 0, "A matrix needs at least one row");
    ensure!(
        !literals.is_empty() && literals.len() % rows == 0,
        "Got {} values, which is not a whole number of columns of {} rows",
        literals.len(),
        rows
    );
    let cols = literals.len() / rows;
    let (builder, address) = push_all(element, literals)?;
    Ok(SnapshotFile {
        snapshot: builder.build(),
        root: RootValue {
            ty: mat_type(cols, rows, &element.descriptor()),
            address,
        },
    })
}

/// Load a captured value from a JSON snapshot file.
pub fn load_snapshot<P: AsRef<Path>>(path: P) -> Result<SnapshotFile> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read snapshot: {}", path.as_ref().display()))?;
    let snapshot: SnapshotFile = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse snapshot: {}", path.as_ref().display()))?;
    Ok(snapshot)
}

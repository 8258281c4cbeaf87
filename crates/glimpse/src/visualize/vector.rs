use log::debug;

use crate::classify::{vector_shape, ElementKind};
use crate::config::PrintOptions;
use crate::error::VisualizeError;
use crate::format::format_array;
use crate::math::Array1;
use crate::value::{InspectedValue, Scalar};
use crate::visualize::{Child, DisplayHint, RenderedNode};

/// Elements of one vector as read from memory, widened for display.
#[derive(Debug, Clone, PartialEq)]
pub struct VecInfo {
    pub kind: ElementKind,
    pub len: usize,
    pub items: Array1<f64>,
}

/// Reads a vector's declared shape and its `len` elements from live memory.
pub fn vec_info<V: InspectedValue>(value: &V) -> Result<VecInfo, VisualizeError> {
    let shape = vector_shape(value.type_descriptor())?;
    let items = value
        .read_array(&shape.element, shape.len)?
        .iter()
        .map(|element| element.scalar().map(Scalar::widen))
        .collect::<Result<Vec<f64>, _>>()?;
    Ok(VecInfo {
        kind: shape.kind(),
        len: shape.len,
        items: Array1::from_vec(items),
    })
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct VectorVisualizer {
    options: PrintOptions,
}

impl VectorVisualizer {
    pub fn new(options: PrintOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &PrintOptions {
        &self.options
    }

    /// `<tag>vec<L>: [..]`, e.g. `ivec2: [1. 2.]`.
    pub fn summary<V: InspectedValue>(&self, value: &V) -> Result<String, VisualizeError> {
        let info = vec_info(value)?;
        Ok(format!(
            "{}vec{}: {}",
            info.kind.tag(),
            info.len,
            format_array(&info.items, &self.options)
        ))
    }

    /// One scalar child per element, in native type.
    pub fn children<V: InspectedValue>(&self, value: &V) -> Result<Vec<Child<V>>, VisualizeError> {
        let shape = vector_shape(value.type_descriptor())?;
        let elements = value.read_array(&shape.element, shape.len)?;
        Ok(elements
            .into_iter()
            .enumerate()
            .map(|(idx, element)| Child::indexed(idx, element))
            .collect())
    }

    pub fn display_hint(&self) -> DisplayHint {
        DisplayHint::Array
    }

    pub fn render<V: InspectedValue>(&self, value: &V) -> Result<RenderedNode<V>, VisualizeError> {
        debug!(
            "rendering vector `{}` at {:#x}",
            value.type_descriptor().name(),
            value.address()
        );
        Ok(RenderedNode {
            summary: self.summary(value)?,
            children: self.children(value)?,
            hint: self.display_hint(),
        })
    }
}

/// Renders a vector with the default print options.
pub fn render_vector<V: InspectedValue>(value: &V) -> Result<RenderedNode<V>, VisualizeError> {
    VectorVisualizer::default().render(value)
}

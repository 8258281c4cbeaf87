use log::debug;

use crate::classify::{matrix_columns, vector_shape, MATRIX_COLUMNS_FIELD};
use crate::config::PrintOptions;
use crate::error::VisualizeError;
use crate::format::format_grid;
use crate::math::Array2;
use crate::types::TypeDescriptor;
use crate::value::InspectedValue;
use crate::visualize::vector::vec_info;
use crate::visualize::{Child, DisplayHint, RenderedNode};

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatrixVisualizer {
    options: PrintOptions,
}

impl MatrixVisualizer {
    pub fn new(options: PrintOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &PrintOptions {
        &self.options
    }

    /// Column vectors in storage order.
    fn columns<V: InspectedValue>(&self, value: &V) -> Result<Vec<V>, VisualizeError> {
        let count = matrix_columns(value.type_descriptor())?;
        let storage = value.field(MATRIX_COLUMNS_FIELD)?;
        (0..count)
            .map(|idx| storage.element(idx).map_err(VisualizeError::from))
            .collect()
    }

    /// `<tag>mat<M>x<L>: ` followed by the grid, one row per element index.
    pub fn summary<V: InspectedValue>(&self, value: &V) -> Result<String, VisualizeError> {
        let columns = self.columns(value)?;
        let infos = columns
            .iter()
            .map(vec_info)
            .collect::<Result<Vec<_>, _>>()?;
        let first = infos
            .first()
            .ok_or_else(|| VisualizeError::MissingColumns(value.type_descriptor().name().to_string()))?;
        let items: Vec<_> = infos.iter().map(|info| info.items.clone()).collect();
        let grid = Array2::from_columns(&items)?;

        let separator = if self.options.grid_on_new_line { "\n" } else { "" };
        Ok(format!(
            "{}mat{}x{}: {}{}",
            first.kind.tag(),
            grid.ncols(),
            first.len,
            separator,
            format_grid(&grid, &self.options)
        ))
    }

    /// One child per column, each reinterpreted as an array of its elements.
    pub fn children<V: InspectedValue>(&self, value: &V) -> Result<Vec<Child<V>>, VisualizeError> {
        self.columns(value)?
            .into_iter()
            .enumerate()
            .map(|(idx, column)| -> Result<Child<V>, VisualizeError> {
                let shape = vector_shape(column.type_descriptor())?;
                let array = TypeDescriptor::array_of(&shape.element, shape.len);
                Ok(Child::indexed(idx, column.cast(&array)?))
            })
            .collect()
    }

    pub fn display_hint(&self) -> DisplayHint {
        DisplayHint::Array
    }

    pub fn render<V: InspectedValue>(&self, value: &V) -> Result<RenderedNode<V>, VisualizeError> {
        debug!(
            "rendering matrix `{}` at {:#x}",
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

/// Renders a matrix with the default print options.
pub fn render_matrix<V: InspectedValue>(value: &V) -> Result<RenderedNode<V>, VisualizeError> {
    MatrixVisualizer::default().render(value)
}

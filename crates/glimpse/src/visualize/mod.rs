//! Visualizers for glm-style vectors and matrices.
//!
//! Each visualizer answers the three questions a debugger front-end asks
//! about a value: its one-line summary, its drill-down children, and how
//! those children should be displayed. `render` bundles all three.
pub mod matrix;
pub mod vector;

pub use matrix::{render_matrix, MatrixVisualizer};
pub use vector::{render_vector, vec_info, VecInfo, VectorVisualizer};

/// How the host should present a node's children.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayHint {
    /// Flat indexed array: `[0]`, `[1]`, ...
    Array,
}

impl DisplayHint {
    pub fn as_str(self) -> &'static str {
        match self {
            DisplayHint::Array => "array",
        }
    }
}

/// Labeled sub-value the host can render recursively.
#[derive(Debug, Clone)]
pub struct Child<V> {
    pub label: String,
    pub value: V,
}

impl<V> Child<V> {
    pub fn indexed(index: usize, value: V) -> Self {
        Self {
            label: format!("[{}]", index),
            value,
        }
    }
}

#[derive(Debug, Clone)]
pub struct RenderedNode<V> {
    pub summary: String,
    pub children: Vec<Child<V>>,
    pub hint: DisplayHint,
}

impl<V> RenderedNode<V> {
    pub fn labels(&self) -> Vec<&str> {
        self.children.iter().map(|c| c.label.as_str()).collect()
    }
}

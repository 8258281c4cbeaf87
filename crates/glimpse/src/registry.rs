//! Type-driven dispatch from an inspected value to its visualizer.
//!
//! A `Registry` is an ordered list of bindings. Lookup strips aliases from
//! the value's type, then returns the first binding whose predicate accepts
//! it; if none does, the host falls back to its default display.
use std::fmt;

use log::{debug, info};

use crate::config::PrintOptions;
use crate::error::VisualizeError;
use crate::types::TypeDescriptor;
use crate::value::InspectedValue;
use crate::visualize::{Child, DisplayHint, MatrixVisualizer, RenderedNode, VectorVisualizer};

#[derive(Debug, Clone, PartialEq)]
pub enum Visualizer {
    Vector(VectorVisualizer),
    Matrix(MatrixVisualizer),
}

impl Visualizer {
    pub fn summary<V: InspectedValue>(&self, value: &V) -> Result<String, VisualizeError> {
        match self {
            Visualizer::Vector(v) => v.summary(value),
            Visualizer::Matrix(m) => m.summary(value),
        }
    }

    pub fn children<V: InspectedValue>(&self, value: &V) -> Result<Vec<Child<V>>, VisualizeError> {
        match self {
            Visualizer::Vector(v) => v.children(value),
            Visualizer::Matrix(m) => m.children(value),
        }
    }

    pub fn display_hint(&self) -> DisplayHint {
        match self {
            Visualizer::Vector(v) => v.display_hint(),
            Visualizer::Matrix(m) => m.display_hint(),
        }
    }

    pub fn render<V: InspectedValue>(&self, value: &V) -> Result<RenderedNode<V>, VisualizeError> {
        match self {
            Visualizer::Vector(v) => v.render(value),
            Visualizer::Matrix(m) => m.render(value),
        }
    }
}

pub type Predicate = fn(&TypeDescriptor) -> bool;

pub struct Binding {
    name: String,
    predicate: Predicate,
    visualizer: Visualizer,
}

impl Binding {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn visualizer(&self) -> &Visualizer {
        &self.visualizer
    }

    pub fn matches(&self, ty: &TypeDescriptor) -> bool {
        (self.predicate)(ty)
    }
}

impl fmt::Debug for Binding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding")
            .field("name", &self.name)
            .field("visualizer", &self.visualizer)
            .finish()
    }
}

#[derive(Debug)]
pub struct Registry {
    name: String,
    bindings: Vec<Binding>,
}

impl Registry {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bindings: Vec::new(),
        }
    }

    /// The glm vector and matrix visualizers, using `options` for both.
    pub fn glm_with_options(options: PrintOptions) -> Self {
        let mut registry = Registry::new("glm_pp");
        registry
            .register(
                "glm::vec",
                is_glm_vec,
                Visualizer::Vector(VectorVisualizer::new(options.clone())),
            )
            .register(
                "glm::mat",
                is_glm_mat,
                Visualizer::Matrix(MatrixVisualizer::new(options)),
            );
        info!("glm pretty-printing enabled");
        registry
    }

    pub fn glm() -> Self {
        Self::glm_with_options(PrintOptions::default())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn register(
        &mut self,
        name: impl Into<String>,
        predicate: Predicate,
        visualizer: Visualizer,
    ) -> &mut Self {
        let name = name.into();
        debug!("{}: registered visualizer `{}`", self.name, name);
        self.bindings.push(Binding {
            name,
            predicate,
            visualizer,
        });
        self
    }

    pub fn bindings(&self) -> &[Binding] {
        &self.bindings
    }

    /// First binding accepting the alias-stripped type, if any.
    pub fn lookup(&self, ty: &TypeDescriptor) -> Option<&Binding> {
        let basic = ty.strip_aliases();
        self.bindings.iter().find(|binding| binding.matches(basic))
    }

    /// Renders `value` with its visualizer, or `None` when no binding matches.
    pub fn render<V: InspectedValue>(
        &self,
        value: &V,
    ) -> Option<Result<RenderedNode<V>, VisualizeError>> {
        self.lookup(value.type_descriptor())
            .map(|binding| binding.visualizer.render(value))
    }
}

/// True when `ty` is `family<...>` with a single level of template parameters.
fn is_template_family(ty: &TypeDescriptor, family: &str) -> bool {
    ty.template_base() == family
        && ty.is_parameterized()
        && !ty.template_args().iter().any(|arg| arg.is_parameterized())
}

pub fn is_glm_vec(ty: &TypeDescriptor) -> bool {
    is_template_family(ty, "glm::vec")
}

pub fn is_glm_mat(ty: &TypeDescriptor) -> bool {
    is_template_family(ty, "glm::mat")
}

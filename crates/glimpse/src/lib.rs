//! glimpse: debug-time visualizers for small fixed-size vectors and matrices.
//!
//! Given a handle to a typed region of an inspected process (`InspectedValue`)
//! and the host's type metadata (`TypeDescriptor`), the visualizers rebuild
//! the value's shape from its declared dimensions, expose indexable children
//! for drill-down, and render a fixed-precision summary such as
//! `vec3: [1.   2.   3.  ]`. The `Registry` decides which visualizer applies
//! to a given type; `snapshot` provides an in-memory host.
pub mod classify;
pub mod config;
pub mod error;
pub mod format;
pub mod glm;
pub mod math;
pub mod registry;
pub mod snapshot;
pub mod types;
pub mod value;
pub mod visualize;

pub use classify::{classify, ElementKind};
pub use config::PrintOptions;
pub use error::{HostError, VisualizeError};
pub use registry::{Registry, Visualizer};
pub use types::{Encoding, TemplateArg, TypeDescriptor, TypeKind};
pub use value::{InspectedValue, Scalar};
pub use visualize::{render_matrix, render_vector, Child, DisplayHint, RenderedNode};

//! Board shapes: template parsing, built-in shapes, shape registry.

pub mod registry;
pub mod template;

pub use registry::{BoardShape, ShapeRegistry};
pub use template::{parse_template, ShapeTemplate};

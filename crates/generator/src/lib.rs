//! Schema generation through an external CRD generator

pub mod controller_gen;
pub mod error;
pub mod options;
pub mod registry;

pub use controller_gen::{ControllerGen, SchemaGenerator};
pub use error::GeneratorError;
pub use options::GeneratorOptions;
pub use registry::{GeneratorRegistry, OptionKind};

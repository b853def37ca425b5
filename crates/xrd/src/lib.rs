//! Loading, transforming and writing Crossplane XRD documents

pub mod document;
pub mod error;
pub mod transform;

pub use document::Document;
pub use error::{DocumentError, ShapeError};
pub use transform::{TransformOptions, XrdTransformer, XRD_API_VERSION, XRD_KIND};

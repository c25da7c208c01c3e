pub mod catalog;
pub mod errors;
pub mod source;

pub use catalog::CatalogFn;
pub use errors::IngestError;
pub use source::{DataSource, FunctionSpec, MAX_POINTS};

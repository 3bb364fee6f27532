pub mod catalog;
pub mod constants;
pub mod elements;
pub mod fixed_width;
pub mod orbcat_errors;
mod record;
pub mod source;

pub use catalog::Catalog;
pub use elements::{CatalogRecord, OrbitalElements};
pub use fixed_width::SchemaVariant;
pub use orbcat_errors::FetchError;
pub use source::{CatalogSource, SourceConfig};

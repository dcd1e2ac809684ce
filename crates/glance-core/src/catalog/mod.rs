mod errors;
mod handler;
mod types;

pub use errors::CatalogError;
pub use handler::{filter, grouped, list_filtered_sources, list_sources};
pub use types::{FilterRule, SourceGroup, SourceWindowRef};

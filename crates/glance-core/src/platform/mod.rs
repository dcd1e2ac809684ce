mod errors;
mod snapshot;
mod traits;
mod types;
mod xcap_query;

pub use errors::CaptureError;
pub use snapshot::SnapshotCaptureProvider;
pub use traits::{CaptureProvider, SourceQuery};
pub use types::{AppIdentity, CaptureHandle};
pub use xcap_query::XcapSourceQuery;

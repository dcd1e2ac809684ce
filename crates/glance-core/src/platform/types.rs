use serde::Serialize;
use uuid::Uuid;

use crate::catalog::SourceWindowRef;

/// Identity of a running application, as reported by the platform's
/// frontmost-application query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppIdentity {
    pub process_id: u32,
    pub app_name: String,
}

/// Handle to an active capture stream.
///
/// Opaque to everything except the provider that issued it. The handle
/// records which source it was opened against so stop/teardown can be
/// logged meaningfully.
#[derive(Debug)]
pub struct CaptureHandle {
    pub(crate) id: Uuid,
    pub(crate) source: SourceWindowRef,
}

impl CaptureHandle {
    pub fn new(source: SourceWindowRef) -> Self {
        Self {
            id: Uuid::new_v4(),
            source,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn source(&self) -> &SourceWindowRef {
        &self.source
    }
}

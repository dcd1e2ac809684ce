mod coordinator;
mod types;

pub use coordinator::FocusCoordinator;
pub use types::FocusState;

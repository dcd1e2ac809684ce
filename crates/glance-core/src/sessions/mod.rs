mod errors;
mod handler;
mod types;

pub use errors::SessionError;
pub use handler::SessionRegistry;
pub use types::{SessionPhase, SessionView};

mod errors;
mod resolver;
mod types;

pub use errors::HotkeyError;
pub use resolver::{check_binding, conflicts, resolve, validate};
pub use types::{HotkeyBinding, Modifier, Resolution};

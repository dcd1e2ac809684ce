mod hub;
mod types;
mod watcher;

pub use hub::SourceObserver;
pub use types::{SourceEvent, Subscription};
pub use watcher::{SourceWatcher, WatchConfig, run_watch_loop};

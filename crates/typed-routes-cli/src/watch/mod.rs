mod watcher;

pub use watcher::{RouteWatcher, WatchHandle};

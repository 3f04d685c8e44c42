//! Persistent local cache.
//!
//! A flat string-keyed store with typed get/set through JSON. The app uses
//! it to memoize the station list, remember recent stations, and keep a
//! per-station direction preference (see [`keys`]).

mod error;
pub mod keys;
mod local;
mod store;

pub use error::CacheError;
pub use local::LocalCache;
pub use store::{FileStore, MemoryStore, PreferenceStore};

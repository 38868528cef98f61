//! Filesystem adapters.

mod store;

pub use store::DirectoryKeyValueStore;

pub mod kv;
pub mod store;
pub mod types;

pub use kv::{FileBackend, KvBackend, MemoryBackend};
pub use store::{AutoDestroyStore, SETTINGS_KEY};
pub use types::{AutoDestroyConfig, FolderRef, FolderSummary};

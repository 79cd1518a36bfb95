//! Key-value storage port and its backends
//!
//! The record store is written against this capability rather than any
//! concrete substrate, so it can run over the on-device file store in
//! production and an in-memory map in tests.

use async_trait::async_trait;

use crate::error::AppResult;

mod file;
mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// Asynchronous string-keyed storage capability.
///
/// Values are opaque UTF-8 strings; the record store layers JSON arrays
/// on top. Implementations must resolve or reject in bounded time; no
/// retry is performed on top of them.
#[async_trait]
pub trait KeyValueStorage: Send + Sync {
    /// Fetch the raw value stored at `key`, or `None` if the key has
    /// never been written.
    async fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Overwrite the value at `key` unconditionally.
    async fn set(&self, key: &str, value: &str) -> AppResult<()>;
}

//! Cache domain.
//!
//! Upstream payloads are cached on disk, one JSON file per
//! (catalog, optional gene, source) triple. Entries go stale lazily: they are
//! never deleted, only ignored once older than the configured TTL.

mod key;
mod store;

pub use key::{CacheKey, CacheSource};
pub use store::CacheStore;

//! Upstream domain.
//!
//! Two read-only JSON services feed the catalog:
//!
//! - the **registry index**, which knows every LOVD instance and its genes
//! - each **instance's own API**, queried for gene-level detail
//!
//! Both clients read through the on-disk cache and validate payloads into
//! typed records before anything is cached or returned.

mod error;
mod index;
mod native;
mod records;
mod source;

pub use error::UpstreamError;
pub use index::RegistryIndexClient;
pub use native::InstanceNativeClient;
pub use records::{GeneRecord, InstanceSummary, parse_timestamp};
pub use source::{HttpSource, JsonSource};

#[cfg(test)]
pub(crate) use source::testing;

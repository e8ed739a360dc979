//! FAIR Data Point domain.
//!
//! Maps a request path onto one of the catalog resources and assembles its
//! linked-data document from the registry and the upstream services.
//!
//! ## Resources
//!
//! | Path | Document |
//! |---|---|
//! | `/` | FAIR Data Point + catalog list |
//! | `/catalogs` | catalog list |
//! | `/catalog/<id>` | catalog + dataset list |
//! | `/catalog/<id>/datasets` | dataset list |
//! | `/catalog/<id>/dataset/<gene>` | dataset + distribution list |
//! | `/catalog/<id>/dataset/<gene>/distributions` | distribution list |
//! | `/catalog/<id>/dataset/<gene>/distribution/<key>` | distribution |

mod catalog;
mod context;
mod dataset;
mod distribution;
pub mod distributions;
mod error;
mod metadata;
mod response;
mod root;
mod service;

pub use context::Assembly;
pub use error::ResolveError;
pub use metadata::{ResourceIris, service_epoch};
pub use response::FdpResponse;
pub use service::{FdpService, ResolveRequest};

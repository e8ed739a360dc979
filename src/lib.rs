//! LOVD FAIR Data Point
//!
//! A read-only FAIR Data Point describing the LOVD instance registry: every
//! registered LOVD instance is a catalog, every gene database it hosts is a
//! dataset, and each dataset is offered through a fixed set of
//! distributions. Metadata is served as JSON-LD or Turtle.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, server wiring and the HTTP
//!   front controller
//! - **domains**: business logic organized by bounded contexts
//!   - **registry**: configured instances and their catalog identifiers
//!   - **cache**: on-disk cache of upstream payloads
//!   - **upstream**: clients for the registry index and instance APIs
//!   - **routing**: request path cleaning and the route table
//!   - **graph**: linked-data document model, JSON-LD and Turtle output
//!   - **fdp**: the resolver assembling each resource's document
//!
//! # Example
//!
//! ```rust,no_run
//! use lovd_fdp::core::{Config, FdpServer, HttpTransport};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = FdpServer::new(config.clone())?;
//!     HttpTransport::new(config.http).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, Error, FdpServer, Result};

//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the service,
//! including error handling, configuration, server wiring and the HTTP
//! front controller.

pub mod config;
pub mod error;
pub mod server;
pub mod transport;

pub use config::{Config, LoggingConfig};
pub use error::{Error, Result};
pub use server::FdpServer;
pub use transport::{HttpConfig, HttpTransport};

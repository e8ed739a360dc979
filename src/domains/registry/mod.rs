//! Instance registry domain.
//!
//! Holds the fixed list of LOVD instances this FAIR Data Point describes and
//! the one-way mapping from their registry ids to public catalog identifiers.

mod error;
mod identifier;
mod instances;

pub use error::RegistryError;
pub use identifier::derive;
pub use instances::{Instance, InstanceRegistry};

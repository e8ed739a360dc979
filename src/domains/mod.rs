//! Domains module containing business logic organized by bounded contexts.
//!
//! Dependencies point one way: `fdp` builds on everything else, `upstream`
//! uses `cache` and `registry`, and `graph`, `routing`, `cache` and
//! `registry` stand alone.

pub mod cache;
pub mod fdp;
pub mod graph;
pub mod registry;
pub mod routing;
pub mod upstream;

//! Routing domain: turns a request path into one of the catalog resources.

mod path;
mod table;

pub use path::RequestPath;
pub use table::{MalformedPath, Resource, Route, match_route};

//! Graph domain: the node/edge document model and its serialisations.

mod jsonld;
mod model;
mod turtle;
pub mod vocab;

pub use jsonld::to_json_ld;
pub use model::{GraphDocument, Literal, Node, Term};
pub use turtle::to_turtle;

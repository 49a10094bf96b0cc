//! In-memory markup trees (HTML, XML, SVG) built by method calls and
//! serialized to text. Nothing is parsed, validated or escaped: names,
//! attribute values and content are emitted as given.

pub mod collect;
pub mod debug;
pub mod serialize;
pub mod traverse;

mod error;
mod types;

pub use crate::error::{MarkupError, MarkupResult};
pub use crate::serialize::{attribute_string, serialize, to_markup};
pub use crate::traverse::{Descendants, count_nodes, descendants};
pub use crate::types::{DECLARATION_MARKER, Node};

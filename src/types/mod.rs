mod document;
mod issue;

pub use document::{Document, Node, NO_DESCRIPTION};
pub use issue::Issue;

// Rendering core: shared formatting rules, the validation gate, the output
// node tree, and the dispatch wrapper every render call goes through.

pub mod dispatch;
pub mod format;
pub mod tree;

pub use dispatch::render_document;
pub use tree::{Node, PrintStyles, RenderedDocument, SectionKey};

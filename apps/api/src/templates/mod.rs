#![allow(dead_code)]

//! The template catalog: render contract, built-in skins, and the registry
//! that resolves a template id to its implementation.

pub mod descriptor;
pub mod registry;
pub mod skins;

pub use descriptor::{TemplateDescriptor, TemplateSummary};
pub use registry::{global, TemplateRegistry, DEFAULT_TEMPLATE_ID};

use crate::models::cv::CvDocument;
use crate::render::tree::Node;

/// The render contract every skin implements.
///
/// A skin pairs one [`TemplateDescriptor`] with a body renderer. Skins may
/// assume the document already passed the validity gate (the dispatch
/// wrapper enforces it) and differ only in arrangement and styling; the
/// data semantics of `render_body` are fixed. A skin must emit every item
/// of every non-empty section in input order, and must omit a section
/// entirely when its sequence is empty.
pub trait CvTemplate: Send + Sync {
    fn descriptor(&self) -> &TemplateDescriptor;

    /// Lays out the full document for this skin.
    fn render_body(&self, doc: &CvDocument) -> Vec<Node>;

    fn id(&self) -> &str {
        &self.descriptor().id
    }

    fn name(&self) -> &str {
        &self.descriptor().name
    }

    fn description(&self) -> &str {
        &self.descriptor().description
    }

    fn category(&self) -> &str {
        &self.descriptor().category
    }
}

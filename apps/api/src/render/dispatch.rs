//! Render dispatch and the validation gate.
//!
//! Every render call goes through here. An unknown template id is a
//! caller-visible error, never a silent fallback to the default skin. An
//! invalid document is absorbed: the caller still gets a renderable tree,
//! just the fixed placeholder instead of skin output.

use tracing::debug;

use crate::errors::AppError;
use crate::models::cv::CvDocument;
use crate::render::format::validate_document;
use crate::render::tree::{Node, PrintStyles, RenderedDocument};
use crate::templates::{CvTemplate, TemplateRegistry};

/// Top-level render entry point: resolve the template id, then render
/// through the validation gate.
pub fn render_document(
    registry: &TemplateRegistry,
    template_id: &str,
    doc: &CvDocument,
) -> Result<RenderedDocument, AppError> {
    let template = registry
        .get(template_id)
        .ok_or_else(|| AppError::TemplateNotFound(template_id.to_string()))?;
    Ok(render_with(template.as_ref(), doc))
}

/// The validation wrapper around a concrete skin.
///
/// Skins past this gate may safely assume `full_name`, `email`, and `phone`
/// are populated. Output always carries the shared print fragment.
pub fn render_with(template: &dyn CvTemplate, doc: &CvDocument) -> RenderedDocument {
    if !validate_document(doc) {
        debug!(
            template = template.id(),
            "document failed the validity gate; returning placeholder"
        );
        return RenderedDocument {
            template_id: template.id().to_string(),
            body: invalid_document_body(),
            print: PrintStyles::default(),
        };
    }
    RenderedDocument {
        template_id: template.id().to_string(),
        body: template.render_body(doc),
        print: PrintStyles::default(),
    }
}

/// The uniform placeholder tree for documents failing the gate. Identical
/// for every skin so the failure is obvious and not skin-dependent.
pub fn invalid_document_body() -> Vec<Node> {
    vec![Node::Region {
        name: "invalid".to_string(),
        children: vec![
            Node::Heading {
                level: 1,
                text: "Incomplete CV data".to_string(),
            },
            Node::Text {
                text: "Full name, email, and phone are required before this CV can be rendered."
                    .to_string(),
            },
        ],
    }]
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────

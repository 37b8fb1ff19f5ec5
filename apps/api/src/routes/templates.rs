//! Template gallery and render endpoints.
//!
//! The gallery endpoints expose the registry's query surface in the stable
//! `TemplateSummary` shape; the render endpoint is the only way a document
//! enters the rendering core. Registration stays an in-process
//! administrative operation and is deliberately not exposed here.

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::cv::CvDocument;
use crate::render::{render_document, RenderedDocument};
use crate::state::AppState;
use crate::templates::{TemplateDescriptor, TemplateSummary};

#[derive(Deserialize)]
pub struct TemplateListQuery {
    /// Exact category filter.
    pub category: Option<String>,
    /// Case-insensitive substring search over name/description/category.
    pub q: Option<String>,
}

/// GET /api/v1/templates
pub async fn handle_list_templates(
    State(state): State<AppState>,
    Query(params): Query<TemplateListQuery>,
) -> Json<Vec<TemplateSummary>> {
    let descriptors = match (&params.q, &params.category) {
        (Some(q), _) => state.registry.search(q),
        (None, Some(category)) => state.registry.by_category(category),
        (None, None) => state.registry.all(),
    };
    Json(descriptors.iter().map(TemplateSummary::from).collect())
}

/// GET /api/v1/templates/categories
pub async fn handle_list_categories(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.registry.categories())
}

/// GET /api/v1/templates/default
pub async fn handle_default_template(
    State(state): State<AppState>,
) -> Result<Json<TemplateDescriptor>, AppError> {
    state
        .registry
        .default_template()
        .map(Json)
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("template catalog is empty")))
}

/// GET /api/v1/templates/:id
pub async fn handle_get_template(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TemplateDescriptor>, AppError> {
    state
        .registry
        .info(&id)
        .map(Json)
        .ok_or(AppError::TemplateNotFound(id))
}

/// POST /api/v1/templates/:id/render
///
/// Unknown template id is a 404; a document failing the validity gate still
/// returns 200 with the placeholder body, so the UI always has a tree to
/// draw.
pub async fn handle_render(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(doc): Json<CvDocument>,
) -> Result<Json<RenderedDocument>, AppError> {
    let rendered = render_document(state.registry, &id, &doc)?;
    Ok(Json(rendered))
}

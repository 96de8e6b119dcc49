//! Export API endpoints.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use super::{success, ApiResult};
use crate::errors::AppError;
use crate::export::{build_export_layout, ExportFormat, ExportLayout};
use crate::models::TeamMember;
use crate::AppState;

/// Request body for an export.
#[derive(Debug, Deserialize)]
pub struct ExportRequest {
    pub format: ExportFormat,
    pub members: Vec<TeamMember>,
}

fn layout_for(state: &AppState, request: &ExportRequest) -> ExportLayout {
    let layout = build_export_layout(
        &request.members,
        request.format,
        &state.geometry,
        state.palette,
    );
    tracing::info!(
        format = ?request.format,
        members = layout.member_count,
        pages = layout.pages,
        "Built export layout"
    );
    layout
}

/// POST /api/export - Positioned draw instructions for the requested format.
pub async fn export_layout(
    State(state): State<AppState>,
    Json(request): Json<ExportRequest>,
) -> ApiResult<ExportLayout> {
    success(layout_for(&state, &request))
}

/// POST /api/export/download - Serialized export as a file attachment.
pub async fn export_download(
    State(state): State<AppState>,
    Json(request): Json<ExportRequest>,
) -> Result<Response, AppError> {
    let layout = layout_for(&state, &request);
    let bytes = state.serializer.serialize(&layout)?;

    let file_name = format!(
        "{}-{}.{}",
        request.format.file_stem(),
        chrono::Utc::now().format("%Y-%m-%d"),
        state.serializer.extension()
    );

    Ok((
        [
            (header::CONTENT_TYPE, state.serializer.content_type().to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{}\"", file_name),
            ),
        ],
        bytes,
    )
        .into_response())
}

//! Badge API endpoints.

use axum::{extract::Query, Json};
use serde::Deserialize;

use super::{success, ApiResult};
use crate::models::{selectable_badges, BadgeData, Role};
use crate::styling::{resolve_badge_overlay, BadgeOverlay, BadgePosition, BadgeSize};

/// Query parameters for overlay placement.
#[derive(Debug, Deserialize)]
pub struct OverlayQuery {
    #[serde(default)]
    pub size: BadgeSize,
    #[serde(default)]
    pub position: BadgePosition,
}

/// GET /api/badges/overlay - Size class and offsets for a badge overlay.
pub async fn badge_overlay(Query(query): Query<OverlayQuery>) -> ApiResult<BadgeOverlay> {
    success(resolve_badge_overlay(query.size, query.position))
}

/// Request body for filtering a badge catalog.
#[derive(Debug, Deserialize)]
pub struct SelectableBadgesRequest {
    #[serde(default)]
    pub role: Role,
    pub badges: Vec<BadgeData>,
}

/// POST /api/badges/selectable - Badges the given account tier may pick.
pub async fn list_selectable_badges(
    Json(request): Json<SelectableBadgesRequest>,
) -> ApiResult<Vec<BadgeData>> {
    success(selectable_badges(request.role, &request.badges))
}

//! Member API endpoints.

use axum::Json;
use serde::Deserialize;

use super::{success, ApiResult};
use crate::errors::AppError;
use crate::models::{CardCustomization, TeamMember};

/// Request body for changing a member's card customization.
#[derive(Debug, Deserialize)]
pub struct CustomizeRequest {
    pub member: TeamMember,
    #[serde(default)]
    pub customization: CardCustomization,
}

/// POST /api/members/customize - Apply a customization, enforcing the account tier.
pub async fn customize_member(Json(request): Json<CustomizeRequest>) -> ApiResult<TeamMember> {
    let CustomizeRequest {
        mut member,
        customization,
    } = request;

    if member.id.trim().is_empty() {
        return Err(AppError::Validation("Member id is required".to_string()));
    }

    member.apply_customization(customization)?;
    tracing::info!(member_id = %member.id, "Updated card customization");

    success(member)
}

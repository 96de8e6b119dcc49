//! Project grouping endpoint.

use axum::Json;

use super::{success, ApiResult};
use crate::models::{group_by_project, ProjectGroup, TeamMember};

/// POST /api/projects/groups - Group a roster snapshot by project name.
pub async fn project_groups(Json(members): Json<Vec<TeamMember>>) -> ApiResult<Vec<ProjectGroup>> {
    success(group_by_project(&members))
}

//! Announcement feed endpoint.

use axum::Json;

use super::{success, ApiResult};
use crate::models::{newest_first, Announcement};

/// POST /api/announcements/feed - Order announcements newest first.
pub async fn announcement_feed(
    Json(announcements): Json<Vec<Announcement>>,
) -> ApiResult<Vec<Announcement>> {
    success(newest_first(announcements))
}

//! Card style API endpoints.

use axum::{extract::State, Json};
use serde::Serialize;

use super::{success, ApiResult};
use crate::models::TeamMember;
use crate::styling::{resolve_card_style_report, CardStyle, Palette};
use crate::AppState;

/// Style of one card in a batch response.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberCardStyle {
    pub member_id: String,
    pub style: CardStyle,
}

fn resolve_logged(member: &TeamMember, palette: &Palette) -> CardStyle {
    let report = resolve_card_style_report(member, palette);
    for issue in &report.issues {
        tracing::warn!(member_id = %member.id, "Card style degraded: {}", issue);
    }
    report.style
}

/// POST /api/cards/style - Resolve the style of a single card.
pub async fn resolve_card(
    State(state): State<AppState>,
    Json(member): Json<TeamMember>,
) -> ApiResult<CardStyle> {
    success(resolve_logged(&member, state.palette))
}

/// POST /api/cards/styles - Resolve styles for a whole roster snapshot.
pub async fn resolve_cards(
    State(state): State<AppState>,
    Json(members): Json<Vec<TeamMember>>,
) -> ApiResult<Vec<MemberCardStyle>> {
    let styles = members
        .iter()
        .map(|member| MemberCardStyle {
            member_id: member.id.clone(),
            style: resolve_logged(member, state.palette),
        })
        .collect();

    success(styles)
}

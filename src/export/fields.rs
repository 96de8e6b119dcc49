use chrono::{DateTime, Utc};

use crate::models::TeamMember;
use crate::styling::Palette;

/// Date format of the "Last Active" line, e.g. `Oct 16, 2026 3:04 PM`.
pub const LAST_ACTIVE_FORMAT: &str = "%b %-d, %Y %-I:%M %p";

/// The text lines every export format shows for a member, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemberFields {
    pub name: String,
    pub position: String,
    pub projects: String,
    pub status: String,
    pub last_active: String,
}

impl MemberFields {
    pub fn from_member(member: &TeamMember, palette: &Palette) -> Self {
        Self {
            name: member.name.clone(),
            position: member.position.clone(),
            projects: projects_line(&member.projects),
            status: format!("Status: {}", palette.label(&member.status)),
            last_active: format!("Last Active: {}", format_last_active(&member.last_updated)),
        }
    }

    /// Detail lines below the name.
    pub fn details(&self) -> [&str; 4] {
        [&self.position, &self.projects, &self.status, &self.last_active]
    }
}

pub fn projects_line(projects: &[String]) -> String {
    if projects.is_empty() {
        "Projects: None".to_string()
    } else {
        format!("Projects: {}", projects.join(", "))
    }
}

pub fn format_last_active(timestamp: &DateTime<Utc>) -> String {
    timestamp.format(LAST_ACTIVE_FORMAT).to_string()
}

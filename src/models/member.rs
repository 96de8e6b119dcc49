//! Team member model matching the frontend TeamMember interface.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Availability state of a team member.
///
/// Any string is accepted on the wire; values the dashboard does not know
/// about are kept verbatim in [`Status::Unknown`] so they survive a round trip.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Status {
    Available,
    SomeAvailability,
    Busy,
    SeriouslyBusy,
    Away,
    Vacation,
    Unknown(String),
}

impl Status {
    pub fn as_str(&self) -> &str {
        match self {
            Status::Available => "available",
            Status::SomeAvailability => "someAvailability",
            Status::Busy => "busy",
            Status::SeriouslyBusy => "seriouslyBusy",
            Status::Away => "away",
            Status::Vacation => "vacation",
            Status::Unknown(raw) => raw,
        }
    }
}

impl From<String> for Status {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "available" => Status::Available,
            "someAvailability" => Status::SomeAvailability,
            "busy" => Status::Busy,
            "seriouslyBusy" => Status::SeriouslyBusy,
            "away" => Status::Away,
            "vacation" => Status::Vacation,
            _ => Status::Unknown(raw),
        }
    }
}

impl From<&str> for Status {
    fn from(raw: &str) -> Self {
        Status::from(raw.to_string())
    }
}

impl From<Status> for String {
    fn from(status: Status) -> Self {
        match status {
            Status::Unknown(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Account tier. Gates which customization fields a member may set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Role {
    #[default]
    #[serde(alias = "plain")]
    User,
    Premium,
    Admin,
}

impl Role {
    /// Premium cosmetics are available to premium accounts and admins.
    pub fn is_premium(self) -> bool {
        matches!(self, Role::Premium | Role::Admin)
    }
}

/// User-supplied card appearance overrides.
///
/// Fields are stored as sent by the client; the card style resolver decides
/// which one wins and whether it is well formed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardCustomization {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gradient: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animate: Option<bool>,
    /// One of gentle, smooth, energetic, dramatic. "none" or anything else
    /// falls back to gentle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub animation_type: Option<String>,
}

impl CardCustomization {
    pub fn animate(&self) -> bool {
        self.animate.unwrap_or(false)
    }

    /// Name of the first field that requires a premium account, if any.
    pub fn premium_field(&self) -> Option<&'static str> {
        if is_set(&self.gradient) {
            Some("gradient")
        } else if is_set(&self.background_image) {
            Some("backgroundImage")
        } else if self.animate() {
            Some("animate")
        } else {
            None
        }
    }
}

fn is_set(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.trim().is_empty())
}

/// A roster entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub position: String,
    pub status: Status,
    #[serde(default)]
    pub is_on_vacation: bool,
    /// Insertion order is display order.
    #[serde(default)]
    pub projects: Vec<String>,
    pub last_updated: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customization: Option<CardCustomization>,
    #[serde(default)]
    pub role: Role,
}

/// Returned when a member tries to set a premium-only customization field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomizationDenied {
    pub field: &'static str,
}

impl fmt::Display for CustomizationDenied {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Customization field '{}' requires a premium account", self.field)
    }
}

impl std::error::Error for CustomizationDenied {}

impl TeamMember {
    pub fn new(name: impl Into<String>, position: impl Into<String>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name: name.into(),
            position: position.into(),
            status: Status::Available,
            is_on_vacation: false,
            projects: Vec::new(),
            last_updated: Utc::now(),
            customization: None,
            role: Role::User,
        }
    }

    fn touch(&mut self) {
        self.last_updated = Utc::now();
    }

    pub fn set_status(&mut self, status: Status) {
        self.status = status;
        self.touch();
    }

    pub fn set_vacation(&mut self, on_vacation: bool) {
        self.is_on_vacation = on_vacation;
        self.touch();
    }

    /// Appends a project. Blank names and names already present are ignored.
    /// Returns whether the list changed.
    pub fn add_project(&mut self, project: &str) -> bool {
        let project = project.trim();
        if project.is_empty() || self.projects.iter().any(|p| p == project) {
            return false;
        }
        self.projects.push(project.to_string());
        self.touch();
        true
    }

    pub fn remove_project(&mut self, project: &str) -> bool {
        let before = self.projects.len();
        self.projects.retain(|p| p != project);
        if self.projects.len() == before {
            return false;
        }
        self.touch();
        true
    }

    /// Replaces the card customization, enforcing the member's account tier.
    ///
    /// An empty customization clears the override.
    pub fn apply_customization(
        &mut self,
        customization: CardCustomization,
    ) -> Result<(), CustomizationDenied> {
        if !self.role.is_premium() {
            if let Some(field) = customization.premium_field() {
                return Err(CustomizationDenied { field });
            }
        }

        self.customization = if customization == CardCustomization::default() {
            None
        } else {
            Some(customization)
        };
        self.touch();
        Ok(())
    }
}

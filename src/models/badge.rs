//! Badge catalog entries (premium cosmetic assets).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeVisibility {
    Public,
    Premium,
}

/// A badge image that can be overlaid on a member card.
///
/// Field names follow the badge catalog table, hence snake_case on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BadgeData {
    pub id: String,
    pub name: String,
    pub image_url: String,
    pub is_active: bool,
    pub visibility: BadgeVisibility,
    pub created_at: DateTime<Utc>,
}

impl BadgeData {
    /// Whether an account with `role` may pick this badge.
    pub fn selectable_by(&self, role: Role) -> bool {
        self.is_active
            && match self.visibility {
                BadgeVisibility::Public => true,
                BadgeVisibility::Premium => role.is_premium(),
            }
    }
}

/// Filters a catalog down to the badges `role` may select, keeping catalog order.
pub fn selectable_badges(role: Role, catalog: &[BadgeData]) -> Vec<BadgeData> {
    catalog
        .iter()
        .filter(|badge| badge.selectable_by(role))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn badge(id: &str, is_active: bool, visibility: BadgeVisibility) -> BadgeData {
        BadgeData {
            id: id.to_string(),
            name: id.to_uppercase(),
            image_url: format!("https://cdn.example.com/{}.png", id),
            is_active,
            visibility,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_selectable_badges_by_role() {
        let catalog = vec![
            badge("party-hat", true, BadgeVisibility::Public),
            badge("crown", true, BadgeVisibility::Premium),
            badge("retired", false, BadgeVisibility::Public),
        ];

        let plain: Vec<_> = selectable_badges(Role::User, &catalog)
            .into_iter()
            .map(|b| b.id)
            .collect();
        assert_eq!(plain, vec!["party-hat"]);

        let premium: Vec<_> = selectable_badges(Role::Premium, &catalog)
            .into_iter()
            .map(|b| b.id)
            .collect();
        assert_eq!(premium, vec!["party-hat", "crown"]);
    }

    #[test]
    fn test_inactive_badge_hidden_from_admin() {
        let retired = badge("retired", false, BadgeVisibility::Premium);
        assert!(!retired.selectable_by(Role::Admin));
    }
}

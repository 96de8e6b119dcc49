//! Badge "hat" overlay placement.
//!
//! Corner anchors push the badge a fixed 40px outside the card; the center
//! anchor is percentage-based.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl BadgeSize {
    pub fn class(self) -> &'static str {
        match self {
            BadgeSize::Small => "w-12 h-12",
            BadgeSize::Medium => "w-16 h-16",
            BadgeSize::Large => "w-20 h-20",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BadgePosition {
    TopLeft,
    #[default]
    TopRight,
    BottomLeft,
    BottomRight,
    Center,
}

const HAT_OFFSET: &str = "-40px";

/// Absolute positioning for the overlay element. Unset edges are omitted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct OffsetStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<&'static str>,
    pub transform: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BadgeOverlay {
    pub size_class: &'static str,
    pub offset_style: OffsetStyle,
}

pub fn resolve_badge_overlay(size: BadgeSize, position: BadgePosition) -> BadgeOverlay {
    let offset_style = match position {
        BadgePosition::TopLeft => OffsetStyle {
            top: Some(HAT_OFFSET),
            left: Some(HAT_OFFSET),
            transform: "none",
            ..Default::default()
        },
        BadgePosition::TopRight => OffsetStyle {
            top: Some(HAT_OFFSET),
            right: Some(HAT_OFFSET),
            transform: "none",
            ..Default::default()
        },
        BadgePosition::BottomLeft => OffsetStyle {
            bottom: Some(HAT_OFFSET),
            left: Some(HAT_OFFSET),
            transform: "none",
            ..Default::default()
        },
        BadgePosition::BottomRight => OffsetStyle {
            bottom: Some(HAT_OFFSET),
            right: Some(HAT_OFFSET),
            transform: "none",
            ..Default::default()
        },
        BadgePosition::Center => OffsetStyle {
            top: Some("50%"),
            left: Some("50%"),
            transform: "translate(-50%,-50%)",
            ..Default::default()
        },
    };

    BadgeOverlay {
        size_class: size.class(),
        offset_style,
    }
}

//! Card background resolution.
//!
//! Precedence, highest first: vacation flag, custom gradient, custom color,
//! custom background image, status table.

use serde::Serialize;

use super::customization::{resolve_custom_background, CustomBackground, StyleIssue};
use super::palette::{BorderHint, Palette};
use crate::models::{Status, TeamMember};

/// How the card background is painted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Paint {
    Gradient { value: String },
    Color { value: String },
    Image {
        url: String,
        position: &'static str,
        size: &'static str,
    },
}

impl Paint {
    fn image(url: String) -> Self {
        Paint::Image {
            url,
            position: "center",
            size: "cover",
        }
    }

    pub fn is_gradient(&self) -> bool {
        matches!(self, Paint::Gradient { .. })
    }

    /// CSS `background` shorthand for this paint.
    pub fn css(&self) -> String {
        match self {
            Paint::Gradient { value } | Paint::Color { value } => value.clone(),
            Paint::Image {
                url,
                position,
                size,
            } => format!("url(\"{}\") {} / {} no-repeat", url.trim(), position, size),
        }
    }
}

/// Named keyframe presets understood by the card renderer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum AnimationType {
    #[default]
    Gentle,
    Smooth,
    Energetic,
    Dramatic,
}

impl AnimationType {
    /// Unset, "none" and unrecognized names all mean gentle.
    pub fn from_preference(preference: Option<&str>) -> Self {
        match preference.map(str::trim) {
            Some("smooth") => AnimationType::Smooth,
            Some("energetic") => AnimationType::Energetic,
            Some("dramatic") => AnimationType::Dramatic,
            _ => AnimationType::Gentle,
        }
    }
}

/// Resolved appearance of one member card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CardStyle {
    pub background: Paint,
    /// CSS `background` value, ready to drop into a style attribute.
    pub css: String,
    pub border_class_hint: Option<BorderHint>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub animation: Option<AnimationType>,
    pub status_label: &'static str,
}

/// Card style together with the problems skipped while resolving it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardStyleReport {
    pub style: CardStyle,
    pub issues: Vec<StyleIssue>,
}

pub fn resolve_card_style(member: &TeamMember, palette: &Palette) -> CardStyle {
    resolve_card_style_report(member, palette).style
}

pub fn resolve_card_style_report(member: &TeamMember, palette: &Palette) -> CardStyleReport {
    let status_label = palette.label(&member.status);
    let mut issues = Vec::new();

    if let Status::Unknown(raw) = &member.status {
        issues.push(StyleIssue::UnknownStatus {
            status: raw.clone(),
        });
    }

    if member.is_on_vacation {
        let vacation = palette.vacation();
        let background = Paint::Gradient {
            value: vacation.gradient.to_string(),
        };
        return CardStyleReport {
            style: CardStyle {
                css: background.css(),
                background,
                border_class_hint: Some(vacation.border),
                animation: None,
                status_label,
            },
            issues,
        };
    }

    let custom = match &member.customization {
        Some(customization) => {
            let (background, skipped) = resolve_custom_background(customization);
            issues.extend(skipped);
            background
        }
        None => None,
    };

    let (background, border_class_hint) = match custom {
        Some(CustomBackground::Gradient(value)) => (Paint::Gradient { value }, None),
        Some(CustomBackground::Color(value)) => (Paint::Color { value }, None),
        Some(CustomBackground::Image(url)) => (Paint::image(url), None),
        None => {
            let entry = palette.style(&member.status);
            (
                Paint::Gradient {
                    value: entry.gradient.to_string(),
                },
                Some(entry.border),
            )
        }
    };

    let animation = member
        .customization
        .as_ref()
        .filter(|c| c.animate() && background.is_gradient())
        .map(|c| AnimationType::from_preference(c.animation_type.as_deref()));

    CardStyleReport {
        style: CardStyle {
            css: background.css(),
            background,
            border_class_hint,
            animation,
            status_label,
        },
        issues,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CardCustomization;
    use crate::styling::palette::VACATION_GRADIENT;

    const CUSTOM_GRADIENT: &str = "linear-gradient(90deg, #667eea 0%, #764ba2 100%)";

    fn member(status: &str) -> TeamMember {
        let mut member = TeamMember::new("Ada", "Engineer");
        member.status = Status::from(status);
        member
    }

    fn customized(status: &str, customization: CardCustomization) -> TeamMember {
        let mut m = member(status);
        m.customization = Some(customization);
        m
    }

    fn everything() -> CardCustomization {
        CardCustomization {
            color: Some("#123456".to_string()),
            gradient: Some(CUSTOM_GRADIENT.to_string()),
            background_image: Some("https://cdn.example.com/bg.png".to_string()),
            animate: Some(true),
            animation_type: Some("dramatic".to_string()),
        }
    }

    #[test]
    fn test_vacation_flag_overrides_customization() {
        let mut m = customized("busy", everything());
        m.is_on_vacation = true;

        let style = resolve_card_style(&m, Palette::standard());
        assert_eq!(
            style.background,
            Paint::Gradient {
                value: VACATION_GRADIENT.to_string()
            }
        );
        assert_eq!(style.border_class_hint, Some(BorderHint::Orange));
        assert_eq!(style.animation, None);
    }

    #[test]
    fn test_vacation_status_matches_vacation_flag() {
        let by_status = resolve_card_style(&member("vacation"), Palette::standard());

        let mut flagged = member("available");
        flagged.is_on_vacation = true;
        let by_flag = resolve_card_style(&flagged, Palette::standard());

        assert_eq!(by_status.background, by_flag.background);
        assert_eq!(by_status.border_class_hint, by_flag.border_class_hint);
    }

    #[test]
    fn test_custom_gradient_used_verbatim() {
        let style = resolve_card_style(&customized("busy", everything()), Palette::standard());
        assert_eq!(style.css, CUSTOM_GRADIENT);
        assert_eq!(style.border_class_hint, None);
    }

    #[test]
    fn test_custom_color_beats_image() {
        let style = resolve_card_style(
            &customized(
                "busy",
                CardCustomization {
                    color: Some("#123456".to_string()),
                    background_image: Some("/bg.png".to_string()),
                    ..Default::default()
                },
            ),
            Palette::standard(),
        );
        assert_eq!(
            style.background,
            Paint::Color {
                value: "#123456".to_string()
            }
        );
        assert_eq!(style.border_class_hint, None);
    }

    #[test]
    fn test_background_image_is_centered_cover() {
        let style = resolve_card_style(
            &customized(
                "away",
                CardCustomization {
                    background_image: Some("https://cdn.example.com/bg.png".to_string()),
                    ..Default::default()
                },
            ),
            Palette::standard(),
        );
        assert_eq!(
            style.css,
            "url(\"https://cdn.example.com/bg.png\") center / cover no-repeat"
        );
    }

    #[test]
    fn test_custom_gradient_round_trips_whitespace() {
        let raw = " linear-gradient(#000, #fff) ";
        let style = resolve_card_style(
            &customized(
                "busy",
                CardCustomization {
                    gradient: Some(raw.to_string()),
                    ..Default::default()
                },
            ),
            Palette::standard(),
        );
        assert_eq!(style.css, raw);
    }

    #[test]
    fn test_image_breakout_degrades_to_status() {
        let report = resolve_card_style_report(
            &customized(
                "away",
                CardCustomization {
                    background_image: Some("/a.png\");color:red;x:url(\"".to_string()),
                    ..Default::default()
                },
            ),
            Palette::standard(),
        );
        assert_eq!(report.style.css, Palette::standard().style(&Status::Away).gradient);
        assert_eq!(report.style.border_class_hint, Some(BorderHint::Slate));
        assert_eq!(report.issues.len(), 1);
    }

    #[test]
    fn test_status_table_without_customization() {
        let palette = Palette::standard();
        for status in ["available", "someAvailability", "busy", "seriouslyBusy", "away"] {
            let m = member(status);
            let style = resolve_card_style(&m, palette);
            let entry = palette.style(&m.status);
            assert_eq!(style.css, entry.gradient);
            assert_eq!(style.border_class_hint, Some(entry.border));
        }
    }

    #[test]
    fn test_unknown_status_uses_fallback() {
        let report = resolve_card_style_report(&member("onFire"), Palette::standard());
        assert_eq!(report.style.border_class_hint, Some(BorderHint::Gray));
        assert_eq!(report.style.status_label, "Unknown");
        assert_eq!(
            report.issues,
            vec![StyleIssue::UnknownStatus {
                status: "onFire".to_string()
            }]
        );
    }

    #[test]
    fn test_malformed_customization_degrades_to_status() {
        let report = resolve_card_style_report(
            &customized(
                "busy",
                CardCustomization {
                    color: Some("not-a-color".to_string()),
                    ..Default::default()
                },
            ),
            Palette::standard(),
        );
        assert_eq!(report.style.border_class_hint, Some(BorderHint::Red));
        assert_eq!(report.issues.len(), 1);
    }

    #[test]
    fn test_animation_only_on_gradients() {
        let gradient = resolve_card_style(&customized("busy", everything()), Palette::standard());
        assert_eq!(gradient.animation, Some(AnimationType::Dramatic));

        let color = resolve_card_style(
            &customized(
                "busy",
                CardCustomization {
                    color: Some("#123456".to_string()),
                    animate: Some(true),
                    ..Default::default()
                },
            ),
            Palette::standard(),
        );
        assert_eq!(color.animation, None);
    }

    #[test]
    fn test_animation_type_defaults_to_gentle() {
        assert_eq!(AnimationType::from_preference(None), AnimationType::Gentle);
        assert_eq!(AnimationType::from_preference(Some("none")), AnimationType::Gentle);
        assert_eq!(
            AnimationType::from_preference(Some("energetic")),
            AnimationType::Energetic
        );

        let style = resolve_card_style(
            &customized(
                "away",
                CardCustomization {
                    animate: Some(true),
                    animation_type: Some("none".to_string()),
                    ..Default::default()
                },
            ),
            Palette::standard(),
        );
        assert_eq!(style.animation, Some(AnimationType::Gentle));
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let m = customized("seriouslyBusy", everything());
        let first = resolve_card_style(&m, Palette::standard());
        let second = resolve_card_style(&m, Palette::standard());
        assert_eq!(first, second);
        assert_eq!(
            serde_json::to_string(&first).unwrap(),
            serde_json::to_string(&second).unwrap()
        );
    }
}

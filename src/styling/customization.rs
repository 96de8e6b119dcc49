//! Normalizes a member's raw customization fields into a single background.
//!
//! Candidates are tried in precedence order (gradient, color, image). A value
//! that does not parse is reported and skipped so the next tier can win.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use url::Url;

use crate::models::CardCustomization;

static HEX_COLOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^#(?:[0-9a-fA-F]{3,4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})$")
        .expect("hex color pattern is valid")
});

static GRADIENT_HEAD: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:repeating-)?(?:linear|radial|conic)-gradient\(")
        .expect("gradient pattern is valid")
});

/// The customization tier that won precedence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CustomBackground {
    Gradient(String),
    Color(String),
    Image(String),
}

/// A resolution problem the resolver recovered from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum StyleIssue {
    /// A customization value that could not be used; the next tier was tried.
    #[serde(rename_all = "camelCase")]
    MalformedCustomization { field: &'static str, value: String },
    /// A status the palette does not know; the neutral fallback was used.
    UnknownStatus { status: String },
}

impl fmt::Display for StyleIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StyleIssue::MalformedCustomization { field, value } => {
                write!(f, "malformed customization {}: {:?}", field, value)
            }
            StyleIssue::UnknownStatus { status } => write!(f, "unknown status {:?}", status),
        }
    }
}

pub fn is_valid_color(value: &str) -> bool {
    HEX_COLOR.is_match(value)
}

/// Accepts CSS gradient functions with a balanced argument list.
pub fn is_valid_gradient(value: &str) -> bool {
    if !GRADIENT_HEAD.is_match(value) || !value.ends_with(')') {
        return false;
    }

    let mut depth: i32 = 0;
    for (i, c) in value.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                // The outer call must close at the very end.
                if depth < 0 || (depth == 0 && i != value.len() - 1) {
                    return false;
                }
            }
            _ => {}
        }
    }
    depth == 0
}

/// Characters that would end a quoted CSS `url("...")` early.
const CSS_URL_BREAKERS: &[char] = &['"', '\'', '(', ')', '\\'];

/// Absolute http(s) URLs or root-relative paths, free of characters that
/// could escape the CSS `url()` they are written into.
pub fn is_valid_image_url(value: &str) -> bool {
    if value
        .chars()
        .any(|c| c.is_whitespace() || CSS_URL_BREAKERS.contains(&c))
    {
        return false;
    }
    if value.starts_with('/') && !value.starts_with("//") {
        return true;
    }
    match Url::parse(value) {
        Ok(url) => matches!(url.scheme(), "http" | "https") && url.has_host(),
        Err(_) => false,
    }
}

type Tier<'a> = (
    &'static str,
    Option<&'a str>,
    fn(&str) -> bool,
    fn(String) -> CustomBackground,
);

/// The raw value, unless it is unset or only whitespace.
fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

/// Picks the winning customization tier, collecting every value that had to
/// be skipped along the way.
///
/// Values are validated with surrounding whitespace ignored, but the winner
/// is returned exactly as stored.
pub fn resolve_custom_background(
    customization: &CardCustomization,
) -> (Option<CustomBackground>, Vec<StyleIssue>) {
    let mut issues = Vec::new();

    let tiers: [Tier; 3] = [
        (
            "gradient",
            non_blank(&customization.gradient),
            is_valid_gradient,
            CustomBackground::Gradient,
        ),
        (
            "color",
            non_blank(&customization.color),
            is_valid_color,
            CustomBackground::Color,
        ),
        (
            "backgroundImage",
            non_blank(&customization.background_image),
            is_valid_image_url,
            CustomBackground::Image,
        ),
    ];

    for (field, value, valid, build) in tiers {
        let Some(value) = value else {
            continue;
        };
        if valid(value.trim()) {
            return (Some(build(value.to_string())), issues);
        }
        issues.push(StyleIssue::MalformedCustomization {
            field,
            value: value.to_string(),
        });
    }

    (None, issues)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn custom(color: Option<&str>, gradient: Option<&str>, image: Option<&str>) -> CardCustomization {
        CardCustomization {
            color: color.map(String::from),
            gradient: gradient.map(String::from),
            background_image: image.map(String::from),
            ..Default::default()
        }
    }

    #[test]
    fn test_color_validation() {
        assert!(is_valid_color("#fff"));
        assert!(is_valid_color("#ffff"));
        assert!(is_valid_color("#A1B2C3"));
        assert!(is_valid_color("#a1b2c3d4"));
        assert!(!is_valid_color("fff"));
        assert!(!is_valid_color("#ggg"));
        assert!(!is_valid_color("#12345"));
        assert!(!is_valid_color("red"));
    }

    #[test]
    fn test_gradient_validation() {
        assert!(is_valid_gradient("linear-gradient(135deg, #667eea 0%, #764ba2 100%)"));
        assert!(is_valid_gradient("radial-gradient(circle, rgba(0,0,0,0.5), #fff)"));
        assert!(is_valid_gradient("repeating-conic-gradient(red 0 15deg, blue 15deg 30deg)"));
        assert!(!is_valid_gradient("linear-gradient(135deg, #fff"));
        assert!(!is_valid_gradient("linear-gradient(#fff) url(x)"));
        assert!(!is_valid_gradient("#ff0000"));
        assert!(!is_valid_gradient("gradient(#fff, #000)"));
    }

    #[test]
    fn test_image_validation() {
        assert!(is_valid_image_url("https://cdn.example.com/bg.png"));
        assert!(is_valid_image_url("/uploads/bg.jpg"));
        assert!(!is_valid_image_url("//cdn.example.com/bg.png"));
        assert!(!is_valid_image_url("javascript:alert(1)"));
        assert!(!is_valid_image_url("not a url"));
    }

    #[test]
    fn test_image_rejects_css_breakout() {
        assert!(!is_valid_image_url("/a.png\");color:red;x:url(\""));
        assert!(!is_valid_image_url("/a.png')"));
        assert!(!is_valid_image_url("/a\\b.png"));
        assert!(!is_valid_image_url("https://cdn.example.com/a.png\")"));
        assert!(!is_valid_image_url("https://cdn.example.com/a(1).png"));

        let (background, issues) =
            resolve_custom_background(&custom(None, None, Some("/a.png\");color:red;x:url(\"")));
        assert_eq!(background, None);
        assert_eq!(issues.len(), 1);
    }

    #[test]
    fn test_winner_keeps_surrounding_whitespace() {
        let raw = " linear-gradient(#000, #fff) ";
        let (background, issues) = resolve_custom_background(&custom(None, Some(raw), None));
        assert_eq!(background, Some(CustomBackground::Gradient(raw.to_string())));
        assert!(issues.is_empty());

        let (background, _) = resolve_custom_background(&custom(Some(" #abc "), None, None));
        assert_eq!(background, Some(CustomBackground::Color(" #abc ".to_string())));
    }

    #[test]
    fn test_gradient_beats_color_and_image() {
        let (background, issues) = resolve_custom_background(&custom(
            Some("#ff0000"),
            Some("linear-gradient(#000, #fff)"),
            Some("https://cdn.example.com/bg.png"),
        ));
        assert_eq!(
            background,
            Some(CustomBackground::Gradient("linear-gradient(#000, #fff)".to_string()))
        );
        assert!(issues.is_empty());
    }

    #[test]
    fn test_malformed_gradient_falls_through_to_color() {
        let (background, issues) =
            resolve_custom_background(&custom(Some("#ff0000"), Some("linear-gradient(oops"), None));
        assert_eq!(background, Some(CustomBackground::Color("#ff0000".to_string())));
        assert_eq!(
            issues,
            vec![StyleIssue::MalformedCustomization {
                field: "gradient",
                value: "linear-gradient(oops".to_string(),
            }]
        );
    }

    #[test]
    fn test_everything_malformed_yields_none() {
        let (background, issues) =
            resolve_custom_background(&custom(Some("red"), Some("nope"), Some("ftp://x/y.png")));
        assert_eq!(background, None);
        assert_eq!(issues.len(), 3);
    }

    #[test]
    fn test_blank_fields_are_unset() {
        let (background, issues) =
            resolve_custom_background(&custom(Some("  "), Some(""), Some("/img/bg.png")));
        assert_eq!(background, Some(CustomBackground::Image("/img/bg.png".to_string())));
        assert!(issues.is_empty());
    }
}

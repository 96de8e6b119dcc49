//! Status lookup table shared by the card resolver and the export engine.
//!
//! Every status-derived string (gradient, border class, human-readable label,
//! export fill) lives here so on-screen badges and exported reports can't drift.

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::models::Status;

/// Tailwind border class the card renderer applies around the card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BorderHint {
    #[serde(rename = "border-green-500")]
    Green,
    #[serde(rename = "border-yellow-500")]
    Yellow,
    #[serde(rename = "border-red-400")]
    Red,
    #[serde(rename = "border-red-700")]
    DarkRed,
    #[serde(rename = "border-slate-500")]
    Slate,
    #[serde(rename = "border-orange-500")]
    Orange,
    #[serde(rename = "border-gray-400")]
    Gray,
}

/// Visuals and wording for one status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusStyle {
    pub gradient: &'static str,
    pub border: BorderHint,
    pub label: &'static str,
    /// Card fill in exported decks (hex without `#`). Only the five working
    /// states carry one; vacation and unknown fall back to neutral gray.
    pub export_fill: Option<&'static str>,
}

pub const VACATION_GRADIENT: &str = "linear-gradient(135deg, #fbbf24 0%, #f97316 100%)";
pub const FALLBACK_EXPORT_FILL: &str = "9CA3AF";

/// Immutable status table. Build once with [`Palette::standard`].
#[derive(Debug)]
pub struct Palette {
    available: StatusStyle,
    some_availability: StatusStyle,
    busy: StatusStyle,
    seriously_busy: StatusStyle,
    away: StatusStyle,
    vacation: StatusStyle,
    unknown: StatusStyle,
}

static STANDARD: Lazy<Palette> = Lazy::new(|| Palette {
    available: StatusStyle {
        gradient: "linear-gradient(135deg, #4ade80 0%, #16a34a 100%)",
        border: BorderHint::Green,
        label: "Available",
        export_fill: Some("22C55E"),
    },
    some_availability: StatusStyle {
        gradient: "linear-gradient(135deg, #fde047 0%, #eab308 100%)",
        border: BorderHint::Yellow,
        label: "Some Availability",
        export_fill: Some("EAB308"),
    },
    busy: StatusStyle {
        gradient: "linear-gradient(135deg, #fca5a5 0%, #f87171 100%)",
        border: BorderHint::Red,
        label: "Busy",
        export_fill: Some("F87171"),
    },
    seriously_busy: StatusStyle {
        gradient: "linear-gradient(135deg, #ef4444 0%, #b91c1c 100%)",
        border: BorderHint::DarkRed,
        label: "Seriously Busy",
        export_fill: Some("B91C1C"),
    },
    away: StatusStyle {
        gradient: "linear-gradient(135deg, #94a3b8 0%, #64748b 100%)",
        border: BorderHint::Slate,
        label: "Away",
        export_fill: Some("64748B"),
    },
    vacation: StatusStyle {
        gradient: VACATION_GRADIENT,
        border: BorderHint::Orange,
        label: "On Vacation",
        export_fill: None,
    },
    unknown: StatusStyle {
        gradient: "linear-gradient(135deg, #e5e7eb 0%, #9ca3af 100%)",
        border: BorderHint::Gray,
        label: "Unknown",
        export_fill: None,
    },
});

impl Palette {
    /// The process-wide palette.
    pub fn standard() -> &'static Palette {
        &STANDARD
    }

    pub fn style(&self, status: &Status) -> &StatusStyle {
        match status {
            Status::Available => &self.available,
            Status::SomeAvailability => &self.some_availability,
            Status::Busy => &self.busy,
            Status::SeriouslyBusy => &self.seriously_busy,
            Status::Away => &self.away,
            Status::Vacation => &self.vacation,
            Status::Unknown(_) => &self.unknown,
        }
    }

    /// Style used whenever a member is flagged as on vacation.
    pub fn vacation(&self) -> &StatusStyle {
        &self.vacation
    }

    pub fn label(&self, status: &Status) -> &'static str {
        self.style(status).label
    }

    pub fn export_fill(&self, status: &Status) -> &'static str {
        self.style(status).export_fill.unwrap_or(FALLBACK_EXPORT_FILL)
    }
}

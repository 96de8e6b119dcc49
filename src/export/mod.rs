//! Report export: turns a roster snapshot into positioned draw instructions
//! for a slide deck or a flowing word-processor document.

mod document;
mod fields;
mod serializer;
mod slides;

pub use document::*;
pub use fields::*;
pub use serializer::*;
pub use slides::*;

use serde::{Deserialize, Serialize};

use crate::models::TeamMember;
use crate::styling::Palette;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ExportFormat {
    #[serde(alias = "pptx")]
    SlideDeck,
    #[serde(alias = "docx")]
    WordDocument,
}

impl ExportFormat {
    /// Stem used for downloaded file names.
    pub fn file_stem(self) -> &'static str {
        match self {
            ExportFormat::SlideDeck => "team-status-slides",
            ExportFormat::WordDocument => "team-status-report",
        }
    }
}

/// One shape or text primitive for the document serializer.
///
/// Slide instructions carry absolute coordinates in inches; document
/// instructions are flowing and rely on order alone.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DrawInstruction {
    #[serde(rename_all = "camelCase")]
    Rect {
        slide: usize,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        fill: String,
    },
    #[serde(rename_all = "camelCase")]
    Text {
        slide: usize,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
        text: String,
        font_size: u8,
        bold: bool,
    },
    Heading { level: u8, text: String },
    Paragraph { text: String },
    Spacer,
}

impl DrawInstruction {
    pub fn text(&self) -> Option<&str> {
        match self {
            DrawInstruction::Text { text, .. }
            | DrawInstruction::Heading { text, .. }
            | DrawInstruction::Paragraph { text } => Some(text),
            DrawInstruction::Rect { .. } | DrawInstruction::Spacer => None,
        }
    }
}

/// Complete export result, in draw order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportLayout {
    pub format: ExportFormat,
    /// Number of slides, or 1 for a flowing document.
    pub pages: usize,
    pub member_count: usize,
    pub instructions: Vec<DrawInstruction>,
}

pub fn build_export_layout(
    members: &[TeamMember],
    format: ExportFormat,
    geometry: &SlideGeometry,
    palette: &Palette,
) -> ExportLayout {
    let (pages, instructions) = match format {
        ExportFormat::SlideDeck => layout_slides(members, geometry, palette),
        ExportFormat::WordDocument => (1, layout_document(members, palette)),
    };

    ExportLayout {
        format,
        pages,
        member_count: members.len(),
        instructions,
    }
}

//! Slide-deck grid packing.

use serde::Serialize;

use super::{DrawInstruction, MemberFields};
use crate::models::TeamMember;
use crate::styling::Palette;

const TEXT_INSET: f64 = 0.1;
const LINE_PITCH: f64 = 0.3;
const NAME_FONT_SIZE: u8 = 14;
const DETAIL_FONT_SIZE: u8 = 10;

/// Card grid geometry, in inches.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SlideGeometry {
    pub origin_x: f64,
    pub origin_y: f64,
    pub card_width: f64,
    pub card_height: f64,
    pub h_gap: f64,
    pub v_gap: f64,
    pub columns: usize,
    pub rows_per_slide: usize,
}

impl Default for SlideGeometry {
    fn default() -> Self {
        Self {
            origin_x: 0.5,
            origin_y: 0.5,
            card_width: 2.5,
            card_height: 1.8,
            h_gap: 0.2,
            v_gap: 0.2,
            columns: 4,
            rows_per_slide: 3,
        }
    }
}

/// A card's slide and top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardPlacement {
    pub slide: usize,
    pub row: usize,
    pub col: usize,
    pub x: f64,
    pub y: f64,
}

impl SlideGeometry {
    pub fn with_rows_per_slide(rows_per_slide: usize) -> Self {
        Self {
            rows_per_slide,
            ..Self::default()
        }
    }

    pub fn cards_per_slide(&self) -> usize {
        self.columns.max(1) * self.rows_per_slide.max(1)
    }

    /// Placement of the member at roster index `index`.
    pub fn place(&self, index: usize) -> CardPlacement {
        let columns = self.columns.max(1);
        let per_slide = self.cards_per_slide();
        let slot = index % per_slide;
        let row = slot / columns;
        let col = slot % columns;

        CardPlacement {
            slide: index / per_slide,
            row,
            col,
            x: self.origin_x + col as f64 * (self.card_width + self.h_gap),
            y: self.origin_y + row as f64 * (self.card_height + self.v_gap),
        }
    }

    pub fn slide_count(&self, members: usize) -> usize {
        members.div_ceil(self.cards_per_slide()).max(1)
    }
}

/// Emits one background rectangle and five text boxes per member.
pub fn layout_slides(
    members: &[TeamMember],
    geometry: &SlideGeometry,
    palette: &Palette,
) -> (usize, Vec<DrawInstruction>) {
    let mut instructions = Vec::with_capacity(members.len() * 6);

    for (index, member) in members.iter().enumerate() {
        let placement = geometry.place(index);
        let fields = MemberFields::from_member(member, palette);
        let text_x = placement.x + TEXT_INSET;
        let text_width = geometry.card_width - 2.0 * TEXT_INSET;

        instructions.push(DrawInstruction::Rect {
            slide: placement.slide,
            x: placement.x,
            y: placement.y,
            width: geometry.card_width,
            height: geometry.card_height,
            fill: palette.export_fill(&member.status).to_string(),
        });

        instructions.push(DrawInstruction::Text {
            slide: placement.slide,
            x: text_x,
            y: placement.y + TEXT_INSET,
            width: text_width,
            height: LINE_PITCH,
            text: fields.name.clone(),
            font_size: NAME_FONT_SIZE,
            bold: true,
        });

        for (line, text) in fields.details().into_iter().enumerate() {
            instructions.push(DrawInstruction::Text {
                slide: placement.slide,
                x: text_x,
                y: placement.y + TEXT_INSET + (line + 1) as f64 * LINE_PITCH,
                width: text_width,
                height: LINE_PITCH,
                text: text.to_string(),
                font_size: DETAIL_FONT_SIZE,
                bold: false,
            });
        }
    }

    (geometry.slide_count(members.len()), instructions)
}

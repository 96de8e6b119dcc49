//! Flowing word-processor layout. Pagination is left to the serializer.

use super::{DrawInstruction, MemberFields};
use crate::models::TeamMember;
use crate::styling::Palette;

pub const DOCUMENT_TITLE: &str = "Team Status Report";

pub fn layout_document(members: &[TeamMember], palette: &Palette) -> Vec<DrawInstruction> {
    let mut instructions = Vec::with_capacity(1 + members.len() * 7);
    instructions.push(DrawInstruction::Heading {
        level: 1,
        text: DOCUMENT_TITLE.to_string(),
    });

    for (index, member) in members.iter().enumerate() {
        if index > 0 {
            instructions.push(DrawInstruction::Spacer);
        }

        let fields = MemberFields::from_member(member, palette);
        instructions.push(DrawInstruction::Heading {
            level: 2,
            text: fields.name.clone(),
        });
        instructions.extend(fields.details().into_iter().map(|text| DrawInstruction::Paragraph {
            text: text.to_string(),
        }));
    }

    instructions
}

//! Member card appearance: background precedence, status palette and badge
//! overlay placement. Everything here is pure.

mod badge_overlay;
mod card;
mod customization;
mod palette;

pub use badge_overlay::*;
pub use card::*;
pub use customization::*;
pub use palette::*;

//! Text-side helpers: card names and letter conversion.

pub mod card;
pub mod converter;

pub mod card;
pub mod fields;

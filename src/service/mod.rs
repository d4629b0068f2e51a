//! Business logic for turning deck guides into delivered cards.
//!
//! - `rich_text` - HTML guide bodies to plain-text paragraphs
//! - `transform` - Raw guide records to display guides
//! - `card` - Display guides to cards, splitting at the field limit
//! - `deck_guide` - `DeckGuideService` chaining fetch, transform and render
//! - `delivery` - Sequential webhook delivery of cards

pub mod card;
pub mod deck_guide;
pub mod delivery;
pub mod rich_text;
pub mod transform;

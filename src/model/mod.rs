//! Domain models for the deck guide pipeline.
//!
//! - `deck_guide` - Raw records as served by the data source and their display form
//! - `card` - Rendered message cards ready for delivery
//! - `webhook` - Validated webhook credentials

pub mod card;
pub mod deck_guide;
pub mod webhook;

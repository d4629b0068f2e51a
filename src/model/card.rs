//! Rendered message cards.
//!
//! A `Card` is the platform-neutral form of a Discord embed. It is what the dry run prints
//! and what the delivery layer converts into a `CreateEmbed`.

use serde::Serialize;

/// Named value pair laid out inside a card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardField {
    pub name: String,
    pub value: String,
}

impl CardField {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// Author block shown above the card title.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardAuthor {
    pub name: String,
    pub url: String,
    pub icon_url: String,
}

/// Footer block shown below the card fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CardFooter {
    pub text: String,
    pub icon_url: String,
}

/// Message card built from a single display guide.
///
/// The header metadata (`title`, `author`, `url`) is only present on the first card of a
/// guide, and the `footer` only on the last one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Card {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<CardAuthor>,
    /// RGB color of the card's side bar.
    pub color: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    pub fields: Vec<CardField>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<CardFooter>,
}

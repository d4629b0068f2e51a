//! Card rendering for display guides.
//!
//! Each guide becomes one card, or two when its fields do not fit the per-card limit. The
//! first card carries the header (title, author, link) and the last card carries the footer.

use crate::{
    model::{
        card::{Card, CardAuthor, CardField, CardFooter},
        deck_guide::DisplayGuide,
    },
    util::encode::encode_uri,
};

/// Maximum number of fields on a single card before the guide is split.
pub const MAX_FIELDS_PER_CARD: usize = 16;

/// Side bar color shared by every guide card.
pub const CARD_COLOR: u32 = 0x6ba4a5;

/// Name of the first field in each field group.
pub const GUIDE_FIELD_NAME: &str = "Guide";

/// Braille blank; Discord rejects empty field names but renders this as nothing.
pub const BLANK_FIELD_NAME: &str = "\u{2800}";

const AUTHOR_NAME: &str = "Random Dice Community Website";
const AUTHOR_URL: &str = "https://randomdice.gg/";
const ICON_URL: &str = "https://randomdice.gg/title_dice.png";
const GUIDE_BASE_URL: &str = "https://randomdice.gg/decks/guide/";
const FOOTER_TEXT: &str = "randomdice.gg Decks Guide";

/// Renders a display guide into one or two cards.
///
/// Up to `MAX_FIELDS_PER_CARD` fields produce a single card holding everything. Beyond that
/// the first card takes the header and the first 16 fields, and a second card takes the
/// remaining fields and the footer.
pub fn render_guide(guide: &DisplayGuide) -> Vec<Card> {
    let mut fields = build_fields(guide);

    if fields.len() <= MAX_FIELDS_PER_CARD {
        return vec![Card {
            fields,
            footer: Some(footer()),
            ..header_card(guide)
        }];
    }

    let overflow = fields.split_off(MAX_FIELDS_PER_CARD);
    vec![
        Card {
            fields,
            ..header_card(guide)
        },
        Card {
            title: None,
            author: None,
            color: CARD_COLOR,
            url: None,
            fields: overflow,
            footer: Some(footer()),
        },
    ]
}

/// Builds the ordered field list for a guide.
///
/// Dice rows come first, followed by the non-empty paragraphs. Within each group the first
/// field is named "Guide" and the rest use a blank name.
pub fn build_fields(guide: &DisplayGuide) -> Vec<CardField> {
    let dice_rows = guide.dice_list.iter().map(|row| {
        row.iter()
            .map(|token| token.as_deref().unwrap_or_default())
            .collect::<Vec<_>>()
            .join(" ")
    });
    let paragraphs = guide
        .paragraphs
        .iter()
        .filter(|paragraph| !paragraph.is_empty())
        .cloned();

    let mut fields = named_group(dice_rows);
    fields.extend(named_group(paragraphs));
    fields
}

/// Builds the link to a guide's page on the community website.
pub fn guide_url(title: &str) -> String {
    format!("{}{}", GUIDE_BASE_URL, encode_uri(title))
}

fn named_group(values: impl Iterator<Item = String>) -> Vec<CardField> {
    values
        .enumerate()
        .map(|(i, value)| {
            let name = if i == 0 {
                GUIDE_FIELD_NAME
            } else {
                BLANK_FIELD_NAME
            };
            CardField::new(name, value)
        })
        .collect()
}

fn header_card(guide: &DisplayGuide) -> Card {
    Card {
        title: Some(format!("{} ({})", guide.title, guide.guide_type)),
        author: Some(CardAuthor {
            name: AUTHOR_NAME.to_string(),
            url: AUTHOR_URL.to_string(),
            icon_url: ICON_URL.to_string(),
        }),
        color: CARD_COLOR,
        url: Some(guide_url(&guide.title)),
        fields: Vec::new(),
        footer: None,
    }
}

fn footer() -> CardFooter {
    CardFooter {
        text: FOOTER_TEXT.to_string(),
        icon_url: ICON_URL.to_string(),
    }
}

//! Raw guide to display guide transformation.

use dioxus_logger::tracing;

use crate::{
    data::dice_emoji::DiceEmojiTable,
    error::data::DataShapeError,
    model::deck_guide::{DisplayGuide, RawGuide},
    service::rich_text,
};

/// Transforms a raw guide record into its display form.
///
/// Title and type are copied verbatim. Each dice ID is resolved through `table`; an ID with
/// no entry becomes `None` and is logged as a warning. The HTML body is flattened into
/// paragraphs, keeping empty ones.
///
/// # Arguments
/// - `raw` - Guide record from the data source
/// - `table` - Dice emoji table to resolve IDs with
///
/// # Returns
/// - `Ok(DisplayGuide)` - Display-ready guide
/// - `Err(DataShapeError::MissingField)` - `diceList` or `guide` absent on the record
pub fn transform_guide(
    raw: &RawGuide,
    table: &DiceEmojiTable,
) -> Result<DisplayGuide, DataShapeError> {
    let dice_rows = raw
        .dice_list
        .as_ref()
        .ok_or(DataShapeError::MissingField {
            guide_id: raw.id,
            field: "diceList",
        })?;
    let guide = raw.guide.as_ref().ok_or(DataShapeError::MissingField {
        guide_id: raw.id,
        field: "guide",
    })?;

    let dice_list = dice_rows
        .iter()
        .map(|row| {
            row.iter()
                .map(|&dice_id| {
                    let token = table.resolve(dice_id).map(str::to_string);
                    if token.is_none() {
                        tracing::warn!(
                            "Deck guide {} ({}) uses dice {} which has no emoji",
                            raw.id,
                            raw.title,
                            dice_id
                        );
                    }
                    token
                })
                .collect()
        })
        .collect();

    Ok(DisplayGuide {
        title: raw.title.clone(),
        guide_type: raw.guide_type.clone(),
        dice_list,
        paragraphs: rich_text::to_paragraphs(guide),
    })
}

//! Domain models for deck guide records.
//!
//! Defines the raw record shape served by the data source and the display form produced by
//! the transformer.

use serde::{de::DeserializeOwned, Serialize};
use serde_json::{Map, Value};

use crate::error::data::DataShapeError;

/// Deck guide record exactly as fetched from the data source.
///
/// `dice_list` and `guide` stay optional here so that a record missing them surfaces as a
/// `DataShapeError` from the transformer.
#[derive(Debug, Clone, PartialEq)]
pub struct RawGuide {
    /// Unique identifier of the guide.
    pub id: i64,
    /// Game mode label (`PvP`, `Co-op`, `Crew`, ...), kept as served.
    pub guide_type: String,
    /// Title of the deck guide. Older records store it under `name`.
    pub title: String,
    /// Rows of dice IDs making up the deck; `-1` marks an empty slot.
    pub dice_list: Option<Vec<Vec<i32>>>,
    /// Guide body as HTML.
    pub guide: Option<String>,
}

impl RawGuide {
    /// Converts one JSON record from the data source.
    ///
    /// # Arguments
    /// - `record` - Array position or object key the record was served under
    /// - `value` - The record itself
    ///
    /// # Returns
    /// - `Ok(RawGuide)` - Record with `id`, `type` and `title` present
    /// - `Err(DataShapeError::MissingId)` - Not an object, or `id` absent or not an integer
    /// - `Err(DataShapeError::MissingField)` - `type` or `title` absent
    /// - `Err(DataShapeError::InvalidField)` - A field holds a value of the wrong shape
    pub fn from_record(record: &str, value: &Value) -> Result<Self, DataShapeError> {
        let missing_id = || DataShapeError::MissingId {
            record: record.to_string(),
        };
        let fields = value.as_object().ok_or_else(missing_id)?;
        let id = fields
            .get("id")
            .and_then(Value::as_i64)
            .ok_or_else(missing_id)?;

        let title = match field::<String>(fields, id, "title")? {
            Some(title) => Some(title),
            None => field(fields, id, "name")?,
        };

        Ok(Self {
            id,
            guide_type: required(fields, id, "type")?,
            title: title.ok_or(DataShapeError::MissingField {
                guide_id: id,
                field: "title",
            })?,
            dice_list: field(fields, id, "diceList")?,
            guide: field(fields, id, "guide")?,
        })
    }
}

fn field<T: DeserializeOwned>(
    fields: &Map<String, Value>,
    guide_id: i64,
    name: &'static str,
) -> Result<Option<T>, DataShapeError> {
    match fields.get(name) {
        None | Some(Value::Null) => Ok(None),
        Some(value) => T::deserialize(value)
            .map(Some)
            .map_err(|e| DataShapeError::InvalidField {
                guide_id,
                field: name,
                reason: e.to_string(),
            }),
    }
}

fn required<T: DeserializeOwned>(
    fields: &Map<String, Value>,
    guide_id: i64,
    name: &'static str,
) -> Result<T, DataShapeError> {
    field(fields, guide_id, name)?.ok_or(DataShapeError::MissingField {
        guide_id,
        field: name,
    })
}

/// Deck guide converted into display-ready text.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayGuide {
    /// Title copied verbatim from the raw record.
    pub title: String,
    /// Game mode copied verbatim from the raw record.
    #[serde(rename = "type")]
    pub guide_type: String,
    /// Dice rows resolved to emoji tokens. `None` marks a dice ID missing from the table.
    #[serde(rename = "diceList")]
    pub dice_list: Vec<Vec<Option<String>>>,
    /// Plain-text paragraphs of the guide body, empty lines included.
    pub paragraphs: Vec<String>,
}

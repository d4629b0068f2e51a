use thiserror::Error;

/// Malformed raw guide records.
#[derive(Error, Debug, PartialEq)]
pub enum DataShapeError {
    /// A record is not an object or carries no integer `id`.
    ///
    /// `record` is the array position or object key the record was served under.
    #[error("Deck guide record {record} has no integer 'id'")]
    MissingId { record: String },

    /// A required field is absent (or null) on a raw guide record.
    #[error("Deck guide {guide_id} is missing required field '{field}'")]
    MissingField {
        /// ID of the record that failed validation
        guide_id: i64,
        /// JSON name of the missing field
        field: &'static str,
    },

    /// A field is present but holds a value of the wrong shape.
    #[error("Deck guide {guide_id} has invalid field '{field}': {reason}")]
    InvalidField {
        /// ID of the record that failed validation
        guide_id: i64,
        /// JSON name of the offending field
        field: &'static str,
        /// Decoder message describing the mismatch
        reason: String,
    },
}

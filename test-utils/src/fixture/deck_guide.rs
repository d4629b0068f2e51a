//! Deck guide fixtures for creating in-memory test data.
//!
//! Provides fixture functions for creating raw deck guide JSON records exactly as the data
//! source serves them. These are useful for unit testing deserialization, feeding the mock
//! data source, and providing consistent default values.

use serde_json::{json, Map, Value};

/// Default test guide ID.
pub const DEFAULT_ID: i64 = 1;

/// Default test guide title.
pub const DEFAULT_TITLE: &str = "Solar Crit";

/// Default test guide type.
pub const DEFAULT_TYPE: &str = "PvP";

/// Default guide body.
pub const DEFAULT_GUIDE: &str = "<p>Place Solar in the corners.</p><p>Merge Crit early.</p>";

/// Creates a raw deck guide record with default values.
///
/// # Default Values
/// - id: `1`
/// - type: `"PvP"`
/// - title: `"Solar Crit"`
/// - diceList: `[[38, 13, 6, 17, 29]]`
/// - guide: two `<p>` paragraphs
///
/// # Returns
/// - `Value` - JSON object shaped like a record from the data source
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::fixture;
///
/// let guide = fixture::deck_guide::raw();
/// assert_eq!(guide["title"], "Solar Crit");
/// ```
pub fn raw() -> Value {
    raw_builder().build()
}

/// Creates a raw deck guide builder for customization.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::fixture;
///
/// let guide = fixture::deck_guide::raw_builder()
///     .id(7)
///     .title("Summoner Co-op")
///     .guide_type("Co-op")
///     .without_guide()
///     .build();
/// ```
pub fn raw_builder() -> RawGuideBuilder {
    RawGuideBuilder::default()
}

/// Builds a guide body with `count` non-empty paragraphs.
///
/// Paragraph `n` (starting at 1) reads `"Paragraph n"`.
pub fn paragraphs_html(count: usize) -> String {
    (1..=count)
        .map(|n| format!("<p>Paragraph {n}</p>"))
        .collect()
}

/// Builder for creating customized raw deck guide records.
///
/// All fields have sensible defaults that can be overridden. Required fields can be removed
/// to exercise data-shape validation.
pub struct RawGuideBuilder {
    id: i64,
    title: String,
    guide_type: String,
    dice_list: Option<Vec<Vec<i32>>>,
    guide: Option<String>,
}

impl Default for RawGuideBuilder {
    fn default() -> Self {
        Self {
            id: DEFAULT_ID,
            title: DEFAULT_TITLE.to_string(),
            guide_type: DEFAULT_TYPE.to_string(),
            dice_list: Some(vec![vec![38, 13, 6, 17, 29]]),
            guide: Some(DEFAULT_GUIDE.to_string()),
        }
    }
}

impl RawGuideBuilder {
    /// Sets the guide ID.
    pub fn id(mut self, id: i64) -> Self {
        self.id = id;
        self
    }

    /// Sets the guide title.
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Sets the guide type (`"PvP"`, `"Co-op"`, `"Crew"`).
    pub fn guide_type(mut self, guide_type: impl Into<String>) -> Self {
        self.guide_type = guide_type.into();
        self
    }

    /// Sets the rows of dice IDs.
    pub fn dice_list(mut self, dice_list: Vec<Vec<i32>>) -> Self {
        self.dice_list = Some(dice_list);
        self
    }

    /// Sets the HTML guide body.
    pub fn guide(mut self, guide: impl Into<String>) -> Self {
        self.guide = Some(guide.into());
        self
    }

    /// Omits the `diceList` field from the record.
    pub fn without_dice_list(mut self) -> Self {
        self.dice_list = None;
        self
    }

    /// Omits the `guide` field from the record.
    pub fn without_guide(mut self) -> Self {
        self.guide = None;
        self
    }

    /// Builds the JSON record.
    ///
    /// # Returns
    /// - `Value` - JSON object with the configured fields
    pub fn build(self) -> Value {
        let mut record = Map::new();
        record.insert("id".to_string(), json!(self.id));
        record.insert("type".to_string(), json!(self.guide_type));
        record.insert("title".to_string(), json!(self.title));
        if let Some(dice_list) = self.dice_list {
            record.insert("diceList".to_string(), json!(dice_list));
        }
        if let Some(guide) = self.guide {
            record.insert("guide".to_string(), json!(guide));
        }
        Value::Object(record)
    }
}

use dioxus_logger::tracing;

use crate::{
    data::{deck_guide::GuideSource, dice_emoji::DiceEmojiTable},
    error::AppError,
    model::{
        card::Card,
        deck_guide::{DisplayGuide, RawGuide},
    },
    service::{card::render_guide, transform::transform_guide},
};

/// Service composing the fetch, transform and render stages.
///
/// Each stage accepts the previous stage's output, or `None` to run the earlier stages
/// itself against the configured source.
pub struct DeckGuideService<'a, S: GuideSource> {
    source: &'a S,
}

impl<'a, S: GuideSource> DeckGuideService<'a, S> {
    /// Creates a new DeckGuideService instance.
    ///
    /// # Arguments
    /// - `source` - Where raw guides are fetched from when a stage needs them
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// Fetches the raw guide records.
    ///
    /// # Returns
    /// - `Ok(Vec<RawGuide>)` - Every record served by the source
    /// - `Err(AppError::NetworkErr)` - The source could not be read
    /// - `Err(AppError::DataShapeErr)` - A served record could not be converted
    pub async fn fetch_data(&self) -> Result<Vec<RawGuide>, AppError> {
        self.source.fetch_guides().await
    }

    /// Transforms raw guides into display guides.
    ///
    /// # Arguments
    /// - `raw` - Records to transform, or `None` to fetch them first
    /// - `table` - Dice emoji table, or `None` for the built-in table
    ///
    /// # Returns
    /// - `Ok(Vec<DisplayGuide>)` - One display guide per raw record, in order
    /// - `Err(AppError::NetworkErr)` - The internal fetch failed
    /// - `Err(AppError::DataShapeErr)` - A record is missing `diceList` or `guide`
    pub async fn process_data(
        &self,
        raw: Option<Vec<RawGuide>>,
        table: Option<&DiceEmojiTable>,
    ) -> Result<Vec<DisplayGuide>, AppError> {
        let table = table.unwrap_or_else(|| DiceEmojiTable::builtin());
        if table.is_empty() {
            tracing::warn!("Dice emoji table is empty, dice rows will render blank");
        } else {
            tracing::debug!("Resolving dice against {} emoji entries", table.len());
        }
        let raw = match raw {
            Some(raw) => raw,
            None => self.fetch_data().await?,
        };

        let display = raw
            .iter()
            .map(|guide| transform_guide(guide, table))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(display)
    }

    /// Renders display guides into cards.
    ///
    /// # Arguments
    /// - `display` - Guides to render, or `None` to fetch and transform them first
    ///
    /// # Returns
    /// - `Ok(Vec<Card>)` - Cards for every guide, flattened in guide order
    /// - `Err(AppError)` - An earlier stage run on demand failed
    pub async fn make_cards(
        &self,
        display: Option<Vec<DisplayGuide>>,
    ) -> Result<Vec<Card>, AppError> {
        let display = match display {
            Some(display) => display,
            None => self.process_data(None, None).await?,
        };

        Ok(display.iter().flat_map(render_guide).collect())
    }
}

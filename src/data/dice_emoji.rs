//! Dice ID to Discord emoji lookup.
//!
//! The built-in table maps every dice ID the data source uses, including the `-1` empty
//! slot, to a custom emoji reference on the community server. It is built once on first use
//! and never mutated afterwards.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Custom emoji references keyed by dice ID.
const BUILTIN_DICE_EMOJI: &[(i32, &str)] = &[
    (-1, "<:z5Dice:751231833232113684>"),
    (0, "<:z9Fire:751231757155696660>"),
    (1, "<:z9Electric:751231757281525790>"),
    (2, "<:z9Wind:751231756887392318>"),
    (3, "<:z9Poison:751231757210222632>"),
    (4, "<:z9Ice:751231756811894808>"),
    (5, "<:z9Iron:751231757164216350>"),
    (6, "<:z9Broken:751231756820283454>"),
    (7, "<:z9Gamble:751231756807700481>"),
    (8, "<:z9Lock:751231757176537118>"),
    (9, "<:z8Mine:751231756866420797>"),
    (10, "<:z8Light:751231756992118815>"),
    (11, "<:z8Thorn:751231757067485226>"),
    (12, "<:z8Crack:751231756933398539>"),
    (13, "<:z8Critical:751231757398835281>"),
    (14, "<:z8Energy:751231757298303047>"),
    (15, "<:z8Sacrifice:751231757315080252>"),
    (16, "<:z8Arrow:751231757239713893>"),
    (17, "<:z7Death:751231756870615060>"),
    (18, "<:z7Teleport:751231757172473886>"),
    (19, "<:z7Laser:751231756908101744>"),
    (20, "<:z7Mimic:751231757130399818>"),
    (21, "<:z7Infect:751231756606243013>"),
    (22, "<:z7ModifiedElectric:751231757033930873>"),
    (23, "<:z7Absorb:751231757055033495>"),
    (24, "<:z7MightyWind:751231756958564422>"),
    (25, "<:z7Switch:751231756824477737>"),
    (26, "<:z7Gear:751231756866289745>"),
    (27, "<:z7Wave:751231757084262521>"),
    (28, "<:z6Nuclear:756318468017487968>"),
    (29, "<:z6Landmine:756318467921018931>"),
    (30, "<:z6SandSwamp:756318467954835488>"),
    (31, "<:z6Joker:756318467602514025>"),
    (32, "<:z6HolySword:756318467941990450>"),
    (33, "<:z6Hell:756318467786801332>"),
    (34, "<:z6Shield:756318468072144926>"),
    (35, "<:z6Blizzard:756318467350724638>"),
    (36, "<:z6Growth:756318468055498822>"),
    (37, "<:z6Summoner:756318468026138704>"),
    (38, "<:z6Solar:756318468017619016>"),
    (39, "<:z6Assassin:756318466855796837>"),
    (40, "<:z6Atomic:756318467057123431>"),
    (41, "<:z6Gun:756318467426091121>"),
    (42, "<:z6Metastasis:756318467770023979>"),
    (43, "<:z6Typhoon:756318468013555782>"),
    (44, "<:z6Supplement:756318467967418398>"),
    (45, "<:z6Time:756318467895853138>"),
    (46, "<:z6Combo:756318467937927258>"),
    (47, "<:z6Lunar:756318467946184804>"),
    (48, "<:z6Flow:756318468139384952>"),
    (49, "<:z6Star:756318468034527302>"),
    (50, "<:z7Flame:751231756434276513>"),
    (51, "<:z7Healing:756318467686137976>"),
    (52, "<:z7Clone:756318467782869012>"),
    (53, "<:z6Silence:756318467946446889>"),
    (54, "<:z6ix10:756320150910926969>"),
];

static BUILTIN: LazyLock<DiceEmojiTable> =
    LazyLock::new(|| DiceEmojiTable::from_entries(BUILTIN_DICE_EMOJI.iter().copied()));

/// Immutable mapping from dice ID to display token.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DiceEmojiTable {
    tokens: HashMap<i32, String>,
}

impl DiceEmojiTable {
    /// Returns the process-wide built-in table.
    pub fn builtin() -> &'static DiceEmojiTable {
        &BUILTIN
    }

    /// Builds a table from `(dice_id, token)` pairs. Later duplicates win.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (i32, S)>,
        S: Into<String>,
    {
        Self {
            tokens: entries
                .into_iter()
                .map(|(id, token)| (id, token.into()))
                .collect(),
        }
    }

    /// Looks up the display token for a dice ID.
    ///
    /// # Returns
    /// - `Some(&str)` - Token for a known dice ID
    /// - `None` - The ID has no entry in this table
    pub fn resolve(&self, dice_id: i32) -> Option<&str> {
        self.tokens.get(&dice_id).map(String::as_str)
    }

    /// Number of dice IDs with a token.
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_covers_every_known_dice() {
        let table = DiceEmojiTable::builtin();

        assert_eq!(table.len(), 56);
        for id in -1..=54 {
            let token = table.resolve(id).unwrap_or_default();
            assert!(!token.is_empty(), "dice {id} has no token");
            assert!(token.starts_with("<:") && token.ends_with('>'));
        }
    }

    #[test]
    fn builtin_lookups_are_stable() {
        let first = DiceEmojiTable::builtin().resolve(-1);
        let second = DiceEmojiTable::builtin().resolve(-1);

        assert_eq!(first, Some("<:z5Dice:751231833232113684>"));
        assert_eq!(first, second);
        assert_eq!(
            DiceEmojiTable::builtin().resolve(54),
            Some("<:z6ix10:756320150910926969>")
        );
    }

    #[test]
    fn unknown_dice_resolves_to_none() {
        assert_eq!(DiceEmojiTable::builtin().resolve(55), None);
        assert_eq!(DiceEmojiTable::builtin().resolve(-2), None);
    }

    #[test]
    fn custom_table_only_knows_its_entries() {
        let table = DiceEmojiTable::from_entries([(0, "fire"), (1, "electric")]);

        assert_eq!(table.resolve(1), Some("electric"));
        assert_eq!(table.resolve(-1), None);
        assert_eq!(table.len(), 2);
    }

    #[test]
    fn empty_table_reports_empty() {
        let table = DiceEmojiTable::from_entries(Vec::<(i32, String)>::new());

        assert!(table.is_empty());
        assert!(!DiceEmojiTable::builtin().is_empty());
    }
}

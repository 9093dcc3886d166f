//! # Static Content
//!
//! Everything the shell displays but never computes: the seed conversation,
//! the taste profile, preference tags, the cellar layout and the quick-action
//! labels. A `Content` value is handed to the session at construction time
//! and only ever read afterwards.
//!
//! The built-in content ships with the binary. A replacement can be loaded
//! from a TOML file (see `core::config`):
//!
//! ```toml
//! preferences = ["Riesling", "Trocken"]
//! quick_actions = ["Zum Essen"]
//!
//! [[seed]]
//! sender = "bot"
//! text = "Willkommen!"
//!
//! [[taste_profile]]
//! name = "Säure"
//! value = 60
//!
//! [[cellar]]
//! filled = true
//! wine = "Riesling Kabinett"
//! kind = "Weißwein"
//! ```

use serde::{Deserialize, Serialize};

use crate::core::chat::{Message, WineRecommendation};
use crate::core::config::ConfigError;

/// One axis of the user's taste profile, as a percentage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TasteDimension {
    pub name: String,
    pub value: u8,
}

/// A single bottle position in the cellar grid.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CellarSlot {
    pub filled: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wine: Option<String>,
    /// Free-text wine type, e.g. "Rotwein". Drives the slot color.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl CellarSlot {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn bottle(wine: &str, kind: &str) -> Self {
        Self {
            filled: true,
            wine: Some(wine.to_string()),
            kind: Some(kind.to_string()),
        }
    }

    pub fn color(&self) -> WineColor {
        self.kind.as_deref().map(WineColor::from_label).unwrap_or_default()
    }
}

/// Coarse wine style derived from a type label such as "Weißwein" or "Sekt".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WineColor {
    Red,
    White,
    Rose,
    Sparkling,
    Orange,
    #[default]
    Other,
}

impl WineColor {
    /// Case-insensitive substring match; the first matching family wins.
    pub fn from_label(label: &str) -> Self {
        let lower = label.trim().to_lowercase();
        let has = |needles: &[&str]| needles.iter().any(|n| lower.contains(n));

        if has(&["rot"]) {
            WineColor::Red
        } else if has(&["weiß", "weiss", "white"]) {
            WineColor::White
        } else if has(&["rosé", "rose"]) {
            WineColor::Rose
        } else if has(&["schaum", "champagner", "sekt", "crémant", "cremant"]) {
            WineColor::Sparkling
        } else if has(&["orange"]) {
            WineColor::Orange
        } else {
            WineColor::Other
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Content {
    pub seed: Vec<Message>,
    #[serde(default)]
    pub taste_profile: Vec<TasteDimension>,
    #[serde(default)]
    pub preferences: Vec<String>,
    #[serde(default)]
    pub cellar: Vec<CellarSlot>,
    #[serde(default)]
    pub quick_actions: Vec<String>,
}

impl Content {
    /// Parse and check a content file.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let content: Content = toml::from_str(source).map_err(ConfigError::Parse)?;
        content.validate()?;
        Ok(content)
    }

    /// Presence checks only: every message and wine needs visible text.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (i, message) in self.seed.iter().enumerate() {
            if message.text.trim().is_empty() {
                return Err(ConfigError::Invalid(format!("seed message {i} has no text")));
            }
            if message.wines().iter().any(|w| w.name.trim().is_empty()) {
                return Err(ConfigError::Invalid(format!(
                    "seed message {i} has a wine without a name"
                )));
            }
        }
        Ok(())
    }
}

impl Default for Content {
    fn default() -> Self {
        let wines = vec![
            WineRecommendation {
                name: "Riesling Spätlese trocken".to_string(),
                region: "Mosel".to_string(),
                grape: "Riesling".to_string(),
                points: 92,
                description: "Rassige Säure, Noten von grünem Apfel und nasser Schiefer."
                    .to_string(),
                price: "24,90 €".to_string(),
            },
            WineRecommendation {
                name: "Grüner Veltliner Smaragd".to_string(),
                region: "Wachau".to_string(),
                grape: "Grüner Veltliner".to_string(),
                points: 91,
                description: "Würzig und cremig, mit dem typischen weißen Pfeffer.".to_string(),
                price: "32,00 €".to_string(),
            },
        ];

        Self {
            seed: vec![
                Message::bot(
                    "Willkommen! Ich bin Ihr persönlicher Sommelier. \
                     Wie kann ich Ihnen heute helfen?",
                ),
                Message::user("Ich suche einen frischen Weißwein zu gegrilltem Fisch."),
                Message::bot("Zu gegrilltem Fisch passen diese beiden Weine hervorragend:")
                    .with_wines(wines),
            ],
            taste_profile: vec![
                TasteDimension { name: "Trocken".to_string(), value: 80 },
                TasteDimension { name: "Säure".to_string(), value: 65 },
                TasteDimension { name: "Körper".to_string(), value: 55 },
                TasteDimension { name: "Tannin".to_string(), value: 35 },
                TasteDimension { name: "Frucht".to_string(), value: 70 },
            ],
            preferences: ["Riesling", "Mosel", "Trocken", "Mineralisch", "Burgund"]
                .into_iter()
                .map(String::from)
                .collect(),
            cellar: vec![
                CellarSlot::bottle("Riesling Kabinett", "Weißwein"),
                CellarSlot::bottle("Spätburgunder", "Rotwein"),
                CellarSlot::empty(),
                CellarSlot::bottle("Crémant d'Alsace", "Schaumwein"),
                CellarSlot::empty(),
                CellarSlot::bottle("Blaufränkisch", "Rotwein"),
                CellarSlot::empty(),
                CellarSlot::bottle("Provence Rosé", "Rosé"),
                CellarSlot::empty(),
            ],
            quick_actions: ["Zum Essen", "Geschenkidee", "Unter 20 €"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::chat::Sender;

    #[test]
    fn default_seed_is_bot_user_bot_with_two_wines() {
        let content = Content::default();
        let senders: Vec<_> = content.seed.iter().map(|m| m.sender).collect();
        assert_eq!(senders, [Sender::Bot, Sender::User, Sender::Bot]);
        assert!(content.seed[0].wines.is_none());
        assert_eq!(content.seed[2].wines().len(), 2);
        assert!(content.validate().is_ok());
    }

    #[test]
    fn default_cellar_has_nine_slots() {
        let filled: Vec<_> = Content::default().cellar.iter().map(|s| s.filled).collect();
        assert_eq!(
            filled,
            [true, true, false, true, false, true, false, true, false]
        );
    }

    #[test]
    fn parses_content_file() {
        let toml_str = r#"
preferences = ["Riesling"]

[[seed]]
sender = "bot"
text = "Hallo"

[[seed]]
sender = "bot"
text = "Probieren Sie:"

[[seed.wines]]
name = "Silvaner"
region = "Franken"
grape = "Silvaner"
points = 89
description = "Erdig"
price = "14 €"

[[cellar]]
filled = true
wine = "Silvaner"
kind = "Weißwein"

[[cellar]]
filled = false
"#;
        let content = Content::from_toml_str(toml_str).unwrap();
        assert_eq!(content.seed.len(), 2);
        assert_eq!(content.seed[1].wines()[0].region, "Franken");
        assert_eq!(content.cellar.len(), 2);
        assert_eq!(content.cellar[0].color(), WineColor::White);
        assert!(content.taste_profile.is_empty());
        assert!(content.quick_actions.is_empty());
    }

    #[test]
    fn rejects_seed_message_without_text() {
        let toml_str = r#"
[[seed]]
sender = "user"
text = "   "
"#;
        let err = Content::from_toml_str(toml_str).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_missing_wine_fields() {
        let toml_str = r#"
[[seed]]
sender = "bot"
text = "Hallo"

[[seed.wines]]
name = "Silvaner"
"#;
        assert!(matches!(
            Content::from_toml_str(toml_str),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn wine_color_from_label() {
        assert_eq!(WineColor::from_label("Rotwein"), WineColor::Red);
        assert_eq!(WineColor::from_label("WEISSWEIN"), WineColor::White);
        assert_eq!(WineColor::from_label("Weißwein"), WineColor::White);
        assert_eq!(WineColor::from_label("Rosé"), WineColor::Rose);
        assert_eq!(WineColor::from_label("Crémant"), WineColor::Sparkling);
        assert_eq!(WineColor::from_label("Sekt"), WineColor::Sparkling);
        assert_eq!(WineColor::from_label("Orange Wine"), WineColor::Orange);
        assert_eq!(WineColor::from_label("Portwein"), WineColor::Other);
        assert_eq!(WineColor::from_label("Shredded label"), WineColor::Other);
        assert_eq!(WineColor::from_label("Infrared White"), WineColor::White);
    }

    #[test]
    fn empty_slot_has_no_color() {
        assert_eq!(CellarSlot::empty().color(), WineColor::Other);
    }
}

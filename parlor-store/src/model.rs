use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::QuestionError;

/// Content-rating label selecting which prompt pool applies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Sfw,
    Nsfw,
}

impl Mode {
    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Sfw => "sfw",
            Mode::Nsfw => "nsfw",
        }
    }

    /// Uppercase label for embed footers and placeholder messages.
    pub fn label(self) -> &'static str {
        match self {
            Mode::Sfw => "SFW",
            Mode::Nsfw => "NSFW",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = QuestionError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "sfw" => Ok(Mode::Sfw),
            "nsfw" => Ok(Mode::Nsfw),
            _ => Err(QuestionError::UnknownMode(raw.trim().to_owned())),
        }
    }
}

/// Prompt topic. The set is fixed; adding a topic means adding a variant
/// here and a default pool in `QuestionsDoc::with_defaults`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Truth,
    Dare,
    Wyr,
    Ama,
}

impl Category {
    pub const ALL: [Category; 4] = [Category::Truth, Category::Dare, Category::Wyr, Category::Ama];

    pub fn as_str(self) -> &'static str {
        match self {
            Category::Truth => "truth",
            Category::Dare => "dare",
            Category::Wyr => "wyr",
            Category::Ama => "ama",
        }
    }

    /// User-facing title for embeds.
    pub fn title(self) -> &'static str {
        match self {
            Category::Truth => "Truth",
            Category::Dare => "Dare",
            Category::Wyr => "Would You Rather",
            Category::Ama => "Ask Me Anything",
        }
    }

    /// Uppercase label for placeholder messages.
    pub fn label(self) -> String {
        self.as_str().to_ascii_uppercase()
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = QuestionError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "truth" => Ok(Category::Truth),
            "dare" => Ok(Category::Dare),
            "wyr" => Ok(Category::Wyr),
            "ama" => Ok(Category::Ama),
            _ => Err(QuestionError::UnknownCategory(raw.trim().to_owned())),
        }
    }
}

/// The two prompt pools of one category.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryPools {
    #[serde(default)]
    pub sfw: Vec<String>,
    #[serde(default)]
    pub nsfw: Vec<String>,
}

impl CategoryPools {
    pub fn pool(&self, mode: Mode) -> &[String] {
        match mode {
            Mode::Sfw => &self.sfw,
            Mode::Nsfw => &self.nsfw,
        }
    }

    pub fn pool_mut(&mut self, mode: Mode) -> &mut Vec<String> {
        match mode {
            Mode::Sfw => &mut self.sfw,
            Mode::Nsfw => &mut self.nsfw,
        }
    }
}

/// Persisted questions document: category name -> the two mode pools.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionsDoc {
    pub categories: BTreeMap<Category, CategoryPools>,
}

impl QuestionsDoc {
    /// Starter set written when no questions document exists yet.
    pub fn with_defaults() -> Self {
        let mut categories = BTreeMap::new();
        categories.insert(
            Category::Truth,
            CategoryPools {
                sfw: vec!["What's your biggest fear?".to_owned()],
                nsfw: vec!["What's your wildest fantasy (PG-13)?".to_owned()],
            },
        );
        categories.insert(
            Category::Dare,
            CategoryPools {
                sfw: vec!["Do 10 push-ups".to_owned()],
                nsfw: vec!["Send a flirty compliment (keep it respectful!)".to_owned()],
            },
        );
        categories.insert(
            Category::Wyr,
            CategoryPools {
                sfw: vec!["Would you rather be invisible or fly?".to_owned()],
                nsfw: vec!["Would you rather kiss or cuddle?".to_owned()],
            },
        );
        categories.insert(
            Category::Ama,
            CategoryPools {
                sfw: vec!["Ask me anything!".to_owned()],
                nsfw: vec!["Ask me anything (spicy but safe).".to_owned()],
            },
        );
        Self { categories }
    }

    /// Insert empty pools for any recognized category missing from a loaded
    /// document, so every category always maps to exactly the two pools.
    pub fn repair(&mut self) {
        for category in Category::ALL {
            self.categories.entry(category).or_default();
        }
    }
}

/// Persisted settings document.
///
/// Mode preferences are scoped globally per user: the key is the decimal
/// user id and the stored mode applies in every server and in DMs.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsDoc {
    #[serde(default)]
    pub user_modes: BTreeMap<String, Mode>,
}

#[cfg(test)]
mod tests {
    use super::{Category, CategoryPools, Mode, QuestionsDoc};
    use std::str::FromStr;

    #[test]
    fn parses_modes_case_insensitively() {
        assert_eq!(Mode::from_str("sfw").unwrap(), Mode::Sfw);
        assert_eq!(Mode::from_str(" NSFW ").unwrap(), Mode::Nsfw);
        assert!(Mode::from_str("spicy").is_err());
    }

    #[test]
    fn parses_categories() {
        assert_eq!(Category::from_str("truth").unwrap(), Category::Truth);
        assert_eq!(Category::from_str("WYR").unwrap(), Category::Wyr);
        assert!(Category::from_str("riddle").is_err());
    }

    #[test]
    fn default_mode_is_sfw() {
        assert_eq!(Mode::default(), Mode::Sfw);
    }

    #[test]
    fn repair_fills_missing_categories() {
        let mut doc = QuestionsDoc::default();
        doc.categories.insert(
            Category::Truth,
            CategoryPools {
                sfw: vec!["A".to_owned()],
                nsfw: vec![],
            },
        );

        doc.repair();

        assert_eq!(doc.categories.len(), Category::ALL.len());
        assert_eq!(doc.categories[&Category::Truth].sfw, vec!["A".to_owned()]);
        assert!(doc.categories[&Category::Dare].sfw.is_empty());
    }

    #[test]
    fn mode_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Mode::Nsfw).unwrap(), "\"nsfw\"");
        let parsed: Mode = serde_json::from_str("\"sfw\"").unwrap();
        assert_eq!(parsed, Mode::Sfw);
    }
}

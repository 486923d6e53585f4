//! Questionnaire-based wine recommendation.

use serde::{Deserialize, Serialize};

use crate::dataset::Dataset;
use crate::query::eq_ignore_case;
use crate::record::Wine;

/// Answers to the three questionnaire prompts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Preferences {
    /// Red, white or rosé.
    pub color: String,
    /// Dry, sweet or fruity.
    pub taste: String,
    /// Meal, aperitif or special occasion.
    pub occasion: String,
}

impl Preferences {
    /// Build preferences from raw answers, trimming and lowercasing each.
    pub fn from_answers(color: &str, taste: &str, occasion: &str) -> Self {
        Self {
            color: normalize(color),
            taste: normalize(taste),
            occasion: normalize(occasion),
        }
    }

    /// Whether every question has an answer.
    pub fn is_complete(&self) -> bool {
        !self.color.is_empty() && !self.taste.is_empty() && !self.occasion.is_empty()
    }

    /// Exact, case-insensitive match on all three fields. Incomplete
    /// preferences match nothing.
    pub fn matches(&self, wine: &Wine) -> bool {
        self.is_complete()
            && eq_ignore_case(&wine.color, &self.color)
            && eq_ignore_case(&wine.taste, &self.taste)
            && eq_ignore_case(&wine.occasion, &self.occasion)
    }
}

fn normalize(answer: &str) -> String {
    answer.trim().to_lowercase()
}

impl Dataset {
    /// The first wine matching every preference, if any.
    pub fn recommend(&self, preferences: &Preferences) -> Option<&Wine> {
        self.wines().iter().find(|w| preferences.matches(w))
    }
}

//! Shared value types passed between the gateway, the controller and the views.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::SystemTime;

/// Recipe difficulty as reported by the recipe model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard];

    pub fn as_str(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ingredient {
    pub name: String,
    pub quantity: String,
}

/// A generated recipe. Immutable once received from the gateway.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub description: String,
    pub difficulty: Difficulty,
    /// Minutes.
    pub prep_time: u32,
    pub calories: u32,
    pub ingredients: Vec<Ingredient>,
    pub steps: Vec<String>,
    #[serde(default)]
    pub dietary_tags: Vec<String>,
}

impl Recipe {
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }

    /// Upper-cased first letters of at most two dietary tags, as shown on recipe cards.
    pub fn tag_initials(&self) -> Vec<char> {
        self.dietary_tags
            .iter()
            .take(2)
            .filter_map(|tag| tag.chars().next())
            .map(|c| c.to_ascii_uppercase())
            .collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShoppingItem {
    pub id: String,
    pub name: String,
    pub quantity: String,
    pub added_at: SystemTime,
}

/// Dietary filter applied to recipe generation requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DietaryRestriction {
    #[default]
    None,
    Vegetarian,
    Vegan,
    Keto,
    Paleo,
    GlutenFree,
}

impl DietaryRestriction {
    /// Order in which the filters are listed in the sidebar.
    pub const ALL: [DietaryRestriction; 6] = [
        DietaryRestriction::None,
        DietaryRestriction::Vegetarian,
        DietaryRestriction::Vegan,
        DietaryRestriction::Keto,
        DietaryRestriction::Paleo,
        DietaryRestriction::GlutenFree,
    ];

    /// Value embedded in prompts and accepted on the command line.
    pub fn as_str(&self) -> &'static str {
        match self {
            DietaryRestriction::None => "none",
            DietaryRestriction::Vegetarian => "vegetarian",
            DietaryRestriction::Vegan => "vegan",
            DietaryRestriction::Keto => "keto",
            DietaryRestriction::Paleo => "paleo",
            DietaryRestriction::GlutenFree => "gluten-free",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DietaryRestriction::None => "None",
            DietaryRestriction::Vegetarian => "Vegetarian",
            DietaryRestriction::Vegan => "Vegan",
            DietaryRestriction::Keto => "Keto",
            DietaryRestriction::Paleo => "Paleo",
            DietaryRestriction::GlutenFree => "Gluten-Free",
        }
    }

    fn position(&self) -> usize {
        Self::ALL.iter().position(|d| d == self).unwrap_or(0)
    }

    /// Next filter in sidebar order, wrapping around.
    pub fn next(&self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    /// Previous filter in sidebar order, wrapping around.
    pub fn previous(&self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.position() + len - 1) % len]
    }
}

impl fmt::Display for DietaryRestriction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown dietary restriction '{0}'")]
pub struct UnknownRestriction(pub String);

impl FromStr for DietaryRestriction {
    type Err = UnknownRestriction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_lowercase().replace(['_', ' '], "-");
        Self::ALL
            .iter()
            .copied()
            .find(|d| d.as_str() == needle || (needle == "glutenfree" && *d == Self::GlutenFree))
            .ok_or_else(|| UnknownRestriction(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recipe_parses_camel_case_and_defaults_tags() {
        let json = r#"{
            "id": "r1",
            "title": "Spinach Omelette",
            "description": "Quick breakfast",
            "difficulty": "Easy",
            "prepTime": 10,
            "calories": 320,
            "ingredients": [{"name": "eggs", "quantity": "3"}],
            "steps": ["Whisk", "Cook"]
        }"#;
        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.prep_time, 10);
        assert_eq!(recipe.difficulty, Difficulty::Easy);
        assert!(recipe.dietary_tags.is_empty());
        assert_eq!(recipe.step_count(), 2);
    }

    #[test]
    fn negative_prep_time_is_rejected() {
        let json = r#"{"id":"r","title":"t","description":"d","difficulty":"Hard",
            "prepTime":-5,"calories":1,"ingredients":[],"steps":["a"]}"#;
        assert!(serde_json::from_str::<Recipe>(json).is_err());
    }

    #[test]
    fn unknown_difficulty_is_rejected() {
        let json = r#"{"id":"r","title":"t","description":"d","difficulty":"Expert",
            "prepTime":5,"calories":1,"ingredients":[],"steps":["a"]}"#;
        assert!(serde_json::from_str::<Recipe>(json).is_err());
    }

    #[test]
    fn tag_initials_takes_two() {
        let recipe = Recipe {
            id: "r".into(),
            title: "t".into(),
            description: "d".into(),
            difficulty: Difficulty::Medium,
            prep_time: 1,
            calories: 1,
            ingredients: vec![],
            steps: vec!["a".into()],
            dietary_tags: vec!["vegan".into(), "keto".into(), "paleo".into()],
        };
        assert_eq!(recipe.tag_initials(), vec!['V', 'K']);
    }

    #[test]
    fn restriction_round_trips_through_str() {
        for restriction in DietaryRestriction::ALL {
            assert_eq!(restriction.as_str().parse::<DietaryRestriction>(), Ok(restriction));
        }
        assert_eq!("Gluten Free".parse(), Ok(DietaryRestriction::GlutenFree));
        assert!("carnivore".parse::<DietaryRestriction>().is_err());
    }

    #[test]
    fn restriction_cycles_wrap() {
        assert_eq!(DietaryRestriction::GlutenFree.next(), DietaryRestriction::None);
        assert_eq!(DietaryRestriction::None.previous(), DietaryRestriction::GlutenFree);
    }

    #[test]
    fn restriction_serializes_kebab_case() {
        let json = serde_json::to_string(&DietaryRestriction::GlutenFree).unwrap();
        assert_eq!(json, "\"gluten-free\"");
    }
}

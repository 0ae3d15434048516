use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Nutrition values of one food item.
///
/// Values are grams per the item's own reference serving (a cup of milk, a
/// small bag of chips). They are not normalized to 100g, so two profiles
/// cannot be compared as if they described the same portion size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct NutritionProfile {
    pub sugar: f64,
    pub fat: f64,
    pub protein: f64,
    pub salt: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl NutritionProfile {
    pub fn new(sugar: f64, fat: f64, protein: f64, salt: f64, notes: Option<String>) -> Self {
        Self {
            sugar,
            fat,
            protein,
            salt,
            notes,
        }
    }

    pub fn amount_of(&self, nutrient: Nutrient) -> f64 {
        match nutrient {
            Nutrient::Sugar => self.sugar,
            Nutrient::Fat => self.fat,
            Nutrient::Protein => self.protein,
            Nutrient::Salt => self.salt,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Nutrient {
    Sugar,
    Fat,
    Protein,
    Salt,
}

impl Nutrient {
    pub fn as_str(&self) -> &'static str {
        match self {
            Nutrient::Sugar => "sugar",
            Nutrient::Fat => "fat",
            Nutrient::Protein => "protein",
            Nutrient::Salt => "salt",
        }
    }
}

impl fmt::Display for Nutrient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical catalog key for a food name as reported by a recognizer or a
/// client: surrounding whitespace removed, lowercased.
pub fn canonical_food_name(raw: &str) -> String {
    raw.trim().to_lowercase()
}

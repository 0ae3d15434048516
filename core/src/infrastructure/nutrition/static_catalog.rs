use crate::domain::nutrition::{entities::NutritionProfile, ports::NutritionCatalog};

struct FoodEntry {
    name: &'static str,
    sugar: f64,
    fat: f64,
    protein: f64,
    salt: f64,
    notes: &'static str,
}

// Grams per reference serving; the serving differs per item (see notes).
const FOODS: &[FoodEntry] = &[
    FoodEntry {
        name: "apple",
        sugar: 19.0,
        fat: 0.3,
        protein: 0.5,
        salt: 0.0,
        notes: "Apples are a good source of fiber and vitamin C.",
    },
    FoodEntry {
        name: "banana",
        sugar: 28.0,
        fat: 0.4,
        protein: 1.3,
        salt: 0.0,
        notes: "Bananas are rich in potassium.",
    },
    FoodEntry {
        name: "biscuit",
        sugar: 5.0,
        fat: 4.0,
        protein: 1.0,
        salt: 0.5,
        notes: "Often high in refined flour and sugar. Per single biscuit.",
    },
    FoodEntry {
        name: "chips",
        sugar: 0.5,
        fat: 10.0,
        protein: 2.0,
        salt: 4.0,
        notes: "Typically high in fat and salt. Per small bag.",
    },
    FoodEntry {
        name: "milk",
        sugar: 12.0,
        fat: 8.0,
        protein: 8.0,
        salt: 0.2,
        notes: "A good source of calcium and protein. Per cup.",
    },
];

/// Built-in catalog of the foods the scanner can recognize.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticNutritionCatalog;

impl StaticNutritionCatalog {
    pub fn new() -> Self {
        Self
    }
}

impl NutritionCatalog for StaticNutritionCatalog {
    fn lookup(&self, food_name: &str) -> Option<NutritionProfile> {
        FOODS.iter().find(|entry| entry.name == food_name).map(|entry| {
            NutritionProfile::new(
                entry.sugar,
                entry.fat,
                entry.protein,
                entry.salt,
                Some(entry.notes.to_string()),
            )
        })
    }

    fn food_names(&self) -> Vec<String> {
        FOODS.iter().map(|entry| entry.name.to_string()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apple_is_known() {
        let apple = StaticNutritionCatalog::new().lookup("apple").unwrap();

        assert_eq!(apple.sugar, 19.0);
        assert_eq!(apple.fat, 0.3);
        assert_eq!(apple.protein, 0.5);
        assert_eq!(apple.salt, 0.0);
        assert!(apple.notes.is_some());
    }

    #[test]
    fn pizza_is_unknown() {
        assert_eq!(StaticNutritionCatalog::new().lookup("pizza"), None);
    }

    #[test]
    fn lookup_is_exact_and_case_sensitive() {
        let catalog = StaticNutritionCatalog::new();

        assert_eq!(catalog.lookup("Apple"), None);
        assert_eq!(catalog.lookup("apples"), None);
        assert_eq!(catalog.lookup(" apple"), None);
    }

    #[test]
    fn every_listed_name_resolves() {
        let catalog = StaticNutritionCatalog::new();
        let names = catalog.food_names();

        assert_eq!(names, vec!["apple", "banana", "biscuit", "chips", "milk"]);
        for name in names {
            let profile = catalog.lookup(&name).unwrap();
            assert!(profile.sugar >= 0.0 && profile.fat >= 0.0);
            assert!(profile.protein >= 0.0 && profile.salt >= 0.0);
        }
    }
}

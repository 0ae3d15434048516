use crate::domain::nutrition::entities::NutritionProfile;

/// Read-only lookup of nutrition profiles by canonical food name.
#[cfg_attr(test, mockall::automock)]
pub trait NutritionCatalog: Send + Sync {
    /// Exact match on the lowercase canonical name. `None` is the ordinary
    /// "unknown food" outcome, not a failure.
    fn lookup(&self, food_name: &str) -> Option<NutritionProfile>;

    /// Every name the catalog knows, in a stable order.
    fn food_names(&self) -> Vec<String>;
}

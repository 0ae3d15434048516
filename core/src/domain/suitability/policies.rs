use crate::domain::{nutrition::entities::Nutrient, suitability::entities::HealthCondition};

/// Threshold pair applied to a single nutrient. Both bounds are exclusive:
/// a value equal to a threshold does not cross it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NutrientRule {
    pub nutrient: Nutrient,
    pub moderate_above: f64,
    pub avoid_above: f64,
}

impl HealthCondition {
    /// Nutrient rule checked for this condition. `None` carries no dietary
    /// restriction, so no nutrient is inspected for it.
    pub fn rule(&self) -> Option<NutrientRule> {
        match self {
            HealthCondition::Diabetes => Some(NutrientRule {
                nutrient: Nutrient::Sugar,
                moderate_above: 10.0,
                avoid_above: 20.0,
            }),
            HealthCondition::Hypertension => Some(NutrientRule {
                nutrient: Nutrient::Salt,
                moderate_above: 3.0,
                avoid_above: 5.0,
            }),
            HealthCondition::HighCholesterol => Some(NutrientRule {
                nutrient: Nutrient::Fat,
                moderate_above: 10.0,
                avoid_above: 20.0,
            }),
            HealthCondition::None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_restricting_condition_has_ordered_thresholds() {
        for condition in HealthCondition::ALL {
            if let Some(rule) = condition.rule() {
                assert!(rule.moderate_above < rule.avoid_above, "{condition:?}");
            }
        }
    }

    #[test]
    fn conditions_map_to_their_nutrient() {
        assert_eq!(
            HealthCondition::Diabetes.rule().map(|r| r.nutrient),
            Some(Nutrient::Sugar)
        );
        assert_eq!(
            HealthCondition::Hypertension.rule().map(|r| r.nutrient),
            Some(Nutrient::Salt)
        );
        assert_eq!(
            HealthCondition::HighCholesterol.rule().map(|r| r.nutrient),
            Some(Nutrient::Fat)
        );
        assert_eq!(HealthCondition::None.rule(), None);
    }
}

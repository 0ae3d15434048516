use crate::domain::{
    nutrition::entities::NutritionProfile,
    suitability::{
        entities::{HealthCondition, SuitabilityTier, SuitabilityVerdict},
        policies::NutrientRule,
    },
};

const HEALTHY_CHOICE: &str = "This seems like a healthy choice.";

/// Decides whether a food suits the given health condition.
///
/// Exactly one nutrient is checked per condition. With
/// [`HealthCondition::None`] the verdict is always safe and no nutrient value
/// is looked at, however high it is.
pub fn evaluate(profile: &NutritionProfile, condition: HealthCondition) -> SuitabilityVerdict {
    let Some(rule) = condition.rule() else {
        let reason = profile
            .notes
            .clone()
            .unwrap_or_else(|| HEALTHY_CHOICE.to_string());
        return SuitabilityVerdict::new(SuitabilityTier::Safe, reason);
    };

    let tier = tier_for(profile, &rule);
    let nutrient = rule.nutrient;

    let reason = match tier {
        SuitabilityTier::Safe => match profile.notes.as_deref() {
            Some(notes) => format!("This food is suitable for your condition. {notes}"),
            None => "This food is suitable for your condition.".to_string(),
        },
        SuitabilityTier::Moderate => format!(
            "This food has a moderate amount of {nutrient}. Occasional consumption should be okay."
        ),
        SuitabilityTier::Avoid => format!(
            "This food is very high in {nutrient}, which is not suitable for your condition."
        ),
    };

    SuitabilityVerdict::new(tier, reason)
}

fn tier_for(profile: &NutritionProfile, rule: &NutrientRule) -> SuitabilityTier {
    let value = profile.amount_of(rule.nutrient);

    if value > rule.avoid_above {
        SuitabilityTier::Avoid
    } else if value > rule.moderate_above {
        SuitabilityTier::Moderate
    } else {
        SuitabilityTier::Safe
    }
}

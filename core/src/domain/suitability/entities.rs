use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "kebab-case")]
pub enum HealthCondition {
    Diabetes,
    Hypertension,
    HighCholesterol,
    #[default]
    None,
}

impl HealthCondition {
    pub const ALL: [HealthCondition; 4] = [
        HealthCondition::Diabetes,
        HealthCondition::Hypertension,
        HealthCondition::HighCholesterol,
        HealthCondition::None,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HealthCondition::Diabetes => "diabetes",
            HealthCondition::Hypertension => "hypertension",
            HealthCondition::HighCholesterol => "high-cholesterol",
            HealthCondition::None => "none",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            HealthCondition::Diabetes => "Diabetes",
            HealthCondition::Hypertension => "Hypertension",
            HealthCondition::HighCholesterol => "High Cholesterol",
            HealthCondition::None => "No Condition",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum SuitabilityTier {
    Safe,
    Moderate,
    Avoid,
}

impl SuitabilityTier {
    pub fn headline(&self) -> &'static str {
        match self {
            SuitabilityTier::Safe => "Safe to eat!",
            SuitabilityTier::Moderate => "Eat in moderation.",
            SuitabilityTier::Avoid => "Not recommended.",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SuitabilityVerdict {
    pub tier: SuitabilityTier,
    pub headline: String,
    pub reason: String,
}

impl SuitabilityVerdict {
    pub fn new(tier: SuitabilityTier, reason: String) -> Self {
        Self {
            tier,
            headline: tier.headline().to_string(),
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn condition_wire_names_are_kebab_case() {
        for condition in HealthCondition::ALL {
            let json = serde_json::to_value(condition).unwrap();
            assert_eq!(json, condition.as_str());
        }

        let parsed: HealthCondition = serde_json::from_str("\"high-cholesterol\"").unwrap();
        assert_eq!(parsed, HealthCondition::HighCholesterol);
    }

    #[test]
    fn default_condition_is_none() {
        assert_eq!(HealthCondition::default(), HealthCondition::None);
    }

    #[test]
    fn verdict_headline_follows_tier() {
        let verdict = SuitabilityVerdict::new(SuitabilityTier::Avoid, "x".to_string());
        assert_eq!(verdict.headline, "Not recommended.");
    }
}

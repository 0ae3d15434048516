use chrono::{DateTime, TimeDelta, Utc};

use crate::domain::{medicine::entities::Prescription, suitability::entities::HealthCondition};

/// Per-user state the scan flows read and replace: the prescription on file
/// and the declared health condition.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub prescription: Option<Prescription>,
    pub condition: HealthCondition,
    pub last_seen: DateTime<Utc>,
}

impl Session {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            prescription: None,
            condition: HealthCondition::None,
            last_seen: now,
        }
    }

    /// True once the session has gone unused for longer than `idle_ttl`.
    pub fn is_idle(&self, now: DateTime<Utc>, idle_ttl: TimeDelta) -> bool {
        now - self.last_seen > idle_ttl
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_session_is_empty() {
        let session = Session::new(Utc::now());

        assert_eq!(session.prescription, None);
        assert_eq!(session.condition, HealthCondition::None);
    }

    #[test]
    fn idle_only_past_the_ttl() {
        let now = Utc::now();
        let session = Session::new(now - TimeDelta::minutes(30));

        assert!(!session.is_idle(now, TimeDelta::minutes(30)));
        assert!(session.is_idle(now, TimeDelta::minutes(29)));
    }
}

use std::{collections::HashMap, sync::Arc};

use chrono::{DateTime, TimeDelta, Utc};
use tokio::sync::RwLock;

use crate::domain::{
    common::{SessionConfig, entities::app_errors::CoreError},
    medicine::entities::Prescription,
    session::{entities::Session, ports::SessionRepository},
    suitability::entities::HealthCondition,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionLimits {
    pub idle_ttl: TimeDelta,
    pub max_sessions: usize,
}

impl Default for SessionLimits {
    fn default() -> Self {
        Self {
            idle_ttl: TimeDelta::hours(12),
            max_sessions: 10_000,
        }
    }
}

impl From<SessionConfig> for SessionLimits {
    fn from(config: SessionConfig) -> Self {
        let minutes = i64::try_from(config.idle_ttl_minutes).unwrap_or(i64::MAX);

        Self {
            idle_ttl: TimeDelta::try_minutes(minutes).unwrap_or(TimeDelta::MAX),
            max_sessions: config.max_sessions,
        }
    }
}

/// Process-local session store. Nothing survives a restart.
///
/// Every access refreshes the session's `last_seen`. Sessions idle past
/// `idle_ttl` read as empty and are dropped; creating a session beyond
/// `max_sessions` evicts the least recently seen ones.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionRepository {
    sessions: Arc<RwLock<HashMap<String, Session>>>,
    limits: SessionLimits,
}

impl InMemorySessionRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: SessionLimits) -> Self {
        Self {
            sessions: Arc::default(),
            limits: SessionLimits {
                max_sessions: limits.max_sessions.max(1),
                ..limits
            },
        }
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }

    fn live_session<'a>(
        &self,
        sessions: &'a mut HashMap<String, Session>,
        session_id: &str,
        now: DateTime<Utc>,
    ) -> Option<&'a mut Session> {
        if sessions
            .get(session_id)
            .is_some_and(|session| session.is_idle(now, self.limits.idle_ttl))
        {
            sessions.remove(session_id);
            tracing::debug!(session_id, "idle session expired");
        }

        let session = sessions.get_mut(session_id)?;
        session.last_seen = now;
        Some(session)
    }

    fn session_entry<'a>(
        &self,
        sessions: &'a mut HashMap<String, Session>,
        session_id: &str,
        now: DateTime<Utc>,
    ) -> &'a mut Session {
        if self.live_session(sessions, session_id, now).is_none() {
            self.evict(sessions, now);
        }

        let session = sessions
            .entry(session_id.to_string())
            .or_insert_with(|| Session::new(now));
        session.last_seen = now;
        session
    }

    /// Makes room for one more session.
    fn evict(&self, sessions: &mut HashMap<String, Session>, now: DateTime<Utc>) {
        let before = sessions.len();
        sessions.retain(|_, session| !session.is_idle(now, self.limits.idle_ttl));

        while sessions.len() >= self.limits.max_sessions {
            let Some(oldest) = sessions
                .iter()
                .min_by_key(|(_, session)| session.last_seen)
                .map(|(id, _)| id.clone())
            else {
                break;
            };
            sessions.remove(&oldest);
        }

        let evicted = before - sessions.len();
        if evicted > 0 {
            tracing::debug!(evicted, remaining = sessions.len(), "sessions evicted");
        }
    }
}

impl SessionRepository for InMemorySessionRepository {
    async fn get_prescription(&self, session_id: &str) -> Result<Option<Prescription>, CoreError> {
        let mut sessions = self.sessions.write().await;

        Ok(self
            .live_session(&mut sessions, session_id, Utc::now())
            .and_then(|session| session.prescription.clone()))
    }

    async fn replace_prescription(
        &self,
        session_id: &str,
        prescription: Prescription,
    ) -> Result<(), CoreError> {
        let mut sessions = self.sessions.write().await;
        self.session_entry(&mut sessions, session_id, Utc::now())
            .prescription = Some(prescription);

        Ok(())
    }

    async fn clear_prescription(&self, session_id: &str) -> Result<(), CoreError> {
        let mut sessions = self.sessions.write().await;
        if let Some(session) = self.live_session(&mut sessions, session_id, Utc::now()) {
            session.prescription = None;
        }

        Ok(())
    }

    async fn get_condition(&self, session_id: &str) -> Result<HealthCondition, CoreError> {
        let mut sessions = self.sessions.write().await;

        Ok(self
            .live_session(&mut sessions, session_id, Utc::now())
            .map(|session| session.condition)
            .unwrap_or_default())
    }

    async fn set_condition(
        &self,
        session_id: &str,
        condition: HealthCondition,
    ) -> Result<(), CoreError> {
        let mut sessions = self.sessions.write().await;
        self.session_entry(&mut sessions, session_id, Utc::now())
            .condition = condition;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::medicine::entities::MedicineRecord;

    fn prescription(name: &str) -> Prescription {
        Prescription::new(vec![MedicineRecord {
            name: name.to_string(),
            dosage: "500 mg".to_string(),
            frequency: 1,
            timing: vec![],
        }])
    }

    async fn backdate(repository: &InMemorySessionRepository, session_id: &str, by: TimeDelta) {
        let mut sessions = repository.sessions.write().await;
        let session = sessions.get_mut(session_id).unwrap();
        session.last_seen -= by;
    }

    #[tokio::test]
    async fn unknown_session_reads_empty() {
        let repository = InMemorySessionRepository::new();

        assert_eq!(repository.get_prescription("s1").await.unwrap(), None);
        assert_eq!(
            repository.get_condition("s1").await.unwrap(),
            HealthCondition::None
        );
        assert!(repository.is_empty().await);
    }

    #[tokio::test]
    async fn prescription_is_replaced_then_cleared() {
        let repository = InMemorySessionRepository::new();

        repository
            .replace_prescription("s1", prescription("Paracetamol"))
            .await
            .unwrap();
        repository
            .replace_prescription("s1", prescription("Metformin"))
            .await
            .unwrap();

        let current = repository.get_prescription("s1").await.unwrap().unwrap();
        assert_eq!(current.medicines[0].name, "Metformin");

        repository.clear_prescription("s1").await.unwrap();
        assert_eq!(repository.get_prescription("s1").await.unwrap(), None);
    }

    #[tokio::test]
    async fn sessions_are_isolated() {
        let repository = InMemorySessionRepository::new();

        repository
            .set_condition("s1", HealthCondition::Diabetes)
            .await
            .unwrap();
        repository
            .replace_prescription("s1", prescription("Paracetamol"))
            .await
            .unwrap();

        assert_eq!(
            repository.get_condition("s2").await.unwrap(),
            HealthCondition::None
        );
        assert_eq!(repository.get_prescription("s2").await.unwrap(), None);
    }

    #[tokio::test]
    async fn clearing_keeps_condition() {
        let repository = InMemorySessionRepository::new();

        repository
            .set_condition("s1", HealthCondition::Hypertension)
            .await
            .unwrap();
        repository
            .replace_prescription("s1", prescription("Amlodipine"))
            .await
            .unwrap();
        repository.clear_prescription("s1").await.unwrap();

        assert_eq!(
            repository.get_condition("s1").await.unwrap(),
            HealthCondition::Hypertension
        );
    }

    #[tokio::test]
    async fn idle_session_reads_empty_and_is_dropped() {
        let repository = InMemorySessionRepository::with_limits(SessionLimits {
            idle_ttl: TimeDelta::minutes(30),
            max_sessions: 100,
        });

        repository
            .set_condition("s1", HealthCondition::Diabetes)
            .await
            .unwrap();
        repository
            .replace_prescription("s1", prescription("Paracetamol"))
            .await
            .unwrap();
        backdate(&repository, "s1", TimeDelta::minutes(31)).await;

        assert_eq!(
            repository.get_condition("s1").await.unwrap(),
            HealthCondition::None
        );
        assert_eq!(repository.get_prescription("s1").await.unwrap(), None);
        assert!(repository.is_empty().await);
    }

    #[tokio::test]
    async fn stale_sessions_are_evicted_when_a_new_one_starts() {
        let repository = InMemorySessionRepository::with_limits(SessionLimits {
            idle_ttl: TimeDelta::minutes(30),
            max_sessions: 100,
        });

        for i in 0..10 {
            let session_id = format!("stale-{i}");
            repository
                .set_condition(&session_id, HealthCondition::Diabetes)
                .await
                .unwrap();
            backdate(&repository, &session_id, TimeDelta::hours(1)).await;
        }
        repository
            .set_condition("active", HealthCondition::Diabetes)
            .await
            .unwrap();

        assert_eq!(repository.len().await, 1);
        assert_eq!(
            repository.get_condition("active").await.unwrap(),
            HealthCondition::Diabetes
        );
    }

    #[tokio::test]
    async fn session_count_is_capped() {
        let repository = InMemorySessionRepository::with_limits(SessionLimits {
            idle_ttl: TimeDelta::hours(12),
            max_sessions: 50,
        });

        for i in 0..10_000 {
            repository
                .set_condition(&format!("s{i}"), HealthCondition::None)
                .await
                .unwrap();
        }

        assert_eq!(repository.len().await, 50);
    }

    #[tokio::test]
    async fn least_recently_seen_session_is_evicted_first() {
        let repository = InMemorySessionRepository::with_limits(SessionLimits {
            idle_ttl: TimeDelta::hours(12),
            max_sessions: 2,
        });

        repository
            .set_condition("first", HealthCondition::Diabetes)
            .await
            .unwrap();
        repository
            .set_condition("second", HealthCondition::Hypertension)
            .await
            .unwrap();
        backdate(&repository, "first", TimeDelta::minutes(10)).await;
        backdate(&repository, "second", TimeDelta::minutes(5)).await;

        // Reading refreshes "first", leaving "second" the oldest.
        repository.get_condition("first").await.unwrap();
        repository
            .set_condition("third", HealthCondition::HighCholesterol)
            .await
            .unwrap();

        assert_eq!(repository.len().await, 2);
        assert_eq!(
            repository.get_condition("first").await.unwrap(),
            HealthCondition::Diabetes
        );
        assert_eq!(
            repository.get_condition("second").await.unwrap(),
            HealthCondition::None
        );
    }

    #[test]
    fn limits_follow_config() {
        let limits = SessionLimits::from(SessionConfig {
            idle_ttl_minutes: 15,
            max_sessions: 20,
        });

        assert_eq!(limits.idle_ttl, TimeDelta::minutes(15));
        assert_eq!(limits.max_sessions, 20);
    }
}

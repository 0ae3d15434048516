use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError, medicine::entities::Prescription,
    suitability::entities::HealthCondition,
};

/// Storage for session state. Each field is a read-modify-replace cell; an
/// unknown session reads as empty with no condition.
pub trait SessionRepository: Send + Sync {
    fn get_prescription(
        &self,
        session_id: &str,
    ) -> impl Future<Output = Result<Option<Prescription>, CoreError>> + Send;

    fn replace_prescription(
        &self,
        session_id: &str,
        prescription: Prescription,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn clear_prescription(
        &self,
        session_id: &str,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;

    fn get_condition(
        &self,
        session_id: &str,
    ) -> impl Future<Output = Result<HealthCondition, CoreError>> + Send;

    fn set_condition(
        &self,
        session_id: &str,
        condition: HealthCondition,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

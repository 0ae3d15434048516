use std::future::Future;

use crate::domain::{
    common::entities::app_errors::CoreError,
    medicine::entities::{Prescription, ScannedMedicine},
    recognition::value_objects::ImageInput,
    scan::value_objects::{FoodScan, MedicineVerification, PrescriptionScan},
    suitability::entities::HealthCondition,
};

pub trait PrescriptionService: Send + Sync {
    /// Extracts medicines from a prescription photo. A non-empty result
    /// replaces the session's prescription; an empty one leaves it untouched.
    fn scan_prescription(
        &self,
        session_id: &str,
        image: ImageInput,
    ) -> impl Future<Output = Result<PrescriptionScan, CoreError>> + Send;

    fn get_prescription(
        &self,
        session_id: &str,
    ) -> impl Future<Output = Result<Option<Prescription>, CoreError>> + Send;

    fn clear_prescription(
        &self,
        session_id: &str,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

pub trait MedicineService: Send + Sync {
    /// Fails with [`CoreError::NoPrescriptionOnFile`] before any recognition
    /// when the session holds no prescription.
    fn verify_medicine(
        &self,
        session_id: &str,
        image: ImageInput,
    ) -> impl Future<Output = Result<MedicineVerification, CoreError>> + Send;

    fn verify_medicine_by_name(
        &self,
        session_id: &str,
        scanned: ScannedMedicine,
    ) -> impl Future<Output = Result<MedicineVerification, CoreError>> + Send;
}

pub trait ConditionService: Send + Sync {
    fn get_condition(
        &self,
        session_id: &str,
    ) -> impl Future<Output = Result<HealthCondition, CoreError>> + Send;

    fn set_condition(
        &self,
        session_id: &str,
        condition: HealthCondition,
    ) -> impl Future<Output = Result<HealthCondition, CoreError>> + Send;
}

pub trait FoodService: Send + Sync {
    /// Recognizes a food photo and judges it against the session's condition.
    fn scan_food(
        &self,
        session_id: &str,
        image: ImageInput,
    ) -> impl Future<Output = Result<FoodScan, CoreError>> + Send;

    /// Same verdict as [`FoodService::scan_food`] for an already known name.
    fn assess_food(&self, food_name: &str, condition: HealthCondition) -> FoodScan;
}

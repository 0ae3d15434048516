use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    medicine::{
        entities::{Prescription, ScannedMedicine},
        services::{is_on_prescription, matching_entries},
    },
    nutrition::{entities::canonical_food_name, ports::NutritionCatalog},
    recognition::{ports::ImageRecognizer, value_objects::ImageInput},
    scan::{
        ports::{ConditionService, FoodService, MedicineService, PrescriptionService},
        value_objects::{FoodScan, MedicineVerification, PrescriptionScan},
    },
    session::ports::SessionRepository,
    suitability::{entities::HealthCondition, services::evaluate},
};

impl<NC, IR, SR> PrescriptionService for Service<NC, IR, SR>
where
    NC: NutritionCatalog,
    IR: ImageRecognizer,
    SR: SessionRepository,
{
    async fn scan_prescription(
        &self,
        session_id: &str,
        image: ImageInput,
    ) -> Result<PrescriptionScan, CoreError> {
        let medicines = self.image_recognizer.extract_prescription(image).await?;

        if medicines.is_empty() {
            tracing::info!(session_id, "no medicines found on prescription image");
            return Ok(PrescriptionScan::NothingFound);
        }

        let prescription = Prescription::new(medicines);
        self.session_repository
            .replace_prescription(session_id, prescription.clone())
            .await?;

        tracing::info!(
            session_id,
            prescription_id = %prescription.id,
            medicines = prescription.medicines.len(),
            "prescription captured"
        );

        Ok(PrescriptionScan::Captured { prescription })
    }

    async fn get_prescription(&self, session_id: &str) -> Result<Option<Prescription>, CoreError> {
        self.session_repository.get_prescription(session_id).await
    }

    async fn clear_prescription(&self, session_id: &str) -> Result<(), CoreError> {
        self.session_repository.clear_prescription(session_id).await
    }
}

impl<NC, IR, SR> Service<NC, IR, SR>
where
    NC: NutritionCatalog,
    IR: ImageRecognizer,
    SR: SessionRepository,
{
    async fn prescription_on_file(&self, session_id: &str) -> Result<Prescription, CoreError> {
        self.session_repository
            .get_prescription(session_id)
            .await?
            .filter(|prescription| !prescription.is_empty())
            .ok_or(CoreError::NoPrescriptionOnFile)
    }
}

fn verify_against(scanned: ScannedMedicine, prescription: &Prescription) -> MedicineVerification {
    let on_prescription = is_on_prescription(&scanned, &prescription.medicines);
    let matches = matching_entries(&scanned, &prescription.medicines)
        .into_iter()
        .cloned()
        .collect();

    MedicineVerification::Verified {
        scanned,
        on_prescription,
        matches,
    }
}

impl<NC, IR, SR> MedicineService for Service<NC, IR, SR>
where
    NC: NutritionCatalog,
    IR: ImageRecognizer,
    SR: SessionRepository,
{
    async fn verify_medicine(
        &self,
        session_id: &str,
        image: ImageInput,
    ) -> Result<MedicineVerification, CoreError> {
        let prescription = self.prescription_on_file(session_id).await?;

        let Some(scanned) = self.image_recognizer.recognize_medicine(image).await? else {
            tracing::info!(session_id, "medicine not identified");
            return Ok(MedicineVerification::NotIdentified);
        };

        let verification = verify_against(scanned, &prescription);
        if let MedicineVerification::Verified {
            scanned,
            on_prescription,
            ..
        } = &verification
        {
            tracing::info!(session_id, medicine = %scanned.name, on_prescription, "medicine verified");
        }

        Ok(verification)
    }

    async fn verify_medicine_by_name(
        &self,
        session_id: &str,
        scanned: ScannedMedicine,
    ) -> Result<MedicineVerification, CoreError> {
        if scanned.name.trim().is_empty() {
            return Err(CoreError::Invalid("medicine name must not be empty".to_string()));
        }

        let prescription = self.prescription_on_file(session_id).await?;

        Ok(verify_against(scanned, &prescription))
    }
}

impl<NC, IR, SR> ConditionService for Service<NC, IR, SR>
where
    NC: NutritionCatalog,
    IR: ImageRecognizer,
    SR: SessionRepository,
{
    async fn get_condition(&self, session_id: &str) -> Result<HealthCondition, CoreError> {
        self.session_repository.get_condition(session_id).await
    }

    async fn set_condition(
        &self,
        session_id: &str,
        condition: HealthCondition,
    ) -> Result<HealthCondition, CoreError> {
        self.session_repository
            .set_condition(session_id, condition)
            .await?;

        tracing::debug!(session_id, condition = condition.as_str(), "health condition set");

        Ok(condition)
    }
}

impl<NC, IR, SR> FoodService for Service<NC, IR, SR>
where
    NC: NutritionCatalog,
    IR: ImageRecognizer,
    SR: SessionRepository,
{
    async fn scan_food(&self, session_id: &str, image: ImageInput) -> Result<FoodScan, CoreError> {
        let condition = self.session_repository.get_condition(session_id).await?;
        let vocabulary = self.nutrition_catalog.food_names();

        let Some(food_name) = self
            .image_recognizer
            .recognize_food(image, vocabulary)
            .await?
        else {
            tracing::info!(session_id, "food not identified");
            return Ok(FoodScan::NotIdentified);
        };

        Ok(self.assess_food(&food_name, condition))
    }

    fn assess_food(&self, food_name: &str, condition: HealthCondition) -> FoodScan {
        let food_name = canonical_food_name(food_name);

        match self.nutrition_catalog.lookup(&food_name) {
            Some(nutrition) => {
                let verdict = evaluate(&nutrition, condition);
                FoodScan::Evaluated {
                    food_name,
                    nutrition,
                    condition,
                    verdict,
                }
            }
            None => FoodScan::UnknownFood { food_name },
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    };

    use super::*;
    use crate::{
        domain::{
            medicine::entities::{MedicineRecord, Timing},
            nutrition::{entities::NutritionProfile, ports::MockNutritionCatalog},
            suitability::entities::SuitabilityTier,
        },
        infrastructure::{nutrition::StaticNutritionCatalog, session::InMemorySessionRepository},
    };

    #[derive(Clone, Default)]
    struct StubRecognizer {
        prescription: Vec<MedicineRecord>,
        medicine: Option<ScannedMedicine>,
        food: Option<String>,
        fail: bool,
        calls: Arc<AtomicUsize>,
    }

    impl StubRecognizer {
        fn outcome<T: Clone>(&self, value: &T) -> Result<T, CoreError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                Err(CoreError::ExternalServiceError("unavailable".to_string()))
            } else {
                Ok(value.clone())
            }
        }
    }

    impl ImageRecognizer for StubRecognizer {
        async fn extract_prescription(
            &self,
            _image: ImageInput,
        ) -> Result<Vec<MedicineRecord>, CoreError> {
            self.outcome(&self.prescription)
        }

        async fn recognize_medicine(
            &self,
            _image: ImageInput,
        ) -> Result<Option<ScannedMedicine>, CoreError> {
            self.outcome(&self.medicine)
        }

        async fn recognize_food(
            &self,
            _image: ImageInput,
            _vocabulary: Vec<String>,
        ) -> Result<Option<String>, CoreError> {
            self.outcome(&self.food)
        }
    }

    type TestService = Service<StaticNutritionCatalog, StubRecognizer, InMemorySessionRepository>;

    fn service(recognizer: StubRecognizer) -> TestService {
        Service::new(
            StaticNutritionCatalog::new(),
            recognizer,
            InMemorySessionRepository::new(),
        )
    }

    fn image() -> ImageInput {
        ImageInput::new(vec![1, 2, 3], None)
    }

    fn paracetamol() -> MedicineRecord {
        MedicineRecord {
            name: "Paracetamol".to_string(),
            dosage: "500mg".to_string(),
            frequency: 2,
            timing: vec![Timing::Morning, Timing::Night],
        }
    }

    fn scanned(name: &str, dosage: &str) -> ScannedMedicine {
        ScannedMedicine {
            name: name.to_string(),
            dosage: dosage.to_string(),
        }
    }

    #[tokio::test]
    async fn scanning_a_prescription_stores_it() {
        let service = service(StubRecognizer {
            prescription: vec![paracetamol()],
            ..Default::default()
        });

        let outcome = service.scan_prescription("s1", image()).await.unwrap();

        let PrescriptionScan::Captured { prescription } = outcome else {
            panic!("expected a captured prescription");
        };
        assert_eq!(prescription.medicines, vec![paracetamol()]);
        assert_eq!(
            service.get_prescription("s1").await.unwrap(),
            Some(prescription)
        );
    }

    #[tokio::test]
    async fn empty_extraction_keeps_previous_prescription() {
        let service = service(StubRecognizer::default());
        let existing = Prescription::new(vec![paracetamol()]);
        service
            .session_repository
            .replace_prescription("s1", existing.clone())
            .await
            .unwrap();

        let outcome = service.scan_prescription("s1", image()).await.unwrap();

        assert_eq!(outcome, PrescriptionScan::NothingFound);
        assert_eq!(service.get_prescription("s1").await.unwrap(), Some(existing));
    }

    #[tokio::test]
    async fn verification_without_prescription_is_rejected_before_recognition() {
        let recognizer = StubRecognizer {
            medicine: Some(scanned("Paracetamol", "500mg")),
            ..Default::default()
        };
        let calls = recognizer.calls.clone();
        let service = service(recognizer);

        let err = service.verify_medicine("s1", image()).await.unwrap_err();

        assert_eq!(err, CoreError::NoPrescriptionOnFile);
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn dosage_mismatch_still_verifies() {
        let service = service(StubRecognizer {
            prescription: vec![paracetamol()],
            medicine: Some(scanned("Paracetamol", "250mg")),
            ..Default::default()
        });
        service.scan_prescription("s1", image()).await.unwrap();

        let outcome = service.verify_medicine("s1", image()).await.unwrap();

        assert_eq!(
            outcome,
            MedicineVerification::Verified {
                scanned: scanned("Paracetamol", "250mg"),
                on_prescription: true,
                matches: vec![paracetamol()],
            }
        );
    }

    #[tokio::test]
    async fn unidentified_medicine_is_reported() {
        let service = service(StubRecognizer {
            prescription: vec![paracetamol()],
            ..Default::default()
        });
        service.scan_prescription("s1", image()).await.unwrap();

        let outcome = service.verify_medicine("s1", image()).await.unwrap();

        assert_eq!(outcome, MedicineVerification::NotIdentified);
    }

    #[tokio::test]
    async fn verify_by_name_reports_missing_medicine() {
        let service = service(StubRecognizer {
            prescription: vec![paracetamol()],
            ..Default::default()
        });
        service.scan_prescription("s1", image()).await.unwrap();

        let outcome = service
            .verify_medicine_by_name("s1", scanned("Metformin", "500 mg"))
            .await
            .unwrap();

        assert_eq!(
            outcome,
            MedicineVerification::Verified {
                scanned: scanned("Metformin", "500 mg"),
                on_prescription: false,
                matches: vec![],
            }
        );
    }

    #[tokio::test]
    async fn verify_by_name_rejects_blank_names() {
        let service = service(StubRecognizer::default());

        let err = service
            .verify_medicine_by_name("s1", scanned("  ", ""))
            .await
            .unwrap_err();

        assert!(matches!(err, CoreError::Invalid(_)));
    }

    #[tokio::test]
    async fn collaborator_failure_propagates() {
        let service = service(StubRecognizer {
            fail: true,
            ..Default::default()
        });

        let err = service.scan_prescription("s1", image()).await.unwrap_err();

        assert!(matches!(err, CoreError::ExternalServiceError(_)));
    }

    #[tokio::test]
    async fn food_scan_uses_session_condition() {
        let service = service(StubRecognizer {
            food: Some("banana".to_string()),
            ..Default::default()
        });
        service
            .set_condition("s1", HealthCondition::Diabetes)
            .await
            .unwrap();

        let outcome = service.scan_food("s1", image()).await.unwrap();

        let FoodScan::Evaluated {
            food_name,
            condition,
            verdict,
            ..
        } = outcome
        else {
            panic!("expected an evaluated food");
        };
        assert_eq!(food_name, "banana");
        assert_eq!(condition, HealthCondition::Diabetes);
        assert_eq!(verdict.tier, SuitabilityTier::Avoid);
    }

    #[tokio::test]
    async fn food_not_identified() {
        let service = service(StubRecognizer::default());

        let outcome = service.scan_food("s1", image()).await.unwrap();

        assert_eq!(outcome, FoodScan::NotIdentified);
    }

    #[test]
    fn assess_food_reports_unknown_food() {
        let service = service(StubRecognizer::default());

        assert_eq!(
            service.assess_food("Pizza", HealthCondition::None),
            FoodScan::UnknownFood {
                food_name: "pizza".to_string()
            }
        );
    }

    #[test]
    fn assess_food_looks_up_canonical_name() {
        let mut catalog = MockNutritionCatalog::new();
        catalog
            .expect_lookup()
            .withf(|name| name == "chips")
            .times(1)
            .returning(|_| Some(NutritionProfile::new(0.5, 10.0, 2.0, 4.0, None)));
        let service = Service::new(
            catalog,
            StubRecognizer::default(),
            InMemorySessionRepository::new(),
        );

        let outcome = service.assess_food(" CHIPS ", HealthCondition::Hypertension);

        let FoodScan::Evaluated { verdict, .. } = outcome else {
            panic!("expected an evaluated food");
        };
        assert_eq!(verdict.tier, SuitabilityTier::Moderate);
    }
}

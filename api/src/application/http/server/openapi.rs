use crate::application::http::{
    condition::router::{ConditionApiDoc, SessionConditionApiDoc},
    food::router::FoodApiDoc,
    health::HealthApiDoc,
    medicine::router::MedicineApiDoc,
    prescription::router::PrescriptionApiDoc,
};
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "MediVoice API",
        description = "Prescription capture, medicine verification and food suitability checks."
    ),
    nest(
        (path = "/health", api = HealthApiDoc),
        (path = "/conditions", api = ConditionApiDoc),
        (path = "/session/condition", api = SessionConditionApiDoc),
        (path = "/prescriptions", api = PrescriptionApiDoc),
        (path = "/medicines", api = MedicineApiDoc),
        (path = "/foods", api = FoodApiDoc),
    )
)]
pub struct ApiDoc;

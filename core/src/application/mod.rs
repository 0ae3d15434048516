use crate::{
    domain::{
        common::{MedivoiceConfig, services::Service},
        recognition::services::LlmImageRecognizer,
    },
    infrastructure::{
        llm::GeminiLLMClient, nutrition::StaticNutritionCatalog,
        session::{InMemorySessionRepository, SessionLimits},
    },
};

pub type MedivoiceService =
    Service<StaticNutritionCatalog, LlmImageRecognizer<GeminiLLMClient>, InMemorySessionRepository>;

pub async fn create_service(config: MedivoiceConfig) -> Result<MedivoiceService, anyhow::Error> {
    if config.llm.gemini_api_key.trim().is_empty() {
        anyhow::bail!("a Gemini API key is required");
    }

    tracing::info!(model = %config.llm.gemini_model, "creating MediVoice service");

    let llm_client = GeminiLLMClient::from(config.llm);

    Ok(Service::new(
        StaticNutritionCatalog::new(),
        LlmImageRecognizer::new(llm_client),
        InMemorySessionRepository::with_limits(SessionLimits::from(config.session)),
    ))
}

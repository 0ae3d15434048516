use crate::domain::{
    nutrition::ports::NutritionCatalog, recognition::ports::ImageRecognizer,
    session::ports::SessionRepository,
};

/// Application service bundling the ports every use case depends on.
///
/// The use case traits in [`crate::domain::scan::ports`] are implemented on
/// this type; the pure decision functions stay free of any state.
#[derive(Clone)]
pub struct Service<NC, IR, SR>
where
    NC: NutritionCatalog,
    IR: ImageRecognizer,
    SR: SessionRepository,
{
    pub(crate) nutrition_catalog: NC,
    pub(crate) image_recognizer: IR,
    pub(crate) session_repository: SR,
}

impl<NC, IR, SR> Service<NC, IR, SR>
where
    NC: NutritionCatalog,
    IR: ImageRecognizer,
    SR: SessionRepository,
{
    pub fn new(nutrition_catalog: NC, image_recognizer: IR, session_repository: SR) -> Self {
        Self {
            nutrition_catalog,
            image_recognizer,
            session_repository,
        }
    }

    pub fn nutrition_catalog(&self) -> &NC {
        &self.nutrition_catalog
    }
}

use std::sync::Arc;

use medivoice_core::application::MedivoiceService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: MedivoiceService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: MedivoiceService) -> Self {
        Self { args, service }
    }
}

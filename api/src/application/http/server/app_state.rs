use std::sync::Arc;

use dispensa_core::application::DispensaService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: DispensaService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: DispensaService) -> Self {
        Self { args, service }
    }
}

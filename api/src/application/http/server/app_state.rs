use std::sync::Arc;

use dishguard_core::application::DishguardService;

use crate::args::Args;

#[derive(Clone)]
pub struct AppState {
    pub args: Arc<Args>,
    pub service: DishguardService,
}

impl AppState {
    pub fn new(args: Arc<Args>, service: DishguardService) -> Self {
        Self { args, service }
    }
}

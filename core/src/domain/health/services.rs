use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    dish::ports::DishRepository,
    health::ports::{HealthCheckRepository, HealthCheckService},
};

impl<D, HC> HealthCheckService for Service<D, HC>
where
    D: DishRepository,
    HC: HealthCheckRepository,
{
    async fn health(&self) -> Result<u64, CoreError> {
        self.health_check_repository.health().await
    }
}

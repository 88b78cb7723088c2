use crate::domain::{dish::ports::DishRepository, health::ports::HealthCheckRepository};

/// Entry point of the core: every domain service trait is implemented on
/// this struct, over whichever adapters the caller injects.
#[derive(Clone)]
pub struct Service<D, HC>
where
    D: DishRepository,
    HC: HealthCheckRepository,
{
    pub dish_repository: D,
    pub health_check_repository: HC,
}

impl<D, HC> Service<D, HC>
where
    D: DishRepository,
    HC: HealthCheckRepository,
{
    pub fn new(dish_repository: D, health_check_repository: HC) -> Self {
        Self {
            dish_repository,
            health_check_repository,
        }
    }
}

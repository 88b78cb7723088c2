use crate::{
    domain::common::{DishguardConfig, services::Service},
    infrastructure::{
        db::postgres::{Postgres, PostgresConfig},
        dish::PostgresDishRepository,
        health::PostgresHealthCheckRepository,
    },
};

pub type DishguardService = Service<PostgresDishRepository, PostgresHealthCheckRepository>;

/// Opens the record store and wires the Postgres adapters into the core
/// service. The returned [`Postgres`] handle is closed by the caller when the
/// session ends.
pub async fn create_service(
    config: DishguardConfig,
) -> Result<(DishguardService, Postgres), anyhow::Error> {
    let postgres = Postgres::new(PostgresConfig {
        database_url: config.database.url(),
    })
    .await?;

    let service = Service::new(
        PostgresDishRepository::new(postgres.get_db()),
        PostgresHealthCheckRepository::new(postgres.get_db()),
    );

    Ok((service, postgres))
}

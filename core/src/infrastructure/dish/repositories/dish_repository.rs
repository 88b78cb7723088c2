use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder,
};
use tracing::{error, warn};
use uuid::Uuid;

use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        dish::{
            entities::{Category, Dish},
            ports::DishRepository,
        },
    },
    entity::dishes::{ActiveModel, Column, Entity},
};

#[derive(Debug, Clone)]
pub struct PostgresDishRepository {
    pub db: DatabaseConnection,
}

impl PostgresDishRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

impl DishRepository for PostgresDishRepository {
    async fn fetch_all_dishes(&self) -> Result<Vec<Dish>, CoreError> {
        let models = Entity::find()
            .order_by_asc(Column::Category)
            .order_by_asc(Column::CreatedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to fetch dishes: {}", e);
                CoreError::RepositoryUnavailable
            })?;

        let dishes = models
            .iter()
            .filter_map(|model| match Dish::try_from(model) {
                Ok(dish) => Some(dish),
                Err(e) => {
                    warn!("Skipping dish record: {}", e);
                    None
                }
            })
            .collect::<Vec<Dish>>();

        Ok(dishes)
    }

    async fn get_dish(&self, category: Category, dish_id: Uuid) -> Result<Option<Dish>, CoreError> {
        let dish = Entity::find_by_id(dish_id)
            .filter(Column::Category.eq(category.as_str()))
            .one(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to get dish by id: {}", e);
                CoreError::RepositoryUnavailable
            })?
            .map(Dish::try_from)
            .transpose()?;

        Ok(dish)
    }

    async fn create_dish(&self, dish: Dish) -> Result<Dish, CoreError> {
        Entity::insert(ActiveModel::from(&dish))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to create dish: {}", e);
                CoreError::RepositoryWriteError
            })?;

        Ok(dish)
    }

    async fn update_dish(&self, dish: Dish) -> Result<Dish, CoreError> {
        let updated = Entity::update(ActiveModel::from(&dish))
            .filter(Column::Id.eq(dish.id))
            .filter(Column::Category.eq(dish.category.as_str()))
            .exec(&self.db)
            .await
            .map_err(|e| match e {
                DbErr::RecordNotUpdated => CoreError::NotFound,
                e => {
                    error!("Failed to update dish: {}", e);
                    CoreError::RepositoryWriteError
                }
            })?;

        Dish::try_from(updated)
    }

    async fn delete_dish(&self, category: Category, dish_id: Uuid) -> Result<(), CoreError> {
        let result = Entity::delete_many()
            .filter(Column::Id.eq(dish_id))
            .filter(Column::Category.eq(category.as_str()))
            .exec(&self.db)
            .await
            .map_err(|e| {
                error!("Failed to delete dish: {}", e);
                CoreError::RepositoryWriteError
            })?;

        if result.rows_affected == 0 {
            return Err(CoreError::NotFound);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
    use serde_json::json;

    use super::*;
    use crate::entity::dishes::Model;

    fn model(category: &str, name: Option<&str>) -> Model {
        let now = Utc::now().fixed_offset();
        Model {
            id: Uuid::new_v4(),
            category: category.to_string(),
            name: name.map(str::to_string),
            ingredients: Some(json!(["cream", "sugar"])),
            allergens: Some(json!(["milk"])),
            removable_allergens: None,
            diet: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_fetch_all_dishes_skips_malformed_records() {
        let valid = model("Dessert", Some("Pavlova"));
        let valid_id = valid.id;
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results([vec![
                valid,
                model("Dessert", None),
                model("Brunch", Some("Eggs Benedict")),
            ]])
            .into_connection();
        let repository = PostgresDishRepository::new(db);

        let dishes = repository.fetch_all_dishes().await.unwrap();

        assert_eq!(dishes.len(), 1);
        assert_eq!(dishes[0].id, valid_id);
        assert_eq!(dishes[0].name, "Pavlova");
        assert_eq!(dishes[0].category, Category::Dessert);
    }

    #[tokio::test]
    async fn test_fetch_all_dishes_reports_unavailable_store() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors([DbErr::Custom("connection refused".to_string())])
            .into_connection();
        let repository = PostgresDishRepository::new(db);

        let result = repository.fetch_all_dishes().await;

        assert_eq!(result, Err(CoreError::RepositoryUnavailable));
    }

    #[tokio::test]
    async fn test_delete_unknown_dish_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 0,
            }])
            .into_connection();
        let repository = PostgresDishRepository::new(db);

        let result = repository.delete_dish(Category::Dessert, Uuid::new_v4()).await;

        assert_eq!(result, Err(CoreError::NotFound));
    }
}

use tracing::{info, instrument};
use uuid::Uuid;

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    dish::{
        entities::Dish,
        ports::{DishRepository, DishService},
        value_objects::{
            CreateDishInput, DeleteDishInput, DishFields, GetDishInput, UpdateDishInput,
        },
    },
    health::ports::HealthCheckRepository,
};

fn ensure_named(fields: &DishFields) -> Result<(), CoreError> {
    if fields.name.trim().is_empty() {
        return Err(CoreError::Invalid("dish name is required".to_string()));
    }
    Ok(())
}

impl<D, HC> DishService for Service<D, HC>
where
    D: DishRepository,
    HC: HealthCheckRepository,
{
    async fn list_dishes(&self) -> Result<Vec<Dish>, CoreError> {
        self.dish_repository.fetch_all_dishes().await
    }

    async fn get_dish(&self, input: GetDishInput) -> Result<Option<Dish>, CoreError> {
        self.dish_repository
            .get_dish(input.category, input.dish_id)
            .await
    }

    async fn find_dish_by_name(&self, name: String) -> Result<Option<Dish>, CoreError> {
        let dishes = self.dish_repository.fetch_all_dishes().await?;

        Ok(dishes.into_iter().find(|dish| dish.name == name))
    }

    #[instrument(skip(self, input), fields(category = %input.category))]
    async fn create_dish(&self, input: CreateDishInput) -> Result<Uuid, CoreError> {
        ensure_named(&input.fields)?;

        let dish = Dish::new(input.category, input.fields);
        let created = self.dish_repository.create_dish(dish).await?;

        info!(dish_id = %created.id, name = %created.name, "dish created");
        Ok(created.id)
    }

    #[instrument(skip(self, input), fields(category = %input.category, dish_id = %input.dish_id))]
    async fn update_dish(&self, input: UpdateDishInput) -> Result<Dish, CoreError> {
        ensure_named(&input.fields)?;

        let mut dish = self
            .dish_repository
            .get_dish(input.category, input.dish_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        dish.update(input.fields);

        let updated = self.dish_repository.update_dish(dish).await?;

        info!(name = %updated.name, "dish updated");
        Ok(updated)
    }

    #[instrument(skip(self, input), fields(category = %input.category, dish_id = %input.dish_id))]
    async fn delete_dish(&self, input: DeleteDishInput) -> Result<(), CoreError> {
        self.dish_repository
            .delete_dish(input.category, input.dish_id)
            .await?;

        info!("dish deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::dish::entities::{Category, DietTag},
        test_utils::{FakeDishRepository, FakeHealthCheckRepository, dish},
    };

    fn service(
        repository: FakeDishRepository,
    ) -> Service<FakeDishRepository, FakeHealthCheckRepository> {
        Service::new(repository, FakeHealthCheckRepository::default())
    }

    fn fields(name: &str) -> DishFields {
        DishFields {
            name: name.to_string(),
            ingredients: vec!["rice".to_string()],
            allergens: vec![],
            removable_allergens: vec![],
            diet: vec![DietTag::Vegan],
        }
    }

    #[tokio::test]
    async fn test_create_dish_assigns_id() {
        let service = service(FakeDishRepository::default());

        let id = service
            .create_dish(CreateDishInput {
                category: Category::Share,
                fields: fields("Rice bowl"),
            })
            .await
            .unwrap();

        let stored = service
            .get_dish(GetDishInput {
                category: Category::Share,
                dish_id: id,
            })
            .await
            .unwrap()
            .unwrap();
        assert_eq!(stored.name, "Rice bowl");
        assert_eq!(stored.category, Category::Share);
    }

    #[tokio::test]
    async fn test_create_dish_rejects_blank_name() {
        let service = service(FakeDishRepository::default());

        let result = service
            .create_dish(CreateDishInput {
                category: Category::Snack,
                fields: fields("   "),
            })
            .await;

        assert!(matches!(result, Err(CoreError::Invalid(_))));
        assert!(service.list_dishes().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_create_dish_surfaces_write_error() {
        let service = service(FakeDishRepository::default().failing_writes());

        let result = service
            .create_dish(CreateDishInput {
                category: Category::Snack,
                fields: fields("Olives"),
            })
            .await;

        assert_eq!(result, Err(CoreError::RepositoryWriteError));
    }

    #[tokio::test]
    async fn test_update_dish_replaces_fields() {
        let existing = dish(Category::Start, "Soup", &["leek"], &["celery"], &[], &[]);
        let id = existing.id;
        let service = service(FakeDishRepository::with_dishes(vec![existing]));

        let updated = service
            .update_dish(UpdateDishInput {
                category: Category::Start,
                dish_id: id,
                fields: fields("Rice soup"),
            })
            .await
            .unwrap();

        assert_eq!(updated.id, id);
        assert_eq!(updated.name, "Rice soup");
        assert!(updated.allergens.is_empty());
        assert_eq!(updated.diet, vec![DietTag::Vegan]);
    }

    #[tokio::test]
    async fn test_update_dish_in_wrong_category_is_not_found() {
        let existing = dish(Category::Start, "Soup", &[], &[], &[], &[]);
        let id = existing.id;
        let service = service(FakeDishRepository::with_dishes(vec![existing]));

        let result = service
            .update_dish(UpdateDishInput {
                category: Category::Dessert,
                dish_id: id,
                fields: fields("Soup"),
            })
            .await;

        assert_eq!(result, Err(CoreError::NotFound));
    }

    #[tokio::test]
    async fn test_delete_dish() {
        let existing = dish(Category::Dessert, "Tart", &[], &[], &[], &[]);
        let id = existing.id;
        let service = service(FakeDishRepository::with_dishes(vec![existing]));

        service
            .delete_dish(DeleteDishInput {
                category: Category::Dessert,
                dish_id: id,
            })
            .await
            .unwrap();

        assert!(service.list_dishes().await.unwrap().is_empty());

        let again = service
            .delete_dish(DeleteDishInput {
                category: Category::Dessert,
                dish_id: id,
            })
            .await;
        assert_eq!(again, Err(CoreError::NotFound));
    }

    #[tokio::test]
    async fn test_find_dish_by_name_returns_first_match() {
        let first = dish(Category::Snack, "Fries", &["potato"], &[], &[], &[]);
        let second = dish(Category::Share, "Fries", &["sweet potato"], &[], &[], &[]);
        let first_id = first.id;
        let service = service(FakeDishRepository::with_dishes(vec![first, second]));

        let found = service
            .find_dish_by_name("Fries".to_string())
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.id, first_id);

        let missing = service.find_dish_by_name("fries".to_string()).await.unwrap();
        assert!(missing.is_none());
    }
}

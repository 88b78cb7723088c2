use std::sync::{Arc, Mutex};

use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    dish::{
        entities::{Category, DietTag, Dish},
        ports::DishRepository,
        value_objects::DishFields,
    },
    health::ports::HealthCheckRepository,
};

fn owned(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(|token| token.to_string()).collect()
}

pub fn dish(
    category: Category,
    name: &str,
    ingredients: &[&str],
    allergens: &[&str],
    removable_allergens: &[&str],
    diet: &[DietTag],
) -> Dish {
    Dish::new(
        category,
        DishFields {
            name: name.to_string(),
            ingredients: owned(ingredients),
            allergens: owned(allergens),
            removable_allergens: owned(removable_allergens),
            diet: diet.to_vec(),
        },
    )
}

/// In-memory record store with switchable read and write failures.
#[derive(Clone, Default)]
pub struct FakeDishRepository {
    dishes: Arc<Mutex<Vec<Dish>>>,
    fail_reads: bool,
    fail_writes: bool,
}

impl FakeDishRepository {
    pub fn with_dishes(dishes: Vec<Dish>) -> Self {
        Self {
            dishes: Arc::new(Mutex::new(dishes)),
            ..Self::default()
        }
    }

    pub fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    fn read(&self) -> Result<Vec<Dish>, CoreError> {
        if self.fail_reads {
            return Err(CoreError::RepositoryUnavailable);
        }
        Ok(self.dishes.lock().unwrap().clone())
    }

    fn write<T>(&self, op: impl FnOnce(&mut Vec<Dish>) -> Result<T, CoreError>) -> Result<T, CoreError> {
        if self.fail_writes {
            return Err(CoreError::RepositoryWriteError);
        }
        let mut dishes = self.dishes.lock().unwrap();
        op(&mut *dishes)
    }
}

impl DishRepository for FakeDishRepository {
    async fn fetch_all_dishes(&self) -> Result<Vec<Dish>, CoreError> {
        self.read()
    }

    async fn get_dish(&self, category: Category, dish_id: Uuid) -> Result<Option<Dish>, CoreError> {
        Ok(self
            .read()?
            .into_iter()
            .find(|dish| dish.category == category && dish.id == dish_id))
    }

    async fn create_dish(&self, dish: Dish) -> Result<Dish, CoreError> {
        self.write(|dishes| {
            dishes.push(dish.clone());
            Ok(dish)
        })
    }

    async fn update_dish(&self, dish: Dish) -> Result<Dish, CoreError> {
        self.write(|dishes| {
            let slot = dishes
                .iter_mut()
                .find(|existing| existing.category == dish.category && existing.id == dish.id)
                .ok_or(CoreError::NotFound)?;
            *slot = dish.clone();
            Ok(dish)
        })
    }

    async fn delete_dish(&self, category: Category, dish_id: Uuid) -> Result<(), CoreError> {
        self.write(|dishes| {
            let before = dishes.len();
            dishes.retain(|dish| !(dish.category == category && dish.id == dish_id));
            if dishes.len() == before {
                return Err(CoreError::NotFound);
            }
            Ok(())
        })
    }
}

#[derive(Clone, Default)]
pub struct FakeHealthCheckRepository;

impl HealthCheckRepository for FakeHealthCheckRepository {
    async fn health(&self) -> Result<u64, CoreError> {
        Ok(0)
    }
}

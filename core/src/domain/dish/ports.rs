use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    common::entities::app_errors::CoreError,
    dish::{
        entities::{Category, Dish},
        value_objects::{CreateDishInput, DeleteDishInput, GetDishInput, UpdateDishInput},
    },
};

/// Record store holding dishes keyed by category and id.
#[cfg_attr(test, mockall::automock)]
pub trait DishRepository: Send + Sync {
    /// Every well-formed dish, grouped by category. Records that cannot be
    /// turned into a [`Dish`] are skipped rather than failing the fetch.
    fn fetch_all_dishes(&self) -> impl Future<Output = Result<Vec<Dish>, CoreError>> + Send;

    fn get_dish(
        &self,
        category: Category,
        dish_id: Uuid,
    ) -> impl Future<Output = Result<Option<Dish>, CoreError>> + Send;

    fn create_dish(&self, dish: Dish) -> impl Future<Output = Result<Dish, CoreError>> + Send;

    fn update_dish(&self, dish: Dish) -> impl Future<Output = Result<Dish, CoreError>> + Send;

    fn delete_dish(
        &self,
        category: Category,
        dish_id: Uuid,
    ) -> impl Future<Output = Result<(), CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait DishService: Send + Sync {
    fn list_dishes(&self) -> impl Future<Output = Result<Vec<Dish>, CoreError>> + Send;

    fn get_dish(
        &self,
        input: GetDishInput,
    ) -> impl Future<Output = Result<Option<Dish>, CoreError>> + Send;

    fn find_dish_by_name(
        &self,
        name: String,
    ) -> impl Future<Output = Result<Option<Dish>, CoreError>> + Send;

    fn create_dish(
        &self,
        input: CreateDishInput,
    ) -> impl Future<Output = Result<Uuid, CoreError>> + Send;

    fn update_dish(
        &self,
        input: UpdateDishInput,
    ) -> impl Future<Output = Result<Dish, CoreError>> + Send;

    fn delete_dish(&self, input: DeleteDishInput)
    -> impl Future<Output = Result<(), CoreError>> + Send;
}

use tracing::{info, instrument};

use crate::domain::{
    common::{entities::app_errors::CoreError, services::Service},
    dish::ports::DishRepository,
    health::ports::HealthCheckRepository,
    scan::{
        entities::ConstraintSet,
        ports::ScanService,
        value_objects::{ScanOptions, ScanReport},
    },
};

impl<D, HC> ScanService for Service<D, HC>
where
    D: DishRepository,
    HC: HealthCheckRepository,
{
    #[instrument(
        skip(self, constraints),
        fields(
            avoid = constraints.avoid_allergens().len(),
            diets = constraints.required_diets().len(),
            ingredients = constraints.required_ingredients().len(),
        )
    )]
    async fn scan(&self, constraints: ConstraintSet) -> ScanReport {
        let snapshot = self.dish_repository.fetch_all_dishes().await;
        let report = ScanReport::build(snapshot, &constraints);

        info!(
            status = ?report.status,
            total = report.total_dishes,
            excluded = report.unsafe_count,
            "scan completed"
        );

        report
    }

    async fn scan_options(&self) -> Result<ScanOptions, CoreError> {
        let dishes = self.dish_repository.fetch_all_dishes().await?;

        Ok(ScanOptions::from_dishes(&dishes))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{
            dish::{
                entities::{Category, DietTag},
                ports::DishService,
                value_objects::{DeleteDishInput, DishFields, UpdateDishInput},
            },
            scan::value_objects::ScanStatus,
        },
        test_utils::{FakeDishRepository, FakeHealthCheckRepository, dish},
    };

    #[tokio::test]
    async fn test_scan_with_unavailable_repository() {
        let service = Service::new(
            FakeDishRepository::default().failing_reads(),
            FakeHealthCheckRepository::default(),
        );

        let report = service
            .scan(ConstraintSet::new(["peanut"], [], Vec::<String>::new()))
            .await;

        assert_eq!(report.status, ScanStatus::DataUnavailable);
        assert!(report.groups.is_empty());

        let options = service.scan_options().await;
        assert_eq!(options, Err(CoreError::RepositoryUnavailable));
    }

    #[tokio::test]
    async fn test_scan_sees_mutations_made_before_it() {
        let satay = dish(
            Category::Share,
            "Satay",
            &["rice", "peanuts"],
            &["peanuts"],
            &[],
            &[DietTag::Vegan],
        );
        let satay_id = satay.id;
        let service = Service::new(
            FakeDishRepository::with_dishes(vec![satay]),
            FakeHealthCheckRepository::default(),
        );
        let constraints = ConstraintSet::new(["peanut"], [], Vec::<String>::new());

        let before = service.scan(constraints.clone()).await;
        assert_eq!(before.status, ScanStatus::NoMatches);

        service
            .update_dish(UpdateDishInput {
                category: Category::Share,
                dish_id: satay_id,
                fields: DishFields {
                    name: "Satay".to_string(),
                    ingredients: vec!["rice".to_string(), "peanuts".to_string()],
                    allergens: vec!["peanuts".to_string()],
                    removable_allergens: vec!["peanuts".to_string()],
                    diet: vec![DietTag::Vegan],
                },
            })
            .await
            .unwrap();

        let after = service.scan(constraints.clone()).await;
        assert_eq!(after.status, ScanStatus::Matches);
        assert_eq!(
            after.groups[0].dishes[0].modifications,
            vec!["peanut-free".to_string()]
        );

        service
            .delete_dish(DeleteDishInput {
                category: Category::Share,
                dish_id: satay_id,
            })
            .await
            .unwrap();

        let emptied = service.scan(constraints).await;
        assert_eq!(emptied.status, ScanStatus::NoMatches);
        assert_eq!(emptied.total_dishes, 0);
    }

    #[tokio::test]
    async fn test_scan_options() {
        let service = Service::new(
            FakeDishRepository::with_dishes(vec![
                dish(Category::Snack, "Nuts", &["almonds"], &["Tree nuts"], &[], &[]),
                dish(Category::Snack, "Crisps", &["potato"], &[], &[], &[]),
            ]),
            FakeHealthCheckRepository::default(),
        );

        let options = service.scan_options().await.unwrap();
        assert_eq!(options.allergens, vec!["Tree nuts"]);
        assert_eq!(options.ingredients, vec!["almonds", "potato"]);
    }
}

pub mod dto;

use crate::{
    modules::common::crud::{crud_router, CrudResource},
    server::controller::AppState,
};
use axum::Router;

pub struct CarResource;

impl CrudResource for CarResource {
    type Entity = entity::car::Entity;
    type Model = entity::car::Model;
    type ActiveModel = entity::car::ActiveModel;
    type Column = entity::car::Column;
    type CreateDto = dto::CreateCarDto;
    type UpdateDto = dto::UpdateCarDto;
    type ListFilter = dto::ListCarsFilter;

    const NAME: &'static str = "car";
    const ID_COLUMN: Self::Column = entity::car::Column::Id;
}

pub fn create_router() -> Router<AppState> {
    crud_router::<CarResource>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        modules::{common::dto::Pagination, parking_address, status},
        test_utils::test_db,
    };

    async fn create_car(db: &sea_orm::DatabaseConnection, plate: &str) -> entity::car::Model {
        CarResource::create(
            db,
            dto::CreateCarDto {
                brand: String::from("Lada"),
                model: String::from("Vesta"),
                plate_number: String::from(plate),
                parking_address_id: None,
                status_id: None,
            },
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn create_then_fetch_returns_the_submitted_fields() {
        let db = test_db().await;

        let created = create_car(&db, "A123BC").await;

        let fetched = CarResource::find_by_id(&db, created.id)
            .await
            .unwrap()
            .expect("created car should be fetchable");

        assert_eq!(fetched.brand, "Lada");
        assert_eq!(fetched.model, "Vesta");
        assert_eq!(fetched.plate_number, "A123BC");
        assert_eq!(fetched.parking_address_id, None);
    }

    #[tokio::test]
    async fn partial_update_keeps_absent_fields() {
        let db = test_db().await;

        let status = status::StatusResource::create(
            &db,
            status::dto::CreateStatusDto {
                name: String::from("Available"),
            },
        )
        .await
        .unwrap();

        let created = create_car(&db, "B456DE").await;

        let updated = CarResource::update(
            &db,
            created.id,
            dto::UpdateCarDto {
                brand: None,
                model: None,
                plate_number: Some(String::from("B456XX")),
                parking_address_id: None,
                status_id: Some(Some(status.id)),
            },
        )
        .await
        .unwrap()
        .expect("car should exist");

        assert_eq!(updated.plate_number, "B456XX");
        assert_eq!(updated.status_id, Some(status.id));
        assert_eq!(updated.brand, "Lada");
        assert_eq!(updated.model, "Vesta");
    }

    #[tokio::test]
    async fn update_of_a_missing_car_returns_none() {
        let db = test_db().await;

        let result = CarResource::update(
            &db,
            999,
            dto::UpdateCarDto {
                brand: Some(String::from("Kia")),
                model: None,
                plate_number: None,
                parking_address_id: None,
                status_id: None,
            },
        )
        .await
        .unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn delete_then_fetch_returns_none() {
        let db = test_db().await;

        let created = create_car(&db, "C789FG").await;

        assert!(CarResource::delete(&db, created.id).await.unwrap());
        assert!(CarResource::find_by_id(&db, created.id)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn list_filters_by_plate_substring() {
        let db = test_db().await;

        create_car(&db, "X123YZ").await;
        create_car(&db, "K555KK").await;

        let page = CarResource::list(
            &db,
            dto::ListCarsFilter {
                plate_number: Some(String::from("123")),
                parking_address_id: None,
                status_id: None,
            },
            Pagination::default(),
        )
        .await
        .unwrap();

        assert_eq!(page.item_count, 1);
        assert_eq!(page.records[0].plate_number, "X123YZ");
    }

    #[tokio::test]
    async fn deleting_a_parking_address_with_cars_fails() {
        let db = test_db().await;

        let address = parking_address::ParkingAddressResource::create(
            &db,
            parking_address::dto::CreateParkingAddressDto {
                street: String::from("Main"),
                house_number: String::from("12"),
            },
        )
        .await
        .unwrap();

        CarResource::create(
            &db,
            dto::CreateCarDto {
                brand: String::from("Kia"),
                model: String::from("Rio"),
                plate_number: String::from("D111EF"),
                parking_address_id: Some(address.id),
                status_id: None,
            },
        )
        .await
        .unwrap();

        let result = parking_address::ParkingAddressResource::delete(&db, address.id).await;
        assert!(result.is_err());
    }
}

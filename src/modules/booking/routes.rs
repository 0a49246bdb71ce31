use super::BookingResource;
use crate::{
    database::error::DbError,
    modules::common::{
        crud::crud_router,
        extractors::DbConnection,
        responses::SimpleError,
    },
    server::controller::AppState,
};
use axum::{extract::Path, routing::post, Json, Router};
use entity::booking::BookingStatus;
use http::StatusCode;
use sea_orm::{ActiveModelTrait, EntityTrait, IntoActiveModel, Set};

pub fn create_router() -> Router<AppState> {
    crud_router::<BookingResource>().route("/:id/complete", post(complete_booking))
}

/// Marks a booking as completed
///
/// `Completed` is terminal, completing an already completed booking
/// is a no-op that returns the booking unchanged
#[utoipa::path(
    post,
    path = "/booking/{id}/complete",
    tag = "booking",
    params(
        ("id" = i32, Path, description = "id of the booking to complete"),
    ),
    responses(
        (
            status = OK,
            description = "the completed booking",
            body = entity::booking::Model,
        ),
        (
            status = NOT_FOUND,
            description = "booking does not exist",
            body = SimpleError,
        ),
    ),
)]
pub async fn complete_booking(
    Path(booking_id): Path<i32>,
    DbConnection(db): DbConnection,
) -> Result<Json<entity::booking::Model>, (StatusCode, SimpleError)> {
    let booking = entity::booking::Entity::find_by_id(booking_id)
        .one(&db)
        .await
        .map_err(DbError::from)?
        .ok_or((
            StatusCode::NOT_FOUND,
            SimpleError::from("booking not found"),
        ))?;

    if booking.status == BookingStatus::Completed {
        return Ok(Json(booking));
    }

    let mut booking = booking.into_active_model();
    booking.status = Set(BookingStatus::Completed);

    let completed = booking.update(&db).await.map_err(DbError::from)?;

    Ok(Json(completed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        modules::{
            booking::dto::CreateBookingDto,
            car::{self, CarResource},
            common::crud::CrudResource,
            user::{self, UserResource},
        },
        test_utils::test_db,
    };
    use chrono::NaiveDate;
    use sea_orm::DatabaseConnection;

    async fn alice_books_x123(db: &DatabaseConnection) -> entity::booking::Model {
        let alice = UserResource::create(
            db,
            user::dto::CreateUserDto {
                name: String::from("Alice"),
                surname: String::from("Smith"),
                role_id: None,
                driver_license_id: None,
            },
        )
        .await
        .unwrap();

        let car = CarResource::create(
            db,
            car::dto::CreateCarDto {
                brand: String::from("Lada"),
                model: String::from("Vesta"),
                plate_number: String::from("X123"),
                parking_address_id: None,
                status_id: None,
            },
        )
        .await
        .unwrap();

        BookingResource::create(
            db,
            CreateBookingDto {
                start_date: NaiveDate::from_ymd_opt(2025, 4, 1).unwrap(),
                end_date: NaiveDate::from_ymd_opt(2025, 4, 7).unwrap(),
                user_id: Some(alice.id),
                car_id: Some(car.id),
            },
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn bookings_are_created_active() {
        let db = test_db().await;

        let booking = alice_books_x123(&db).await;
        assert_eq!(booking.status, BookingStatus::Active);
    }

    #[tokio::test]
    async fn completing_a_booking_sets_the_terminal_status() {
        let db = test_db().await;

        let booking = alice_books_x123(&db).await;

        let Json(completed) = complete_booking(Path(booking.id), DbConnection(db.clone()))
            .await
            .unwrap();
        assert_eq!(completed.status, BookingStatus::Completed);

        let fetched = BookingResource::find_by_id(&db, booking.id)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(fetched.status, BookingStatus::Completed);
    }

    #[tokio::test]
    async fn completing_twice_is_a_no_op() {
        let db = test_db().await;

        let booking = alice_books_x123(&db).await;

        let Json(first) = complete_booking(Path(booking.id), DbConnection(db.clone()))
            .await
            .unwrap();
        let Json(second) = complete_booking(Path(booking.id), DbConnection(db.clone()))
            .await
            .unwrap();

        assert_eq!(first.status, BookingStatus::Completed);
        assert_eq!(second.status, BookingStatus::Completed);
        assert_eq!(first.id, second.id);
    }

    #[tokio::test]
    async fn completing_a_missing_booking_is_a_404() {
        let db = test_db().await;

        let err = complete_booking(Path(999), DbConnection(db))
            .await
            .err()
            .expect("completing a missing booking should fail");
        assert_eq!(err.0, StatusCode::NOT_FOUND);
    }
}

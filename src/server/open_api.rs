use crate::modules::{auth, booking, car, car_inspection, common, driver_license, notification,
    parking_address, rental_service, report, role, status, user};
use crate::server::controller;
use axum::Router;
use utoipa::openapi::security::{ApiKey, ApiKeyValue, SecurityScheme};
use utoipa::openapi::{InfoBuilder, OpenApiBuilder};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

#[derive(OpenApi)]
#[openapi(
    components(schemas(
        entity::role::Model,
        entity::driver_license::Model,
        entity::user::Model,
        entity::parking_address::Model,
        entity::status::Model,
        entity::car::Model,
        entity::rental_service::Model,
        entity::booking::Model,
        entity::booking::BookingStatus,
        entity::car_inspection::Model,
        entity::notification::Model,

        common::dto::PaginatedRole,
        common::dto::PaginatedDriverLicense,
        common::dto::PaginatedUser,
        common::dto::PaginatedParkingAddress,
        common::dto::PaginatedStatus,
        common::dto::PaginatedCar,
        common::dto::PaginatedRentalService,
        common::dto::PaginatedBooking,
        common::dto::PaginatedCarInspection,
        common::dto::PaginatedNotification,

        common::dto::MessageDto,
        common::responses::SimpleError,

        auth::dto::RegisterAccountDto,
        auth::dto::SignInDto,

        role::dto::CreateRoleDto,
        role::dto::UpdateRoleDto,

        driver_license::dto::CreateDriverLicenseDto,
        driver_license::dto::UpdateDriverLicenseDto,

        user::dto::CreateUserDto,
        user::dto::UpdateUserDto,

        parking_address::dto::CreateParkingAddressDto,
        parking_address::dto::UpdateParkingAddressDto,

        status::dto::CreateStatusDto,
        status::dto::UpdateStatusDto,

        car::dto::CreateCarDto,
        car::dto::UpdateCarDto,

        rental_service::dto::CreateRentalServiceDto,
        rental_service::dto::UpdateRentalServiceDto,

        booking::dto::CreateBookingDto,
        booking::dto::UpdateBookingDto,

        car_inspection::dto::CreateCarInspectionDto,
        car_inspection::dto::UpdateCarInspectionDto,

        notification::dto::CreateNotificationDto,
        notification::dto::UpdateNotificationDto,
    )),
    paths(
        controller::healthcheck,

        auth::routes::register,
        auth::routes::sign_in,

        booking::routes::complete_booking,

        report::routes::car_park_report,
    ),
    modifiers(&SessionIdCookieSecurityScheme),
)]
struct ApiDoc;

/// session id on request cookie for account session authentication,
/// unfortunately this does not work on swagger UI for now, see:
///
/// https://github.com/swagger-api/swagger-js/issues/1163
struct SessionIdCookieSecurityScheme;

impl Modify for SessionIdCookieSecurityScheme {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "session_id",
                SecurityScheme::ApiKey(ApiKey::Cookie(ApiKeyValue::with_description(
                    "sid",
                    "session identifier",
                ))),
            )
        }
    }
}

pub fn create_openapi_router() -> Router<controller::AppState> {
    let builder: OpenApiBuilder = ApiDoc::openapi().into();

    let info = InfoBuilder::new()
        .title("Carpark API")
        .description(Some("Car rental fleet and booking back office API."))
        .version("0.1.0")
        .build();

    let api_doc = builder.info(info).build();

    Router::new().merge(SwaggerUi::new("/swagger").url("/docs/openapi.json", api_doc))
}

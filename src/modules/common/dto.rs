use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

fn default_page() -> u64 {
    1
}

fn default_page_size() -> u64 {
    10
}

#[derive(Clone, Copy, Deserialize, IntoParams, Validate)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct Pagination {
    #[serde(default = "default_page")]
    #[validate(range(min = 1, max = 99999))]
    pub page: u64,

    #[serde(default = "default_page_size")]
    #[validate(range(min = 1, max = 100))]
    pub page_size: u64,
}

impl Default for Pagination {
    fn default() -> Self {
        Self {
            page: default_page(),
            page_size: default_page_size(),
        }
    }
}

/// Pagination metadata of a executed query.
///
/// this struct also requires `T` on the records field to implement
/// `utoipa::ToSchema` since this struct is intended to be used as
/// a API response with openApi docs generation
#[derive(Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
#[aliases(
    PaginatedRole = PaginationResult<entity::role::Model>,
    PaginatedDriverLicense = PaginationResult<entity::driver_license::Model>,
    PaginatedUser = PaginationResult<entity::user::Model>,
    PaginatedParkingAddress = PaginationResult<entity::parking_address::Model>,
    PaginatedStatus = PaginationResult<entity::status::Model>,
    PaginatedCar = PaginationResult<entity::car::Model>,
    PaginatedRentalService = PaginationResult<entity::rental_service::Model>,
    PaginatedBooking = PaginationResult<entity::booking::Model>,
    PaginatedCarInspection = PaginationResult<entity::car_inspection::Model>,
    PaginatedNotification = PaginationResult<entity::notification::Model>
)]
pub struct PaginationResult<T: for<'_s> ToSchema<'_s>> {
    /// 1 Indexed Page number
    ///
    /// used to determine the offset used in the query
    pub page: u64,

    /// Total pages available for the given query
    pub page_count: u64,

    /// Total items available for the given query
    pub item_count: u64,

    /// Amount of records per page
    pub page_size: u64,

    /// Records from the query
    pub records: Vec<T>,
}

/// Response body for endpoints that only need to confirm an action
/// with a human readable message
#[derive(Serialize, ToSchema)]
pub struct MessageDto {
    pub message: String,
}

impl From<&str> for MessageDto {
    fn from(v: &str) -> Self {
        MessageDto {
            message: String::from(v),
        }
    }
}

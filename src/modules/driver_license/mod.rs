pub mod dto;

use crate::{
    modules::common::crud::{crud_router, CrudResource},
    server::controller::AppState,
};
use axum::Router;

pub struct DriverLicenseResource;

impl CrudResource for DriverLicenseResource {
    type Entity = entity::driver_license::Entity;
    type Model = entity::driver_license::Model;
    type ActiveModel = entity::driver_license::ActiveModel;
    type Column = entity::driver_license::Column;
    type CreateDto = dto::CreateDriverLicenseDto;
    type UpdateDto = dto::UpdateDriverLicenseDto;
    type ListFilter = dto::ListDriverLicensesFilter;

    const NAME: &'static str = "driver license";
    const ID_COLUMN: Self::Column = entity::driver_license::Column::Id;
}

pub fn create_router() -> Router<AppState> {
    crud_router::<DriverLicenseResource>()
}

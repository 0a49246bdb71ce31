pub mod dto;

use crate::{
    modules::common::crud::{crud_router, CrudResource},
    server::controller::AppState,
};
use axum::Router;

pub struct CarInspectionResource;

impl CrudResource for CarInspectionResource {
    type Entity = entity::car_inspection::Entity;
    type Model = entity::car_inspection::Model;
    type ActiveModel = entity::car_inspection::ActiveModel;
    type Column = entity::car_inspection::Column;
    type CreateDto = dto::CreateCarInspectionDto;
    type UpdateDto = dto::UpdateCarInspectionDto;
    type ListFilter = dto::ListCarInspectionsFilter;

    const NAME: &'static str = "car inspection";
    const ID_COLUMN: Self::Column = entity::car_inspection::Column::Id;
}

pub fn create_router() -> Router<AppState> {
    crud_router::<CarInspectionResource>()
}

pub mod dto;

use crate::{
    modules::common::crud::{crud_router, CrudResource},
    server::controller::AppState,
};
use axum::Router;

pub struct RentalServiceResource;

impl CrudResource for RentalServiceResource {
    type Entity = entity::rental_service::Entity;
    type Model = entity::rental_service::Model;
    type ActiveModel = entity::rental_service::ActiveModel;
    type Column = entity::rental_service::Column;
    type CreateDto = dto::CreateRentalServiceDto;
    type UpdateDto = dto::UpdateRentalServiceDto;
    type ListFilter = dto::ListRentalServicesFilter;

    const NAME: &'static str = "rental service";
    const ID_COLUMN: Self::Column = entity::rental_service::Column::Id;
}

pub fn create_router() -> Router<AppState> {
    crud_router::<RentalServiceResource>()
}

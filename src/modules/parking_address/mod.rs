pub mod dto;

use crate::{
    modules::common::crud::{crud_router, CrudResource},
    server::controller::AppState,
};
use axum::Router;

pub struct ParkingAddressResource;

impl CrudResource for ParkingAddressResource {
    type Entity = entity::parking_address::Entity;
    type Model = entity::parking_address::Model;
    type ActiveModel = entity::parking_address::ActiveModel;
    type Column = entity::parking_address::Column;
    type CreateDto = dto::CreateParkingAddressDto;
    type UpdateDto = dto::UpdateParkingAddressDto;
    type ListFilter = dto::ListParkingAddressesFilter;

    const NAME: &'static str = "parking address";
    const ID_COLUMN: Self::Column = entity::parking_address::Column::Id;
}

pub fn create_router() -> Router<AppState> {
    crud_router::<ParkingAddressResource>()
}

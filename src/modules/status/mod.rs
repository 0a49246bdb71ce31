pub mod dto;

use crate::{
    modules::common::crud::{crud_router, CrudResource},
    server::controller::AppState,
};
use axum::Router;

pub struct StatusResource;

impl CrudResource for StatusResource {
    type Entity = entity::status::Entity;
    type Model = entity::status::Model;
    type ActiveModel = entity::status::ActiveModel;
    type Column = entity::status::Column;
    type CreateDto = dto::CreateStatusDto;
    type UpdateDto = dto::UpdateStatusDto;
    type ListFilter = dto::ListStatusesFilter;

    const NAME: &'static str = "status";
    const ID_COLUMN: Self::Column = entity::status::Column::Id;
}

pub fn create_router() -> Router<AppState> {
    crud_router::<StatusResource>()
}

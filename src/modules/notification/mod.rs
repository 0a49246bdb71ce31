pub mod dto;

use crate::{
    modules::common::crud::{crud_router, CrudResource},
    server::controller::AppState,
};
use axum::Router;

pub struct NotificationResource;

impl CrudResource for NotificationResource {
    type Entity = entity::notification::Entity;
    type Model = entity::notification::Model;
    type ActiveModel = entity::notification::ActiveModel;
    type Column = entity::notification::Column;
    type CreateDto = dto::CreateNotificationDto;
    type UpdateDto = dto::UpdateNotificationDto;
    type ListFilter = dto::ListNotificationsFilter;

    const NAME: &'static str = "notification";
    const ID_COLUMN: Self::Column = entity::notification::Column::Id;
}

pub fn create_router() -> Router<AppState> {
    crud_router::<NotificationResource>()
}

pub mod dto;
pub mod routes;

use crate::modules::common::crud::CrudResource;

pub struct BookingResource;

impl CrudResource for BookingResource {
    type Entity = entity::booking::Entity;
    type Model = entity::booking::Model;
    type ActiveModel = entity::booking::ActiveModel;
    type Column = entity::booking::Column;
    type CreateDto = dto::CreateBookingDto;
    type UpdateDto = dto::UpdateBookingDto;
    type ListFilter = dto::ListBookingsFilter;

    const NAME: &'static str = "booking";
    const ID_COLUMN: Self::Column = entity::booking::Column::Id;
}

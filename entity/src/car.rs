use sea_orm::entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, ToSchema)]
#[schema(title = "Car")]
#[sea_orm(table_name = "car")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub created_at: DateTimeWithTimeZone,
    pub brand: String,
    pub model: String,
    pub plate_number: String,
    pub parking_address_id: Option<i32>,
    pub status_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::parking_address::Entity",
        from = "Column::ParkingAddressId",
        to = "super::parking_address::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    ParkingAddress,
    #[sea_orm(
        belongs_to = "super::status::Entity",
        from = "Column::StatusId",
        to = "super::status::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Status,
    #[sea_orm(has_many = "super::booking::Entity")]
    Booking,
    #[sea_orm(has_many = "super::car_inspection::Entity")]
    CarInspection,
}

impl Related<super::parking_address::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ParkingAddress.def()
    }
}

impl Related<super::status::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Status.def()
    }
}

impl Related<super::booking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Booking.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

use sea_orm::entity::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, ToSchema)]
#[schema(title = "User")]
#[sea_orm(table_name = "user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub created_at: DateTimeWithTimeZone,
    pub name: String,
    pub surname: String,
    pub role_id: Option<i32>,
    pub driver_license_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::role::Entity",
        from = "Column::RoleId",
        to = "super::role::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    Role,
    #[sea_orm(
        belongs_to = "super::driver_license::Entity",
        from = "Column::DriverLicenseId",
        to = "super::driver_license::Column::Id",
        on_update = "Cascade",
        on_delete = "Restrict"
    )]
    DriverLicense,
    #[sea_orm(has_many = "super::booking::Entity")]
    Booking,
    #[sea_orm(has_many = "super::car_inspection::Entity")]
    CarInspection,
    #[sea_orm(has_many = "super::notification::Entity")]
    Notification,
}

impl Related<super::role::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Role.def()
    }
}

impl Related<super::driver_license::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::DriverLicense.def()
    }
}

impl Related<super::booking::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Booking.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

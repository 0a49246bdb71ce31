use crate::{
    database::helpers::{set_double_option, set_if_some},
    modules::common::crud::{IntoCondition, MergeIntoActiveModel},
};
use chrono::Utc;
use sea_orm::{ColumnTrait, Condition, Set};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserDto {
    #[validate(length(min = 1, max = 255))]
    pub name: String,

    #[validate(length(min = 1, max = 255))]
    pub surname: String,

    pub role_id: Option<i32>,

    pub driver_license_id: Option<i32>,
}

impl From<CreateUserDto> for entity::user::ActiveModel {
    fn from(dto: CreateUserDto) -> Self {
        Self {
            created_at: Set(Utc::now().into()),
            name: Set(dto.name),
            surname: Set(dto.surname),
            role_id: Set(dto.role_id),
            driver_license_id: Set(dto.driver_license_id),
            ..Default::default()
        }
    }
}

#[derive(Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserDto {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,

    #[validate(length(min = 1, max = 255))]
    pub surname: Option<String>,

    /// `null` clears the role, a absent field keeps it
    #[serde(default, with = "serde_with::rust::double_option")]
    #[schema(value_type = Option<i32>)]
    pub role_id: Option<Option<i32>>,

    /// `null` clears the driver license, a absent field keeps it
    #[serde(default, with = "serde_with::rust::double_option")]
    #[schema(value_type = Option<i32>)]
    pub driver_license_id: Option<Option<i32>>,
}

impl MergeIntoActiveModel<entity::user::ActiveModel> for UpdateUserDto {
    fn merge_into_active_model(
        self,
        mut model: entity::user::ActiveModel,
    ) -> entity::user::ActiveModel {
        set_if_some(&mut model.name, self.name);
        set_if_some(&mut model.surname, self.surname);
        set_double_option(&mut model.role_id, self.role_id);
        set_double_option(&mut model.driver_license_id, self.driver_license_id);
        model
    }
}

#[derive(Deserialize, Validate, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListUsersFilter {
    pub name: Option<String>,
    pub surname: Option<String>,
    pub role_id: Option<i32>,
}

impl IntoCondition for ListUsersFilter {
    fn into_condition(self) -> Condition {
        let mut condition = Condition::all();

        if let Some(name) = self.name {
            condition = condition.add(entity::user::Column::Name.contains(&name));
        }

        if let Some(surname) = self.surname {
            condition = condition.add(entity::user::Column::Surname.contains(&surname));
        }

        if let Some(role_id) = self.role_id {
            condition = condition.add(entity::user::Column::RoleId.eq(role_id));
        }

        condition
    }
}

use crate::{
    database::helpers::set_if_some,
    modules::common::crud::{IntoCondition, MergeIntoActiveModel},
};
use chrono::Utc;
use sea_orm::{ColumnTrait, Condition, Set};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoleDto {
    #[validate(length(min = 1, max = 255))]
    pub name: String,
}

impl From<CreateRoleDto> for entity::role::ActiveModel {
    fn from(dto: CreateRoleDto) -> Self {
        Self {
            created_at: Set(Utc::now().into()),
            name: Set(dto.name),
            ..Default::default()
        }
    }
}

#[derive(Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoleDto {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
}

impl MergeIntoActiveModel<entity::role::ActiveModel> for UpdateRoleDto {
    fn merge_into_active_model(
        self,
        mut model: entity::role::ActiveModel,
    ) -> entity::role::ActiveModel {
        set_if_some(&mut model.name, self.name);
        model
    }
}

#[derive(Deserialize, Validate, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListRolesFilter {
    /// filters roles whose name contains the value
    pub name: Option<String>,
}

impl IntoCondition for ListRolesFilter {
    fn into_condition(self) -> Condition {
        let mut condition = Condition::all();

        if let Some(name) = self.name {
            condition = condition.add(entity::role::Column::Name.contains(&name));
        }

        condition
    }
}

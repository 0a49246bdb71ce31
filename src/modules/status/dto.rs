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
pub struct CreateStatusDto {
    /// display name of the car status, eg: "Available", "In service"
    #[validate(length(min = 1, max = 255))]
    pub name: String,
}

impl From<CreateStatusDto> for entity::status::ActiveModel {
    fn from(dto: CreateStatusDto) -> Self {
        Self {
            created_at: Set(Utc::now().into()),
            name: Set(dto.name),
            ..Default::default()
        }
    }
}

#[derive(Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatusDto {
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
}

impl MergeIntoActiveModel<entity::status::ActiveModel> for UpdateStatusDto {
    fn merge_into_active_model(
        self,
        mut model: entity::status::ActiveModel,
    ) -> entity::status::ActiveModel {
        set_if_some(&mut model.name, self.name);
        model
    }
}

#[derive(Deserialize, Validate, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListStatusesFilter {
    pub name: Option<String>,
}

impl IntoCondition for ListStatusesFilter {
    fn into_condition(self) -> Condition {
        let mut condition = Condition::all();

        if let Some(name) = self.name {
            condition = condition.add(entity::status::Column::Name.contains(&name));
        }

        condition
    }
}

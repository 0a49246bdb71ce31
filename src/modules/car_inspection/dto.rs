use crate::{
    database::helpers::set_double_option,
    modules::common::crud::{IntoCondition, MergeIntoActiveModel},
};
use chrono::Utc;
use sea_orm::{ColumnTrait, Condition, Set};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateCarInspectionDto {
    /// the user performing the inspection
    pub user_id: Option<i32>,

    /// the inspected car
    pub car_id: Option<i32>,
}

impl From<CreateCarInspectionDto> for entity::car_inspection::ActiveModel {
    fn from(dto: CreateCarInspectionDto) -> Self {
        Self {
            created_at: Set(Utc::now().into()),
            user_id: Set(dto.user_id),
            car_id: Set(dto.car_id),
            ..Default::default()
        }
    }
}

#[derive(Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCarInspectionDto {
    #[serde(default, with = "serde_with::rust::double_option")]
    #[schema(value_type = Option<i32>)]
    pub user_id: Option<Option<i32>>,

    #[serde(default, with = "serde_with::rust::double_option")]
    #[schema(value_type = Option<i32>)]
    pub car_id: Option<Option<i32>>,
}

impl MergeIntoActiveModel<entity::car_inspection::ActiveModel> for UpdateCarInspectionDto {
    fn merge_into_active_model(
        self,
        mut model: entity::car_inspection::ActiveModel,
    ) -> entity::car_inspection::ActiveModel {
        set_double_option(&mut model.user_id, self.user_id);
        set_double_option(&mut model.car_id, self.car_id);
        model
    }
}

#[derive(Deserialize, Validate, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListCarInspectionsFilter {
    pub user_id: Option<i32>,
    pub car_id: Option<i32>,
}

impl IntoCondition for ListCarInspectionsFilter {
    fn into_condition(self) -> Condition {
        let mut condition = Condition::all();

        if let Some(user_id) = self.user_id {
            condition = condition.add(entity::car_inspection::Column::UserId.eq(user_id));
        }

        if let Some(car_id) = self.car_id {
            condition = condition.add(entity::car_inspection::Column::CarId.eq(car_id));
        }

        condition
    }
}

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
pub struct CreateNotificationDto {
    #[validate(length(min = 1, max = 1024))]
    pub message: String,

    /// the user the notification is addressed to
    pub user_id: Option<i32>,
}

impl From<CreateNotificationDto> for entity::notification::ActiveModel {
    fn from(dto: CreateNotificationDto) -> Self {
        Self {
            created_at: Set(Utc::now().into()),
            message: Set(dto.message),
            user_id: Set(dto.user_id),
            ..Default::default()
        }
    }
}

#[derive(Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateNotificationDto {
    #[validate(length(min = 1, max = 1024))]
    pub message: Option<String>,

    #[serde(default, with = "serde_with::rust::double_option")]
    #[schema(value_type = Option<i32>)]
    pub user_id: Option<Option<i32>>,
}

impl MergeIntoActiveModel<entity::notification::ActiveModel> for UpdateNotificationDto {
    fn merge_into_active_model(
        self,
        mut model: entity::notification::ActiveModel,
    ) -> entity::notification::ActiveModel {
        set_if_some(&mut model.message, self.message);
        set_double_option(&mut model.user_id, self.user_id);
        model
    }
}

#[derive(Deserialize, Validate, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListNotificationsFilter {
    pub user_id: Option<i32>,
}

impl IntoCondition for ListNotificationsFilter {
    fn into_condition(self) -> Condition {
        let mut condition = Condition::all();

        if let Some(user_id) = self.user_id {
            condition = condition.add(entity::notification::Column::UserId.eq(user_id));
        }

        condition
    }
}

use crate::{
    database::helpers::{set_double_option, set_if_some},
    modules::common::crud::{IntoCondition, MergeIntoActiveModel},
};
use chrono::{NaiveDate, Utc};
use entity::booking::BookingStatus;
use sea_orm::{ColumnTrait, Condition, Set};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// bookings are always created as `Active`, completion only
/// happens through the complete endpoint
#[derive(Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingDto {
    pub start_date: NaiveDate,

    pub end_date: NaiveDate,

    pub user_id: Option<i32>,

    pub car_id: Option<i32>,
}

impl From<CreateBookingDto> for entity::booking::ActiveModel {
    fn from(dto: CreateBookingDto) -> Self {
        Self {
            created_at: Set(Utc::now().into()),
            start_date: Set(dto.start_date),
            end_date: Set(dto.end_date),
            status: Set(BookingStatus::Active),
            user_id: Set(dto.user_id),
            car_id: Set(dto.car_id),
            ..Default::default()
        }
    }
}

#[derive(Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookingDto {
    pub start_date: Option<NaiveDate>,

    pub end_date: Option<NaiveDate>,

    #[serde(default, with = "serde_with::rust::double_option")]
    #[schema(value_type = Option<i32>)]
    pub user_id: Option<Option<i32>>,

    #[serde(default, with = "serde_with::rust::double_option")]
    #[schema(value_type = Option<i32>)]
    pub car_id: Option<Option<i32>>,
}

impl MergeIntoActiveModel<entity::booking::ActiveModel> for UpdateBookingDto {
    fn merge_into_active_model(
        self,
        mut model: entity::booking::ActiveModel,
    ) -> entity::booking::ActiveModel {
        set_if_some(&mut model.start_date, self.start_date);
        set_if_some(&mut model.end_date, self.end_date);
        set_double_option(&mut model.user_id, self.user_id);
        set_double_option(&mut model.car_id, self.car_id);
        model
    }
}

#[derive(Deserialize, Validate, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListBookingsFilter {
    pub status: Option<BookingStatus>,
    pub user_id: Option<i32>,
    pub car_id: Option<i32>,
}

impl IntoCondition for ListBookingsFilter {
    fn into_condition(self) -> Condition {
        let mut condition = Condition::all();

        if let Some(status) = self.status {
            condition = condition.add(entity::booking::Column::Status.eq(status));
        }

        if let Some(user_id) = self.user_id {
            condition = condition.add(entity::booking::Column::UserId.eq(user_id));
        }

        if let Some(car_id) = self.car_id {
            condition = condition.add(entity::booking::Column::CarId.eq(car_id));
        }

        condition
    }
}

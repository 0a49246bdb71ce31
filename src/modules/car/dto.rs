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
pub struct CreateCarDto {
    #[validate(length(min = 1, max = 255))]
    pub brand: String,

    #[validate(length(min = 1, max = 255))]
    pub model: String,

    #[validate(length(min = 1, max = 32))]
    pub plate_number: String,

    pub parking_address_id: Option<i32>,

    pub status_id: Option<i32>,
}

impl From<CreateCarDto> for entity::car::ActiveModel {
    fn from(dto: CreateCarDto) -> Self {
        Self {
            created_at: Set(Utc::now().into()),
            brand: Set(dto.brand),
            model: Set(dto.model),
            plate_number: Set(dto.plate_number),
            parking_address_id: Set(dto.parking_address_id),
            status_id: Set(dto.status_id),
            ..Default::default()
        }
    }
}

#[derive(Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCarDto {
    #[validate(length(min = 1, max = 255))]
    pub brand: Option<String>,

    #[validate(length(min = 1, max = 255))]
    pub model: Option<String>,

    #[validate(length(min = 1, max = 32))]
    pub plate_number: Option<String>,

    /// `null` removes the car from its parking address, a absent field keeps it
    #[serde(default, with = "serde_with::rust::double_option")]
    #[schema(value_type = Option<i32>)]
    pub parking_address_id: Option<Option<i32>>,

    /// `null` clears the status, a absent field keeps it
    #[serde(default, with = "serde_with::rust::double_option")]
    #[schema(value_type = Option<i32>)]
    pub status_id: Option<Option<i32>>,
}

impl MergeIntoActiveModel<entity::car::ActiveModel> for UpdateCarDto {
    fn merge_into_active_model(
        self,
        mut model: entity::car::ActiveModel,
    ) -> entity::car::ActiveModel {
        set_if_some(&mut model.brand, self.brand);
        set_if_some(&mut model.model, self.model);
        set_if_some(&mut model.plate_number, self.plate_number);
        set_double_option(&mut model.parking_address_id, self.parking_address_id);
        set_double_option(&mut model.status_id, self.status_id);
        model
    }
}

#[derive(Deserialize, Validate, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListCarsFilter {
    /// filters cars whose plate contains the value
    pub plate_number: Option<String>,
    pub parking_address_id: Option<i32>,
    pub status_id: Option<i32>,
}

impl IntoCondition for ListCarsFilter {
    fn into_condition(self) -> Condition {
        let mut condition = Condition::all();

        if let Some(plate_number) = self.plate_number {
            condition = condition.add(entity::car::Column::PlateNumber.contains(&plate_number));
        }

        if let Some(parking_address_id) = self.parking_address_id {
            condition = condition.add(entity::car::Column::ParkingAddressId.eq(parking_address_id));
        }

        if let Some(status_id) = self.status_id {
            condition = condition.add(entity::car::Column::StatusId.eq(status_id));
        }

        condition
    }
}

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
pub struct CreateParkingAddressDto {
    #[validate(length(min = 1, max = 255))]
    pub street: String,

    #[validate(length(min = 1, max = 32))]
    pub house_number: String,
}

impl From<CreateParkingAddressDto> for entity::parking_address::ActiveModel {
    fn from(dto: CreateParkingAddressDto) -> Self {
        Self {
            created_at: Set(Utc::now().into()),
            street: Set(dto.street),
            house_number: Set(dto.house_number),
            ..Default::default()
        }
    }
}

#[derive(Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateParkingAddressDto {
    #[validate(length(min = 1, max = 255))]
    pub street: Option<String>,

    #[validate(length(min = 1, max = 32))]
    pub house_number: Option<String>,
}

impl MergeIntoActiveModel<entity::parking_address::ActiveModel> for UpdateParkingAddressDto {
    fn merge_into_active_model(
        self,
        mut model: entity::parking_address::ActiveModel,
    ) -> entity::parking_address::ActiveModel {
        set_if_some(&mut model.street, self.street);
        set_if_some(&mut model.house_number, self.house_number);
        model
    }
}

#[derive(Deserialize, Validate, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListParkingAddressesFilter {
    /// filters addresses whose street contains the value
    pub street: Option<String>,
}

impl IntoCondition for ListParkingAddressesFilter {
    fn into_condition(self) -> Condition {
        let mut condition = Condition::all();

        if let Some(street) = self.street {
            condition = condition.add(entity::parking_address::Column::Street.contains(&street));
        }

        condition
    }
}

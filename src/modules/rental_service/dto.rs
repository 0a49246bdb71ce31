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
pub struct CreateRentalServiceDto {
    /// kind of the rental offering, eg: "hourly", "daily", "with driver"
    #[validate(length(min = 1, max = 255))]
    pub rental_type: String,

    #[validate(range(min = 0.0))]
    pub amount: f64,
}

impl From<CreateRentalServiceDto> for entity::rental_service::ActiveModel {
    fn from(dto: CreateRentalServiceDto) -> Self {
        Self {
            created_at: Set(Utc::now().into()),
            rental_type: Set(dto.rental_type),
            amount: Set(dto.amount),
            ..Default::default()
        }
    }
}

#[derive(Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRentalServiceDto {
    #[validate(length(min = 1, max = 255))]
    pub rental_type: Option<String>,

    #[validate(range(min = 0.0))]
    pub amount: Option<f64>,
}

impl MergeIntoActiveModel<entity::rental_service::ActiveModel> for UpdateRentalServiceDto {
    fn merge_into_active_model(
        self,
        mut model: entity::rental_service::ActiveModel,
    ) -> entity::rental_service::ActiveModel {
        set_if_some(&mut model.rental_type, self.rental_type);
        set_if_some(&mut model.amount, self.amount);
        model
    }
}

#[derive(Deserialize, Validate, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListRentalServicesFilter {
    pub rental_type: Option<String>,
}

impl IntoCondition for ListRentalServicesFilter {
    fn into_condition(self) -> Condition {
        let mut condition = Condition::all();

        if let Some(rental_type) = self.rental_type {
            condition =
                condition.add(entity::rental_service::Column::RentalType.contains(&rental_type));
        }

        condition
    }
}

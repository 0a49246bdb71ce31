use crate::{
    database::helpers::set_if_some,
    modules::common::crud::{IntoCondition, MergeIntoActiveModel},
};
use chrono::{NaiveDate, Utc};
use sea_orm::{ColumnTrait, Condition, Set};
use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

#[derive(Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateDriverLicenseDto {
    #[validate(length(min = 1, max = 255))]
    pub owner_name: String,

    #[validate(length(min = 1, max = 255))]
    pub surname: String,

    pub date_of_birth: NaiveDate,

    pub valid_until: NaiveDate,

    #[validate(length(min = 1, max = 64))]
    pub license_number: String,

    /// comma separated license categories, eg: "B,BE"
    #[validate(length(min = 1, max = 64))]
    pub categories: String,
}

impl From<CreateDriverLicenseDto> for entity::driver_license::ActiveModel {
    fn from(dto: CreateDriverLicenseDto) -> Self {
        Self {
            created_at: Set(Utc::now().into()),
            owner_name: Set(dto.owner_name),
            surname: Set(dto.surname),
            date_of_birth: Set(dto.date_of_birth),
            valid_until: Set(dto.valid_until),
            license_number: Set(dto.license_number),
            categories: Set(dto.categories),
            ..Default::default()
        }
    }
}

#[derive(Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDriverLicenseDto {
    #[validate(length(min = 1, max = 255))]
    pub owner_name: Option<String>,

    #[validate(length(min = 1, max = 255))]
    pub surname: Option<String>,

    pub date_of_birth: Option<NaiveDate>,

    pub valid_until: Option<NaiveDate>,

    #[validate(length(min = 1, max = 64))]
    pub license_number: Option<String>,

    #[validate(length(min = 1, max = 64))]
    pub categories: Option<String>,
}

impl MergeIntoActiveModel<entity::driver_license::ActiveModel> for UpdateDriverLicenseDto {
    fn merge_into_active_model(
        self,
        mut model: entity::driver_license::ActiveModel,
    ) -> entity::driver_license::ActiveModel {
        set_if_some(&mut model.owner_name, self.owner_name);
        set_if_some(&mut model.surname, self.surname);
        set_if_some(&mut model.date_of_birth, self.date_of_birth);
        set_if_some(&mut model.valid_until, self.valid_until);
        set_if_some(&mut model.license_number, self.license_number);
        set_if_some(&mut model.categories, self.categories);
        model
    }
}

#[derive(Deserialize, Validate, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ListDriverLicensesFilter {
    pub surname: Option<String>,
    pub license_number: Option<String>,
}

impl IntoCondition for ListDriverLicensesFilter {
    fn into_condition(self) -> Condition {
        let mut condition = Condition::all();

        if let Some(surname) = self.surname {
            condition = condition.add(entity::driver_license::Column::Surname.contains(&surname));
        }

        if let Some(license_number) = self.license_number {
            condition = condition
                .add(entity::driver_license::Column::LicenseNumber.contains(&license_number));
        }

        condition
    }
}

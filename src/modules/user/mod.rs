pub mod dto;

use crate::{
    modules::common::crud::{crud_router, CrudResource},
    server::controller::AppState,
};
use axum::Router;

pub struct UserResource;

impl CrudResource for UserResource {
    type Entity = entity::user::Entity;
    type Model = entity::user::Model;
    type ActiveModel = entity::user::ActiveModel;
    type Column = entity::user::Column;
    type CreateDto = dto::CreateUserDto;
    type UpdateDto = dto::UpdateUserDto;
    type ListFilter = dto::ListUsersFilter;

    const NAME: &'static str = "user";
    const ID_COLUMN: Self::Column = entity::user::Column::Id;
}

pub fn create_router() -> Router<AppState> {
    crud_router::<UserResource>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{modules::role, test_utils::test_db};

    #[tokio::test]
    async fn create_with_unknown_role_is_rejected() {
        let db = test_db().await;

        let result = UserResource::create(
            &db,
            dto::CreateUserDto {
                name: String::from("Bob"),
                surname: String::from("Jones"),
                role_id: Some(999),
                driver_license_id: None,
            },
        )
        .await;

        assert!(result.is_err());
    }

    #[tokio::test]
    async fn update_can_clear_the_role() {
        let db = test_db().await;

        let role = role::RoleResource::create(
            &db,
            role::dto::CreateRoleDto {
                name: String::from("driver"),
            },
        )
        .await
        .unwrap();

        let user = UserResource::create(
            &db,
            dto::CreateUserDto {
                name: String::from("Alice"),
                surname: String::from("Smith"),
                role_id: Some(role.id),
                driver_license_id: None,
            },
        )
        .await
        .unwrap();

        let updated = UserResource::update(
            &db,
            user.id,
            dto::UpdateUserDto {
                name: None,
                surname: None,
                role_id: Some(None),
                driver_license_id: None,
            },
        )
        .await
        .unwrap()
        .expect("user should exist");

        // absent fields keep their values, the double option null clears the fk
        assert_eq!(updated.name, "Alice");
        assert_eq!(updated.role_id, None);
    }
}

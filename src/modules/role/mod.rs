pub mod dto;

use crate::{
    modules::common::crud::{crud_router, CrudResource},
    server::controller::AppState,
};
use axum::Router;

pub struct RoleResource;

impl CrudResource for RoleResource {
    type Entity = entity::role::Entity;
    type Model = entity::role::Model;
    type ActiveModel = entity::role::ActiveModel;
    type Column = entity::role::Column;
    type CreateDto = dto::CreateRoleDto;
    type UpdateDto = dto::UpdateRoleDto;
    type ListFilter = dto::ListRolesFilter;

    const NAME: &'static str = "role";
    const ID_COLUMN: Self::Column = entity::role::Column::Id;
}

pub fn create_router() -> Router<AppState> {
    crud_router::<RoleResource>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{modules::common::dto::Pagination, test_utils::test_db};
    use sea_orm::{ActiveModelTrait, Set};

    #[tokio::test]
    async fn role_crud_roundtrip() {
        let db = test_db().await;

        let created = RoleResource::create(
            &db,
            dto::CreateRoleDto {
                name: String::from("manager"),
            },
        )
        .await
        .unwrap();

        let fetched = RoleResource::find_by_id(&db, created.id)
            .await
            .unwrap()
            .expect("created role should be fetchable");

        assert_eq!(fetched.name, "manager");

        let deleted = RoleResource::delete(&db, created.id).await.unwrap();
        assert!(deleted);

        assert!(RoleResource::find_by_id(&db, created.id)
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn deleting_a_missing_role_removes_nothing() {
        let db = test_db().await;

        let deleted = RoleResource::delete(&db, 4242).await.unwrap();
        assert!(!deleted);
    }

    #[tokio::test]
    async fn deleting_a_referenced_role_fails() {
        let db = test_db().await;

        let role = RoleResource::create(
            &db,
            dto::CreateRoleDto {
                name: String::from("driver"),
            },
        )
        .await
        .unwrap();

        entity::user::ActiveModel {
            created_at: Set(chrono::Utc::now().into()),
            name: Set(String::from("Alice")),
            surname: Set(String::from("Smith")),
            role_id: Set(Some(role.id)),
            ..Default::default()
        }
        .insert(&db)
        .await
        .unwrap();

        let result = RoleResource::delete(&db, role.id).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn roles_are_listed_in_id_order() {
        let db = test_db().await;

        for name in ["mechanic", "driver", "admin"] {
            RoleResource::create(
                &db,
                dto::CreateRoleDto {
                    name: String::from(name),
                },
            )
            .await
            .unwrap();
        }

        let page = RoleResource::list(
            &db,
            dto::ListRolesFilter { name: None },
            Pagination::default(),
        )
        .await
        .unwrap();

        assert_eq!(page.item_count, 3);
        let names: Vec<&str> = page.records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["mechanic", "driver", "admin"]);
    }
}

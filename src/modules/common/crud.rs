use super::{
    dto::{Pagination, PaginationResult},
    extractors::{DbConnection, ValidatedJson, ValidatedQuery},
    responses::SimpleError,
};
use crate::{
    database::{error::DbError, helpers::paginated_query_to_pagination_result},
    server::controller::AppState,
};
use axum::{async_trait, extract::Path, routing::get, Json, Router};
use http::StatusCode;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ColumnTrait, Condition, DatabaseConnection, DbErr,
    EntityTrait, FromQueryResult, IntoActiveModel, ModelTrait, PaginatorTrait, PrimaryKeyTrait,
    QueryFilter, QueryOrder,
};
use serde::{de::DeserializeOwned, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Merges a partial update payload into an active model
///
/// fields absent from the payload must leave the active value untouched
pub trait MergeIntoActiveModel<A> {
    fn merge_into_active_model(self, model: A) -> A;
}

/// Builds a sea-orm filter condition from list endpoint query params
pub trait IntoCondition {
    fn into_condition(self) -> Condition;
}

/// Describes an API resource with the uniform CRUD contract: paginated
/// filterable listing, fetch by id, create, partial update and delete.
///
/// implementors only provide the entity / DTO types and the two consts,
/// the default method bodies and the generic handlers below do the rest,
/// so a resource router is a single `crud_router::<MyResource>()` call
#[async_trait]
pub trait CrudResource: Send + Sync + 'static
where
    <Self::Entity as EntityTrait>::PrimaryKey: PrimaryKeyTrait<ValueType = i32>,
{
    type Entity: EntityTrait<Model = Self::Model, Column = Self::Column>;
    type Model: ModelTrait<Entity = Self::Entity>
        + IntoActiveModel<Self::ActiveModel>
        + FromQueryResult
        + for<'_s> ToSchema<'_s>
        + Serialize
        + Send
        + Sync
        + 'static;
    type ActiveModel: ActiveModelTrait<Entity = Self::Entity>
        + ActiveModelBehavior
        + Send
        + 'static;
    type Column: ColumnTrait;
    type CreateDto: Into<Self::ActiveModel> + Validate + DeserializeOwned + Send + 'static;
    type UpdateDto: MergeIntoActiveModel<Self::ActiveModel>
        + Validate
        + DeserializeOwned
        + Send
        + 'static;
    type ListFilter: IntoCondition + Validate + DeserializeOwned + Send + 'static;

    /// singular resource name, used on error messages
    const NAME: &'static str;

    /// primary key column, used for deterministic list ordering
    const ID_COLUMN: Self::Column;

    async fn list(
        db: &DatabaseConnection,
        filter: Self::ListFilter,
        pagination: Pagination,
    ) -> Result<PaginationResult<Self::Model>, DbError> {
        let paginator = Self::Entity::find()
            .filter(filter.into_condition())
            .order_by_asc(Self::ID_COLUMN)
            .paginate(db, pagination.page_size);

        paginated_query_to_pagination_result(paginator, pagination).await
    }

    async fn find_by_id(db: &DatabaseConnection, id: i32) -> Result<Option<Self::Model>, DbErr> {
        Self::Entity::find_by_id(id).one(db).await
    }

    async fn create(db: &DatabaseConnection, dto: Self::CreateDto) -> Result<Self::Model, DbErr> {
        dto.into().insert(db).await
    }

    /// applies a partial update, returning `None` if the record does not exist
    async fn update(
        db: &DatabaseConnection,
        id: i32,
        dto: Self::UpdateDto,
    ) -> Result<Option<Self::Model>, DbErr> {
        let Some(record) = Self::Entity::find_by_id(id).one(db).await? else {
            return Ok(None);
        };

        let merged = dto.merge_into_active_model(record.into_active_model());

        Ok(Some(merged.update(db).await?))
    }

    /// deletes the record by id, returning whether a row was removed
    async fn delete(db: &DatabaseConnection, id: i32) -> Result<bool, DbErr> {
        let res = Self::Entity::delete_by_id(id).exec(db).await?;

        Ok(res.rows_affected > 0)
    }
}

fn not_found_res<R: CrudResource>() -> (StatusCode, SimpleError) {
    (
        StatusCode::NOT_FOUND,
        SimpleError::from(format!("{} not found", R::NAME)),
    )
}

pub async fn list_handler<R: CrudResource>(
    ValidatedQuery(pagination): ValidatedQuery<Pagination>,
    ValidatedQuery(filter): ValidatedQuery<R::ListFilter>,
    DbConnection(db): DbConnection,
) -> Result<Json<PaginationResult<R::Model>>, (StatusCode, SimpleError)> {
    let result = R::list(&db, filter, pagination).await?;

    Ok(Json(result))
}

pub async fn find_by_id_handler<R: CrudResource>(
    Path(id): Path<i32>,
    DbConnection(db): DbConnection,
) -> Result<Json<R::Model>, (StatusCode, SimpleError)> {
    let record = R::find_by_id(&db, id)
        .await
        .map_err(DbError::from)?
        .ok_or_else(not_found_res::<R>)?;

    Ok(Json(record))
}

pub async fn create_handler<R: CrudResource>(
    DbConnection(db): DbConnection,
    ValidatedJson(dto): ValidatedJson<R::CreateDto>,
) -> Result<(StatusCode, Json<R::Model>), (StatusCode, SimpleError)> {
    let created = R::create(&db, dto).await.map_err(DbError::from)?;

    Ok((StatusCode::CREATED, Json(created)))
}

pub async fn update_handler<R: CrudResource>(
    Path(id): Path<i32>,
    DbConnection(db): DbConnection,
    ValidatedJson(dto): ValidatedJson<R::UpdateDto>,
) -> Result<Json<R::Model>, (StatusCode, SimpleError)> {
    let updated = R::update(&db, id, dto)
        .await
        .map_err(DbError::from)?
        .ok_or_else(not_found_res::<R>)?;

    Ok(Json(updated))
}

pub async fn delete_handler<R: CrudResource>(
    Path(id): Path<i32>,
    DbConnection(db): DbConnection,
) -> Result<StatusCode, (StatusCode, SimpleError)> {
    let deleted = R::delete(&db, id).await.map_err(DbError::from)?;

    if !deleted {
        return Err(not_found_res::<R>());
    }

    Ok(StatusCode::OK)
}

/// Creates a router with the five uniform CRUD endpoints of a resource
pub fn crud_router<R: CrudResource>() -> Router<AppState> {
    Router::new()
        .route("/", get(list_handler::<R>).post(create_handler::<R>))
        .route(
            "/:id",
            get(find_by_id_handler::<R>)
                .put(update_handler::<R>)
                .delete(delete_handler::<R>),
        )
}

//! Generic PostgreSQL repository
//!
//! Every table follows the same shape (serial `id`, optional business `code`,
//! nullable foreign keys), so a single SeaORM-backed implementation serves all
//! records. Each record supplies its columns and active model through
//! `SeaOrmRecord`.

use std::marker::PhantomData;

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection,
    EntityTrait, IntoActiveModel, NotSet, QueryFilter, QueryOrder, Set,
};

use crate::domain::entities::Record;
use crate::domain::ports::Repository;
use crate::error::DomainError;

type Column<R> = <<R as SeaOrmRecord>::Entity as EntityTrait>::Column;
type Model<R> = <<R as SeaOrmRecord>::Entity as EntityTrait>::Model;
pub(super) type Timestamp = Option<sea_orm::prelude::DateTimeWithTimeZone>;

/// Mapping between a domain record and its SeaORM table
///
/// Implementors also provide `From<Model>` to read rows back.
pub trait SeaOrmRecord: Record {
    type Entity: EntityTrait;
    type ActiveModel: ActiveModelTrait<Entity = Self::Entity>
        + ActiveModelBehavior
        + Send
        + Sync
        + 'static;

    fn id_column() -> Column<Self>;

    /// Column holding the business code, for records that have one
    fn natural_key_column() -> Option<Column<Self>> {
        None
    }

    fn relation_column(relation: Self::Relation) -> Column<Self>;

    fn to_active_model(&self) -> Self::ActiveModel;
}

/// Primary key value: left unset on insert so the sequence assigns it
pub(super) fn id_value(id: Option<i32>) -> ActiveValue<i32> {
    match id {
        Some(id) => Set(id),
        None => NotSet,
    }
}

/// `created_at` and `updated_at` values for an insert or an update
pub(super) fn timestamps(id: Option<i32>) -> (ActiveValue<Timestamp>, ActiveValue<Timestamp>) {
    let now = Utc::now().fixed_offset();
    let created_at = match id {
        Some(_) => NotSet,
        None => Set(Some(now)),
    };
    (created_at, Set(Some(now)))
}

/// PostgreSQL implementation of `Repository` for any `SeaOrmRecord`
pub struct PostgresRepository<R> {
    db: DatabaseConnection,
    _record: PhantomData<fn() -> R>,
}

impl<R> PostgresRepository<R> {
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            db,
            _record: PhantomData,
        }
    }
}

#[async_trait]
impl<R> Repository<R> for PostgresRepository<R>
where
    R: SeaOrmRecord + From<Model<R>>,
    Model<R>: IntoActiveModel<R::ActiveModel> + Sync,
{
    async fn find_by_id(&self, id: i32) -> Result<Option<R>, DomainError> {
        let result = R::Entity::find()
            .filter(R::id_column().eq(id))
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(R::from))
    }

    async fn find_by_natural_key(&self, key: &str) -> Result<Option<R>, DomainError> {
        let Some(column) = R::natural_key_column() else {
            return Ok(None);
        };

        let result = R::Entity::find()
            .filter(column.eq(key))
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.map(R::from))
    }

    async fn find_all(&self) -> Result<Vec<R>, DomainError> {
        let results = R::Entity::find()
            .order_by_asc(R::id_column())
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(R::from).collect())
    }

    async fn find_all_by(
        &self,
        relation: R::Relation,
        parent_id: i32,
    ) -> Result<Vec<R>, DomainError> {
        let results = R::Entity::find()
            .filter(R::relation_column(relation).eq(parent_id))
            .order_by_asc(R::id_column())
            .all(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(results.into_iter().map(R::from).collect())
    }

    async fn exists_by(&self, relation: R::Relation, parent_id: i32) -> Result<bool, DomainError> {
        let result = R::Entity::find()
            .filter(R::relation_column(relation).eq(parent_id))
            .one(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(result.is_some())
    }

    async fn save(&self, record: &R) -> Result<R, DomainError> {
        let model = record.to_active_model();

        let saved = match record.id() {
            Some(_) => model.update(&self.db).await,
            None => model.insert(&self.db).await,
        }
        .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(R::from(saved))
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), DomainError> {
        R::Entity::delete_many()
            .filter(R::id_column().eq(id))
            .exec(&self.db)
            .await
            .map_err(|e| DomainError::Database(e.to_string()))?;

        Ok(())
    }
}

//! Repository port traits
//!
//! These traits define the interface for data persistence.
//! Implementations are provided by adapters (e.g., PostgreSQL).

use async_trait::async_trait;

use crate::domain::entities::Record;
use crate::error::DomainError;

/// CRUD-only repository for one record type
#[async_trait]
pub trait Repository<R: Record>: Send + Sync {
    /// Find a record by its surrogate id
    async fn find_by_id(&self, id: i32) -> Result<Option<R>, DomainError>;

    /// Find a record by its business code.
    /// Always `None` for records without a natural key.
    async fn find_by_natural_key(&self, key: &str) -> Result<Option<R>, DomainError>;

    /// All records, ordered by id
    async fn find_all(&self) -> Result<Vec<R>, DomainError>;

    /// Records whose `relation` points at `parent_id`, ordered by id
    async fn find_all_by(
        &self,
        relation: R::Relation,
        parent_id: i32,
    ) -> Result<Vec<R>, DomainError>;

    /// Whether at least one record's `relation` points at `parent_id`
    async fn exists_by(&self, relation: R::Relation, parent_id: i32) -> Result<bool, DomainError>;

    /// Insert (no id) or replace (id set) a record
    async fn save(&self, record: &R) -> Result<R, DomainError>;

    /// Delete a record by id
    async fn delete_by_id(&self, id: i32) -> Result<(), DomainError>;
}

//! Generic entity service
//!
//! One `CrudService<K>` is built per entity kind. It runs the shared
//! validate -> resolve references -> map -> persist flow, the lookups, and the
//! guarded delete. Kind-specific behavior comes from the `EntityKind` policy
//! and from the reference checks and delete guards registered at construction.

use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;

use super::kinds::{EntityKind, OrderKind};
use crate::domain::entities::{OrderRecord, OrderStatus, Record, Relation};
use crate::domain::ports::Repository;
use crate::error::{DomainError, ErrorCode};

/// Lookup on a parent repository, erased over its record type.
///
/// `None` means the parent does not exist; otherwise whether it is editable.
#[async_trait]
trait ParentLookup: Send + Sync {
    async fn editable(&self, id: i32) -> Result<Option<bool>, DomainError>;
}

struct StoredParent<P: Record>(Arc<dyn Repository<P>>);

#[async_trait]
impl<P: Record> ParentLookup for StoredParent<P> {
    async fn editable(&self, id: i32) -> Result<Option<bool>, DomainError> {
        Ok(self.0.find_by_id(id).await?.map(|parent| parent.is_editable()))
    }
}

/// Dependent-row lookup on a child repository, erased over its record type
#[async_trait]
trait DependentGuard: Send + Sync {
    fn name(&self) -> &'static str;

    async fn has_dependents(&self, parent_id: i32) -> Result<bool, DomainError>;
}

struct DependentsOf<D: Record> {
    name: &'static str,
    repo: Arc<dyn Repository<D>>,
    relation: D::Relation,
}

#[async_trait]
impl<D: Record> DependentGuard for DependentsOf<D> {
    fn name(&self) -> &'static str {
        self.name
    }

    async fn has_dependents(&self, parent_id: i32) -> Result<bool, DomainError> {
        self.repo.exists_by(self.relation, parent_id).await
    }
}

struct ReferenceCheck<R: Record> {
    relation: R::Relation,
    target: Arc<dyn ParentLookup>,
    /// Set when the child freezes along with its parent
    frozen: Option<(&'static str, ErrorCode)>,
}

/// Service for one entity kind
pub struct CrudService<K: EntityKind> {
    repo: Arc<dyn Repository<K::Record>>,
    references: Vec<ReferenceCheck<K::Record>>,
    guards: Vec<Arc<dyn DependentGuard>>,
    _kind: PhantomData<fn() -> K>,
}

impl<K: EntityKind> CrudService<K> {
    pub fn new(repo: Arc<dyn Repository<K::Record>>) -> Self {
        Self {
            repo,
            references: Vec::new(),
            guards: Vec::new(),
            _kind: PhantomData,
        }
    }

    /// Require the entity referenced through `relation` to exist on save
    pub fn references<P: Record>(
        mut self,
        relation: <K::Record as Record>::Relation,
        parent: Arc<dyn Repository<P>>,
    ) -> Self {
        self.references.push(ReferenceCheck {
            relation,
            target: Arc::new(StoredParent(parent)),
            frozen: None,
        });
        self
    }

    /// Like `references`, and also refuse any change while the parent is no
    /// longer editable
    pub fn part_of<PK: EntityKind>(
        mut self,
        relation: <K::Record as Record>::Relation,
        parent: Arc<dyn Repository<PK::Record>>,
    ) -> Self {
        self.references.push(ReferenceCheck {
            relation,
            target: Arc::new(StoredParent(parent)),
            frozen: Some((PK::LABEL, PK::NOT_EDITABLE)),
        });
        self
    }

    /// Refuse deletion while any `D` row points at the entity through `relation`
    pub fn guarded_by<D: Record>(
        mut self,
        name: &'static str,
        dependents: Arc<dyn Repository<D>>,
        relation: D::Relation,
    ) -> Self {
        self.guards.push(Arc::new(DependentsOf {
            name,
            repo: dependents,
            relation,
        }));
        self
    }

    /// Validate, resolve references, then insert or replace.
    pub async fn save(&self, dto: Option<K::Dto>) -> Result<K::Dto, DomainError> {
        let errors = K::validate(dto.as_ref());
        let Some(dto) = dto.filter(|_| errors.is_empty()) else {
            tracing::error!(kind = K::LABEL, ?errors, "{} is not valid", K::LABEL);
            return Err(DomainError::invalid_entity(
                format!("{} is not valid", K::LABEL),
                K::NOT_VALID,
                errors,
            ));
        };

        let record = K::Record::from(&dto);

        if let Some(key) = record.natural_key() {
            if let Some(existing) = self.repo.find_by_natural_key(key).await? {
                if existing.id() != record.id() {
                    tracing::warn!(kind = K::LABEL, key, "Duplicate natural key");
                    return Err(DomainError::invalid_entity(
                        format!("{} is not valid", K::LABEL),
                        K::NOT_VALID,
                        vec![format!("A {} with code {} already exists", K::LABEL, key)],
                    ));
                }
            }
        }

        if let Some(id) = record.id() {
            let stored = self
                .repo
                .find_by_id(id)
                .await?
                .ok_or_else(|| self.not_found(id))?;
            self.ensure_editable(&stored, id).await?;
        }

        for check in &self.references {
            let Some(parent_id) = record.reference(check.relation) else {
                continue;
            };
            match check.target.editable(parent_id).await? {
                None => {
                    let parent = check.relation.parent();
                    tracing::warn!(
                        kind = K::LABEL,
                        parent,
                        parent_id,
                        "Referenced entity was not found"
                    );
                    return Err(DomainError::not_found(
                        format!("{} with id {} does not exist", parent, parent_id),
                        check.relation.not_found(),
                    ));
                }
                Some(false) => {
                    if let Some(frozen) = check.frozen {
                        return Err(Self::parent_frozen(frozen, parent_id));
                    }
                }
                Some(true) => {}
            }
        }

        let saved = self.repo.save(&record).await?;
        tracing::debug!(kind = K::LABEL, id = ?saved.id(), "Saved");
        Ok(K::Dto::from(saved))
    }

    pub async fn find_by_id(&self, id: Option<i32>) -> Result<K::Dto, DomainError> {
        let id = Self::require_id(id)?;
        self.repo
            .find_by_id(id)
            .await?
            .map(K::Dto::from)
            .ok_or_else(|| self.not_found(id))
    }

    /// Look up by business code.
    ///
    /// A blank code means "not given" and yields `Ok(None)`; a code matching
    /// no row is an `EntityNotFound`.
    pub async fn find_by_natural_key(&self, code: &str) -> Result<Option<K::Dto>, DomainError> {
        let code = code.trim();
        if code.is_empty() {
            tracing::error!(kind = K::LABEL, "{} code is blank", K::LABEL);
            return Ok(None);
        }

        match self.repo.find_by_natural_key(code).await? {
            Some(record) => Ok(Some(K::Dto::from(record))),
            None => Err(DomainError::not_found(
                format!("No {} with code {} was found", K::LABEL, code),
                K::NOT_FOUND,
            )),
        }
    }

    pub async fn find_all(&self) -> Result<Vec<K::Dto>, DomainError> {
        let records = self.repo.find_all().await?;
        Ok(records.into_iter().map(K::Dto::from).collect())
    }

    /// Rows whose `relation` points at `parent_id`
    pub async fn find_all_by(
        &self,
        relation: <K::Record as Record>::Relation,
        parent_id: Option<i32>,
    ) -> Result<Vec<K::Dto>, DomainError> {
        let Some(parent_id) = parent_id else {
            tracing::error!(kind = K::LABEL, parent = relation.parent(), "Parent id is null");
            return Err(DomainError::invalid_operation(
                format!(
                    "No {} can be found for a null {} id",
                    K::LABEL,
                    relation.parent()
                ),
                relation.not_found(),
            ));
        };

        let records = self.repo.find_all_by(relation, parent_id).await?;
        Ok(records.into_iter().map(K::Dto::from).collect())
    }

    /// Delete once every guard confirms nothing depends on the row.
    ///
    /// Guards and delete are separate statements; a dependent inserted between
    /// them is not detected.
    pub async fn delete(&self, id: Option<i32>) -> Result<(), DomainError> {
        let id = Self::require_id(id)?;
        let stored = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| self.not_found(id))?;
        self.ensure_editable(&stored, id).await?;

        for guard in &self.guards {
            if guard.has_dependents(id).await? {
                tracing::error!(
                    kind = K::LABEL,
                    id,
                    dependents = guard.name(),
                    "{} already in use",
                    K::LABEL
                );
                return Err(DomainError::invalid_operation(
                    format!(
                        "Cannot delete {} {}: it is referenced by existing {}",
                        K::LABEL,
                        id,
                        guard.name()
                    ),
                    K::IN_USE,
                ));
            }
        }

        self.repo.delete_by_id(id).await?;
        tracing::info!(kind = K::LABEL, id, "Deleted");
        Ok(())
    }

    /// Refuse changes to a frozen record or to a child of a frozen parent
    async fn ensure_editable(&self, stored: &K::Record, id: i32) -> Result<(), DomainError> {
        if !stored.is_editable() {
            tracing::warn!(kind = K::LABEL, id, "Record is frozen");
            return Err(DomainError::invalid_operation(
                format!("{} {} can no longer be modified", K::LABEL, id),
                K::NOT_EDITABLE,
            ));
        }

        for check in &self.references {
            let (Some(frozen), Some(parent_id)) = (check.frozen, stored.reference(check.relation))
            else {
                continue;
            };
            if check.target.editable(parent_id).await? == Some(false) {
                return Err(Self::parent_frozen(frozen, parent_id));
            }
        }
        Ok(())
    }

    fn parent_frozen((parent, code): (&'static str, ErrorCode), parent_id: i32) -> DomainError {
        tracing::warn!(kind = K::LABEL, parent, parent_id, "Parent is frozen");
        DomainError::invalid_operation(
            format!(
                "{} {} can no longer be modified, nor can its {}s",
                parent,
                parent_id,
                K::LABEL.to_lowercase()
            ),
            code,
        )
    }

    fn require_id(id: Option<i32>) -> Result<i32, DomainError> {
        id.ok_or_else(|| {
            tracing::error!(kind = K::LABEL, "{} id is null", K::LABEL);
            DomainError::not_found(format!("{} id is null", K::LABEL), ErrorCode::IdNotValid)
        })
    }

    fn not_found(&self, id: i32) -> DomainError {
        DomainError::not_found(
            format!("No {} with id {} was found", K::LABEL, id),
            K::NOT_FOUND,
        )
    }
}

impl<K> CrudService<K>
where
    K: OrderKind,
    K::Record: OrderRecord,
{
    /// Move an order to `status`. Delivered orders can no longer change.
    ///
    /// The same freeze applies to `save` and `delete` through `ensure_editable`.
    pub async fn update_status(
        &self,
        id: Option<i32>,
        status: OrderStatus,
    ) -> Result<K::Dto, DomainError> {
        let id = Self::require_id(id)?;
        let order = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| self.not_found(id))?;

        self.ensure_editable(&order, id).await?;

        let saved = self.repo.save(&order.with_status(status)).await?;
        tracing::info!(kind = K::LABEL, id, %status, "Order status updated");
        Ok(K::Dto::from(saved))
    }
}

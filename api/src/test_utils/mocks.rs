//! Mock implementations of port traits
//!
//! These are in-memory implementations that can be configured for testing.
//! They store data in memory and allow tests to verify behavior.

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::domain::entities::Record;
use crate::domain::ports::Repository;
use crate::error::DomainError;

// ============================================================================
// In-Memory Repository
// ============================================================================

pub struct InMemoryRepository<R> {
    rows: Arc<RwLock<BTreeMap<i32, R>>>,
    next_id: Arc<RwLock<i32>>,
    failing: bool,
}

impl<R> Default for InMemoryRepository<R> {
    fn default() -> Self {
        Self {
            rows: Arc::new(RwLock::new(BTreeMap::new())),
            next_id: Arc::new(RwLock::new(1)),
            failing: false,
        }
    }
}

impl<R: Record> InMemoryRepository<R> {
    pub fn new() -> Self {
        Self::default()
    }

    /// A repository whose every call fails with a database error
    pub fn failing() -> Self {
        Self {
            failing: true,
            ..Self::default()
        }
    }

    /// Pre-populate with a record for testing. The record must carry an id.
    pub fn insert(&self, record: R) {
        let id = record.id().expect("fixture records need an id");
        let mut next_id = self.next_id.write().unwrap();
        *next_id = (*next_id).max(id + 1);
        self.rows.write().unwrap().insert(id, record);
    }

    /// Pre-populate with a record, builder style
    pub fn with(self, record: R) -> Self {
        self.insert(record);
        self
    }

    pub fn len(&self) -> usize {
        self.rows.read().unwrap().len()
    }

    fn check(&self) -> Result<(), DomainError> {
        if self.failing {
            Err(DomainError::Database("connection refused".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl<R: Record> Repository<R> for InMemoryRepository<R> {
    async fn find_by_id(&self, id: i32) -> Result<Option<R>, DomainError> {
        self.check()?;
        Ok(self.rows.read().unwrap().get(&id).cloned())
    }

    async fn find_by_natural_key(&self, key: &str) -> Result<Option<R>, DomainError> {
        self.check()?;
        let rows = self.rows.read().unwrap();
        Ok(rows.values().find(|r| r.natural_key() == Some(key)).cloned())
    }

    async fn find_all(&self) -> Result<Vec<R>, DomainError> {
        self.check()?;
        Ok(self.rows.read().unwrap().values().cloned().collect())
    }

    async fn find_all_by(
        &self,
        relation: R::Relation,
        parent_id: i32,
    ) -> Result<Vec<R>, DomainError> {
        self.check()?;
        let rows = self.rows.read().unwrap();
        Ok(rows
            .values()
            .filter(|r| r.reference(relation) == Some(parent_id))
            .cloned()
            .collect())
    }

    async fn exists_by(&self, relation: R::Relation, parent_id: i32) -> Result<bool, DomainError> {
        self.check()?;
        let rows = self.rows.read().unwrap();
        Ok(rows
            .values()
            .any(|r| r.reference(relation) == Some(parent_id)))
    }

    async fn save(&self, record: &R) -> Result<R, DomainError> {
        self.check()?;
        let saved = match record.id() {
            Some(_) => record.clone(),
            None => {
                let mut next_id = self.next_id.write().unwrap();
                let id = *next_id;
                *next_id += 1;
                record.clone().with_id(id)
            }
        };

        let id = saved.id().expect("saved record has an id");
        self.rows.write().unwrap().insert(id, saved.clone());
        Ok(saved)
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), DomainError> {
        self.check()?;
        self.rows.write().unwrap().remove(&id);
        Ok(())
    }
}

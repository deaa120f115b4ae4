//! Sale domain entity
//!
//! A counter sale, made without a client order.

use chrono::{DateTime, Utc};

use super::{NoRelation, Record};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sale {
    pub id: Option<i32>,
    pub code: String,
    pub sale_date: DateTime<Utc>,
    pub comment: Option<String>,
}

impl Record for Sale {
    type Relation = NoRelation;

    const NATURAL_KEY: Option<&'static str> = Some("code");

    fn id(&self) -> Option<i32> {
        self.id
    }

    fn with_id(self, id: i32) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }

    fn natural_key(&self) -> Option<&str> {
        Some(&self.code)
    }

    fn reference(&self, relation: NoRelation) -> Option<i32> {
        match relation {}
    }
}

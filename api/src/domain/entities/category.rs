//! Category domain entity

use super::{NoRelation, Record};

/// A family of articles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: Option<i32>,
    pub code: String,
    pub designation: String,
}

impl Record for Category {
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

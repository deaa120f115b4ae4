//! Supplier domain entity

use super::{Address, NoRelation, Record};

/// A vendor receiving supplier orders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Supplier {
    pub id: Option<i32>,
    pub first_name: String,
    pub last_name: String,
    pub address: Address,
    pub photo: Option<String>,
    pub email: String,
    pub phone: String,
}

impl Record for Supplier {
    type Relation = NoRelation;

    fn id(&self) -> Option<i32> {
        self.id
    }

    fn with_id(self, id: i32) -> Self {
        Self {
            id: Some(id),
            ..self
        }
    }

    fn reference(&self, relation: NoRelation) -> Option<i32> {
        match relation {}
    }
}

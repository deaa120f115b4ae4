//! Client order domain entity
//!
//! An order placed by a client.

use chrono::{DateTime, Utc};

use super::{OrderRecord, OrderStatus, Record, Relation};
use crate::error::ErrorCode;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientOrder {
    pub id: Option<i32>,
    pub code: String,
    pub order_date: DateTime<Utc>,
    pub status: OrderStatus,
    pub client_id: Option<i32>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientOrderRelation {
    Client,
}

impl Relation for ClientOrderRelation {
    fn parent(self) -> &'static str {
        match self {
            ClientOrderRelation::Client => "Client",
        }
    }

    fn not_found(self) -> ErrorCode {
        match self {
            ClientOrderRelation::Client => ErrorCode::ClientNotFound,
        }
    }
}

impl Record for ClientOrder {
    type Relation = ClientOrderRelation;

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

    fn reference(&self, relation: ClientOrderRelation) -> Option<i32> {
        match relation {
            ClientOrderRelation::Client => self.client_id,
        }
    }

    fn is_editable(&self) -> bool {
        self.status.is_editable()
    }
}

impl OrderRecord for ClientOrder {
    fn status(&self) -> OrderStatus {
        self.status
    }

    fn with_status(self, status: OrderStatus) -> Self {
        Self { status, ..self }
    }
}

//! Domain entities
//!
//! Pure domain records representing the persisted shape of each stock concept.
//! These are separate from the SeaORM entities in the `entity` module.
//! Foreign keys are carried as plain ids; the DTO layer nests related objects.

use std::fmt::Debug;

use crate::error::ErrorCode;

pub mod address;
pub mod article;
pub mod category;
pub mod client;
pub mod client_order;
pub mod client_order_line;
pub mod order_status;
pub mod sale;
pub mod sales_line;
pub mod supplier;
pub mod supplier_order;
pub mod supplier_order_line;

pub use address::Address;
pub use article::{price_incl_tax, Article, ArticleRelation};
pub use category::Category;
pub use client::Client;
pub use client_order::{ClientOrder, ClientOrderRelation};
pub use client_order_line::{ClientOrderLine, ClientOrderLineRelation};
pub use order_status::OrderStatus;
pub use sale::Sale;
pub use sales_line::{SalesLine, SalesLineRelation};
pub use supplier::Supplier;
pub use supplier_order::{SupplierOrder, SupplierOrderRelation};
pub use supplier_order_line::{SupplierOrderLine, SupplierOrderLineRelation};

/// A foreign key held by a record
pub trait Relation: Copy + Eq + Debug + Send + Sync + 'static {
    /// Name of the referenced entity kind
    fn parent(self) -> &'static str;

    /// Code raised when the referenced entity cannot be resolved
    fn not_found(self) -> ErrorCode;
}

/// Relation type for records that reference nothing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoRelation {}

impl Relation for NoRelation {
    fn parent(self) -> &'static str {
        match self {}
    }

    fn not_found(self) -> ErrorCode {
        match self {}
    }
}

/// A persisted record with a surrogate integer id
pub trait Record: Clone + Debug + Send + Sync + 'static {
    type Relation: Relation;

    /// Name of the business code field, for records that have one
    const NATURAL_KEY: Option<&'static str> = None;

    /// Surrogate id; `None` until the record is first inserted
    fn id(&self) -> Option<i32>;

    fn with_id(self, id: i32) -> Self;

    fn natural_key(&self) -> Option<&str> {
        None
    }

    /// Id of the entity referenced through `relation`, if set
    fn reference(&self, relation: Self::Relation) -> Option<i32>;

    /// Whether the stored record, and anything attached to it, may still change
    fn is_editable(&self) -> bool {
        true
    }
}

/// Records that carry an order status
pub trait OrderRecord: Record {
    fn status(&self) -> OrderStatus;

    fn with_status(self, status: OrderStatus) -> Self;
}

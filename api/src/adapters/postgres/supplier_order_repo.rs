//! PostgreSQL mapping for supplier_orders

use chrono::Utc;
use sea_orm::Set;

use super::repository::{id_value, timestamps, PostgresRepository, SeaOrmRecord};
use crate::domain::entities::{SupplierOrder, SupplierOrderRelation};
use crate::entity::supplier_orders;

/// PostgreSQL implementation of `Repository<SupplierOrder>`
pub type PostgresSupplierOrderRepository = PostgresRepository<SupplierOrder>;

impl SeaOrmRecord for SupplierOrder {
    type Entity = supplier_orders::Entity;
    type ActiveModel = supplier_orders::ActiveModel;

    fn id_column() -> supplier_orders::Column {
        supplier_orders::Column::Id
    }

    fn natural_key_column() -> Option<supplier_orders::Column> {
        Some(supplier_orders::Column::Code)
    }

    fn relation_column(relation: SupplierOrderRelation) -> supplier_orders::Column {
        match relation {
            SupplierOrderRelation::Supplier => supplier_orders::Column::SupplierId,
        }
    }

    fn to_active_model(&self) -> supplier_orders::ActiveModel {
        let (created_at, updated_at) = timestamps(self.id);
        supplier_orders::ActiveModel {
            id: id_value(self.id),
            code: Set(self.code.clone()),
            order_date: Set(self.order_date.fixed_offset()),
            status: Set(self.status.to_string()),
            supplier_id: Set(self.supplier_id),
            created_at,
            updated_at,
        }
    }
}

/// Convert SeaORM model to domain entity
impl From<supplier_orders::Model> for SupplierOrder {
    fn from(model: supplier_orders::Model) -> Self {
        SupplierOrder {
            id: Some(model.id),
            code: model.code,
            order_date: model.order_date.with_timezone(&Utc),
            status: model.status.parse().unwrap_or_default(),
            supplier_id: model.supplier_id,
        }
    }
}

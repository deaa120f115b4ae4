//! PostgreSQL mapping for supplier_order_lines

use sea_orm::Set;

use super::repository::{id_value, timestamps, PostgresRepository, SeaOrmRecord};
use crate::domain::entities::{SupplierOrderLine, SupplierOrderLineRelation};
use crate::entity::supplier_order_lines;

/// PostgreSQL implementation of `Repository<SupplierOrderLine>`
pub type PostgresSupplierOrderLineRepository = PostgresRepository<SupplierOrderLine>;

impl SeaOrmRecord for SupplierOrderLine {
    type Entity = supplier_order_lines::Entity;
    type ActiveModel = supplier_order_lines::ActiveModel;

    fn id_column() -> supplier_order_lines::Column {
        supplier_order_lines::Column::Id
    }

    fn relation_column(relation: SupplierOrderLineRelation) -> supplier_order_lines::Column {
        match relation {
            SupplierOrderLineRelation::SupplierOrder => supplier_order_lines::Column::SupplierOrderId,
            SupplierOrderLineRelation::Article => supplier_order_lines::Column::ArticleId,
        }
    }

    fn to_active_model(&self) -> supplier_order_lines::ActiveModel {
        let (created_at, updated_at) = timestamps(self.id);
        supplier_order_lines::ActiveModel {
            id: id_value(self.id),
            supplier_order_id: Set(self.supplier_order_id),
            article_id: Set(self.article_id),
            quantity: Set(self.quantity),
            unit_price: Set(self.unit_price),
            created_at,
            updated_at,
        }
    }
}

/// Convert SeaORM model to domain entity
impl From<supplier_order_lines::Model> for SupplierOrderLine {
    fn from(model: supplier_order_lines::Model) -> Self {
        SupplierOrderLine {
            id: Some(model.id),
            supplier_order_id: model.supplier_order_id,
            article_id: model.article_id,
            quantity: model.quantity,
            unit_price: model.unit_price,
        }
    }
}

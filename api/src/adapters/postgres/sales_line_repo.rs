//! PostgreSQL mapping for sales_lines

use sea_orm::Set;

use super::repository::{id_value, timestamps, PostgresRepository, SeaOrmRecord};
use crate::domain::entities::{SalesLine, SalesLineRelation};
use crate::entity::sales_lines;

/// PostgreSQL implementation of `Repository<SalesLine>`
pub type PostgresSalesLineRepository = PostgresRepository<SalesLine>;

impl SeaOrmRecord for SalesLine {
    type Entity = sales_lines::Entity;
    type ActiveModel = sales_lines::ActiveModel;

    fn id_column() -> sales_lines::Column {
        sales_lines::Column::Id
    }

    fn relation_column(relation: SalesLineRelation) -> sales_lines::Column {
        match relation {
            SalesLineRelation::Sale => sales_lines::Column::SaleId,
            SalesLineRelation::Article => sales_lines::Column::ArticleId,
        }
    }

    fn to_active_model(&self) -> sales_lines::ActiveModel {
        let (created_at, updated_at) = timestamps(self.id);
        sales_lines::ActiveModel {
            id: id_value(self.id),
            sale_id: Set(self.sale_id),
            article_id: Set(self.article_id),
            quantity: Set(self.quantity),
            unit_price: Set(self.unit_price),
            created_at,
            updated_at,
        }
    }
}

/// Convert SeaORM model to domain entity
impl From<sales_lines::Model> for SalesLine {
    fn from(model: sales_lines::Model) -> Self {
        SalesLine {
            id: Some(model.id),
            sale_id: model.sale_id,
            article_id: model.article_id,
            quantity: model.quantity,
            unit_price: model.unit_price,
        }
    }
}

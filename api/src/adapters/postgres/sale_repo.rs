//! PostgreSQL mapping for sales

use chrono::Utc;
use sea_orm::Set;

use super::repository::{id_value, timestamps, PostgresRepository, SeaOrmRecord};
use crate::domain::entities::{NoRelation, Sale};
use crate::entity::sales;

/// PostgreSQL implementation of `Repository<Sale>`
pub type PostgresSaleRepository = PostgresRepository<Sale>;

impl SeaOrmRecord for Sale {
    type Entity = sales::Entity;
    type ActiveModel = sales::ActiveModel;

    fn id_column() -> sales::Column {
        sales::Column::Id
    }

    fn natural_key_column() -> Option<sales::Column> {
        Some(sales::Column::Code)
    }

    fn relation_column(relation: NoRelation) -> sales::Column {
        match relation {}
    }

    fn to_active_model(&self) -> sales::ActiveModel {
        let (created_at, updated_at) = timestamps(self.id);
        sales::ActiveModel {
            id: id_value(self.id),
            code: Set(self.code.clone()),
            sale_date: Set(self.sale_date.fixed_offset()),
            comment: Set(self.comment.clone()),
            created_at,
            updated_at,
        }
    }
}

/// Convert SeaORM model to domain entity
impl From<sales::Model> for Sale {
    fn from(model: sales::Model) -> Self {
        Sale {
            id: Some(model.id),
            code: model.code,
            sale_date: model.sale_date.with_timezone(&Utc),
            comment: model.comment,
        }
    }
}

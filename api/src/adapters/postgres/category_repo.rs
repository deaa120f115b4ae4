//! PostgreSQL mapping for categories

use sea_orm::Set;

use super::repository::{id_value, timestamps, PostgresRepository, SeaOrmRecord};
use crate::domain::entities::{Category, NoRelation};
use crate::entity::categories;

/// PostgreSQL implementation of `Repository<Category>`
pub type PostgresCategoryRepository = PostgresRepository<Category>;

impl SeaOrmRecord for Category {
    type Entity = categories::Entity;
    type ActiveModel = categories::ActiveModel;

    fn id_column() -> categories::Column {
        categories::Column::Id
    }

    fn natural_key_column() -> Option<categories::Column> {
        Some(categories::Column::Code)
    }

    fn relation_column(relation: NoRelation) -> categories::Column {
        match relation {}
    }

    fn to_active_model(&self) -> categories::ActiveModel {
        let (created_at, updated_at) = timestamps(self.id);
        categories::ActiveModel {
            id: id_value(self.id),
            code: Set(self.code.clone()),
            designation: Set(self.designation.clone()),
            created_at,
            updated_at,
        }
    }
}

/// Convert SeaORM model to domain entity
impl From<categories::Model> for Category {
    fn from(model: categories::Model) -> Self {
        Category {
            id: Some(model.id),
            code: model.code,
            designation: model.designation,
        }
    }
}

//! PostgreSQL mapping for articles

use sea_orm::Set;

use super::repository::{id_value, timestamps, PostgresRepository, SeaOrmRecord};
use crate::domain::entities::{Article, ArticleRelation};
use crate::entity::articles;

/// PostgreSQL implementation of `Repository<Article>`
pub type PostgresArticleRepository = PostgresRepository<Article>;

impl SeaOrmRecord for Article {
    type Entity = articles::Entity;
    type ActiveModel = articles::ActiveModel;

    fn id_column() -> articles::Column {
        articles::Column::Id
    }

    fn natural_key_column() -> Option<articles::Column> {
        Some(articles::Column::Code)
    }

    fn relation_column(relation: ArticleRelation) -> articles::Column {
        match relation {
            ArticleRelation::Category => articles::Column::CategoryId,
        }
    }

    fn to_active_model(&self) -> articles::ActiveModel {
        let (created_at, updated_at) = timestamps(self.id);
        articles::ActiveModel {
            id: id_value(self.id),
            code: Set(self.code.clone()),
            designation: Set(self.designation.clone()),
            unit_price_excl_tax: Set(self.unit_price_excl_tax),
            vat_rate: Set(self.vat_rate),
            unit_price_incl_tax: Set(self.unit_price_incl_tax),
            photo: Set(self.photo.clone()),
            category_id: Set(self.category_id),
            created_at,
            updated_at,
        }
    }
}

/// Convert SeaORM model to domain entity
impl From<articles::Model> for Article {
    fn from(model: articles::Model) -> Self {
        Article {
            id: Some(model.id),
            code: model.code,
            designation: model.designation,
            unit_price_excl_tax: model.unit_price_excl_tax,
            vat_rate: model.vat_rate,
            unit_price_incl_tax: model.unit_price_incl_tax,
            photo: model.photo,
            category_id: model.category_id,
        }
    }
}

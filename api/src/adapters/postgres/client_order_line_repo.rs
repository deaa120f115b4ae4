//! PostgreSQL mapping for client_order_lines

use sea_orm::Set;

use super::repository::{id_value, timestamps, PostgresRepository, SeaOrmRecord};
use crate::domain::entities::{ClientOrderLine, ClientOrderLineRelation};
use crate::entity::client_order_lines;

/// PostgreSQL implementation of `Repository<ClientOrderLine>`
pub type PostgresClientOrderLineRepository = PostgresRepository<ClientOrderLine>;

impl SeaOrmRecord for ClientOrderLine {
    type Entity = client_order_lines::Entity;
    type ActiveModel = client_order_lines::ActiveModel;

    fn id_column() -> client_order_lines::Column {
        client_order_lines::Column::Id
    }

    fn relation_column(relation: ClientOrderLineRelation) -> client_order_lines::Column {
        match relation {
            ClientOrderLineRelation::ClientOrder => client_order_lines::Column::ClientOrderId,
            ClientOrderLineRelation::Article => client_order_lines::Column::ArticleId,
        }
    }

    fn to_active_model(&self) -> client_order_lines::ActiveModel {
        let (created_at, updated_at) = timestamps(self.id);
        client_order_lines::ActiveModel {
            id: id_value(self.id),
            client_order_id: Set(self.client_order_id),
            article_id: Set(self.article_id),
            quantity: Set(self.quantity),
            unit_price: Set(self.unit_price),
            created_at,
            updated_at,
        }
    }
}

/// Convert SeaORM model to domain entity
impl From<client_order_lines::Model> for ClientOrderLine {
    fn from(model: client_order_lines::Model) -> Self {
        ClientOrderLine {
            id: Some(model.id),
            client_order_id: model.client_order_id,
            article_id: model.article_id,
            quantity: model.quantity,
            unit_price: model.unit_price,
        }
    }
}

//! PostgreSQL mapping for client_orders

use chrono::Utc;
use sea_orm::Set;

use super::repository::{id_value, timestamps, PostgresRepository, SeaOrmRecord};
use crate::domain::entities::{ClientOrder, ClientOrderRelation};
use crate::entity::client_orders;

/// PostgreSQL implementation of `Repository<ClientOrder>`
pub type PostgresClientOrderRepository = PostgresRepository<ClientOrder>;

impl SeaOrmRecord for ClientOrder {
    type Entity = client_orders::Entity;
    type ActiveModel = client_orders::ActiveModel;

    fn id_column() -> client_orders::Column {
        client_orders::Column::Id
    }

    fn natural_key_column() -> Option<client_orders::Column> {
        Some(client_orders::Column::Code)
    }

    fn relation_column(relation: ClientOrderRelation) -> client_orders::Column {
        match relation {
            ClientOrderRelation::Client => client_orders::Column::ClientId,
        }
    }

    fn to_active_model(&self) -> client_orders::ActiveModel {
        let (created_at, updated_at) = timestamps(self.id);
        client_orders::ActiveModel {
            id: id_value(self.id),
            code: Set(self.code.clone()),
            order_date: Set(self.order_date.fixed_offset()),
            status: Set(self.status.to_string()),
            client_id: Set(self.client_id),
            created_at,
            updated_at,
        }
    }
}

/// Convert SeaORM model to domain entity
impl From<client_orders::Model> for ClientOrder {
    fn from(model: client_orders::Model) -> Self {
        ClientOrder {
            id: Some(model.id),
            code: model.code,
            order_date: model.order_date.with_timezone(&Utc),
            status: model.status.parse().unwrap_or_default(),
            client_id: model.client_id,
        }
    }
}

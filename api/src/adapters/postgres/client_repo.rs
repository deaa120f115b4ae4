//! PostgreSQL mapping for clients
//!
//! The embedded address is flattened into `address_*`, `city`,
//! `postal_code` and `country` columns.

use sea_orm::Set;

use super::repository::{id_value, timestamps, PostgresRepository, SeaOrmRecord};
use crate::domain::entities::{Address, NoRelation, Client};
use crate::entity::clients;

/// PostgreSQL implementation of `Repository<Client>`
pub type PostgresClientRepository = PostgresRepository<Client>;

impl SeaOrmRecord for Client {
    type Entity = clients::Entity;
    type ActiveModel = clients::ActiveModel;

    fn id_column() -> clients::Column {
        clients::Column::Id
    }

    fn relation_column(relation: NoRelation) -> clients::Column {
        match relation {}
    }

    fn to_active_model(&self) -> clients::ActiveModel {
        let (created_at, updated_at) = timestamps(self.id);
        clients::ActiveModel {
            id: id_value(self.id),
            first_name: Set(self.first_name.clone()),
            last_name: Set(self.last_name.clone()),
            address_line1: Set(self.address.line1.clone()),
            address_line2: Set(self.address.line2.clone()),
            city: Set(self.address.city.clone()),
            postal_code: Set(self.address.postal_code.clone()),
            country: Set(self.address.country.clone()),
            photo: Set(self.photo.clone()),
            email: Set(self.email.clone()),
            phone: Set(self.phone.clone()),
            created_at,
            updated_at,
        }
    }
}

/// Convert SeaORM model to domain entity
impl From<clients::Model> for Client {
    fn from(model: clients::Model) -> Self {
        Client {
            id: Some(model.id),
            first_name: model.first_name,
            last_name: model.last_name,
            address: Address {
                line1: model.address_line1,
                line2: model.address_line2,
                city: model.city,
                postal_code: model.postal_code,
                country: model.country,
            },
            photo: model.photo,
            email: model.email,
            phone: model.phone,
        }
    }
}

//! Client and supplier DTOs, which share the same contact shape

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Address, Client, Supplier};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressDto {
    pub line1: Option<String>,
    pub line2: Option<String>,
    pub city: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
}

impl From<Address> for AddressDto {
    fn from(address: Address) -> Self {
        Self {
            line1: Some(address.line1),
            line2: address.line2,
            city: Some(address.city),
            postal_code: Some(address.postal_code),
            country: Some(address.country),
        }
    }
}

impl From<&AddressDto> for Address {
    fn from(dto: &AddressDto) -> Self {
        Self {
            line1: dto.line1.clone().unwrap_or_default(),
            line2: dto.line2.clone(),
            city: dto.city.clone().unwrap_or_default(),
            postal_code: dto.postal_code.clone().unwrap_or_default(),
            country: dto.country.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientDto {
    pub id: Option<i32>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub address: Option<AddressDto>,
    pub photo: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl ClientDto {
    pub fn reference(id: i32) -> Self {
        Self {
            id: Some(id),
            ..Default::default()
        }
    }
}

impl From<Client> for ClientDto {
    fn from(client: Client) -> Self {
        Self {
            id: client.id,
            first_name: Some(client.first_name),
            last_name: Some(client.last_name),
            address: Some(client.address.into()),
            photo: client.photo,
            email: Some(client.email),
            phone: Some(client.phone),
        }
    }
}

impl From<&ClientDto> for Client {
    fn from(dto: &ClientDto) -> Self {
        Self {
            id: dto.id,
            first_name: dto.first_name.clone().unwrap_or_default(),
            last_name: dto.last_name.clone().unwrap_or_default(),
            address: dto.address.as_ref().map(Address::from).unwrap_or_default(),
            photo: dto.photo.clone(),
            email: dto.email.clone().unwrap_or_default(),
            phone: dto.phone.clone().unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupplierDto {
    pub id: Option<i32>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub address: Option<AddressDto>,
    pub photo: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl SupplierDto {
    pub fn reference(id: i32) -> Self {
        Self {
            id: Some(id),
            ..Default::default()
        }
    }
}

impl From<Supplier> for SupplierDto {
    fn from(supplier: Supplier) -> Self {
        Self {
            id: supplier.id,
            first_name: Some(supplier.first_name),
            last_name: Some(supplier.last_name),
            address: Some(supplier.address.into()),
            photo: supplier.photo,
            email: Some(supplier.email),
            phone: Some(supplier.phone),
        }
    }
}

impl From<&SupplierDto> for Supplier {
    fn from(dto: &SupplierDto) -> Self {
        Self {
            id: dto.id,
            first_name: dto.first_name.clone().unwrap_or_default(),
            last_name: dto.last_name.clone().unwrap_or_default(),
            address: dto.address.as_ref().map(Address::from).unwrap_or_default(),
            photo: dto.photo.clone(),
            email: dto.email.clone().unwrap_or_default(),
            phone: dto.phone.clone().unwrap_or_default(),
        }
    }
}

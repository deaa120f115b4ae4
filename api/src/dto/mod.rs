//! Transport DTOs
//!
//! The externally visible shape of each entity. Every field is optional on the
//! way in so validators can report all missing fields at once. Related
//! entities are nested as DTOs carrying at least their id.
//!
//! Mapping is expressed as `From<Record> for Dto` and `From<&Dto> for Record`.

pub mod article;
pub mod category;
pub mod contact;
pub mod line;
pub mod order;
pub mod sale;

pub use article::ArticleDto;
pub use category::CategoryDto;
pub use contact::{AddressDto, ClientDto, SupplierDto};
pub use line::{ClientOrderLineDto, SalesLineDto, SupplierOrderLineDto};
pub use order::{ClientOrderDto, SupplierOrderDto};
pub use sale::SaleDto;

/// Id of a nested DTO, if both the DTO and its id are present
pub(crate) fn nested_id<T>(nested: &Option<T>, id: impl Fn(&T) -> Option<i32>) -> Option<i32> {
    nested.as_ref().and_then(id)
}

/// Business codes are stored without surrounding whitespace
pub(crate) fn trimmed_code(code: &Option<String>) -> String {
    code.as_deref().map(str::trim).unwrap_or_default().to_string()
}

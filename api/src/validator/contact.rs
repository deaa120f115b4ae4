//! Client and supplier validation
//!
//! Both kinds share the same contact rules; only the label differs.

use super::{
    is_blank, is_valid_email, limit_len, null_object, require_text, ADDRESS_LINE_MAX_LEN,
    EMAIL_MAX_LEN, NAME_MAX_LEN, PHONE_MAX_LEN, PHOTO_MAX_LEN, POSTAL_CODE_MAX_LEN,
};
use crate::dto::{AddressDto, ClientDto, SupplierDto};

pub fn validate_client(dto: Option<&ClientDto>) -> Vec<String> {
    match dto {
        None => null_object("Client"),
        Some(dto) => validate_contact(
            "Client",
            &dto.first_name,
            &dto.last_name,
            &dto.email,
            &dto.phone,
            &dto.photo,
            dto.address.as_ref(),
        ),
    }
}

pub fn validate_supplier(dto: Option<&SupplierDto>) -> Vec<String> {
    match dto {
        None => null_object("Supplier"),
        Some(dto) => validate_contact(
            "Supplier",
            &dto.first_name,
            &dto.last_name,
            &dto.email,
            &dto.phone,
            &dto.photo,
            dto.address.as_ref(),
        ),
    }
}

fn validate_contact(
    kind: &str,
    first_name: &Option<String>,
    last_name: &Option<String>,
    email: &Option<String>,
    phone: &Option<String>,
    photo: &Option<String>,
    address: Option<&AddressDto>,
) -> Vec<String> {
    let mut errors = Vec::new();
    require_text(
        &mut errors,
        first_name,
        &format!("{} first name is required", kind),
    );
    require_text(
        &mut errors,
        last_name,
        &format!("{} last name is required", kind),
    );

    match email.as_deref().map(str::trim) {
        None | Some("") => errors.push(format!("{} email is required", kind)),
        Some(email) if !is_valid_email(email) => {
            errors.push(format!("{} email is not a valid address", kind))
        }
        Some(_) => {}
    }

    require_text(&mut errors, phone, &format!("{} phone is required", kind));
    errors.extend(validate_address(kind, address));

    let fields = [
        (first_name, NAME_MAX_LEN, "first name"),
        (last_name, NAME_MAX_LEN, "last name"),
        (email, EMAIL_MAX_LEN, "email"),
        (phone, PHONE_MAX_LEN, "phone"),
        (photo, PHOTO_MAX_LEN, "photo"),
    ];
    for (value, max, field) in fields {
        limit_len(&mut errors, value, max, &format!("{} {}", kind, field));
    }
    errors
}

fn validate_address(kind: &str, address: Option<&AddressDto>) -> Vec<String> {
    let Some(address) = address else {
        return vec![format!("{} address is required", kind)];
    };

    let mut errors = Vec::new();
    if is_blank(&address.line1) {
        errors.push(format!("{} address line 1 is required", kind));
    }
    if is_blank(&address.city) {
        errors.push(format!("{} address city is required", kind));
    }
    if is_blank(&address.postal_code) {
        errors.push(format!("{} address postal code is required", kind));
    }
    if is_blank(&address.country) {
        errors.push(format!("{} address country is required", kind));
    }

    let fields = [
        (&address.line1, ADDRESS_LINE_MAX_LEN, "line 1"),
        (&address.line2, ADDRESS_LINE_MAX_LEN, "line 2"),
        (&address.city, NAME_MAX_LEN, "city"),
        (&address.postal_code, POSTAL_CODE_MAX_LEN, "postal code"),
        (&address.country, NAME_MAX_LEN, "country"),
    ];
    for (value, max, field) in fields {
        limit_len(&mut errors, value, max, &format!("{} address {}", kind, field));
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    fn address() -> AddressDto {
        AddressDto {
            line1: Some("1 Main Street".to_string()),
            line2: None,
            city: Some("Springfield".to_string()),
            postal_code: Some("12345".to_string()),
            country: Some("US".to_string()),
        }
    }

    fn valid_client() -> ClientDto {
        ClientDto {
            id: None,
            first_name: Some("Ada".to_string()),
            last_name: Some("Lovelace".to_string()),
            address: Some(address()),
            photo: None,
            email: Some("ada@example.com".to_string()),
            phone: Some("555-0100".to_string()),
        }
    }

    #[test]
    fn valid_client_passes() {
        assert!(validate_client(Some(&valid_client())).is_empty());
    }

    #[test]
    fn null_supplier() {
        assert_eq!(validate_supplier(None), vec!["Supplier object is null"]);
    }

    #[test]
    fn empty_client_reports_every_field() {
        let errors = validate_client(Some(&ClientDto::default()));
        assert_eq!(
            errors,
            vec![
                "Client first name is required",
                "Client last name is required",
                "Client email is required",
                "Client phone is required",
                "Client address is required",
            ]
        );
    }

    #[test]
    fn malformed_email_is_reported() {
        let dto = ClientDto {
            email: Some("ada-at-example".to_string()),
            ..valid_client()
        };
        assert_eq!(
            validate_client(Some(&dto)),
            vec!["Client email is not a valid address"]
        );
    }

    #[test]
    fn overlong_contact_fields_are_listed() {
        let dto = ClientDto {
            last_name: Some("L".repeat(129)),
            phone: Some("5".repeat(65)),
            address: Some(AddressDto {
                postal_code: Some("9".repeat(33)),
                ..address()
            }),
            ..valid_client()
        };
        assert_eq!(
            validate_client(Some(&dto)),
            vec![
                "Client address postal code must not exceed 32 characters",
                "Client last name must not exceed 128 characters",
                "Client phone must not exceed 64 characters",
            ]
        );
    }

    #[test]
    fn incomplete_address_lists_each_missing_part() {
        let dto = SupplierDto {
            id: None,
            first_name: Some("Acme".to_string()),
            last_name: Some("Corp".to_string()),
            address: Some(AddressDto {
                line1: Some("1 Main Street".to_string()),
                ..Default::default()
            }),
            photo: None,
            email: Some("sales@acme.test".to_string()),
            phone: Some("555-0101".to_string()),
        };
        assert_eq!(
            validate_supplier(Some(&dto)),
            vec![
                "Supplier address city is required",
                "Supplier address postal code is required",
                "Supplier address country is required",
            ]
        );
    }
}

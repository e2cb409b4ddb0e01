use crate::fields::{
    CUSTOMER_NOTE, SHIPPING_ADDRESS_1, SHIPPING_ADDRESS_2, SHIPPING_CITY, SHIPPING_EMAIL,
    SHIPPING_FIRST_NAME, SHIPPING_LAST_NAME, SHIPPING_PHONE, SHIPPING_POSTCODE,
};

/// Returns the user-facing display label for a field name.
///
/// The nine known fields have fixed labels. Any other field name gets a
/// synthesized label: underscores become spaces and the first character of
/// the whole string is uppercased. Only the first character is touched, so
/// `"shipping_country"` becomes `"Shipping country"`, not `"Shipping
/// Country"`.
pub fn label_for(field: &str) -> String {
    let known = match field {
        SHIPPING_FIRST_NAME => Some("First Name"),
        SHIPPING_LAST_NAME => Some("Last Name"),
        SHIPPING_PHONE => Some("Mobile Phone"),
        SHIPPING_EMAIL => Some("Email"),
        SHIPPING_ADDRESS_1 => Some("Street Address"),
        SHIPPING_ADDRESS_2 => Some("Apartment"),
        SHIPPING_CITY => Some("Town / City"),
        SHIPPING_POSTCODE => Some("Postal Code"),
        CUSTOMER_NOTE => Some("Order Notes"),
        _ => None,
    };
    if let Some(label) = known {
        return label.to_string();
    }

    let spaced = field.replace('_', " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[test]
fn test_label_for_known_fields() {
    assert_eq!(label_for(SHIPPING_FIRST_NAME), "First Name");
    assert_eq!(label_for(SHIPPING_PHONE), "Mobile Phone");
    assert_eq!(label_for(SHIPPING_CITY), "Town / City");
    assert_eq!(label_for(CUSTOMER_NOTE), "Order Notes");
}

#[test]
fn test_label_for_fallback_capitalizes_first_char_only() {
    assert_eq!(label_for("shipping_country"), "Shipping country");
    assert_eq!(label_for("billing_company_name"), "Billing company name");
}

#[test]
fn test_label_for_empty_field_name() {
    assert_eq!(label_for(""), "");
}

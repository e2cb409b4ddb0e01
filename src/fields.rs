// Field-name identifiers as they appear in submitted form data. These are
// defined by the host form, not by this crate.
pub const SHIPPING_FIRST_NAME: &str = "shipping_first_name";
pub const SHIPPING_LAST_NAME: &str = "shipping_last_name";
pub const SHIPPING_PHONE: &str = "shipping_phone";
pub const SHIPPING_EMAIL: &str = "shipping_email";
pub const SHIPPING_ADDRESS_1: &str = "shipping_address_1";
pub const SHIPPING_ADDRESS_2: &str = "shipping_address_2";
pub const SHIPPING_CITY: &str = "shipping_city";
pub const SHIPPING_POSTCODE: &str = "shipping_postcode";
pub const CUSTOMER_NOTE: &str = "customer_note";

/// The shipping fields checked on checkout submission. The checkout entry
/// point appends [CUSTOMER_NOTE] after sourcing it from the raw request.
pub const SHIPPING_FIELDS: [&str; 8] = [
    SHIPPING_FIRST_NAME,
    SHIPPING_LAST_NAME,
    SHIPPING_PHONE,
    SHIPPING_EMAIL,
    SHIPPING_ADDRESS_1,
    SHIPPING_ADDRESS_2,
    SHIPPING_CITY,
    SHIPPING_POSTCODE,
];

/// The fields checked when the account shipping address is edited.
pub const ACCOUNT_FIELDS: [&str; 9] = [
    SHIPPING_FIRST_NAME,
    SHIPPING_LAST_NAME,
    SHIPPING_PHONE,
    SHIPPING_EMAIL,
    SHIPPING_ADDRESS_1,
    SHIPPING_ADDRESS_2,
    SHIPPING_CITY,
    SHIPPING_POSTCODE,
    CUSTOMER_NOTE,
];

/// Determines which character rule and message template apply to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// Unicode letters and whitespace only.
    PersonName,
    /// ASCII digits only.
    Phone,
    /// Must match the full `local@domain.tld` shape.
    Email,
    /// Letters, digits, whitespace, `,` `.` `-` `?` `!`.
    Note,
    /// Letters, digits, whitespace, `,` `.` `-`. Also the fallback for any
    /// field name this crate does not know about.
    AddressText,
}

/// Classifies a field name into exactly one [Category] by exact name match.
pub fn classify(field: &str) -> Category {
    match field {
        SHIPPING_FIRST_NAME | SHIPPING_LAST_NAME => Category::PersonName,
        SHIPPING_PHONE => Category::Phone,
        SHIPPING_EMAIL => Category::Email,
        CUSTOMER_NOTE => Category::Note,
        _ => Category::AddressText,
    }
}

#[test]
fn test_classify_known_fields() {
    assert_eq!(classify(SHIPPING_FIRST_NAME), Category::PersonName);
    assert_eq!(classify(SHIPPING_LAST_NAME), Category::PersonName);
    assert_eq!(classify(SHIPPING_PHONE), Category::Phone);
    assert_eq!(classify(SHIPPING_EMAIL), Category::Email);
    assert_eq!(classify(CUSTOMER_NOTE), Category::Note);
    assert_eq!(classify(SHIPPING_CITY), Category::AddressText);
}

#[test]
fn test_classify_unknown_field_falls_back_to_address_text() {
    assert_eq!(classify("shipping_country"), Category::AddressText);
    assert_eq!(classify("billing_first_name"), Category::AddressText);
}

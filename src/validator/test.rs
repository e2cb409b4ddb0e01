use super::FieldValidator;
use crate::fields::{
    CUSTOMER_NOTE, SHIPPING_CITY, SHIPPING_EMAIL, SHIPPING_FIRST_NAME, SHIPPING_PHONE,
};
use std::collections::HashMap;

fn values(pairs: &[(&str, &str)]) -> HashMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn validator() -> FieldValidator {
    let _ = env_logger::builder().is_test(true).try_init();
    FieldValidator::new().unwrap()
}

#[test]
fn test_empty_and_absent_values_are_skipped() {
    let v = validator();
    let vals = values(&[(SHIPPING_FIRST_NAME, "")]);
    let errors = v.validate(&vals, &[SHIPPING_FIRST_NAME, SHIPPING_PHONE]);
    assert!(errors.is_empty());
}

#[test]
fn test_person_name_allows_letters_and_spaces() {
    let v = validator();
    let vals = values(&[(SHIPPING_FIRST_NAME, "Anne Marie")]);
    assert!(v.validate(&vals, &[SHIPPING_FIRST_NAME]).is_empty());
}

#[test]
fn test_person_name_rejects_digits() {
    let v = validator();
    let vals = values(&[(SHIPPING_FIRST_NAME, "Anne23")]);
    let errors = v.validate(&vals, &[SHIPPING_FIRST_NAME]);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].field, SHIPPING_FIRST_NAME);
    assert_eq!(
        errors[0].message,
        "First Name should contain only letters and spaces."
    );
}

#[test]
fn test_person_name_allows_unicode_letters() {
    let v = validator();
    let vals = values(&[(SHIPPING_FIRST_NAME, "Renée Øyvind")]);
    assert!(v.validate(&vals, &[SHIPPING_FIRST_NAME]).is_empty());
}

#[test]
fn test_phone_allows_digits_only() {
    let v = validator();
    let vals = values(&[(SHIPPING_PHONE, "5551234")]);
    assert!(v.validate(&vals, &[SHIPPING_PHONE]).is_empty());
}

#[test]
fn test_phone_rejects_hyphen() {
    let v = validator();
    let vals = values(&[(SHIPPING_PHONE, "555-1234")]);
    let errors = v.validate(&vals, &[SHIPPING_PHONE]);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "Mobile Phone should contain only numbers.");
}

#[test]
fn test_email_accepts_plain_and_subaddressed_forms() {
    let v = validator();
    for addr in ["a@b.co", "a.b+c@sub.domain.io"] {
        let vals = values(&[(SHIPPING_EMAIL, addr)]);
        assert!(v.validate(&vals, &[SHIPPING_EMAIL]).is_empty(), "{addr}");
    }
}

#[test]
fn test_email_rejects_missing_top_level_segment() {
    let v = validator();
    let vals = values(&[(SHIPPING_EMAIL, "a@b")]);
    let errors = v.validate(&vals, &[SHIPPING_EMAIL]);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "Email is not a valid email address.");
}

#[test]
fn test_note_allows_basic_punctuation() {
    let v = validator();
    let vals = values(&[(CUSTOMER_NOTE, "Great, thanks!")]);
    assert!(v.validate(&vals, &[CUSTOMER_NOTE]).is_empty());
}

#[test]
fn test_note_rejects_hash_with_fixed_message() {
    let v = validator();
    let vals = values(&[(CUSTOMER_NOTE, "Great #1")]);
    let errors = v.validate(&vals, &[CUSTOMER_NOTE]);
    assert_eq!(errors.len(), 1);
    // The note message never substitutes a label.
    assert_eq!(errors[0].message, "Order Notes contains invalid characters.");
}

#[test]
fn test_address_text_allows_comma_period_hyphen() {
    let v = validator();
    let vals = values(&[(SHIPPING_CITY, "New-York, Town.")]);
    assert!(v.validate(&vals, &[SHIPPING_CITY]).is_empty());
}

#[test]
fn test_address_text_rejects_underscore() {
    let v = validator();
    let vals = values(&[(SHIPPING_CITY, "New_York")]);
    let errors = v.validate(&vals, &[SHIPPING_CITY]);
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].message, "Town / City contains invalid characters.");
}

#[test]
fn test_unknown_field_uses_address_rule_and_synthesized_label() {
    let v = validator();
    let vals = values(&[("shipping_country", "France!")]);
    let errors = v.validate(&vals, &["shipping_country"]);
    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors[0].message,
        "Shipping country contains invalid characters."
    );
}

#[test]
fn test_failures_preserve_field_list_order() {
    let v = validator();
    let vals = values(&[(SHIPPING_FIRST_NAME, "J0hn"), (SHIPPING_EMAIL, "bad")]);
    let errors = v.validate(&vals, &[SHIPPING_FIRST_NAME, SHIPPING_EMAIL]);
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0].field, SHIPPING_FIRST_NAME);
    assert!(errors[0].message.contains("First Name"));
    assert_eq!(errors[1].field, SHIPPING_EMAIL);
    assert!(errors[1].message.contains("Email"));
}

#[test]
fn test_validate_is_deterministic() {
    let v = validator();
    let vals = values(&[
        (SHIPPING_FIRST_NAME, "J0hn"),
        (SHIPPING_PHONE, "555-1234"),
        (SHIPPING_CITY, "New_York"),
    ]);
    let fields = [SHIPPING_FIRST_NAME, SHIPPING_PHONE, SHIPPING_CITY];
    let first = v.validate(&vals, &fields);
    let second = v.validate(&vals, &fields);
    assert_eq!(first, second);
}

#[test]
fn test_duplicated_field_names_report_twice() {
    let v = validator();
    let vals = values(&[(SHIPPING_PHONE, "555x")]);
    let errors = v.validate(&vals, &[SHIPPING_PHONE, SHIPPING_PHONE]);
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0], errors[1]);
}

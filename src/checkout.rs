use crate::collector::ErrorSink;
use crate::fields::{CUSTOMER_NOTE, SHIPPING_FIELDS};
use crate::sanitize::Sanitizer;
use crate::validator::FieldValidator;
use std::collections::HashMap;

/// Checkout-time validation.
///
/// `data` is the host-decoded field mapping for the submitted order. The
/// order note does not arrive in `data`, so it is sourced separately from
/// the raw request (`raw_note`), sanitized here, and appended to the
/// checked fields. Every failure is fed into the caller-supplied `errors`
/// sink, which the host uses to block submission and render notices.
pub fn validate_checkout(
    validator: &FieldValidator,
    data: &HashMap<String, String>,
    raw_note: Option<&str>,
    errors: &mut dyn ErrorSink,
) {
    let sanitizer = Sanitizer::new();
    let note = raw_note.map(|raw| sanitizer.clean(raw)).unwrap_or_default();

    let mut values = data.clone();
    values.insert(CUSTOMER_NOTE.to_string(), note);

    let mut fields = SHIPPING_FIELDS.to_vec();
    fields.push(CUSTOMER_NOTE);

    for failure in validator.validate(&values, &fields) {
        errors.add(&failure.field, &failure.message);
    }
}

use crate::collector::{ErrorSink, FieldErrors};
use crate::fields::ACCOUNT_FIELDS;
use crate::sanitize::Sanitizer;
use crate::validator::FieldValidator;
use std::collections::HashMap;

/// Which saved address the account form is editing. Only the shipping
/// address is subject to these checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressType {
    Billing,
    Shipping,
}

/// Host notice kinds. This crate only ever produces [Severity::Error].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Notice,
    Success,
}

/// A user-facing notice for the host to display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub severity: Severity,
    pub text: String,
}

/// Account-address-edit validation.
///
/// Runs only when the shipping address is being edited. Each checked field
/// is read from the raw request mapping and sanitized (absent fields read
/// as empty and are skipped by the validator). Unlike the checkout path,
/// failures are not reported per field: all messages are joined into a
/// single error notice, returned for the host to surface.
pub fn validate_account_address(
    validator: &FieldValidator,
    address_type: AddressType,
    raw: &HashMap<String, String>,
) -> Option<Notice> {
    if address_type != AddressType::Shipping {
        return None;
    }

    let sanitizer = Sanitizer::new();
    let mut values = HashMap::new();
    for field in ACCOUNT_FIELDS {
        let value = raw.get(field).map(|v| sanitizer.clean(v)).unwrap_or_default();
        values.insert(field.to_string(), value);
    }

    let mut errors = FieldErrors::new();
    for failure in validator.validate(&values, &ACCOUNT_FIELDS) {
        errors.add(&failure.field, &failure.message);
    }
    if !errors.has_errors() {
        return None;
    }

    log::debug!("account shipping address failed validation ({} fields)", errors.len());
    let text = errors.messages().collect::<Vec<_>>().join("\n");
    Some(Notice {
        severity: Severity::Error,
        text,
    })
}

//! Validation for shipping-related checkout and account-address form
//! fields. Each checked field is classified into a category (person name,
//! phone, email, address text, order note), its value is tested against the
//! category's character rule, and every failure is reported with a
//! user-facing message. Empty values are exempt: required-ness is the host
//! form's concern, this crate only rejects disallowed characters.

/// Field-name constants, the fixed checked-field lists, and the
/// field-to-category classification.
pub mod fields;

/// Display-label lookup for field names.
pub mod label;

/// The core validation routine and its rule table.
pub mod validator;

/// The [ErrorSink] seam failures are reported through, and a concrete
/// order-preserving collector.
pub mod collector;

/// Cleanup applied to raw request values before validation.
pub mod sanitize;

/// Checkout-time entry point.
pub mod checkout;

/// Account-address-edit entry point.
pub mod account;

pub use account::{validate_account_address, AddressType, Notice, Severity};
pub use checkout::validate_checkout;
pub use collector::{ErrorSink, FieldErrors};
pub use fields::{classify, Category};
pub use label::label_for;
pub use validator::{FieldValidator, ValidationError};

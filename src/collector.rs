/// Destination for validation failures. The host framework's checkout flow
/// supplies its own implementation; [FieldErrors] is the in-crate
/// implementation the account path builds for itself.
pub trait ErrorSink {
    /// Records a failure message for a field.
    fn add(&mut self, field: &str, message: &str);

    /// Whether any failure has been recorded.
    fn has_errors(&self) -> bool;
}

/// An order-preserving collection of `(field, message)` pairs.
#[derive(Debug, Default)]
pub struct FieldErrors {
    entries: Vec<(String, String)>,
}

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// The recorded messages, in insertion order.
    pub fn messages(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(_, message)| message.as_str())
    }

    /// The recorded `(field, message)` pairs, in insertion order.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(field, message)| (field.as_str(), message.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl ErrorSink for FieldErrors {
    fn add(&mut self, field: &str, message: &str) {
        self.entries.push((field.to_string(), message.to_string()));
    }

    fn has_errors(&self) -> bool {
        !self.entries.is_empty()
    }
}

#[test]
fn test_field_errors_preserve_insertion_order() {
    let mut errors = FieldErrors::new();
    assert!(!errors.has_errors());

    errors.add("shipping_phone", "Mobile Phone should contain only numbers.");
    errors.add("shipping_city", "Town / City contains invalid characters.");

    assert!(errors.has_errors());
    assert_eq!(errors.len(), 2);
    let fields: Vec<_> = errors.entries().map(|(field, _)| field).collect();
    assert_eq!(fields, ["shipping_phone", "shipping_city"]);
}

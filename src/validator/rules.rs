use crate::fields::Category;
use crate::label::label_for;
use anyhow::{Context, Result};
use regex::Regex;

/// Matches any character that is not a Unicode letter or whitespace.
pub const PERSON_NAME_DISALLOWED: &str = r"[^\p{L}\s]";

/// Matches any character that is not an ASCII digit.
pub const PHONE_DISALLOWED: &str = r"[^0-9]";

/// The full shape a valid email address must match. ASCII only, anchored at
/// both ends.
pub const EMAIL_SHAPE: &str = r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}$";

/// Matches any character not safe for address fields: anything other than
/// letters, digits, whitespace, comma, period, or hyphen.
pub const ADDRESS_TEXT_DISALLOWED: &str = r"[^\p{L}0-9\s,.\-]";

/// Matches any character not safe for order notes: the address-text set
/// plus `?` and `!`.
pub const NOTE_DISALLOWED: &str = r"[^\p{L}0-9\s,.\-?!]";

/// The compiled per-category rules. Built once per [FieldValidator] and
/// reused across calls.
///
/// [FieldValidator]: crate::validator::FieldValidator
#[derive(Debug)]
pub struct RuleSet {
    person_name: Regex,
    phone: Regex,
    email: Regex,
    address_text: Regex,
    note: Regex,
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).with_context(|| format!("failed to compile validation pattern: {pattern}"))
}

impl RuleSet {
    pub fn compile() -> Result<Self> {
        Ok(Self {
            person_name: compile(PERSON_NAME_DISALLOWED)?,
            phone: compile(PHONE_DISALLOWED)?,
            email: compile(EMAIL_SHAPE)?,
            address_text: compile(ADDRESS_TEXT_DISALLOWED)?,
            note: compile(NOTE_DISALLOWED)?,
        })
    }

    /// Whether `value` satisfies the character rule for `category`. Email is
    /// a positive shape match; every other category rejects on the first
    /// disallowed character.
    pub fn is_valid(&self, category: Category, value: &str) -> bool {
        match category {
            Category::PersonName => !self.person_name.is_match(value),
            Category::Phone => !self.phone.is_match(value),
            Category::Email => self.email.is_match(value),
            Category::AddressText => !self.address_text.is_match(value),
            Category::Note => !self.note.is_match(value),
        }
    }

    /// Renders the user-facing failure message for `field`. The note
    /// message is fixed text; all others substitute the field's display
    /// label.
    pub fn message(&self, category: Category, field: &str) -> String {
        match category {
            Category::PersonName => {
                format!("{} should contain only letters and spaces.", label_for(field))
            }
            Category::Phone => format!("{} should contain only numbers.", label_for(field)),
            Category::Email => format!("{} is not a valid email address.", label_for(field)),
            Category::AddressText => format!("{} contains invalid characters.", label_for(field)),
            Category::Note => String::from("Order Notes contains invalid characters."),
        }
    }
}

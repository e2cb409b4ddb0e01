use regex::Regex;

/// Matches an HTML/XML tag, including unclosed-at-end-of-input fragments.
const TAG: &str = r"<[^>]*>?";

/// Cleans raw request values before validation, the way the host form layer
/// is expected to: unslash, strip markup tags, drop control characters, and
/// collapse whitespace runs into single spaces.
#[derive(Debug)]
pub struct Sanitizer {
    tag: Regex,
}

impl Default for Sanitizer {
    fn default() -> Self {
        Self {
            tag: Regex::new(TAG).unwrap(),
        }
    }
}

impl Sanitizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes one level of backslash escaping: `\x` becomes `x` for any
    /// character `x`, including `\\` which becomes `\`. A trailing lone
    /// backslash is dropped.
    pub fn unslash(&self, raw: &str) -> String {
        let mut out = String::with_capacity(raw.len());
        let mut chars = raw.chars();
        while let Some(c) = chars.next() {
            if c == '\\' {
                if let Some(escaped) = chars.next() {
                    out.push(escaped);
                }
            } else {
                out.push(c);
            }
        }
        out
    }

    /// Produces a single-line text value from a raw request string:
    /// unslashes, strips tags, drops remaining control characters, and
    /// collapses whitespace (which also trims both ends).
    pub fn clean(&self, raw: &str) -> String {
        let unslashed = self.unslash(raw);
        let untagged = self.tag.replace_all(&unslashed, "");
        // Tabs and line breaks are control characters too, but they count
        // as whitespace to collapse rather than input to drop.
        let printable: String = untagged
            .chars()
            .filter(|c| !c.is_control() || c.is_whitespace())
            .collect();

        let cleaned = printable.split_whitespace().collect::<Vec<_>>().join(" ");
        if cleaned != raw {
            log::debug!("sanitized raw input ({} -> {} bytes)", raw.len(), cleaned.len());
        }
        cleaned
    }
}

#[test]
fn test_unslash_removes_escaping() {
    let s = Sanitizer::new();
    assert_eq!(s.unslash(r#"O\'Brien said \"hi\""#), r#"O'Brien said "hi""#);
    assert_eq!(s.unslash(r"a\\b"), r"a\b");
    assert_eq!(s.unslash(r"trailing\"), "trailing");
}

#[test]
fn test_clean_strips_tags() {
    let s = Sanitizer::new();
    assert_eq!(s.clean("<b>hi</b> there"), "hi there");
    assert_eq!(s.clean("broken <tag"), "broken");
}

#[test]
fn test_clean_drops_control_chars_and_collapses_whitespace() {
    let s = Sanitizer::new();
    assert_eq!(s.clean("  a\tb\r\nc  "), "a b c");
    assert_eq!(s.clean("a\u{0007}b"), "ab");
}

#[test]
fn test_clean_leaves_plain_text_untouched() {
    let s = Sanitizer::new();
    assert_eq!(s.clean("Please leave at the door."), "Please leave at the door.");
}

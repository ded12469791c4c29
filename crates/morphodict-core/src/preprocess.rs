use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// True when `text`, once NFC-composed, starts with a combining mark.
///
/// Source spreadsheets occasionally carry a stray diacritic in front of a
/// headword; such text cannot be typed or searched for.
pub fn starts_with_combining_mark(text: &str) -> bool {
    text.nfc().next().is_some_and(is_combining_mark)
}

/// Canonical decomposition used for locale independent ordering
pub fn sort_form(text: &str) -> String {
    text.nfd().collect()
}

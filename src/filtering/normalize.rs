//! Text normalization applied before language identification.
use unic_ucd::normal::decompose_compatible;
use unic_ucd::GeneralCategory;

/// Removes diacritics, then everything that is not a word character or a hyphen.
///
/// Characters are decomposed (NFKD), and only letters, numbers, connector punctuation (`_`...)
/// and `-` are kept. Combining marks and whitespace are dropped.
pub fn normalize(text: &str) -> String {
    let mut normalized = String::with_capacity(text.len());
    for c in text.chars() {
        decompose_compatible(c, |d| {
            if is_word_or_hyphen(d) {
                normalized.push(d);
            }
        });
    }
    normalized
}

#[inline]
fn is_word_or_hyphen(c: char) -> bool {
    if c == '-' {
        return true;
    }
    let category = GeneralCategory::of(c);
    category.is_letter()
        || category.is_number()
        || category == GeneralCategory::ConnectorPunctuation
}

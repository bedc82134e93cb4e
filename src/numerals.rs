//! Bengali numeral localization.
//!
//! The exam header presents counts in Bengali digits. The mapping is the
//! fixed ten-entry digit table; every other character passes through
//! unchanged, so signs and separators survive localization.

use phf::phf_map;

/// ASCII digit to Bengali digit glyph
static BENGALI_DIGITS: phf::Map<char, char> = phf_map! {
    '0' => '০',
    '1' => '১',
    '2' => '২',
    '3' => '৩',
    '4' => '৪',
    '5' => '৫',
    '6' => '৬',
    '7' => '৭',
    '8' => '৮',
    '9' => '৯',
};

/// Renders `n` in Bengali digits.
pub fn localize(n: usize) -> String {
    localize_str(&n.to_string())
}

/// Replaces every ASCII digit in `s` with its Bengali counterpart.
pub fn localize_str(s: &str) -> String {
    s.chars()
        .map(|c| BENGALI_DIGITS.get(&c).copied().unwrap_or(c))
        .collect()
}

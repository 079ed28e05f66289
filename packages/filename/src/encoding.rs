//! Repair of mis-encoded accented characters in filenames.
//!
//! Some report files went through a tool that read their UTF-8 names as
//! Latin-1/CP1252, so each accented character shows up as a `Ã`-led
//! two-character artifact. The table below maps every artifact observed
//! in the wild back to its accented character.

use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

/// Corrupted sequence → repaired character. The `à` artifact ends in a
/// no-break space (U+00A0, Latin-1 0xA0).
const MOJIBAKE: [(&str, &str); 11] = [
    ("Ã©", "é"),
    ("Ã¨", "è"),
    ("Ã\u{a0}", "à"),
    ("Ã´", "ô"),
    ("Ã»", "û"),
    ("Ã§", "ç"),
    ("Ã®", "î"),
    ("Ã¯", "ï"),
    ("Ã¼", "ü"),
    ("Ã‰", "É"),
    ("Ã€", "À"),
];

/// Substitutes every known corrupted sequence, then recomposes to NFC.
///
/// A no-op on correctly encoded input: every corrupted sequence starts
/// with `Ã`, which repaired output never reintroduces.
#[must_use]
pub fn repair(input: &str) -> String {
    let mut out = input.to_owned();
    for (broken, fixed) in MOJIBAKE {
        if out.contains(broken) {
            out = out.replace(broken, fixed);
        }
    }
    out.nfc().collect()
}

/// Removes diacritics (NFD decomposition, combining marks dropped) and
/// collapses internal whitespace.
#[must_use]
pub fn strip_accents(input: &str) -> String {
    let decomposed: String = input.nfd().filter(|c| !is_combining_mark(*c)).collect();
    decomposed.split_whitespace().collect::<Vec<_>>().join(" ")
}

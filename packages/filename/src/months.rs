//! French month-name resolution tables.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use crate::encoding;

/// Canonical capitalized French month labels, indexed by `month - 1`.
pub const MONTH_LABELS: [&str; 12] = [
    "Janvier",
    "Février",
    "Mars",
    "Avril",
    "Mai",
    "Juin",
    "Juillet",
    "Août",
    "Septembre",
    "Octobre",
    "Novembre",
    "Décembre",
];

/// Known lowercase month spellings: full names, 3–4 letter abbreviations,
/// and the accentless forms of août and décembre that show up in
/// manually typed filenames.
static MONTH_NAMES: LazyLock<BTreeMap<&'static str, u8>> = LazyLock::new(|| {
    BTreeMap::from([
        ("janvier", 1),
        ("janv", 1),
        ("jan", 1),
        ("février", 2),
        ("fevrier", 2),
        ("févr", 2),
        ("fevr", 2),
        ("fév", 2),
        ("fev", 2),
        ("mars", 3),
        ("mar", 3),
        ("avril", 4),
        ("avr", 4),
        ("mai", 5),
        ("juin", 6),
        ("juillet", 7),
        ("juil", 7),
        ("août", 8),
        ("aout", 8),
        ("septembre", 9),
        ("sept", 9),
        ("sep", 9),
        ("octobre", 10),
        ("oct", 10),
        ("novembre", 11),
        ("nov", 11),
        ("décembre", 12),
        ("decembre", 12),
        ("déc", 12),
        ("dec", 12),
    ])
});

/// Misspellings observed in renamed files.
static MONTH_TYPOS: LazyLock<BTreeMap<&'static str, u8>> =
    LazyLock::new(|| BTreeMap::from([("delcembre", 12), ("aoult", 8), ("aoul", 8)]));

/// Resolves a raw month token to a month number.
///
/// Tries, in order: the exact lowercased token against the canonical
/// table, its accent-stripped form against the same table, then the typo
/// table.
#[must_use]
pub fn resolve(token: &str) -> Option<u8> {
    let lower = token.trim().to_lowercase();
    if let Some(&month) = MONTH_NAMES.get(lower.as_str()) {
        return Some(month);
    }

    let stripped = encoding::strip_accents(&lower);
    if let Some(&month) = MONTH_NAMES.get(stripped.as_str()) {
        return Some(month);
    }

    let typo = MONTH_TYPOS
        .get(lower.as_str())
        .or_else(|| MONTH_TYPOS.get(stripped.as_str()))
        .copied();
    if let Some(month) = typo {
        log::debug!("month token {token:?} resolved through typo table to {month}");
    }
    typo
}

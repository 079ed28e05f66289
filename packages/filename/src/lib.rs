#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Filename-convention parser for OND commune report files.
//!
//! Report files are named by hand, so two conventions coexist
//! (`NN_Commune_Tokens_moisYYYY.pdf` with an ordinal month prefix and
//! `Commune_Tokens_moisYYYY.pdf` without), with inconsistent month
//! spellings, the occasional typo, and sometimes a botched encoding.
//! [`parse`] derives the commune display name, month number, canonical
//! month label, and year from any of these.

mod encoding;
mod months;

use std::sync::LazyLock;

use regex::Regex;

/// Errors from filename parsing. Both are non-retryable: the file has to
/// be renamed or re-supplied.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FilenameError {
    /// The filename matches neither recognized naming convention.
    #[error("filename format not recognized: {0}")]
    Format(String),

    /// A month token is present but maps to no known spelling.
    #[error("month not recognized: {0}")]
    Month(String),
}

/// A successfully parsed report filename.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedFilename {
    /// Commune display name, word separators replaced by spaces.
    pub commune: String,
    /// Month number, 1–12.
    pub month: u8,
    /// Canonical capitalized French month label.
    pub month_label: &'static str,
    /// Four-digit year.
    pub year: i32,
}

/// `NN_Commune_Tokens_moisYYYY`, the ordinal-prefix form.
///
/// Tried before [`BARE_RE`] so a leading numeric commune token is never
/// misread as the month-number prefix. The commune capture must stay
/// non-greedy: the month token is the shortest trailing run of
/// non-digit, non-underscore characters that still leaves a 4-digit
/// year.
static PREFIXED_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\d{1,2}_(?P<commune>.+?)_(?P<month>[^\d_]+?)(?P<year>\d{4})$")
        .expect("valid regex")
});

/// `Commune_Tokens_moisYYYY`, the form without the ordinal prefix.
static BARE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<commune>.+?)_(?P<month>[^\d_]+?)(?P<year>\d{4})$").expect("valid regex")
});

/// Parses a report filename into commune, month, and year.
///
/// # Errors
///
/// Returns [`FilenameError::Format`] when the name matches neither
/// convention, and [`FilenameError::Month`] when the month token resolves
/// to no known spelling.
pub fn parse(filename: &str) -> Result<ParsedFilename, FilenameError> {
    let base = strip_pdf_extension(filename.trim()).trim();
    let repaired = encoding::repair(base);

    let caps = PREFIXED_RE
        .captures(&repaired)
        .or_else(|| BARE_RE.captures(&repaired))
        .ok_or_else(|| FilenameError::Format(filename.to_owned()))?;

    let month_token = &caps["month"];
    let month = months::resolve(month_token)
        .ok_or_else(|| FilenameError::Month(month_token.to_owned()))?;

    let year: i32 = caps["year"]
        .parse()
        .map_err(|_| FilenameError::Format(filename.to_owned()))?;

    let commune = display_name(&caps["commune"]);
    log::debug!("parsed {filename:?} as {commune:?} {month}/{year}");

    Ok(ParsedFilename {
        commune,
        month,
        month_label: months::MONTH_LABELS[usize::from(month) - 1],
        year,
    })
}

/// Strips a trailing `.pdf` extension, case-insensitively.
fn strip_pdf_extension(name: &str) -> &str {
    let len = name.len();
    if len >= 4 && name.is_char_boundary(len - 4) && name[len - 4..].eq_ignore_ascii_case(".pdf")
    {
        &name[..len - 4]
    } else {
        name
    }
}

/// Turns the raw commune token group into a display name: underscores and
/// hyphens become spaces, runs of whitespace collapse, ends trimmed.
fn display_name(raw: &str) -> String {
    raw.replace(['_', '-'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_prefixed_form() {
        let parsed = parse("06_Saint_Alban_juin2024.pdf").unwrap();
        assert_eq!(parsed.commune, "Saint Alban");
        assert_eq!(parsed.month, 6);
        assert_eq!(parsed.month_label, "Juin");
        assert_eq!(parsed.year, 2024);
    }

    #[test]
    fn parses_bare_form() {
        let parsed = parse("Saint_Alban_aout2023.pdf").unwrap();
        assert_eq!(parsed.commune, "Saint Alban");
        assert_eq!(parsed.month, 8);
        assert_eq!(parsed.month_label, "Août");
        assert_eq!(parsed.year, 2023);
    }

    #[test]
    fn parses_single_digit_prefix() {
        let parsed = parse("6_Launac_mai2024.pdf").unwrap();
        assert_eq!(parsed.commune, "Launac");
        assert_eq!(parsed.month, 5);
    }

    #[test]
    fn parses_hyphenated_commune() {
        let parsed = parse("Saint-Paul-sur-Save_janvier2024.pdf").unwrap();
        assert_eq!(parsed.commune, "Saint Paul sur Save");
        assert_eq!(parsed.month, 1);
    }

    #[test]
    fn parses_uppercase_extension() {
        let parsed = parse("Cadours_juillet2024.PDF").unwrap();
        assert_eq!(parsed.commune, "Cadours");
        assert_eq!(parsed.month, 7);
    }

    #[test]
    fn parses_without_extension() {
        let parsed = parse("Cadours_juillet2024").unwrap();
        assert_eq!(parsed.month, 7);
    }

    #[test]
    fn parses_accented_month() {
        let parsed = parse("Grenade_février2024.pdf").unwrap();
        assert_eq!(parsed.month, 2);
        assert_eq!(parsed.month_label, "Février");
    }

    #[test]
    fn parses_month_abbreviation() {
        let parsed = parse("Grenade_sept2023.pdf").unwrap();
        assert_eq!(parsed.month, 9);
        assert_eq!(parsed.month_label, "Septembre");
    }

    #[test]
    fn repairs_mojibake_in_commune_and_month() {
        let parsed = parse("Saint_AmÃ©_aoÃ»t2024.pdf").unwrap();
        assert_eq!(parsed.commune, "Saint Amé");
        assert_eq!(parsed.month, 8);
    }

    #[test]
    fn resolves_typo_months() {
        assert_eq!(parse("Commune_delcembre2024.pdf").unwrap().month, 12);
        assert_eq!(parse("Commune_aoult2023.pdf").unwrap().month, 8);
    }

    #[test]
    fn every_canonical_spelling_parses() {
        let spellings = [
            ("janvier", 1),
            ("janv", 1),
            ("février", 2),
            ("fevrier", 2),
            ("mars", 3),
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
            ("octobre", 10),
            ("oct", 10),
            ("novembre", 11),
            ("nov", 11),
            ("décembre", 12),
            ("decembre", 12),
        ];
        for (spelling, expected) in spellings {
            let prefixed = parse(&format!("03_Le_Burgaud_{spelling}2024.pdf")).unwrap();
            assert_eq!(prefixed.month, expected, "prefixed {spelling}");
            assert_eq!(prefixed.commune, "Le Burgaud");

            let bare = parse(&format!("Le_Burgaud_{spelling}2024.pdf")).unwrap();
            assert_eq!(bare.month, expected, "bare {spelling}");
        }
    }

    #[test]
    fn rejects_unstructured_name() {
        let err = parse("rapport.pdf").unwrap_err();
        assert_eq!(err, FilenameError::Format("rapport.pdf".to_owned()));
    }

    #[test]
    fn rejects_unknown_month_with_token() {
        let err = parse("Commune_xyz2024.pdf").unwrap_err();
        assert_eq!(err, FilenameError::Month("xyz".to_owned()));
    }

    #[test]
    fn rejects_missing_year() {
        assert!(matches!(
            parse("Commune_juin.pdf"),
            Err(FilenameError::Format(_))
        ));
    }

    #[test]
    fn numeric_commune_token_is_not_eaten_by_prefix() {
        // Both conventions could match; the prefixed one wins, so the
        // leading ordinal never leaks into the commune name.
        let parsed = parse("31_Grenade_juin2024.pdf").unwrap();
        assert_eq!(parsed.commune, "Grenade");
    }
}

//! Numeric token scanning over normalized report text.
//!
//! Everything here operates on whitespace-collapsed text and returns
//! `None` for anything it cannot read confidently. A token that fails to
//! parse is absent, never zero and never an error.

use std::sync::LazyLock;

use regex::Regex;

use crate::ExtractionConfig;

static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

static INT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\d+").expect("valid regex"));

/// `(N-1 ‰ N ‰)` rate figures as printed in the general block.
static PER_MILLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"([0-9][0-9\s,]*)‰\s*([0-9][0-9\s,]*)‰").expect("valid regex")
});

/// Count in parentheses, ignoring any leading words inside them.
static PAREN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\(\s*[^)\d]*(\d[\d\s]*)").expect("valid regex"));

/// Collapses every whitespace run into a single space and trims.
///
/// Text-stream extraction inserts line breaks at visual positions, not
/// semantic ones, so all downstream lookups assume single-spaced text.
#[must_use]
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_RE.replace_all(text, " ").trim().to_string()
}

/// Parses a numeric token: internal whitespace stripped, comma read as
/// the decimal separator.
#[must_use]
pub fn parse_number(token: &str) -> Option<f64> {
    let cleaned: String = token
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| if c == ',' { '.' } else { c })
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse().ok()
}

/// Returns at most `max_chars` characters of text following the first
/// occurrence of `label`, or `None` when the label is absent.
#[must_use]
pub fn window_after(text: &str, label: &str, max_chars: usize) -> Option<String> {
    let start = text.find(label)? + label.len();
    Some(text[start..].chars().take(max_chars).collect())
}

/// Scans a window for the first `(N-1, N)` figure pair that survives the
/// plausibility filter.
///
/// A candidate is two whitespace-separated integers whose next
/// non-space character is `+`, `-`, `%`, or another digit: the shape of
/// a data pair followed by its variation column, as opposed to a legal
/// article reference or footnote number sitting nearby. Implausible
/// candidates are skipped and the scan continues.
#[must_use]
pub fn scan_figure_pair(window: &str, config: &ExtractionConfig) -> Option<(i64, i64)> {
    let tokens: Vec<(usize, usize, i64)> = INT_RE
        .find_iter(window)
        .filter_map(|m| m.as_str().parse::<i64>().ok().map(|v| (m.start(), m.end(), v)))
        .collect();

    for adjacent in tokens.windows(2) {
        let (_, first_end, first) = adjacent[0];
        let (second_start, second_end, second) = adjacent[1];

        let between = &window[first_end..second_start];
        if between.is_empty() || !between.chars().all(char::is_whitespace) {
            continue;
        }

        let Some(delimiter) = window[second_end..].chars().find(|c| !c.is_whitespace()) else {
            continue;
        };
        if !matches!(delimiter, '+' | '-' | '%') && !delimiter.is_ascii_digit() {
            continue;
        }

        if !is_plausible_pair(first, second, config) {
            log::debug!("rejected implausible figure pair ({first}, {second})");
            continue;
        }

        return Some((first, second));
    }

    None
}

/// Plausibility filter for a candidate figure pair.
///
/// Both members must stay under the configured maximum for a monthly
/// category count, and a large first member with a tiny second one is
/// read as an article-code reference (e.g. "(41, 2)"), not data.
const fn is_plausible_pair(first: i64, second: i64, config: &ExtractionConfig) -> bool {
    if first > config.max_plausible_count || second > config.max_plausible_count {
        return false;
    }
    !(first >= config.article_code_first_min && second < config.article_code_second_max)
}

/// First bare integer in a window.
#[must_use]
pub fn first_integer(window: &str) -> Option<i64> {
    INT_RE.find(window)?.as_str().parse().ok()
}

/// First integer in a window, skipping one leading 4-digit year token.
///
/// `Cumul 2024 : 156` resolves to 156, `Cumul : 156` to 156.
#[must_use]
pub fn integer_after_optional_year(window: &str) -> Option<i64> {
    let mut values = INT_RE
        .find_iter(window)
        .filter_map(|m| m.as_str().parse::<i64>().ok());
    let first = values.next()?;
    if (1900..=2099).contains(&first) {
        values.next()
    } else {
        Some(first)
    }
}

/// Count in parentheses within a window, e.g. `(156 faits)` or
/// `(cumul : 156)`.
#[must_use]
pub fn parenthesized_integer(window: &str) -> Option<i64> {
    let caps = PAREN_RE.captures(window)?;
    let digits: String = caps
        .get(1)?
        .as_str()
        .chars()
        .filter(char::is_ascii_digit)
        .collect();
    digits.parse().ok()
}

/// Second member of a `<rate> ‰ <rate> ‰` pair, the current-year rate.
#[must_use]
pub fn per_mille_pair(window: &str) -> Option<f64> {
    let caps = PER_MILLE_RE.captures(window)?;
    parse_number(caps.get(2)?.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> ExtractionConfig {
        ExtractionConfig::default()
    }

    #[test]
    fn collapses_whitespace_runs() {
        assert_eq!(
            normalize_whitespace("Vols\n  simples \t 3   7"),
            "Vols simples 3 7"
        );
    }

    #[test]
    fn parses_spaced_thousands() {
        assert_eq!(parse_number("12 345"), Some(12345.0));
    }

    #[test]
    fn parses_comma_decimal() {
        assert_eq!(parse_number("45,2"), Some(45.2));
    }

    #[test]
    fn unparseable_token_is_none() {
        assert_eq!(parse_number(""), None);
        assert_eq!(parse_number("n/a"), None);
    }

    #[test]
    fn pair_with_plus_delimiter() {
        assert_eq!(scan_figure_pair("27 36 + 33,3 %", &config()), Some((27, 36)));
    }

    #[test]
    fn pair_with_digit_delimiter() {
        // The delimiter is the first digit of the next column.
        assert_eq!(scan_figure_pair("3 7 12", &config()), Some((3, 7)));
    }

    #[test]
    fn pair_requires_a_delimiter() {
        assert_eq!(scan_figure_pair("12 15", &config()), None);
        assert_eq!(scan_figure_pair("12 15 fin de section", &config()), None);
    }

    #[test]
    fn rejects_pairs_above_plausible_maximum() {
        assert_eq!(scan_figure_pair("950 1024 +", &config()), None);
        assert_eq!(scan_figure_pair("201 3 +", &config()), None);
        assert_eq!(scan_figure_pair("3 201 +", &config()), None);
    }

    #[test]
    fn rejects_article_code_shape() {
        // Large first member, tiny second: a legal reference, not data.
        assert_eq!(scan_figure_pair("41 2 +", &config()), None);
        assert_eq!(scan_figure_pair("26 4 +", &config()), None);
        // Boundary cases that remain plausible.
        assert_eq!(scan_figure_pair("25 2 +", &config()), Some((25, 2)));
        assert_eq!(scan_figure_pair("26 5 +", &config()), Some((26, 5)));
    }

    #[test]
    fn scan_continues_past_rejected_candidates() {
        assert_eq!(
            scan_figure_pair("article 441 2 ... 12 15 +", &config()),
            Some((12, 15))
        );
        assert_eq!(
            scan_figure_pair("950 1024 + 12 15 +", &config()),
            Some((12, 15))
        );
    }

    #[test]
    fn comma_separated_numbers_do_not_pair() {
        // "45,2" is one decimal value, not a (45, 2) pair.
        assert_eq!(scan_figure_pair("45,2 km", &config()), None);
    }

    #[test]
    fn first_integer_in_window() {
        assert_eq!(first_integer("voir page 7"), Some(7));
        assert_eq!(first_integer("aucun"), None);
    }

    #[test]
    fn skips_leading_year_token() {
        assert_eq!(integer_after_optional_year(" 2024 : 156"), Some(156));
        assert_eq!(integer_after_optional_year(" : 156"), Some(156));
        assert_eq!(integer_after_optional_year(" 2024"), None);
    }

    #[test]
    fn reads_parenthesized_count() {
        assert_eq!(parenthesized_integer(" 27 36 + (156 faits)"), Some(156));
        assert_eq!(parenthesized_integer(" (cumul : 1 203)"), Some(1203));
        assert_eq!(parenthesized_integer("aucune parenthèse"), None);
    }

    #[test]
    fn reads_second_per_mille_group() {
        assert_eq!(per_mille_pair(" : 52,4 ‰ 55,1 ‰"), Some(55.1));
        assert_eq!(per_mille_pair("52,4 ‰ seulement"), None);
    }
}

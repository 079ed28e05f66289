#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Label-anchored indicator extraction from OND report text.
//!
//! PDF text streams interleave columns and footnotes unpredictably, so
//! there is no layout to rely on: the engine collapses all whitespace,
//! anchors every lookup on literal label text, and reads numbers inside
//! a bounded window after each anchor so a value from the next section
//! is never picked up by accident. Missing labels and unreadable values
//! surface as `None` fields; extraction itself never fails.
//!
//! The entry points are [`extract_indicators`] (raw text in, one
//! [`RawIndicatorSet`] out) and [`records::build_indicator_records`]
//! (raw set in, fixed record map out).

mod labels;
pub mod numeric;
pub mod records;

use std::sync::LazyLock;

use regex::Regex;

use ond_report_indicator_models::RawIndicatorSet;

pub use records::{build_indicator_records, variation_percent};

/// Tunable extraction heuristics.
///
/// The plausibility thresholds and lookahead windows are empirical
/// values tuned against observed report layouts; new layouts may need
/// recalibration, so they are overridable rather than hard-coded.
#[derive(Debug, Clone)]
pub struct ExtractionConfig {
    /// Upper bound on a plausible monthly category count.
    pub max_plausible_count: i64,
    /// First member of an article-code-shaped pair is at least this.
    pub article_code_first_min: i64,
    /// Second member of an article-code-shaped pair is below this.
    pub article_code_second_max: i64,
    /// Lookahead after a label for paired-figure scans, in characters.
    pub pair_window_chars: usize,
    /// Lookahead after a label for single-figure scans, in characters.
    pub single_window_chars: usize,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            max_plausible_count: 200,
            article_code_first_min: 26,
            article_code_second_max: 5,
            pair_window_chars: 180,
            single_window_chars: 80,
        }
    }
}

impl ExtractionConfig {
    /// Sets the maximum plausible monthly count.
    #[must_use]
    pub const fn with_max_plausible_count(mut self, max: i64) -> Self {
        self.max_plausible_count = max;
        self
    }

    /// Sets the paired-figure lookahead window.
    #[must_use]
    pub const fn with_pair_window_chars(mut self, chars: usize) -> Self {
        self.pair_window_chars = chars;
        self
    }

    /// Sets the single-figure lookahead window.
    #[must_use]
    pub const fn with_single_window_chars(mut self, chars: usize) -> Self {
        self.single_window_chars = chars;
        self
    }
}

/// Population figure: digits immediately preceding the unit word.
static POPULATION_VALUE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9][0-9\s,]*)habitants").expect("valid regex"));

static SURFACE_VALUE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9][0-9\s,]*)km").expect("valid regex"));

static DENSITE_VALUE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9][0-9\s,]*)hab").expect("valid regex"));

/// Extracts every administrative and criminal indicator the document
/// mentions, with default heuristics.
#[must_use]
pub fn extract_indicators(raw_text: &str) -> RawIndicatorSet {
    extract_indicators_with(raw_text, &ExtractionConfig::default())
}

/// Extracts every administrative and criminal indicator the document
/// mentions.
#[must_use]
pub fn extract_indicators_with(raw_text: &str, config: &ExtractionConfig) -> RawIndicatorSet {
    let text = numeric::normalize_whitespace(raw_text);

    let (facts_prior_year, facts_current_year) = general_facts(&text, config);

    let set = RawIndicatorSet {
        population: scalar(&text, labels::POPULATION, &POPULATION_VALUE_RE, config),
        surface: scalar(&text, labels::SURFACE, &SURFACE_VALUE_RE, config),
        densite: scalar(&text, labels::DENSITE, &DENSITE_VALUE_RE, config),

        facts_prior_year,
        facts_current_year,
        cumulative_ytd: cumulative(&text, config),
        crime_rate: crime_rate(&text, config),

        cbv: category_count(&text, &labels::CBV, config),
        menaces: category_count(&text, &labels::MENACES, config),
        vols_simples: category_count(&text, &labels::VOLS_SIMPLES, config),
        camb_resid_principal: category_count(&text, &labels::CAMB_RESID_PRINCIPAL, config),
        camb_resid_secondaire: category_count(&text, &labels::CAMB_RESID_SECONDAIRE, config),
        camb_pro: category_count(&text, &labels::CAMB_PRO, config),
        vols_roulotte: category_count(&text, &labels::VOLS_ROULOTTE, config),
        destructions_veh: category_count(&text, &labels::DESTRUCTIONS_VEH, config),
        incendies: category_count(&text, &labels::INCENDIES, config),
        stups: category_count(&text, &labels::STUPS, config),
        atteintes_autorite: category_count(&text, &labels::ATTEINTES_AUTORITE, config),
    };

    log::debug!(
        "extracted indicators: facts {:?}/{:?}, cumul {:?}, rate {:?}",
        set.facts_prior_year,
        set.facts_current_year,
        set.cumulative_ytd,
        set.crime_rate
    );

    set
}

/// Scalar-with-unit lookup for the administrative metadata block.
fn scalar(text: &str, label: &str, value_re: &Regex, config: &ExtractionConfig) -> Option<f64> {
    let window = numeric::window_after(text, label, config.single_window_chars)?;
    let caps = value_re.captures(&window)?;
    numeric::parse_number(caps.get(1)?.as_str())
}

/// Both columns of the general facts block.
fn general_facts(text: &str, config: &ExtractionConfig) -> (Option<i64>, Option<i64>) {
    for label in labels::FACTS {
        if let Some((prior, current)) = pair_after_label(text, label, config) {
            return (Some(prior), Some(current));
        }
    }
    log::debug!("general facts block not found");
    (None, None)
}

/// Current-year count for one offense category, trying each historical
/// label phrasing in priority order, then the partial-label fallback.
fn category_count(
    text: &str,
    category: &labels::CategoryLabels,
    config: &ExtractionConfig,
) -> Option<i64> {
    for label in category.labels {
        if let Some((_, current)) = pair_after_label(text, label, config) {
            return Some(current);
        }
    }

    if let Some(short) = category.short_label {
        let value = single_after_label(text, short, config);
        if value.is_some() {
            log::debug!("category resolved through partial label {short:?}");
        }
        return value;
    }

    None
}

/// Current-year crime rate from the `N-1 ‰ N ‰` figures.
fn crime_rate(text: &str, config: &ExtractionConfig) -> Option<f64> {
    for label in labels::RATE {
        if let Some(window) = numeric::window_after(text, label, config.pair_window_chars)
            && let Some(rate) = numeric::per_mille_pair(&window)
        {
            return Some(rate);
        }
    }
    None
}

/// Year-to-date cumulative: the parenthetical next to the general facts
/// block when present, otherwise a `Cumul` label elsewhere.
fn cumulative(text: &str, config: &ExtractionConfig) -> Option<i64> {
    for label in labels::FACTS {
        if let Some(window) = numeric::window_after(text, label, config.pair_window_chars)
            && let Some(value) = numeric::parenthesized_integer(&window)
        {
            return Some(value);
        }
    }

    let window = numeric::window_after(text, labels::CUMUL, config.single_window_chars)?;
    numeric::integer_after_optional_year(&window)
}

fn pair_after_label(text: &str, label: &str, config: &ExtractionConfig) -> Option<(i64, i64)> {
    let window = numeric::window_after(text, label, config.pair_window_chars)?;
    numeric::scan_figure_pair(&window, config)
}

fn single_after_label(text: &str, label: &str, config: &ExtractionConfig) -> Option<i64> {
    let window = numeric::window_after(text, label, config.single_window_chars)?;
    numeric::first_integer(&window)
}

#[cfg(test)]
mod tests {
    use super::*;
    use ond_report_indicator_models::codes;

    /// Assembled the way pdf text streams actually come out: one long
    /// line with arbitrary breaks.
    const SAMPLE: &str = "\
        COMMUNE DE SAINT-ALBAN\n\
        Population : 12 345 habitants Surface : 45,2 km² Densité : 273 hab./km²\n\
        Nombre de faits constatés 27 36 + 33,3 % (156 faits depuis le début de l'année)\n\
        Taux de criminalité : 52,4 ‰ 55,1 ‰\n\
        Coups et blessures volontaires 4 6 +\n\
        Menaces ou chantages 2 1 -\n\
        Vols simples contre des particuliers 10 8 -\n\
        Cambriolages de résidences principales 3 5 +\n\
        Cambriolages de résidences secondaires 1 0 -\n\
        Cambriolages de locaux industriels, commerciaux ou financiers 2 3 +\n\
        Vols à la roulotte et vols d'accessoires 7 9 +\n\
        Destructions et dégradations de véhicules 5 4 -\n\
        Incendies volontaires de biens privés 1 2 +\n\
        Infractions à la législation sur les stupéfiants 3 3 0 %\n\
        Atteintes à l'autorité publique 2 4 +\n";

    #[test]
    fn extracts_administrative_metadata() {
        let raw = extract_indicators(SAMPLE);
        assert_eq!(raw.population, Some(12345.0));
        assert_eq!(raw.surface, Some(45.2));
        assert_eq!(raw.densite, Some(273.0));
    }

    #[test]
    fn extracts_general_facts_and_cumulative() {
        let raw = extract_indicators(SAMPLE);
        assert_eq!(raw.facts_prior_year, Some(27));
        assert_eq!(raw.facts_current_year, Some(36));
        assert_eq!(raw.cumulative_ytd, Some(156));
    }

    #[test]
    fn extracts_current_year_crime_rate() {
        let raw = extract_indicators(SAMPLE);
        assert_eq!(raw.crime_rate, Some(55.1));
    }

    #[test]
    fn extracts_every_category() {
        let raw = extract_indicators(SAMPLE);
        assert_eq!(raw.cbv, Some(6));
        assert_eq!(raw.menaces, Some(1));
        assert_eq!(raw.vols_simples, Some(8));
        assert_eq!(raw.camb_resid_principal, Some(5));
        assert_eq!(raw.camb_resid_secondaire, Some(0));
        assert_eq!(raw.camb_pro, Some(3));
        assert_eq!(raw.vols_roulotte, Some(9));
        assert_eq!(raw.destructions_veh, Some(4));
        assert_eq!(raw.incendies, Some(2));
        assert_eq!(raw.stups, Some(3));
        assert_eq!(raw.atteintes_autorite, Some(4));
    }

    #[test]
    fn sample_builds_full_record_map() {
        let raw = extract_indicators(SAMPLE);
        let records = build_indicator_records(&raw);
        assert_eq!(records.len(), 12);
        assert_eq!(records[codes::FAITS].variation_percent, Some(33));
        // 5 principal + 0 secondary.
        assert_eq!(records[codes::CAMB_RESID].value_current_year, Some(5));
        assert_eq!(records[codes::TAUX].crime_rate, Some(55.1));
    }

    #[test]
    fn missing_labels_yield_absent_values() {
        let raw = extract_indicators("rapport vide, aucune statistique");
        assert_eq!(raw, RawIndicatorSet::default());
    }

    #[test]
    fn historical_commercial_burglary_wording_resolves() {
        let text =
            "Cambriolages de locaux professionnelle, publique ou associative 12 15 +";
        let raw = extract_indicators(text);
        assert_eq!(raw.camb_pro, Some(15));
        let records = build_indicator_records(&raw);
        assert_eq!(records[codes::CAMB_PRO].value_current_year, Some(15));
    }

    #[test]
    fn partial_label_falls_back_to_single_figure() {
        // No full wording matches a pair, but the short anchor finds a
        // lone count.
        let text = "Cambriolages de locaux : 7 au total ce mois";
        let raw = extract_indicators(text);
        assert_eq!(raw.camb_pro, Some(7));
    }

    #[test]
    fn nearby_article_reference_is_not_a_data_pair() {
        let text = "Coups et blessures volontaires (art. 222 13 du code pénal) 4 6 +";
        let raw = extract_indicators(text);
        assert_eq!(raw.cbv, Some(6));
    }

    #[test]
    fn window_bounds_stop_cross_section_reads() {
        // The only figure pair sits far beyond the lookahead window.
        let padding = "bla ".repeat(60);
        let text = format!("Menaces ou chantages {padding} 2 1 -");
        let raw = extract_indicators(&text);
        assert_eq!(raw.menaces, None);
    }

    #[test]
    fn cumulative_falls_back_to_cumul_label() {
        let text = "Synthèse annuelle Cumul 2024 : 156 faits";
        let raw = extract_indicators(text);
        assert_eq!(raw.cumulative_ytd, Some(156));
    }

    #[test]
    fn custom_config_overrides_thresholds() {
        let config = ExtractionConfig::default().with_max_plausible_count(1000);
        let raw = extract_indicators_with("Vols simples 450 512 +", &config);
        assert_eq!(raw.vols_simples, Some(512));
        let strict = extract_indicators("Vols simples 450 512 +");
        assert_eq!(strict.vols_simples, None);
    }
}

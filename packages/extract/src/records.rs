//! Transformation of a raw extraction result into the fixed record map.

use std::collections::BTreeMap;

use ond_report_indicator_models::{CATALOG, CatalogEntry, IndicatorRecord, RawIndicatorSet, codes};

/// Year-over-year variation in whole percent.
///
/// Defined only when both values are present and the prior-year value is
/// strictly positive. Rounds half away from zero (`f64::round`), applied
/// uniformly wherever a variation is displayed.
#[must_use]
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
pub fn variation_percent(prior: Option<i64>, current: Option<i64>) -> Option<i64> {
    let prior = prior?;
    let current = current?;
    if prior <= 0 {
        return None;
    }
    let percent = (current - prior) as f64 / prior as f64 * 100.0;
    Some(percent.round() as i64)
}

/// Builds the fixed twelve-entry record map from a raw extraction result.
///
/// The map always contains every catalog code; absent source values stay
/// `None` on the corresponding record.
#[must_use]
pub fn build_indicator_records(raw: &RawIndicatorSet) -> BTreeMap<String, IndicatorRecord> {
    CATALOG
        .iter()
        .map(|entry| (entry.code.to_owned(), build_record(entry, raw)))
        .collect()
}

fn build_record(entry: &CatalogEntry, raw: &RawIndicatorSet) -> IndicatorRecord {
    let mut record = IndicatorRecord::empty(entry);
    match entry.code {
        codes::FAITS => {
            record.value_prior_year = raw.facts_prior_year;
            record.value_current_year = raw.facts_current_year;
            record.cumulative = raw.cumulative_ytd;
            record.variation_percent =
                variation_percent(raw.facts_prior_year, raw.facts_current_year);
            record.crime_rate = raw.crime_rate;
        }
        codes::TAUX => record.crime_rate = raw.crime_rate,
        codes::CBV => record.value_current_year = raw.cbv,
        codes::MENACES => record.value_current_year = raw.menaces,
        codes::VOLS_SIMPLES => record.value_current_year = raw.vols_simples,
        codes::CAMB_RESID => record.value_current_year = merged_residential(raw),
        codes::CAMB_PRO => record.value_current_year = raw.camb_pro,
        codes::VOLS_ROULOTTE => record.value_current_year = raw.vols_roulotte,
        codes::DESTRUCTIONS_VEH => record.value_current_year = raw.destructions_veh,
        codes::INCENDIES => record.value_current_year = raw.incendies,
        codes::STUPS => record.value_current_year = raw.stups,
        codes::ATTEINTES_AUTORITE => record.value_current_year = raw.atteintes_autorite,
        _ => {}
    }
    record
}

/// Principal- and secondary-residence burglaries are reported on separate
/// lines but surface as one entry; summed when at least one is present.
fn merged_residential(raw: &RawIndicatorSet) -> Option<i64> {
    match (raw.camb_resid_principal, raw.camb_resid_secondaire) {
        (None, None) => None,
        (principal, secondaire) => {
            Some(principal.unwrap_or(0) + secondaire.unwrap_or(0))
        }
    }
}

#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Indicator taxonomy and record types for OND commune reports.
//!
//! This crate defines the canonical indicator catalog used across the
//! entire ond-report system: the six coarse grouping tags, the fixed set
//! of indicator codes with their display labels, and the raw/normalized
//! record types the extraction engine produces. Downstream consumers
//! (charts, report layout, export) match on these exact codes and labels.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Coarse grouping tag for an indicator, used for aggregate charts.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum IndicatorGroup {
    /// Document-level indicators: total facts and the crime rate.
    #[serde(rename = "Général")]
    #[strum(serialize = "Général")]
    General,
    /// Offenses against persons.
    Personnes,
    /// Theft offenses.
    Vols,
    /// Burglary offenses.
    Cambriolages,
    /// Vehicle-related offenses.
    Automobile,
    /// Remaining offense categories.
    Autres,
}

impl IndicatorGroup {
    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::General,
            Self::Personnes,
            Self::Vols,
            Self::Cambriolages,
            Self::Automobile,
            Self::Autres,
        ]
    }
}

/// Indicator codes, as stable string constants.
///
/// These are the keys of the record map produced for every document and
/// the identifiers downstream consumers select indicators by.
pub mod codes {
    /// Total recorded facts (prior year, current year, cumulative).
    pub const FAITS: &str = "faits";
    /// Crime rate per 1000 inhabitants.
    pub const TAUX: &str = "taux";
    /// Coups et blessures volontaires.
    pub const CBV: &str = "cbv";
    /// Menaces ou chantages.
    pub const MENACES: &str = "menaces";
    /// Vols simples.
    pub const VOLS_SIMPLES: &str = "vols_simples";
    /// Cambriolages de résidences (principal and secondary merged).
    pub const CAMB_RESID: &str = "camb_resid";
    /// Cambriolages de locaux professionnels.
    pub const CAMB_PRO: &str = "camb_pro";
    /// Vols à la roulotte.
    pub const VOLS_ROULOTTE: &str = "vols_roulotte";
    /// Destructions de véhicules.
    pub const DESTRUCTIONS_VEH: &str = "destructions_veh";
    /// Incendies volontaires.
    pub const INCENDIES: &str = "incendies";
    /// Infractions stupéfiants.
    pub const STUPS: &str = "stups";
    /// Atteintes à l'autorité.
    pub const ATTEINTES_AUTORITE: &str = "atteintes_autorite";
}

/// One entry of the fixed output catalog: code, display label, and group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    /// Stable indicator code (see [`codes`]).
    pub code: &'static str,
    /// Display label, exactly as rendered by downstream consumers.
    pub label: &'static str,
    /// Grouping tag.
    pub group: IndicatorGroup,
}

/// The fixed twelve-entry output catalog, in display order.
///
/// Two synthetic Général entries followed by the ten offense categories.
pub const CATALOG: [CatalogEntry; 12] = [
    CatalogEntry {
        code: codes::FAITS,
        label: "Faits constatés",
        group: IndicatorGroup::General,
    },
    CatalogEntry {
        code: codes::TAUX,
        label: "Taux criminalité (‰)",
        group: IndicatorGroup::General,
    },
    CatalogEntry {
        code: codes::CBV,
        label: "Coups et blessures volontaires",
        group: IndicatorGroup::Personnes,
    },
    CatalogEntry {
        code: codes::MENACES,
        label: "Menaces ou chantages",
        group: IndicatorGroup::Personnes,
    },
    CatalogEntry {
        code: codes::VOLS_SIMPLES,
        label: "Vols simples",
        group: IndicatorGroup::Vols,
    },
    CatalogEntry {
        code: codes::CAMB_RESID,
        label: "Cambriolages de résidences",
        group: IndicatorGroup::Cambriolages,
    },
    CatalogEntry {
        code: codes::CAMB_PRO,
        label: "Cambriolages de locaux professionnels",
        group: IndicatorGroup::Cambriolages,
    },
    CatalogEntry {
        code: codes::VOLS_ROULOTTE,
        label: "Vols à la roulotte",
        group: IndicatorGroup::Automobile,
    },
    CatalogEntry {
        code: codes::DESTRUCTIONS_VEH,
        label: "Destructions de véhicules",
        group: IndicatorGroup::Automobile,
    },
    CatalogEntry {
        code: codes::INCENDIES,
        label: "Incendies volontaires",
        group: IndicatorGroup::Autres,
    },
    CatalogEntry {
        code: codes::STUPS,
        label: "Infractions stupéfiants",
        group: IndicatorGroup::Autres,
    },
    CatalogEntry {
        code: codes::ATTEINTES_AUTORITE,
        label: "Atteintes à l'autorité",
        group: IndicatorGroup::Autres,
    },
];

/// Intermediate extraction result, one instance per document.
///
/// Every field is optional: `None` means "label not found or value not
/// confidently extracted", never zero. Category counts carry the
/// current-year value only; the prior-year column is only captured for
/// the general facts block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawIndicatorSet {
    /// Commune population, in inhabitants.
    pub population: Option<f64>,
    /// Commune surface, in km².
    pub surface: Option<f64>,
    /// Population density, in inhabitants per km².
    pub densite: Option<f64>,

    /// Total facts recorded over the same month of the prior year (N-1).
    pub facts_prior_year: Option<i64>,
    /// Total facts recorded over the current month (N).
    pub facts_current_year: Option<i64>,
    /// Year-to-date running total of facts.
    pub cumulative_ytd: Option<i64>,
    /// Facts per 1000 inhabitants (per mille).
    pub crime_rate: Option<f64>,

    /// Coups et blessures volontaires.
    pub cbv: Option<i64>,
    /// Menaces ou chantages.
    pub menaces: Option<i64>,
    /// Vols simples.
    pub vols_simples: Option<i64>,
    /// Cambriolages de résidences principales.
    pub camb_resid_principal: Option<i64>,
    /// Cambriolages de résidences secondaires.
    pub camb_resid_secondaire: Option<i64>,
    /// Cambriolages de locaux professionnels.
    pub camb_pro: Option<i64>,
    /// Vols à la roulotte.
    pub vols_roulotte: Option<i64>,
    /// Destructions de véhicules.
    pub destructions_veh: Option<i64>,
    /// Incendies volontaires.
    pub incendies: Option<i64>,
    /// Infractions stupéfiants.
    pub stups: Option<i64>,
    /// Atteintes à l'autorité.
    pub atteintes_autorite: Option<i64>,
}

/// One normalized indicator entry of a document's output record map.
///
/// Built once from a [`RawIndicatorSet`] and never mutated afterwards;
/// downstream layers only read it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndicatorRecord {
    /// Display label (from the catalog).
    pub label: String,
    /// Grouping tag (from the catalog).
    pub group: IndicatorGroup,
    /// Prior-year value (N-1), when the source reports one.
    pub value_prior_year: Option<i64>,
    /// Current-year value (N).
    pub value_current_year: Option<i64>,
    /// Year-to-date cumulative total.
    pub cumulative: Option<i64>,
    /// Year-over-year variation, rounded to whole percent.
    pub variation_percent: Option<i64>,
    /// Crime rate per 1000 inhabitants; populated on Général entries only.
    pub crime_rate: Option<f64>,
}

impl IndicatorRecord {
    /// Creates an empty record carrying only the catalog label and group.
    #[must_use]
    pub fn empty(entry: &CatalogEntry) -> Self {
        Self {
            label: entry.label.to_owned(),
            group: entry.group,
            value_prior_year: None,
            value_current_year: None,
            cumulative: None,
            variation_percent: None,
            crime_rate: None,
        }
    }
}

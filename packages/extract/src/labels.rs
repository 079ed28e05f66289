//! Label anchors for the extraction engine.
//!
//! Report revisions reworded several category labels over the years, so
//! each category carries its historical phrasings in priority order,
//! most specific first. A phrasing that is a prefix of another must come
//! after it, or the substring search would stop at the shorter form.

/// Ordered label phrasings for one offense category.
pub struct CategoryLabels {
    /// Full labels, tried in order with paired-figure extraction.
    pub labels: &'static [&'static str],
    /// Partial label used for a last-resort single-figure lookup.
    pub short_label: Option<&'static str>,
}

/// Administrative metadata anchors.
pub const POPULATION: &str = "Population";
pub const SURFACE: &str = "Surface";
pub const DENSITE: &str = "Densité";

/// Anchors for the general facts block (prior/current totals).
pub const FACTS: &[&str] = &[
    "Nombre de faits constatés",
    "Faits constatés",
    "faits constatés",
];

/// Anchors for the crime-rate figures.
pub const RATE: &[&str] = &["Taux de criminalité", "Taux criminalité"];

/// Fallback anchor for the year-to-date cumulative.
pub const CUMUL: &str = "Cumul";

pub const CBV: CategoryLabels = CategoryLabels {
    labels: &["Coups et blessures volontaires"],
    short_label: None,
};

pub const MENACES: CategoryLabels = CategoryLabels {
    labels: &["Menaces ou chantages", "Menaces de violences"],
    short_label: None,
};

pub const VOLS_SIMPLES: CategoryLabels = CategoryLabels {
    labels: &["Vols simples contre des particuliers", "Vols simples"],
    short_label: None,
};

pub const CAMB_RESID_PRINCIPAL: CategoryLabels = CategoryLabels {
    labels: &[
        "Cambriolages de résidences principales",
        "Cambriolages de résidence principale",
    ],
    short_label: None,
};

pub const CAMB_RESID_SECONDAIRE: CategoryLabels = CategoryLabels {
    labels: &[
        "Cambriolages de résidences secondaires",
        "Cambriolages de résidence secondaire",
    ],
    short_label: None,
};

/// Three historical wordings for commercial-premise break-ins.
pub const CAMB_PRO: CategoryLabels = CategoryLabels {
    labels: &[
        "Cambriolages de locaux industriels, commerciaux ou financiers",
        "Cambriolages de locaux professionnelle, publique ou associative",
        "Cambriolages de locaux professionnels",
    ],
    short_label: Some("Cambriolages de locaux"),
};

pub const VOLS_ROULOTTE: CategoryLabels = CategoryLabels {
    labels: &[
        "Vols à la roulotte et vols d'accessoires",
        "Vols à la roulotte",
    ],
    short_label: None,
};

pub const DESTRUCTIONS_VEH: CategoryLabels = CategoryLabels {
    labels: &[
        "Destructions et dégradations de véhicules",
        "Destructions de véhicules",
    ],
    short_label: None,
};

pub const INCENDIES: CategoryLabels = CategoryLabels {
    labels: &[
        "Incendies volontaires de biens privés",
        "Incendies volontaires",
    ],
    short_label: None,
};

pub const STUPS: CategoryLabels = CategoryLabels {
    labels: &[
        "Infractions à la législation sur les stupéfiants",
        "Usage et trafic de stupéfiants",
    ],
    short_label: Some("stupéfiants"),
};

pub const ATTEINTES_AUTORITE: CategoryLabels = CategoryLabels {
    labels: &[
        "Atteintes à l'autorité publique",
        "Atteintes à l'autorité",
    ],
    short_label: None,
};

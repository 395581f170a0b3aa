#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

//! Tick surveillance domain types.
//!
//! This crate defines the canonical pathogen taxonomy and the record shapes
//! shared across the tick-map system: raw rows as they appear in the NY State
//! surveillance export, and the dense per-county-per-year rows the dashboard
//! is computed from.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// First year covered by the surveillance program.
pub const YEAR_MIN: u16 = 2008;

/// Last year covered by the surveillance program.
pub const YEAR_MAX: u16 = 2022;

/// Number of years in the covered range (inclusive on both ends).
pub const YEAR_COUNT: usize = (YEAR_MAX - YEAR_MIN + 1) as usize;

/// Number of pathogens tested for in the surveillance program.
pub const PATHOGEN_COUNT: usize = 4;

/// All years in the covered range, in ascending order.
#[must_use]
pub const fn years() -> std::ops::RangeInclusive<u16> {
    YEAR_MIN..=YEAR_MAX
}

/// Returns `true` if `year` falls within the covered range.
#[must_use]
pub const fn year_in_range(year: u16) -> bool {
    year >= YEAR_MIN && year <= YEAR_MAX
}

/// The four pathogens tested for in collected tick nymphs.
///
/// Variant order is the canonical display order used for stacked chart
/// series and for the per-record percentage arrays.
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
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Pathogen {
    /// Borrelia burgdorferi, the Lyme disease agent
    BBurgdorferi,
    /// Anaplasma phagocytophilum, the anaplasmosis agent
    APhagocytophilum,
    /// Babesia microti, the babesiosis agent
    BMicroti,
    /// Borrelia miyamotoi, a relapsing-fever spirochete
    BMiyamotoi,
}

impl Pathogen {
    /// Returns all pathogens in canonical order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::BBurgdorferi,
            Self::APhagocytophilum,
            Self::BMicroti,
            Self::BMiyamotoi,
        ]
    }

    /// Position of this pathogen in the canonical order, used to index the
    /// per-record percentage arrays.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::BBurgdorferi => 0,
            Self::APhagocytophilum => 1,
            Self::BMicroti => 2,
            Self::BMiyamotoi => 3,
        }
    }

    /// Abbreviated scientific name as displayed in the UI.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::BBurgdorferi => "B. burgdorferi",
            Self::APhagocytophilum => "A. phagocytophilum",
            Self::BMicroti => "B. microti",
            Self::BMiyamotoi => "B. miyamotoi",
        }
    }

    /// Column header carrying this pathogen's positivity percentage in the
    /// surveillance CSV export.
    #[must_use]
    pub const fn column_header(self) -> &'static str {
        match self {
            Self::BBurgdorferi => "B. burgdorferi (%)",
            Self::APhagocytophilum => "A. phagocytophilum (%)",
            Self::BMicroti => "B. microti (%)",
            Self::BMiyamotoi => "B. miyamotoi (%)",
        }
    }

    /// Fixed series color for this pathogen in the stacked barplot.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::BBurgdorferi => "#1E453E",
            Self::APhagocytophilum => "#7CDF7C",
            Self::BMicroti => "#E3B448",
            Self::BMiyamotoi => "#8FB9AA",
        }
    }
}

/// Disease selection for the barplot panel: every pathogen individually,
/// or all four as a stacked overview.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum DiseaseFilter {
    /// Stacked overview of all four pathogens.
    #[default]
    All,
    /// Borrelia burgdorferi only.
    BBurgdorferi,
    /// Anaplasma phagocytophilum only.
    APhagocytophilum,
    /// Babesia microti only.
    BMicroti,
    /// Borrelia miyamotoi only.
    BMiyamotoi,
}

impl DiseaseFilter {
    /// Returns all filter options in radio-button order (`All` first).
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::All,
            Self::BBurgdorferi,
            Self::APhagocytophilum,
            Self::BMicroti,
            Self::BMiyamotoi,
        ]
    }

    /// The single pathogen this filter selects, or `None` for [`Self::All`].
    #[must_use]
    pub const fn pathogen(self) -> Option<Pathogen> {
        match self {
            Self::All => None,
            Self::BBurgdorferi => Some(Pathogen::BBurgdorferi),
            Self::APhagocytophilum => Some(Pathogen::APhagocytophilum),
            Self::BMicroti => Some(Pathogen::BMicroti),
            Self::BMiyamotoi => Some(Pathogen::BMiyamotoi),
        }
    }

    /// Label shown next to the radio button.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::All => "All",
            Self::BBurgdorferi => Pathogen::BBurgdorferi.label(),
            Self::APhagocytophilum => Pathogen::APhagocytophilum.label(),
            Self::BMicroti => Pathogen::BMicroti.label(),
            Self::BMiyamotoi => Pathogen::BMiyamotoi.label(),
        }
    }
}

impl From<Pathogen> for DiseaseFilter {
    fn from(pathogen: Pathogen) -> Self {
        match pathogen {
            Pathogen::BBurgdorferi => Self::BBurgdorferi,
            Pathogen::APhagocytophilum => Self::APhagocytophilum,
            Pathogen::BMicroti => Self::BMicroti,
            Pathogen::BMiyamotoi => Self::BMiyamotoi,
        }
    }
}

/// One raw row of the surveillance export: collection and testing totals for
/// a single county and year. Immutable after load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SurveillanceRecord {
    /// County name as it appears in the export (no " County" suffix).
    pub county: String,
    /// Collection year.
    pub year: u16,
    /// Total tick nymphs collected across all sites.
    pub ticks_collected: f64,
    /// Total collection sites visited.
    pub sites_visited: f64,
    /// Total nymphs tested for pathogens.
    pub ticks_tested: f64,
    /// Positivity percentage per pathogen, indexed by [`Pathogen::index`].
    pub pathogen_percent: [f64; PATHOGEN_COUNT],
}

impl SurveillanceRecord {
    /// Positivity percentage for one pathogen.
    #[must_use]
    pub fn percent(&self, pathogen: Pathogen) -> f64 {
        self.pathogen_percent[pathogen.index()]
    }
}

/// One row of the dense (county × year) table the dashboard is computed
/// from. Counties with no surveillance activity in a year carry zeros.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DenseRecord {
    /// Normalized county name.
    pub county: String,
    /// Year within the covered range.
    pub year: u16,
    /// Total tick nymphs collected (0 when no record exists).
    pub ticks_collected: f64,
    /// Total collection sites visited (0 when no record exists).
    pub sites_visited: f64,
    /// Total nymphs tested (0 when no record exists).
    pub ticks_tested: f64,
    /// Positivity percentage per pathogen, indexed by [`Pathogen::index`].
    pub pathogen_percent: [f64; PATHOGEN_COUNT],
    /// Ticks collected per site visited, rounded to 3 decimals; 0 when no
    /// sites were visited. The map coloring metric, never NaN.
    pub estimate: f64,
}

impl DenseRecord {
    /// Positivity percentage for one pathogen.
    #[must_use]
    pub fn percent(&self, pathogen: Pathogen) -> f64 {
        self.pathogen_percent[pathogen.index()]
    }
}

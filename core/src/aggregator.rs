//! Launch record aggregator
//!
//! Two pure transforms over a [`LaunchTable`]: the success distribution
//! feeding the pie chart and the payload/outcome correlation feeding the
//! scatter chart. Neither fails; an empty selection yields an empty view.

use crate::dataset::{LaunchRecord, LaunchTable};
use crate::{DashError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Wire value of the "all sites" sentinel
pub const ALL_SITES: &str = "ALL";

/// Dropdown selection: every site, or one named site
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum SiteSelection {
    #[default]
    All,
    Site(String),
}

impl SiteSelection {
    /// Map a dropdown value to a selection. Never fails: unknown sites
    /// simply match no records.
    pub fn parse(value: &str) -> Self {
        if value == ALL_SITES {
            Self::All
        } else {
            Self::Site(value.to_string())
        }
    }

    pub fn matches(&self, record: &LaunchRecord) -> bool {
        match self {
            Self::All => true,
            Self::Site(site) => record.launch_site == *site,
        }
    }
}

impl fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str(ALL_SITES),
            Self::Site(site) => f.write_str(site),
        }
    }
}

/// Closed payload interval selected on the range slider
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PayloadRange {
    low: f64,
    high: f64,
}

impl PayloadRange {
    pub fn new(low: f64, high: f64) -> Result<Self> {
        if !low.is_finite() || !high.is_finite() || low > high {
            return Err(DashError::InvalidPayloadRange { low, high });
        }
        Ok(Self { low, high })
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn contains(&self, payload_mass_kg: f64) -> bool {
        payload_mass_kg >= self.low && payload_mass_kg <= self.high
    }
}

/// How the payload range applies to the scatter chart
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangeMode {
    /// Range only bounds the visible x-axis; every selected record is plotted
    #[default]
    AxisBound,
    /// Records outside the range are dropped before plotting
    RowFilter,
}

impl std::str::FromStr for RangeMode {
    type Err = DashError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "axis_bound" | "axis" => Ok(Self::AxisBound),
            "row_filter" | "filter" => Ok(Self::RowFilter),
            other => Err(DashError::Config(format!("unknown payload range mode '{other}'"))),
        }
    }
}

/// One (category, value) pair of the success distribution
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Slice {
    pub label: String,
    pub value: u64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SuccessDistribution {
    pub title: String,
    pub slices: Vec<Slice>,
}

impl SuccessDistribution {
    pub fn total(&self) -> u64 {
        self.slices.iter().map(|s| s.value).sum()
    }

    pub fn get(&self, label: &str) -> Option<u64> {
        self.slices.iter().find(|s| s.label == label).map(|s| s.value)
    }
}

/// One scatter point
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CorrelationPoint {
    pub payload_mass_kg: f64,
    pub class: u8,
    pub booster_version_category: String,
    pub flight_number: i64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CorrelationView {
    pub title: String,
    pub points: Vec<CorrelationPoint>,
    /// Visible x-axis bounds (low, high)
    pub x_range: (f64, f64),
}

/// Success distribution for the pie chart.
///
/// For [`SiteSelection::All`] this is successes summed per site, one slice per
/// distinct site in first-appearance order. For a single site it is the row
/// count per outcome, failures (`0`) before successes (`1`), with absent
/// outcomes omitted.
pub fn success_distribution(table: &LaunchTable, selection: &SiteSelection) -> SuccessDistribution {
    match selection {
        SiteSelection::All => {
            let slices = table
                .sites()
                .iter()
                .map(|site| Slice {
                    label: site.clone(),
                    value: table
                        .records()
                        .iter()
                        .filter(|r| r.launch_site == *site)
                        .map(|r| u64::from(r.class))
                        .sum(),
                })
                .collect();
            SuccessDistribution {
                title: "Successes by Site".to_string(),
                slices,
            }
        }
        SiteSelection::Site(site) => {
            let mut counts = [0u64; 2];
            for record in table.records().iter().filter(|r| selection.matches(r)) {
                counts[usize::from(record.class.min(1))] += 1;
            }
            let slices = counts
                .iter()
                .enumerate()
                .filter(|(_, count)| **count > 0)
                .map(|(class, count)| Slice {
                    label: class.to_string(),
                    value: *count,
                })
                .collect();
            SuccessDistribution {
                title: format!("Successes at {site}"),
                slices,
            }
        }
    }
}

/// Payload vs. outcome points for the scatter chart
pub fn payload_correlation(
    table: &LaunchTable,
    selection: &SiteSelection,
    range: PayloadRange,
    mode: RangeMode,
) -> CorrelationView {
    let points = table
        .records()
        .iter()
        .filter(|r| selection.matches(r))
        .filter(|r| mode == RangeMode::AxisBound || range.contains(r.payload_mass_kg))
        .map(|r| CorrelationPoint {
            payload_mass_kg: r.payload_mass_kg,
            class: r.class,
            booster_version_category: r.booster_version_category.clone(),
            flight_number: r.flight_number,
        })
        .collect();

    let title = match selection {
        SiteSelection::All => "Correlation Between Payload and Class for ALL Sites".to_string(),
        SiteSelection::Site(site) => format!("Correlation Between Payload and Class for {site}"),
    };

    CorrelationView {
        title,
        points,
        x_range: (range.low(), range.high()),
    }
}

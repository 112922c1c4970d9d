// Page layout for the Dashboard UI
//
// Static description of the controls and chart slots; the page script renders it.

use crate::aggregator::ALL_SITES;
use crate::dataset::{LaunchTable, PayloadBounds};
use serde::{Deserialize, Serialize};

pub const PAGE_TITLE: &str = "SpaceX Launch Records Dashboard";
pub const PIE_CHART_ID: &str = "success-pie-chart";
pub const SCATTER_CHART_ID: &str = "success-payload-scatter-chart";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DropdownOption {
    pub label: String,
    pub value: String,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SiteDropdown {
    pub id: String,
    pub options: Vec<DropdownOption>,
    pub value: String,
    pub placeholder: String,
    pub searchable: bool,
}

/// Dual-handle payload slider.
///
/// A range input only accepts `min + k * step`, so `max` is the dataset
/// maximum rounded up to the next step. Handle positions are clamped back
/// into `bounds` before they are sent as a payload range.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RangeSliderSpec {
    pub id: String,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    /// Dataset payload extremes
    pub bounds: PayloadBounds,
    /// Initial [low, high]
    pub value: [f64; 2],
}

impl RangeSliderSpec {
    pub fn new(id: impl Into<String>, bounds: PayloadBounds, step: f64) -> Self {
        let steps = ((bounds.max - bounds.min) / step).ceil();
        Self {
            id: id.into(),
            min: bounds.min,
            max: bounds.min + steps * step,
            step,
            bounds,
            value: [bounds.min, bounds.max],
        }
    }

    /// Highest value the input can hold
    pub fn reachable_max(&self) -> f64 {
        self.min + ((self.max - self.min) / self.step).floor() * self.step
    }

    /// Map two handle positions to an ordered range inside the dataset bounds
    pub fn selected_range(&self, a: f64, b: f64) -> (f64, f64) {
        let clamp = |v: f64| v.clamp(self.bounds.min, self.bounds.max);
        (clamp(a.min(b)), clamp(a.max(b)))
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PageLayout {
    pub title: String,
    pub dropdown: SiteDropdown,
    pub slider: RangeSliderSpec,
    pub pie_chart_id: String,
    pub scatter_chart_id: String,
}

impl PageLayout {
    pub fn from_table(table: &LaunchTable, step: f64) -> Self {
        let mut options = vec![DropdownOption {
            label: "All Sites".to_string(),
            value: ALL_SITES.to_string(),
        }];
        options.extend(table.sites().iter().map(|site| DropdownOption {
            label: site.clone(),
            value: site.clone(),
        }));

        let bounds = table.payload_bounds();

        Self {
            title: PAGE_TITLE.to_string(),
            dropdown: SiteDropdown {
                id: "site-dropdown".to_string(),
                options,
                value: ALL_SITES.to_string(),
                placeholder: "select a launch site here".to_string(),
                searchable: true,
            },
            slider: RangeSliderSpec::new("payload-slider", bounds, step),
            pie_chart_id: PIE_CHART_ID.to_string(),
            scatter_chart_id: SCATTER_CHART_ID.to_string(),
        }
    }
}

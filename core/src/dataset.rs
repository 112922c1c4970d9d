//! Launch record dataset
//!
//! Loads the launch CSV once at startup into an immutable [`LaunchTable`].
//! The table is shared read-only by every request afterwards.

use crate::{DashError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// One row of the launch CSV
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LaunchRecord {
    #[serde(rename = "Flight Number")]
    pub flight_number: i64,
    #[serde(rename = "Launch Site")]
    pub launch_site: String,
    #[serde(rename = "Payload Mass (kg)")]
    pub payload_mass_kg: f64,
    #[serde(rename = "Booster Version Category")]
    pub booster_version_category: String,
    /// 1 = success, 0 = failure
    #[serde(rename = "class")]
    pub class: u8,
}

impl LaunchRecord {
    pub fn new(
        flight_number: i64,
        launch_site: impl Into<String>,
        payload_mass_kg: f64,
        booster_version_category: impl Into<String>,
        class: u8,
    ) -> Self {
        Self {
            flight_number,
            launch_site: launch_site.into(),
            payload_mass_kg,
            booster_version_category: booster_version_category.into(),
            class,
        }
    }

    pub fn is_success(&self) -> bool {
        self.class == 1
    }

    fn validate(&self) -> Result<()> {
        if !self.payload_mass_kg.is_finite() || self.payload_mass_kg < 0.0 {
            return Err(DashError::InvalidRecord {
                flight_number: self.flight_number,
                reason: format!("payload mass {} is not a non-negative number", self.payload_mass_kg),
            });
        }
        if self.class > 1 {
            return Err(DashError::InvalidRecord {
                flight_number: self.flight_number,
                reason: format!("class {} is not a binary outcome", self.class),
            });
        }
        Ok(())
    }
}

/// Dataset-wide payload extremes, computed once at load time
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct PayloadBounds {
    pub min: f64,
    pub max: f64,
}

impl PayloadBounds {
    pub fn contains(&self, payload_mass_kg: f64) -> bool {
        payload_mass_kg >= self.min && payload_mass_kg <= self.max
    }
}

/// Immutable in-memory launch table
#[derive(Clone, Debug)]
pub struct LaunchTable {
    records: Vec<LaunchRecord>,
    sites: Vec<String>,
    bounds: PayloadBounds,
    source: String,
    loaded_at: String,
}

impl LaunchTable {
    /// Load the table from a CSV file on disk
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let source = path.display().to_string();
        info!(target: "dataset", path = %source, "Loading launch records");

        let file = std::fs::File::open(path)?;
        Self::from_reader(file, source)
    }

    /// Load the table from any CSV reader with a header row
    pub fn from_reader<R: Read>(reader: R, source: impl Into<String>) -> Result<Self> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let records = csv_reader
            .deserialize::<LaunchRecord>()
            .collect::<std::result::Result<Vec<_>, _>>()?;
        Self::from_records(records, source)
    }

    /// Build the table from already-parsed records
    pub fn from_records(records: Vec<LaunchRecord>, source: impl Into<String>) -> Result<Self> {
        let source = source.into();
        let mut flights = HashSet::with_capacity(records.len());
        for record in &records {
            record.validate()?;
            if !flights.insert(record.flight_number) {
                return Err(DashError::InvalidRecord {
                    flight_number: record.flight_number,
                    reason: "duplicate flight number".to_string(),
                });
            }
        }

        let Some(first) = records.first() else {
            return Err(DashError::EmptyDataset(source));
        };
        let seed = PayloadBounds {
            min: first.payload_mass_kg,
            max: first.payload_mass_kg,
        };
        let bounds = records.iter().fold(seed, |acc, r| PayloadBounds {
            min: acc.min.min(r.payload_mass_kg),
            max: acc.max.max(r.payload_mass_kg),
        });

        // Distinct sites in first-appearance order
        let mut sites: Vec<String> = Vec::new();
        for record in &records {
            if !sites.contains(&record.launch_site) {
                sites.push(record.launch_site.clone());
            }
        }

        info!(
            target: "dataset",
            source = %source,
            records = records.len(),
            sites = sites.len(),
            min_payload = bounds.min,
            max_payload = bounds.max,
            "Launch records loaded"
        );
        debug!(target: "dataset", sites = ?sites, "Distinct launch sites");

        Ok(Self {
            records,
            sites,
            bounds,
            source,
            loaded_at: chrono::Utc::now().to_rfc3339(),
        })
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    pub fn sites(&self) -> &[String] {
        &self.sites
    }

    pub fn has_site(&self, site: &str) -> bool {
        self.sites.iter().any(|s| s == site)
    }

    pub fn payload_bounds(&self) -> PayloadBounds {
        self.bounds
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Load time (RFC 3339)
    pub fn loaded_at(&self) -> &str {
        &self.loaded_at
    }
}

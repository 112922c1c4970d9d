//! Shared launch-record fixtures for integration tests

#![allow(dead_code)]

use launchdash_core::{LaunchRecord, LaunchTable};

/// Header matching the published launch CSV, including the unnamed index column
pub const HEADER: &str =
    ",Flight Number,Launch Site,class,Payload Mass (kg),Booster Version,Booster Version Category";

/// Three-record scenario: two SiteA launches (one success), one SiteB success
pub fn scenario_table() -> LaunchTable {
    LaunchTable::from_records(
        vec![
            LaunchRecord::new(1, "SiteA", 500.0, "v1.0", 1),
            LaunchRecord::new(2, "SiteA", 1500.0, "v1.1", 0),
            LaunchRecord::new(3, "SiteB", 800.0, "FT", 1),
        ],
        "scenario",
    )
    .expect("scenario table should build")
}

/// A larger table shaped like the real dataset
pub fn launch_table() -> LaunchTable {
    let rows = [
        (1, "CCAFS LC-40", 0.0, "v1.0", 0),
        (2, "CCAFS LC-40", 525.0, "v1.0", 0),
        (3, "CCAFS LC-40", 677.0, "v1.0", 0),
        (4, "VAFB SLC-4E", 500.0, "v1.1", 0),
        (5, "CCAFS LC-40", 3170.0, "v1.1", 0),
        (6, "CCAFS LC-40", 3325.0, "v1.1", 1),
        (7, "KSC LC-39A", 2490.0, "FT", 1),
        (8, "KSC LC-39A", 5300.0, "FT", 1),
        (9, "VAFB SLC-4E", 9600.0, "FT", 1),
        (10, "CCAFS SLC-40", 4600.0, "B4", 1),
        (11, "KSC LC-39A", 3600.0, "B4", 0),
        (12, "CCAFS SLC-40", 5384.0, "B5", 1),
    ];
    let records = rows
        .into_iter()
        .map(|(n, site, payload, booster, class)| LaunchRecord::new(n, site, payload, booster, class))
        .collect();
    LaunchTable::from_records(records, "fixture").expect("fixture table should build")
}

/// Render records as CSV text in the published column layout
pub fn to_csv(records: &[LaunchRecord]) -> String {
    let mut out = String::from(HEADER);
    out.push('\n');
    for (idx, r) in records.iter().enumerate() {
        out.push_str(&format!(
            "{},{},{},{},{},F9 {},{}\n",
            idx, r.flight_number, r.launch_site, r.class, r.payload_mass_kg, r.booster_version_category, r.booster_version_category
        ));
    }
    out
}

// Launchdash Core Library
// Launch records dataset, aggregation and dashboard HTTP surface

pub mod aggregator;
pub mod dashboard;
pub mod dataset;
pub mod figure;

// Export core types
pub use aggregator::{
    payload_correlation, success_distribution, CorrelationPoint, CorrelationView, PayloadRange,
    RangeMode, SiteSelection, Slice, SuccessDistribution, ALL_SITES,
};
pub use dataset::{LaunchRecord, LaunchTable, PayloadBounds};

// Error types
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Dataset {0} contains no launch records")]
    EmptyDataset(String),

    #[error("Invalid launch record (flight {flight_number}): {reason}")]
    InvalidRecord { flight_number: i64, reason: String },

    #[error("Invalid payload range [{low}, {high}]")]
    InvalidPayloadRange { low: f64, high: f64 },

    #[error("Config error: {0}")]
    Config(String),
}
pub type Result<T> = std::result::Result<T, DashError>;

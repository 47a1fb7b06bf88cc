use crate::attributes::AttributeKey;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShadeError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("County '{county}' has no value for '{attribute}'")]
    MissingAttribute {
        county: String,
        attribute: AttributeKey,
    },

    #[error("No statistics collected for '{0}'")]
    MissingStat(AttributeKey),

    #[error("Unknown county: {0}")]
    UnknownCounty(String),

    #[error("Weight class {0} is outside 0..=9")]
    InvalidWeightClass(u8),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),
}

pub type ShadeResult<T> = Result<T, ShadeError>;

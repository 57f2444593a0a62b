use thiserror::Error;

use crate::ephemeris::oem_reader::ParseVectorError;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("Epoch not found: {0}")]
    EpochNotFound(String),

    #[error("No ephemeris data loaded")]
    EmptyEphemeris,

    #[error("Invalid ephemeris source descriptor: {0}")]
    InvalidSource(String),

    #[error("Invalid epoch format: {0}")]
    InvalidEpochFormat(String),

    #[error("HTTP ureq error: {0}")]
    UreqHttpError(#[from] ureq::Error),

    #[error("Unable to perform file operation: {0}")]
    IoError(#[from] std::io::Error),

    #[error("OEM document deserialization failed: {0}")]
    OemDeserialize(#[from] quick_xml::DeError),

    #[error("Error during a state vector record parse: {0}")]
    VectorParsing(ParseVectorError),

    #[error("Wall clock read failed: {0}")]
    TimeSource(#[from] hifitime::HifitimeError),
}

impl PartialEq for TrackerError {
    fn eq(&self, other: &Self) -> bool {
        use TrackerError::*;
        match (self, other) {
            (EpochNotFound(a), EpochNotFound(b)) => a == b,
            (InvalidSource(a), InvalidSource(b)) => a == b,
            (InvalidEpochFormat(a), InvalidEpochFormat(b)) => a == b,
            (VectorParsing(a), VectorParsing(b)) => a == b,

            // Non-comparable payloads: equal if same variant
            (UreqHttpError(_), UreqHttpError(_)) => true,
            (IoError(_), IoError(_)) => true,
            (OemDeserialize(_), OemDeserialize(_)) => true,
            (TimeSource(_), TimeSource(_)) => true,

            // Unit variants
            (EmptyEphemeris, EmptyEphemeris) => true,

            _ => false,
        }
    }
}

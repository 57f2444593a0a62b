//! # OEM ephemeris document reader
//!
//! Parses the upstream CCSDS OEM/NDM XML document into typed
//! [`StateVector`] records. The document layout is
//! `ndm > oem > body > segment > data > stateVector`, each record carrying an
//! `EPOCH` timestamp plus six numeric components (`X`, `Y`, `Z`, `X_DOT`,
//! `Y_DOT`, `Z_DOT`); numeric elements may carry a `units` attribute.
//!
//! ## Error Handling
//! -----------------
//! Deserialization is done with all record fields optional, so a record with
//! a missing or malformed field fails on its own: the record is skipped with
//! a [`ParseVectorError`] warning and the rest of the document still loads.
//! Only a document that does not deserialize at all (not XML, wrong layout)
//! is reported to the caller.

use quick_xml::de::from_str;
use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

use crate::time::parse_epoch;
use crate::tracker_errors::TrackerError;

use super::StateVector;

/// Record-level parsing errors for OEM state vectors.
#[derive(Error, Debug, PartialEq)]
pub enum ParseVectorError {
    #[error("Missing field: {0}")]
    MissingField(&'static str),
    #[error("Invalid numeric value for {field}: {value}")]
    InvalidNumber { field: &'static str, value: String },
    #[error("Invalid epoch timestamp: {0}")]
    InvalidEpoch(String),
}

#[derive(Debug, Deserialize)]
struct Ndm {
    oem: Oem,
}

#[derive(Debug, Deserialize)]
struct Oem {
    body: Body,
}

#[derive(Debug, Deserialize)]
struct Body {
    #[serde(default)]
    segment: Vec<Segment>,
}

#[derive(Debug, Deserialize)]
struct Segment {
    #[serde(default)]
    data: Vec<Data>,
}

#[derive(Debug, Deserialize)]
struct Data {
    #[serde(rename = "stateVector", default)]
    state_vectors: Vec<RawStateVector>,
}

/// A state vector as it appears in the document, before field validation.
#[derive(Debug, Deserialize)]
struct RawStateVector {
    #[serde(rename = "EPOCH")]
    epoch: Option<String>,
    #[serde(rename = "X")]
    x: Option<NumericField>,
    #[serde(rename = "Y")]
    y: Option<NumericField>,
    #[serde(rename = "Z")]
    z: Option<NumericField>,
    #[serde(rename = "X_DOT")]
    x_dot: Option<NumericField>,
    #[serde(rename = "Y_DOT")]
    y_dot: Option<NumericField>,
    #[serde(rename = "Z_DOT")]
    z_dot: Option<NumericField>,
}

/// A numeric element, e.g. `<X units="km">-4488.33</X>`.
#[derive(Debug, Deserialize)]
struct NumericField {
    #[serde(rename = "@units")]
    #[allow(dead_code)]
    units: Option<String>,
    #[serde(rename = "$text")]
    value: Option<String>,
}

fn numeric(
    field: &'static str,
    raw: &Option<NumericField>,
) -> Result<f64, ParseVectorError> {
    let value = raw
        .as_ref()
        .and_then(|f| f.value.as_deref())
        .ok_or(ParseVectorError::MissingField(field))?;

    value
        .trim()
        .parse()
        .map_err(|_| ParseVectorError::InvalidNumber {
            field,
            value: value.to_string(),
        })
}

impl RawStateVector {
    fn into_state_vector(self) -> Result<StateVector, ParseVectorError> {
        let epoch = self
            .epoch
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or(ParseVectorError::MissingField("EPOCH"))?
            .to_string();

        let at = parse_epoch(&epoch)
            .map_err(|_| ParseVectorError::InvalidEpoch(epoch.clone()))?;

        let position = [
            numeric("X", &self.x)?,
            numeric("Y", &self.y)?,
            numeric("Z", &self.z)?,
        ];
        let velocity = [
            numeric("X_DOT", &self.x_dot)?,
            numeric("Y_DOT", &self.y_dot)?,
            numeric("Z_DOT", &self.z_dot)?,
        ];

        Ok(StateVector {
            epoch,
            at,
            position,
            velocity,
        })
    }
}

/// Parse a raw OEM document into ordered state vectors.
///
/// Arguments
/// ---------
/// * `xml`: the full OEM/NDM document text
///
/// Return
/// ------
/// * The valid records in document order (possibly empty), or a
///   [`TrackerError::OemDeserialize`] if the document itself does not
///   deserialize.
pub fn parse_oem(xml: &str) -> Result<Vec<StateVector>, TrackerError> {
    let ndm: Ndm = from_str(xml)?;

    let mut vectors = Vec::new();
    for segment in ndm.oem.body.segment {
        for data in segment.data {
            for raw in data.state_vectors {
                match raw.into_state_vector() {
                    Ok(vector) => vectors.push(vector),
                    Err(e) => warn!(error = %e, "skipping malformed state vector record"),
                }
            }
        }
    }

    Ok(vectors)
}

#[cfg(test)]
mod oem_reader_test {
    use super::*;

    fn record(epoch: &str, values: [&str; 6]) -> String {
        format!(
            "<stateVector><EPOCH>{}</EPOCH>\
             <X units=\"km\">{}</X><Y units=\"km\">{}</Y><Z units=\"km\">{}</Z>\
             <X_DOT units=\"km/s\">{}</X_DOT><Y_DOT units=\"km/s\">{}</Y_DOT><Z_DOT units=\"km/s\">{}</Z_DOT>\
             </stateVector>",
            epoch, values[0], values[1], values[2], values[3], values[4], values[5]
        )
    }

    fn document(records: &str) -> String {
        format!(
            "<ndm><oem id=\"CCSDS_OEM_VERS\" version=\"2.0\">\
             <header><CREATION_DATE>2025-074T12:00:00.000Z</CREATION_DATE></header>\
             <body><segment><metadata><OBJECT_NAME>ISS</OBJECT_NAME></metadata>\
             <data><COMMENT>Units are km and km/s</COMMENT>{records}</data>\
             </segment></body></oem></ndm>"
        )
    }

    #[test]
    fn test_parse_oem_valid_records() {
        let xml = document(&format!(
            "{}{}",
            record(
                "2025-074T11:34:54.000Z",
                ["-4488.3365", "5094.0272", "-251.5952", "5.3675", "5.3571", "-0.9957"]
            ),
            record(
                "2025-074T11:38:54.000Z",
                ["-3123.2000", "5800.1000", "1200.0000", "5.1000", "5.5000", "-1.2000"]
            ),
        ));

        let vectors = parse_oem(&xml).unwrap();
        assert_eq!(vectors.len(), 2);
        assert_eq!(vectors[0].epoch, "2025-074T11:34:54.000Z");
        assert_eq!(vectors[0].position, [-4488.3365, 5094.0272, -251.5952]);
        assert_eq!(vectors[0].velocity, [5.3675, 5.3571, -0.9957]);
        assert!(vectors[0].at < vectors[1].at);
    }

    #[test]
    fn test_parse_oem_skips_malformed_records() {
        let missing_field =
            "<stateVector><EPOCH>2025-074T11:42:54.000Z</EPOCH>\
             <X units=\"km\">1.0</X><Y units=\"km\">2.0</Y>\
             <X_DOT units=\"km/s\">3.0</X_DOT><Y_DOT units=\"km/s\">4.0</Y_DOT><Z_DOT units=\"km/s\">5.0</Z_DOT>\
             </stateVector>";
        let xml = document(&format!(
            "{}{}{}{}",
            record(
                "2025-074T11:34:54.000Z",
                ["-4488.3365", "5094.0272", "-251.5952", "5.3675", "5.3571", "-0.9957"]
            ),
            missing_field,
            record(
                "not-a-timestamp",
                ["1.0", "2.0", "3.0", "4.0", "5.0", "6.0"]
            ),
            record(
                "2025-074T11:46:54.000Z",
                ["1.0", "2.0", "not-a-number", "4.0", "5.0", "6.0"]
            ),
        ));

        let vectors = parse_oem(&xml).unwrap();
        assert_eq!(vectors.len(), 1);
        assert_eq!(vectors[0].epoch, "2025-074T11:34:54.000Z");
    }

    #[test]
    fn test_parse_oem_empty_data() {
        let vectors = parse_oem(&document("")).unwrap();
        assert!(vectors.is_empty());
    }

    #[test]
    fn test_parse_oem_rejects_non_xml() {
        assert!(parse_oem("definitely not an ephemeris").is_err());
    }

    #[test]
    fn test_parse_record_without_units_attribute() {
        let xml = document(
            "<stateVector><EPOCH>2025-074T11:34:54.000Z</EPOCH>\
             <X>-4488.3365</X><Y>5094.0272</Y><Z>-251.5952</Z>\
             <X_DOT>5.3675</X_DOT><Y_DOT>5.3571</Y_DOT><Z_DOT>-0.9957</Z_DOT>\
             </stateVector>",
        );
        let vectors = parse_oem(&xml).unwrap();
        assert_eq!(vectors.len(), 1);
    }
}

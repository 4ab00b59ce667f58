use base64::{engine::general_purpose::STANDARD_NO_PAD, Engine as _};
use mars_rover_core::Position;
use mars_rover_system_bootstrap::Scenario;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const SNAPSHOT_DOMAIN: &str = "rover";
const SNAPSHOT_VERSION: &str = "v1";

/// Identifier prefix emitted before the encoded scenario payload.
pub(crate) const SNAPSHOT_HEADER: &str = "rover:v1";
const FIELD_DELIMITER: char = ':';

/// Encodes a scenario into a single-line string suitable for sharing.
pub(crate) fn encode(scenario: &Scenario) -> Result<String, ScenarioTransferError> {
    let payload = SerializablePayload {
        start_x: scenario.start_x,
        start_y: scenario.start_y,
        facing: scenario.facing,
        obstacles: scenario.obstacles.clone(),
    };
    let json = serde_json::to_vec(&payload).map_err(ScenarioTransferError::InvalidPayload)?;
    let encoded = STANDARD_NO_PAD.encode(json);
    Ok(format!(
        "{SNAPSHOT_HEADER}:{}x{}:{encoded}",
        scenario.width, scenario.height
    ))
}

/// Decodes a scenario from its single-line string representation.
pub(crate) fn decode(value: &str) -> Result<Scenario, ScenarioTransferError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ScenarioTransferError::EmptyPayload);
    }

    let mut parts = trimmed.split(FIELD_DELIMITER);
    let domain = parts.next().ok_or(ScenarioTransferError::EmptyPayload)?;
    let version = parts.next().ok_or(ScenarioTransferError::MissingVersion)?;
    let dimensions = parts
        .next()
        .ok_or(ScenarioTransferError::MissingDimensions)?;
    let payload = parts.next().ok_or(ScenarioTransferError::MissingPayload)?;
    if parts.next().is_some() {
        return Err(ScenarioTransferError::TrailingFields);
    }

    if domain != SNAPSHOT_DOMAIN {
        return Err(ScenarioTransferError::InvalidPrefix(domain.to_owned()));
    }
    if version != SNAPSHOT_VERSION {
        return Err(ScenarioTransferError::UnsupportedVersion(version.to_owned()));
    }

    let (width, height) = parse_dimensions(dimensions)?;
    let bytes = STANDARD_NO_PAD
        .decode(payload.as_bytes())
        .map_err(ScenarioTransferError::InvalidEncoding)?;
    let decoded: SerializablePayload =
        serde_json::from_slice(&bytes).map_err(ScenarioTransferError::InvalidPayload)?;

    Ok(Scenario {
        width,
        height,
        start_x: decoded.start_x,
        start_y: decoded.start_y,
        facing: decoded.facing,
        obstacles: decoded.obstacles,
    })
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
struct SerializablePayload {
    start_x: i32,
    start_y: i32,
    facing: char,
    #[serde(default)]
    obstacles: Vec<Position>,
}

/// Errors that can occur while handling scenario transfer strings.
#[derive(Debug, Error)]
pub(crate) enum ScenarioTransferError {
    /// The provided string was empty or contained only whitespace.
    #[error("scenario string was empty")]
    EmptyPayload,
    /// The version segment was missing.
    #[error("scenario string is missing the version")]
    MissingVersion,
    /// The grid dimensions were missing.
    #[error("scenario string is missing the grid dimensions")]
    MissingDimensions,
    /// The payload segment was missing.
    #[error("scenario string is missing the payload")]
    MissingPayload,
    /// Extra fields followed the payload.
    #[error("scenario string has unexpected fields after the payload")]
    TrailingFields,
    /// The prefix segment did not name a rover scenario.
    #[error("scenario prefix '{0}' is not supported")]
    InvalidPrefix(String),
    /// The version identifier is unknown.
    #[error("scenario version '{0}' is not supported")]
    UnsupportedVersion(String),
    /// The grid dimensions could not be parsed.
    #[error("could not parse grid dimensions '{0}'")]
    InvalidDimensions(String),
    /// The base64 payload could not be decoded.
    #[error("could not decode scenario payload: {0}")]
    InvalidEncoding(#[source] base64::DecodeError),
    /// The payload could not be serialised or deserialised.
    #[error("could not parse scenario payload: {0}")]
    InvalidPayload(#[source] serde_json::Error),
}

fn parse_dimensions(dimensions: &str) -> Result<(u32, u32), ScenarioTransferError> {
    let invalid = || ScenarioTransferError::InvalidDimensions(dimensions.to_owned());
    let (width, height) = dimensions.split_once(['x', 'X']).ok_or_else(invalid)?;

    let width = width.trim().parse::<u32>().map_err(|_| invalid())?;
    let height = height.trim().parse::<u32>().map_err(|_| invalid())?;

    if width == 0 || height == 0 {
        return Err(invalid());
    }

    Ok((width, height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_scenario_survives_transfer() {
        let scenario = Scenario::demo();

        let encoded = encode(&scenario).expect("scenario encodes");
        assert!(encoded.starts_with(&format!("{SNAPSHOT_HEADER}:10x10:")));

        let decoded = decode(&encoded).expect("scenario decodes");
        assert_eq!(decoded, scenario);
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        let scenario = Scenario {
            width: 3,
            height: 7,
            start_x: 2,
            start_y: 6,
            facing: 'W',
            obstacles: Vec::new(),
        };
        let encoded = format!("  {}\n", encode(&scenario).expect("scenario encodes"));

        assert_eq!(decode(&encoded).expect("scenario decodes"), scenario);
    }

    #[test]
    fn malformed_strings_are_rejected() {
        assert!(matches!(decode("   "), Err(ScenarioTransferError::EmptyPayload)));
        assert!(matches!(
            decode("rover"),
            Err(ScenarioTransferError::MissingVersion)
        ));
        assert!(matches!(
            decode("rover:v1:4x4"),
            Err(ScenarioTransferError::MissingPayload)
        ));
        assert!(matches!(
            decode("maze:v1:4x4:e30"),
            Err(ScenarioTransferError::InvalidPrefix(prefix)) if prefix == "maze"
        ));
        assert!(matches!(
            decode("rover:v2:4x4:e30"),
            Err(ScenarioTransferError::UnsupportedVersion(_))
        ));
        assert!(matches!(
            decode("rover:v1:0x4:e30"),
            Err(ScenarioTransferError::InvalidDimensions(_))
        ));
        assert!(matches!(
            decode("rover:v1:4x4:!!"),
            Err(ScenarioTransferError::InvalidEncoding(_))
        ));
        assert!(matches!(
            decode("rover:v1:4x4:e30"),
            Err(ScenarioTransferError::InvalidPayload(_))
        ));
    }

    #[test]
    fn fields_after_payload_are_rejected() {
        let encoded = encode(&Scenario::demo()).expect("scenario encodes");

        assert!(matches!(
            decode(&format!("{encoded}:garbage:more")),
            Err(ScenarioTransferError::TrailingFields)
        ));
        assert!(matches!(
            decode(&format!("{encoded}:")),
            Err(ScenarioTransferError::TrailingFields)
        ));
    }
}

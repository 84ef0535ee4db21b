use crate::{
    errors::{AppError, IOError, SyncError},
    shapes::{player::PlayerEntry, roster::Roster},
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{to_vec_pretty, Value};

/// The JSON document stored in the cloud:
///
/// ```text
/// {
///   "players": [{ "id": 1, "name": "...", "attendance": [0, 1, 2, null] }],
///   "trainingDates": ["2025-08-01", ...]
/// }
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct RosterDocument {
    pub players: Vec<PlayerEntry>,
    pub training_dates: Vec<NaiveDate>,
}

pub fn serialize_snapshot(roster: &Roster) -> RosterDocument {
    RosterDocument {
        players: roster.players().to_vec(),
        training_dates: roster.training_dates().to_vec(),
    }
}

pub fn encode_snapshot(roster: &Roster) -> Result<Vec<u8>, AppError> {
    to_vec_pretty(&serialize_snapshot(roster)).map_err(|e| AppError::IO(IOError::from(e)))
}

/// Checks the top-level shape of a downloaded document and decodes it.
///
/// Alignment, ordering and id uniqueness are checked later, by
/// [`Roster::replace_all`].
pub fn deserialize_snapshot(document: Value) -> Result<RosterDocument, AppError> {
    let object = document
        .as_object()
        .ok_or_else(|| malformed("document is not a JSON object".to_string()))?;
    match (object.get("players"), object.get("trainingDates")) {
        (Some(Value::Array(_)), Some(Value::Array(_))) => {}
        (Some(Value::Array(_)), _) => {
            return Err(malformed("'trainingDates' must be an array".to_string()))
        }
        _ => return Err(malformed("'players' must be an array".to_string())),
    }
    serde_json::from_value::<RosterDocument>(document).map_err(|e| malformed(e.to_string()))
}

fn malformed(message: String) -> AppError {
    AppError::Sync(SyncError::MalformedPayload(message))
}

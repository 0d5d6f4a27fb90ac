use crate::map::models::LatLng;
use crate::rounds::models::{RoundError, RoundOutcome, RoundSnapshot};
use serde::Serialize;

/// Why a request about a round was refused. Refusals still come back with `200 OK` and
/// `error: true`.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum RoundErrorCode {
    RoundNotFound,
    RoundNotStarted,
    RoundAlreadyStarted,
    RoundLocked,
}

impl From<RoundError> for RoundErrorCode {
    fn from(error: RoundError) -> Self {
        match error {
            RoundError::NotFound => Self::RoundNotFound,
            RoundError::NotStarted => Self::RoundNotStarted,
            RoundError::AlreadyStarted => Self::RoundAlreadyStarted,
            RoundError::Locked => Self::RoundLocked,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoundResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<RoundErrorCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub round: Option<CreatedRound>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedRound {
    pub round_id: String,
    pub spawn_location: LatLng,
    pub duration_secs: u64,
    /// How many candidates were checked for imagery before one was accepted.
    pub spawn_attempts: u32,
    pub used_fallback: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundStatusResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<RoundErrorCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub round: Option<RoundSnapshot>,
}

impl RoundStatusResponse {
    pub fn failed(error: RoundError) -> Self {
        Self {
            error: true,
            error_code: Some(error.into()),
            round: None,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveGuessResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<RoundErrorCode>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitGuessResponse {
    pub error: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<RoundErrorCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outcome: Option<RoundOutcome>,
}

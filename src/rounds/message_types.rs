use crate::rounds::display::format_clock;
use crate::rounds::models::{RoundEvent, RoundOutcome};
use serde::Serialize;
use serde_unit_struct::Serialize_unit_struct;

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ServerSentSocketMessage {
    Tick {
        r#type: Tick,
        payload: TickPayload,
    },
    RoundFinished {
        r#type: RoundFinished,
        payload: RoundOutcome,
    },
}

impl From<RoundEvent> for ServerSentSocketMessage {
    fn from(event: RoundEvent) -> Self {
        match event {
            RoundEvent::Tick { remaining_secs } => Self::Tick {
                r#type: Tick,
                payload: TickPayload {
                    remaining_secs,
                    display: format_clock(remaining_secs),
                },
            },
            RoundEvent::Finished(outcome) => Self::RoundFinished {
                r#type: RoundFinished,
                payload: outcome,
            },
        }
    }
}

#[derive(Debug, Serialize_unit_struct)]
pub struct Tick;

#[derive(Debug, Serialize_unit_struct)]
pub struct RoundFinished;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TickPayload {
    pub remaining_secs: u64,
    /// `MM:SS`.
    pub display: String,
}

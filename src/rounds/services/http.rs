use crate::app_context::{AppContext, RequestContext};
use crate::map::models::LatLng;
use crate::rounds::models::LockTrigger;
use crate::rounds::services::responses::{
    CreateRoundResponse, CreatedRound, RoundStatusResponse, SaveGuessResponse,
    SubmitGuessResponse,
};
use crate::storage::interface::IRoundStorage;

pub struct RoundHttpHandler<'a, RS: IRoundStorage> {
    app_context: AppContext<RS>,
    request_context: &'a RequestContext,
}

impl<'a, RS> RoundHttpHandler<'a, RS>
where
    RS: IRoundStorage,
{
    pub fn new(app_context: AppContext<RS>, request_context: &'a RequestContext) -> Self {
        Self {
            app_context,
            request_context,
        }
    }

    pub async fn status(&self) -> RoundStatusResponse {
        match self
            .app_context
            .rounds
            .snapshot(&self.request_context.round_id)
            .await
        {
            Ok(snapshot) => RoundStatusResponse {
                error: false,
                error_code: None,
                round: Some(snapshot),
            },
            Err(error) => RoundStatusResponse::failed(error),
        }
    }

    pub async fn save_guess(&self, guess: LatLng) -> SaveGuessResponse {
        match self
            .app_context
            .rounds
            .save_guess(&self.request_context.round_id, guess)
            .await
        {
            Ok(()) => SaveGuessResponse {
                error: false,
                error_code: None,
            },
            Err(error) => {
                tracing::debug!(
                    round_id = %self.request_context.round_id,
                    %error,
                    "Refused to save a guess."
                );
                SaveGuessResponse {
                    error: true,
                    error_code: Some(error.into()),
                }
            }
        }
    }

    pub async fn submit_guess(&self) -> SubmitGuessResponse {
        match self
            .app_context
            .rounds
            .lock_round(&self.request_context.round_id, LockTrigger::Submitted)
            .await
        {
            Ok(outcome) => SubmitGuessResponse {
                error: false,
                error_code: None,
                outcome: Some(outcome),
            },
            Err(error) => {
                tracing::debug!(
                    round_id = %self.request_context.round_id,
                    %error,
                    "Refused to submit a guess."
                );
                SubmitGuessResponse {
                    error: true,
                    error_code: Some(error.into()),
                    outcome: None,
                }
            }
        }
    }
}

pub struct CreateRoundHttpHandler<RS: IRoundStorage> {
    app_context: AppContext<RS>,
}

impl<RS> CreateRoundHttpHandler<RS>
where
    RS: IRoundStorage,
{
    pub fn new(app_context: AppContext<RS>) -> Self {
        Self { app_context }
    }

    /// Finds a spawn point, then stores the round already started. Nothing is stored while the
    /// spawn is being resolved, so an abandoned request leaves no round behind.
    pub async fn create(&self) -> CreateRoundResponse {
        let duration_secs = self.app_context.settings.round_duration_secs;
        let spawn = self.app_context.spawner.resolve().await;
        let round_id = match self
            .app_context
            .rounds
            .open_round(duration_secs, spawn.location)
            .await
        {
            Ok(round_id) => round_id,
            Err(error) => {
                tracing::error!(%error, "Failed to start a new round.");
                return CreateRoundResponse {
                    error: true,
                    error_code: Some(error.into()),
                    round: None,
                };
            }
        };
        CreateRoundResponse {
            error: false,
            error_code: None,
            round: Some(CreatedRound {
                round_id,
                spawn_location: spawn.location,
                duration_secs,
                spawn_attempts: spawn.attempts,
                used_fallback: spawn.used_fallback,
            }),
        }
    }
}

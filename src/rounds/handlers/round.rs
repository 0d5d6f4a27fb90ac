use crate::app_context::{AppContext, RequestContext};
use crate::map::models::LatLng;
use crate::rounds::services::http::{CreateRoundHttpHandler, RoundHttpHandler};
use crate::rounds::services::responses::{
    CreateRoundResponse, RoundStatusResponse, SaveGuessResponse, SubmitGuessResponse,
};
use crate::storage::rounds::HashMapRoundsStorage;
use axum::extract::{Path, State};
use axum::response::Json;

#[axum::debug_handler]
pub async fn create(
    State(app_context): State<AppContext<HashMapRoundsStorage>>,
) -> Json<CreateRoundResponse> {
    let response = CreateRoundHttpHandler::new(app_context).create().await;
    Json(response)
}

#[axum::debug_handler]
pub async fn status(
    Path(round_id): Path<String>,
    State(app_context): State<AppContext<HashMapRoundsStorage>>,
) -> Json<RoundStatusResponse> {
    let request_context = RequestContext { round_id };
    let response = RoundHttpHandler::new(app_context, &request_context)
        .status()
        .await;
    Json(response)
}

#[axum::debug_handler]
pub async fn save_guess(
    Path(round_id): Path<String>,
    State(app_context): State<AppContext<HashMapRoundsStorage>>,
    Json(guess): Json<LatLng>,
) -> Json<SaveGuessResponse> {
    let request_context = RequestContext { round_id };
    let response = RoundHttpHandler::new(app_context, &request_context)
        .save_guess(guess)
        .await;
    Json(response)
}

#[axum::debug_handler]
pub async fn submit_guess(
    Path(round_id): Path<String>,
    State(app_context): State<AppContext<HashMapRoundsStorage>>,
) -> Json<SubmitGuessResponse> {
    let request_context = RequestContext { round_id };
    let response = RoundHttpHandler::new(app_context, &request_context)
        .submit_guess()
        .await;
    Json(response)
}

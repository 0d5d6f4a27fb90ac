use crate::app_context::{AppContext, RequestContext};
use crate::rounds::services::responses::RoundStatusResponse;
use crate::rounds::services::ws::RoundWsHandler;
use crate::storage::rounds::HashMapRoundsStorage;
use axum::extract::ws::WebSocketUpgrade;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};

#[axum::debug_handler]
pub async fn ws(
    ws: WebSocketUpgrade,
    Path(round_id): Path<String>,
    State(app_context): State<AppContext<HashMapRoundsStorage>>,
) -> Response {
    let request_context = RequestContext { round_id };
    match RoundWsHandler::connect(app_context, request_context).await {
        Ok(handler) => ws.on_upgrade(move |socket| handler.on_client_connected(socket)),
        Err(error) => (
            StatusCode::NOT_FOUND,
            Json(RoundStatusResponse::failed(error)),
        )
            .into_response(),
    }
}

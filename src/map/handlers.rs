use crate::app_context::AppContext;
use crate::map::consts::{CAMPUS_CENTER, CAMPUS_ZOOM};
use crate::map::responses::MapConfigResponse;
use crate::storage::rounds::HashMapRoundsStorage;
use axum::extract::State;
use axum::response::Json;

#[axum::debug_handler]
pub async fn config(
    State(app_context): State<AppContext<HashMapRoundsStorage>>,
) -> Json<MapConfigResponse> {
    let sampler = app_context.spawner.sampler();
    Json(MapConfigResponse {
        center: CAMPUS_CENTER,
        zoom: CAMPUS_ZOOM,
        boundary: sampler.boundary().vertices().to_vec(),
        bounding_box: sampler.bounding_box(),
        round_duration_secs: app_context.settings.round_duration_secs,
        panorama: app_context.settings.panorama,
        show_spawn_coordinates: app_context.settings.show_spawn_coordinates,
    })
}

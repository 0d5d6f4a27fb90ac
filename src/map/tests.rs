use crate::app_context::PanoramaView;
use crate::http::tests::test_server;
use crate::map::consts::{
    CAMPUS_BOUNDARY, CAMPUS_BOUNDING_BOX, CAMPUS_CENTER, CAMPUS_ZOOM, PANORAMA_HEADING,
    PANORAMA_PITCH,
};
use crate::map::responses::MapConfigResponse;

#[tokio::test]
async fn test_map_config() {
    let server = test_server();

    let response = server.get("/map/config").await;

    response.assert_status_ok();
    response.assert_json(&MapConfigResponse {
        center: CAMPUS_CENTER,
        zoom: CAMPUS_ZOOM,
        boundary: CAMPUS_BOUNDARY.to_vec(),
        bounding_box: CAMPUS_BOUNDING_BOX,
        round_duration_secs: 120,
        panorama: PanoramaView {
            heading: PANORAMA_HEADING,
            pitch: PANORAMA_PITCH,
            heading_locked: true,
        },
        show_spawn_coordinates: false,
    });
}

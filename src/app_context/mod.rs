use crate::cli::Args;
use crate::imagery::{ImageryService, LocationValidator};
use crate::map::consts::{CAMPUS_BOUNDARY, CAMPUS_BOUNDING_BOX, PANORAMA_HEADING, PANORAMA_PITCH};
use crate::map::models::Boundary;
use crate::map::sampler::GeoSampler;
use crate::spawn::Spawner;
use crate::storage::interface::IRoundStorage;
use crate::storage::rounds::HashMapRoundsStorage;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppContext<RS: IRoundStorage> {
    pub rounds: RS,
    pub spawner: Arc<Spawner>,
    pub settings: Arc<GameSettings>,
}

pub struct RequestContext {
    pub round_id: String,
}

#[derive(Debug)]
pub struct GameSettings {
    pub round_duration_secs: u64,
    pub panorama: PanoramaView,
    pub show_spawn_coordinates: bool,
}

/// Initial camera of the panorama. With `heading_locked` the player can't look around.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PanoramaView {
    pub heading: f64,
    pub pitch: f64,
    pub heading_locked: bool,
}

pub fn init(args: &Args, imagery: Arc<dyn ImageryService>) -> AppContext<HashMapRoundsStorage> {
    let boundary = Boundary::new(CAMPUS_BOUNDARY.to_vec())
        .expect("The campus boundary must have at least 3 vertices.");
    let sampler = GeoSampler::new(boundary, CAMPUS_BOUNDING_BOX, args.sample_attempts);
    let validator = LocationValidator::new(imagery, args.search_radius_meters);
    let spawner = Spawner::new(sampler, validator, args.spawn_attempts);
    let settings = GameSettings {
        round_duration_secs: args.round_duration_secs,
        panorama: PanoramaView {
            heading: PANORAMA_HEADING,
            pitch: PANORAMA_PITCH,
            heading_locked: args.lock_heading,
        },
        show_spawn_coordinates: args.show_spawn_coordinates,
    };
    tracing::info!(
        round_duration_secs = settings.round_duration_secs,
        spawn_attempts = args.spawn_attempts,
        sample_attempts = args.sample_attempts,
        "Initialized game settings."
    );
    AppContext {
        rounds: HashMapRoundsStorage::default(),
        spawner: Arc::new(spawner),
        settings: Arc::new(settings),
    }
}

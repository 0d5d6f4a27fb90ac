use crate::map::consts::MAX_SAMPLE_ATTEMPTS;
use clap::Parser;
use std::net::SocketAddr;
#[cfg(test)]
pub mod tests;

#[derive(Debug, Parser)]
pub struct Args {
    #[arg(long)]
    #[arg(default_value = "0.0.0.0:3030")]
    pub listen_address: SocketAddr,
    /// Origins the browser client is served from.
    #[arg(long, value_delimiter = ',')]
    #[arg(default_value = "http://127.0.0.1:3000,http://localhost:3000")]
    pub allowed_origins: Vec<String>,
    #[arg(long)]
    #[arg(default_value_t = 120)]
    pub round_duration_secs: u64,
    /// How many candidate spawns are checked for imagery before giving up.
    #[arg(long)]
    #[arg(default_value_t = 15)]
    pub spawn_attempts: u32,
    /// How many random draws the sampler makes before settling for the campus centroid.
    #[arg(long)]
    #[arg(default_value_t = MAX_SAMPLE_ATTEMPTS)]
    pub sample_attempts: u32,
    #[arg(long)]
    #[arg(default_value_t = 50)]
    pub search_radius_meters: u32,
    /// Keep the panorama camera pointed in its initial direction.
    #[arg(long)]
    pub lock_heading: bool,
    /// Show the spawn coordinates to the player.
    #[arg(long)]
    pub show_spawn_coordinates: bool,
}

use crate::cli::Args;
use clap::Parser;
use std::{net::SocketAddr, str::FromStr};

pub fn fake_args() -> Args {
    Args {
        listen_address: SocketAddr::from_str("0.0.0.0:3030")
            .expect("Failed to construct fake listen address."),
        allowed_origins: vec![String::from("http://localhost:3000")],
        round_duration_secs: 120,
        spawn_attempts: 15,
        sample_attempts: 80,
        search_radius_meters: 50,
        lock_heading: true,
        show_spawn_coordinates: false,
    }
}

#[test]
fn defaults_match_the_campus_game() {
    let args = Args::parse_from(["campus-guessr-server"]);

    assert_eq!(args.round_duration_secs, 120);
    assert_eq!(args.spawn_attempts, 15);
    assert_eq!(args.sample_attempts, 80);
    assert_eq!(args.search_radius_meters, 50);
    assert_eq!(args.allowed_origins.len(), 2);
    assert!(!args.lock_heading);
}

#[test]
fn origins_are_comma_separated() {
    let args = Args::parse_from([
        "campus-guessr-server",
        "--allowed-origins",
        "https://a.example,https://b.example",
        "--lock-heading",
    ]);

    assert_eq!(
        args.allowed_origins,
        vec!["https://a.example".to_string(), "https://b.example".to_string()]
    );
    assert!(args.lock_heading);
}

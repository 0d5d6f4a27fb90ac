/// `MM:SS`, with minutes allowed to go past 59.
pub fn format_clock(remaining_secs: u64) -> String {
    format!("{:02}:{:02}", remaining_secs / 60, remaining_secs % 60)
}

pub fn format_distance(distance_meters: f64) -> String {
    format!("{} m", distance_meters.round() as u64)
}

pub fn final_message(score: u64, distance_meters: Option<f64>) -> String {
    match distance_meters {
        Some(distance) => format!(
            "You scored {score} points! Your guess was {} away.",
            format_distance(distance)
        ),
        None => String::from("No guess submitted. You scored 0 points."),
    }
}

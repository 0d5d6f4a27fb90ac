pub mod round;
pub mod ws;

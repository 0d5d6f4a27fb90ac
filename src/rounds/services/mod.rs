pub mod http;
pub mod responses;
pub mod ws;

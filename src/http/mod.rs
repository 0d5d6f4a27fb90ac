pub mod cors;
pub mod extractors;
pub mod middleware;
pub mod router;

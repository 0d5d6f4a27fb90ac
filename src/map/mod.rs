pub mod consts;
pub mod handlers;
pub mod models;
pub mod responses;
pub mod sampler;
pub mod scoring;
#[cfg(test)]
pub mod tests;

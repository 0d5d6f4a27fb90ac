pub mod consts;
pub mod display;
pub mod handlers;
pub mod message_types;
pub mod models;
pub mod services;
pub mod timer;

pub mod api;
pub mod config;
pub mod counter;
pub mod error;

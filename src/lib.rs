pub mod config;
pub mod engine;
pub mod models;

pub use config::Config;
pub use engine::Engine;

pub mod config;

pub use config::{AppConfig, CITY_STYLES};

mod builder;
mod defaults;
mod file;
mod models;

pub use builder::{build_scan_config, resolve_data_dir};
pub use models::AppConfig;

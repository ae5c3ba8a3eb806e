use kinetix::workflows::config::ScanConfig;
use std::path::PathBuf;

pub struct AppConfig {
    pub data_dir: PathBuf,
    pub output: Option<PathBuf>,
    pub core_config: ScanConfig,
}

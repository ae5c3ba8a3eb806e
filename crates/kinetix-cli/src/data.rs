use crate::error::{CliError, Result};
use directories::ProjectDirs;
use kinetix::core::data::{DISSOCIATION_FILE, INTERACTION_FILE, PARTICLES_FILE};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

const BUNDLED_FILES: [(&str, &str); 3] = [
    (PARTICLES_FILE, include_str!("../../../data/particles.toml")),
    (INTERACTION_FILE, include_str!("../../../data/interaction.csv")),
    (DISSOCIATION_FILE, include_str!("../../../data/dissociation.csv")),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    Written,
    Skipped,
}

#[derive(Debug)]
pub struct DataManager {
    base_path: PathBuf,
}

impl DataManager {
    pub fn new() -> Result<Self> {
        let path = Self::determine_data_path()?;
        debug!("DataManager initialized with path: {:?}", &path);
        Ok(Self { base_path: path })
    }

    pub fn with_custom_path(path: PathBuf) -> Self {
        Self { base_path: path }
    }

    /// Manager for a `--data-dir` override, falling back to the stored or default
    /// path. The override bypasses the user's project directories entirely.
    pub fn with_override(data_dir: Option<&Path>) -> Result<Self> {
        match data_dir {
            Some(dir) => Ok(Self::with_custom_path(dir.to_path_buf())),
            None => Self::new(),
        }
    }

    pub fn get_data_path(&self) -> &Path {
        &self.base_path
    }

    /// Whether every table the kinetics library reads is present.
    pub fn is_initialized(&self) -> bool {
        BUNDLED_FILES
            .iter()
            .all(|(name, _)| self.base_path.join(name).is_file())
    }

    /// Writes the bundled tables into the data directory, one outcome per file.
    pub fn init_data(&self, force: bool) -> Result<Vec<(&'static str, InitOutcome)>> {
        info!("Writing bundled data to {:?}", &self.base_path);
        fs::create_dir_all(&self.base_path)?;

        let mut outcomes = Vec::with_capacity(BUNDLED_FILES.len());
        for (name, content) in BUNDLED_FILES {
            let target = self.base_path.join(name);
            if target.exists() && !force {
                warn!("{:?} already exists, leaving it untouched.", &target);
                outcomes.push((name, InitOutcome::Skipped));
                continue;
            }
            fs::write(&target, content)?;
            debug!("Wrote {:?}", &target);
            outcomes.push((name, InitOutcome::Written));
        }
        Ok(outcomes)
    }

    pub fn set_custom_path(path: &Path) -> Result<()> {
        let path_str = path.to_str().ok_or_else(|| {
            CliError::Argument(format!("Data path is not valid UTF-8: {}", path.display()))
        })?;
        let config_path = Self::get_path_config_file()?;
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(config_path, path_str).map_err(CliError::from)
    }

    pub fn reset_path() -> Result<()> {
        if let Ok(config_path) = Self::get_path_config_file() {
            if config_path.exists() {
                fs::remove_file(config_path)?;
            }
        }
        Ok(())
    }

    fn determine_data_path() -> Result<PathBuf> {
        match Self::get_path_config_file() {
            Ok(config_path) if config_path.exists() => {
                let custom_path_str = fs::read_to_string(&config_path)?.trim().to_string();
                if custom_path_str.is_empty() {
                    warn!("Custom path config file is empty, falling back to default path.");
                    Self::get_default_data_path()
                } else {
                    Ok(PathBuf::from(custom_path_str))
                }
            }
            _ => Self::get_default_data_path(),
        }
    }

    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("org", "kinetix", "kinetix")
    }

    fn get_path_config_file() -> Result<PathBuf> {
        Self::project_dirs()
            .map(|dirs| dirs.config_dir().join("path.conf"))
            .ok_or_else(|| CliError::Data("Could not determine config directory path.".to_string()))
    }

    fn get_default_data_path() -> Result<PathBuf> {
        Self::project_dirs()
            .map(|dirs| dirs.data_dir().to_path_buf())
            .ok_or_else(|| {
                CliError::Data("Could not determine default data directory path.".to_string())
            })
    }
}

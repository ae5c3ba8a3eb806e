use crate::error::{CliError, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Deserialize, Debug, Default, Clone)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileTemperatureConfig {
    pub start: Option<f64>,
    pub end: Option<f64>,
    pub steps: Option<usize>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileScanConfig {
    pub molecule: Option<String>,
    pub partner: Option<String>,
    pub level: Option<usize>,
    pub number_density: Option<f64>,
    pub temperatures: Option<FileTemperatureConfig>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileModelConfig {
    pub vibrational: Option<String>,
    pub u_model: Option<String>,
    pub crosssection: Option<String>,
    pub omega: Option<String>,
    pub diss_energy: Option<String>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct FileConfig {
    pub data_dir: Option<PathBuf>,
    pub scan: Option<FileScanConfig>,
    pub models: Option<FileModelConfig>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        toml::from_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn unknown_keys_are_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[scan]\nmolecule = \"N2\"\nlevle = 3\n").unwrap();
        assert!(matches!(
            FileConfig::from_file(&path),
            Err(CliError::FileParsing { .. })
        ));
    }

    #[test]
    fn nested_tables_use_kebab_case() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let toml = r#"
            data-dir = "/opt/kinetix"

            [scan]
            number-density = 1.0e24

            [scan.temperatures]
            steps = 4

            [models]
            u-model = "3T"
            diss-energy = "total"
            "#;
        fs::write(&path, toml).unwrap();

        let config = FileConfig::from_file(&path).unwrap();
        assert_eq!(config.data_dir, Some(PathBuf::from("/opt/kinetix")));
        let scan = config.scan.unwrap();
        assert_eq!(scan.number_density, Some(1.0e24));
        assert_eq!(scan.temperatures.unwrap().steps, Some(4));
        let models = config.models.unwrap();
        assert_eq!(models.u_model.as_deref(), Some("3T"));
        assert_eq!(models.diss_energy.as_deref(), Some("total"));
    }
}

use crate::core::particles::{UModel, VibrationalModel};
use crate::kinetics::crosssection::{CrossSectionModel, DissociationEnergy, OmegaModel};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Invalid value for '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

/// Loschmidt number density at 0 °C and 1 atm [m⁻³].
pub const DEFAULT_NUMBER_DENSITY: f64 = 2.6867811e25;

/// Evenly spaced temperatures from `start` to `end`, both included.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureRange {
    pub start: f64,
    pub end: f64,
    pub steps: usize,
}

impl TemperatureRange {
    pub fn values(&self) -> Vec<f64> {
        if self.steps <= 1 {
            return vec![self.start];
        }
        let step = (self.end - self.start) / (self.steps - 1) as f64;
        (0..self.steps)
            .map(|k| self.start + step * k as f64)
            .collect()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !(self.start > 0.0) {
            return Err(ConfigError::InvalidParameter {
                name: "temperatures",
                reason: format!("start must be positive, got {}", self.start),
            });
        }
        if self.end < self.start {
            return Err(ConfigError::InvalidParameter {
                name: "temperatures",
                reason: format!("end {} is below start {}", self.end, self.start),
            });
        }
        if self.steps == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "temperatures",
                reason: "at least one step is required".to_string(),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModelSelection {
    pub vibr_model: VibrationalModel,
    pub u_model: UModel,
    pub crosssection_model: CrossSectionModel,
    pub omega_model: OmegaModel,
    pub diss_energy: DissociationEnergy,
}

impl Default for ModelSelection {
    fn default() -> Self {
        Self {
            vibr_model: VibrationalModel::Anharmonic,
            u_model: UModel::D6k,
            crosssection_model: CrossSectionModel::RigidSphere,
            omega_model: OmegaModel::LennardJones,
            diss_energy: DissociationEnergy::CenterOfMass,
        }
    }
}

/// Everything a temperature scan of one (molecule, partner) pair needs.
#[derive(Debug, Clone, PartialEq)]
pub struct ScanConfig {
    pub molecule: String,
    pub partner: String,
    pub temperatures: TemperatureRange,
    /// Vibrational level of the level-resolved rates; VT rates describe
    /// `level → level − 1`.
    pub level: usize,
    pub number_density: f64,
    pub models: ModelSelection,
}

#[derive(Default)]
pub struct ScanConfigBuilder {
    molecule: Option<String>,
    partner: Option<String>,
    temperatures: Option<TemperatureRange>,
    level: Option<usize>,
    number_density: Option<f64>,
    vibr_model: Option<VibrationalModel>,
    u_model: Option<UModel>,
    crosssection_model: Option<CrossSectionModel>,
    omega_model: Option<OmegaModel>,
    diss_energy: Option<DissociationEnergy>,
}

impl ScanConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn molecule(mut self, name: impl Into<String>) -> Self {
        self.molecule = Some(name.into());
        self
    }
    pub fn partner(mut self, name: impl Into<String>) -> Self {
        self.partner = Some(name.into());
        self
    }
    pub fn temperatures(mut self, start: f64, end: f64, steps: usize) -> Self {
        self.temperatures = Some(TemperatureRange { start, end, steps });
        self
    }
    pub fn level(mut self, level: usize) -> Self {
        self.level = Some(level);
        self
    }
    pub fn number_density(mut self, n: f64) -> Self {
        self.number_density = Some(n);
        self
    }
    pub fn vibr_model(mut self, model: VibrationalModel) -> Self {
        self.vibr_model = Some(model);
        self
    }
    pub fn u_model(mut self, model: UModel) -> Self {
        self.u_model = Some(model);
        self
    }
    pub fn crosssection_model(mut self, model: CrossSectionModel) -> Self {
        self.crosssection_model = Some(model);
        self
    }
    pub fn omega_model(mut self, model: OmegaModel) -> Self {
        self.omega_model = Some(model);
        self
    }
    pub fn diss_energy(mut self, energy: DissociationEnergy) -> Self {
        self.diss_energy = Some(energy);
        self
    }

    pub fn build(self) -> Result<ScanConfig, ConfigError> {
        let temperatures = self
            .temperatures
            .ok_or(ConfigError::MissingParameter("temperatures"))?;
        temperatures.validate()?;

        let level = self.level.unwrap_or(1);
        if level == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "level",
                reason: "level 0 has no lower level to relax to".to_string(),
            });
        }

        let number_density = self.number_density.unwrap_or(DEFAULT_NUMBER_DENSITY);
        if !(number_density > 0.0) {
            return Err(ConfigError::InvalidParameter {
                name: "number_density",
                reason: format!("must be positive, got {number_density}"),
            });
        }

        let defaults = ModelSelection::default();
        Ok(ScanConfig {
            molecule: self
                .molecule
                .ok_or(ConfigError::MissingParameter("molecule"))?,
            partner: self
                .partner
                .ok_or(ConfigError::MissingParameter("partner"))?,
            temperatures,
            level,
            number_density,
            models: ModelSelection {
                vibr_model: self.vibr_model.unwrap_or(defaults.vibr_model),
                u_model: self.u_model.unwrap_or(defaults.u_model),
                crosssection_model: self
                    .crosssection_model
                    .unwrap_or(defaults.crosssection_model),
                omega_model: self.omega_model.unwrap_or(defaults.omega_model),
                diss_energy: self.diss_energy.unwrap_or(defaults.diss_energy),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_applies_defaults() {
        let config = ScanConfigBuilder::new()
            .molecule("N2")
            .partner("N")
            .temperatures(1000.0, 2000.0, 3)
            .build()
            .unwrap();
        assert_eq!(config.level, 1);
        assert_eq!(config.number_density, DEFAULT_NUMBER_DENSITY);
        assert_eq!(config.models, ModelSelection::default());
        assert_eq!(config.temperatures.values(), vec![1000.0, 1500.0, 2000.0]);
    }

    #[test]
    fn builder_reports_missing_parameters() {
        let result = ScanConfigBuilder::new().temperatures(300.0, 400.0, 2).build();
        assert_eq!(result, Err(ConfigError::MissingParameter("molecule")));
        let result = ScanConfigBuilder::new().molecule("N2").partner("N").build();
        assert_eq!(result, Err(ConfigError::MissingParameter("temperatures")));
    }

    #[test]
    fn builder_rejects_invalid_values() {
        let base = || {
            ScanConfigBuilder::new()
                .molecule("N2")
                .partner("N2")
                .temperatures(300.0, 400.0, 2)
        };
        assert!(matches!(
            base().level(0).build(),
            Err(ConfigError::InvalidParameter { name: "level", .. })
        ));
        assert!(matches!(
            base().number_density(-1.0).build(),
            Err(ConfigError::InvalidParameter { name: "number_density", .. })
        ));
        assert!(matches!(
            base().temperatures(500.0, 400.0, 2).build(),
            Err(ConfigError::InvalidParameter { name: "temperatures", .. })
        ));
    }

    #[test]
    fn single_step_range_yields_start_only() {
        let range = TemperatureRange {
            start: 750.0,
            end: 900.0,
            steps: 1,
        };
        assert_eq!(range.values(), vec![750.0]);
    }
}

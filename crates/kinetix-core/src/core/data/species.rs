use super::error::DataError;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Tabulated constants of a diatomic molecule, in the units of the data file.
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct MoleculeRecord {
    /// Molecular mass [amu].
    pub mass: f64,
    pub num_rot: usize,
    pub rot_symmetry: f64,
    pub num_vibr_harmonic: usize,
    pub num_vibr_anharmonic: usize,
    /// Moment of inertia [1e-46 kg·m²].
    pub inertia: f64,
    /// Harmonic spectroscopic constant ω_e [cm⁻¹].
    pub hvc: f64,
    /// Anharmonicity ω_e x_e / ω_e (dimensionless).
    pub avc: f64,
    /// Dissociation energy [eV].
    pub diss: f64,
    /// Formation energy [eV].
    pub form: f64,
    /// Lennard-Jones well depth ε/k [K].
    pub lj_eps: f64,
    /// Lennard-Jones collision diameter [Å].
    pub lj_sigma: f64,
    /// Parker's limiting rotational collision number ζ∞.
    pub infcoll: f64,
    /// Optional tabulated vibrational level energies [eV].
    #[serde(default)]
    pub vibr_levels: Option<Vec<f64>>,
    /// Masses of the two nuclei [amu]; two halves of `mass` when absent.
    #[serde(default)]
    pub nuclear_masses: Option<[f64; 2]>,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "kebab-case")]
pub struct AtomRecord {
    pub mass: f64,
    pub lj_eps: f64,
    pub lj_sigma: f64,
    pub form: f64,
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum SpeciesRecord {
    Molecule(MoleculeRecord),
    Atom(AtomRecord),
}

/// Species records keyed by species name, as read from `particles.toml`.
#[derive(Debug, Clone, Default)]
pub struct ParticleLibrary {
    records: HashMap<String, SpeciesRecord>,
}

impl ParticleLibrary {
    pub fn load(path: &Path) -> Result<Self, DataError> {
        let content = std::fs::read_to_string(path).map_err(|e| DataError::Io {
            path: path.to_string_lossy().to_string(),
            source: e,
        })?;
        let records: HashMap<String, SpeciesRecord> =
            toml::from_str(&content).map_err(|e| DataError::Toml {
                path: path.to_string_lossy().to_string(),
                source: e,
            })?;
        debug!(count = records.len(), path = %path.display(), "Loaded species records.");
        Ok(Self { records })
    }

    pub fn insert(&mut self, name: impl Into<String>, record: SpeciesRecord) {
        self.records.insert(name.into(), record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.records.keys().map(String::as_str)
    }

    pub fn record(&self, name: &str) -> Result<&SpeciesRecord, DataError> {
        self.records.get(name).ok_or_else(|| DataError::NotFound {
            kind: "species",
            key: name.to_string(),
        })
    }

    pub fn molecule(&self, name: &str) -> Result<&MoleculeRecord, DataError> {
        match self.record(name)? {
            SpeciesRecord::Molecule(record) => Ok(record),
            SpeciesRecord::Atom(_) => Err(DataError::NotFound {
                kind: "molecule",
                key: name.to_string(),
            }),
        }
    }

    pub fn atom(&self, name: &str) -> Result<&AtomRecord, DataError> {
        match self.record(name)? {
            SpeciesRecord::Atom(record) => Ok(record),
            SpeciesRecord::Molecule(_) => Err(DataError::NotFound {
                kind: "atom",
                key: name.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    const SAMPLE: &str = r#"
        [N2]
        mass = 28.0134
        num-rot = 280
        rot-symmetry = 2.0
        num-vibr-harmonic = 33
        num-vibr-anharmonic = 47
        inertia = 1.4
        hvc = 2358.57
        avc = 0.006126
        diss = 9.759
        form = 0.0
        lj-eps = 97.5
        lj-sigma = 3.621
        infcoll = 15.7

        [N]
        mass = 14.0067
        lj-eps = 71.4
        lj-sigma = 3.298
        form = 4.88
    "#;

    #[test]
    fn load_distinguishes_molecules_from_atoms() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("particles.toml");
        fs::write(&path, SAMPLE).unwrap();

        let library = ParticleLibrary::load(&path).unwrap();
        assert_eq!(library.len(), 2);
        let n2 = library.molecule("N2").unwrap();
        assert_eq!(n2.num_rot, 280);
        assert_eq!(n2.vibr_levels, None);
        let n = library.atom("N").unwrap();
        assert_eq!(n.mass, 14.0067);
    }

    #[test]
    fn missing_species_is_not_found() {
        let library = ParticleLibrary::default();
        assert!(matches!(
            library.record("Ar"),
            Err(DataError::NotFound { kind: "species", .. })
        ));
    }

    #[test]
    fn requesting_wrong_kind_is_not_found() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("particles.toml");
        fs::write(&path, SAMPLE).unwrap();
        let library = ParticleLibrary::load(&path).unwrap();

        assert!(matches!(
            library.atom("N2"),
            Err(DataError::NotFound { kind: "atom", .. })
        ));
        assert!(matches!(
            library.molecule("N"),
            Err(DataError::NotFound { kind: "molecule", .. })
        ));
    }

    #[test]
    fn load_fails_for_missing_file() {
        let dir = tempdir().unwrap();
        let result = ParticleLibrary::load(&dir.path().join("absent.toml"));
        assert!(matches!(result, Err(DataError::Io { .. })));
    }

    #[test]
    fn load_fails_for_malformed_toml() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("broken.toml");
        fs::write(&path, "[N2]\nmass = \"heavy\"").unwrap();
        let result = ParticleLibrary::load(&path);
        assert!(matches!(result, Err(DataError::Toml { .. })));
    }
}

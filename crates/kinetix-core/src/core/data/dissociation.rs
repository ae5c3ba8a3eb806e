use super::error::DataError;
use crate::core::constants::ARRHENIUS_SCALE;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Arrhenius parameters `k = A·Tⁿ·exp(−D/kT)` of a dissociation reaction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DissociationParams {
    pub n: f64,
    /// Pre-exponential factor, already scaled to SI on load.
    pub a: f64,
}

impl DissociationParams {
    pub fn from_array(values: [f64; 2]) -> Self {
        Self {
            n: values[0],
            a: values[1],
        }
    }

    pub fn to_array(&self) -> [f64; 2] {
        [self.n, self.a]
    }
}

#[derive(Debug, Deserialize)]
struct DissociationRow {
    molecule: String,
    partner: String,
    n: f64,
    a: f64,
}

/// Dissociation Arrhenius parameters keyed by the ordered (molecule, partner) pair.
#[derive(Debug, Clone, Default)]
pub struct DissociationTable {
    entries: HashMap<(String, String), DissociationParams>,
}

impl DissociationTable {
    /// Reads `molecule,partner,n,a` rows; `a` is multiplied by `1e16/N_A`.
    pub fn load(path: &Path) -> Result<Self, DataError> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .comment(Some(b'#'))
            .from_path(path)
            .map_err(|e| DataError::Csv {
                path: path.to_string_lossy().to_string(),
                source: e,
            })?;

        let mut table = Self::default();
        for result in reader.deserialize::<DissociationRow>() {
            let row = result.map_err(|e| DataError::Csv {
                path: path.to_string_lossy().to_string(),
                source: e,
            })?;
            table.entries.insert(
                (row.molecule, row.partner),
                DissociationParams {
                    n: row.n,
                    a: row.a * ARRHENIUS_SCALE,
                },
            );
        }

        debug!(count = table.entries.len(), path = %path.display(), "Loaded dissociation records.");
        Ok(table)
    }

    /// Inserts parameters that are already in SI units.
    pub fn insert(&mut self, molecule: &str, partner: &str, params: DissociationParams) {
        self.entries
            .insert((molecule.to_string(), partner.to_string()), params);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, molecule: &str, partner: &str) -> Result<DissociationParams, DataError> {
        self.entries
            .get(&(molecule.to_string(), partner.to_string()))
            .copied()
            .ok_or_else(|| DataError::NotFound {
                kind: "dissociation",
                key: format!("{molecule}+{partner}"),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn load_scales_pre_exponential_factor() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dissociation.csv");
        fs::write(&path, "molecule,partner,n,a\nN2,N,-1.6,3.0e22\n").unwrap();

        let table = DissociationTable::load(&path).unwrap();
        let params = table.get("N2", "N").unwrap();
        assert_eq!(params.n, -1.6);
        assert_relative_eq!(params.a, 3.0e22 * ARRHENIUS_SCALE, max_relative = 1e-15);
    }

    #[test]
    fn lookup_is_ordered_by_molecule_then_partner() {
        let mut table = DissociationTable::default();
        table.insert("N2", "N", DissociationParams { n: -1.6, a: 1.0 });
        assert!(table.get("N2", "N").is_ok());
        assert!(matches!(
            table.get("N", "N2"),
            Err(DataError::NotFound {
                kind: "dissociation",
                ..
            })
        ));
    }

    #[test]
    fn load_fails_for_malformed_csv() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("dissociation.csv");
        fs::write(&path, "molecule,partner,n,a\nN2,N,fast,1.0\n").unwrap();
        let result = DissociationTable::load(&path);
        assert!(matches!(result, Err(DataError::Csv { .. })));
    }
}

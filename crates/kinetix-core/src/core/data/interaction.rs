use super::error::DataError;
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

/// Number of numeric parameters in an interaction record.
pub const INTERACTION_PARAMS: usize = 21;

/// Column names of `interaction.csv`, after the two species columns.
pub const INTERACTION_COLUMNS: [&str; INTERACTION_PARAMS] = [
    "reduced-mass",
    "sigma",
    "lj-eps",
    "bm-phi0",
    "bm-beta",
    "fho-beta",
    "vss-dref",
    "vss-omega",
    "vss-alpha",
    "vss-tref",
    "gss-dref",
    "gss-omega1",
    "gss-omega2",
    "gss-a1",
    "gss-a2",
    "gss-alpha",
    "gss-eps-ref",
    "esa-beta",
    "esa-eps0",
    "esa-re",
    "switch-temperature",
];

/// Pairwise interaction parameters, all in SI units unless noted.
///
/// The record is passed by reference into every cross-section and rate call and
/// is never mutated after loading.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct InteractionData {
    /// Reduced mass of the pair [kg].
    pub reduced_mass: f64,
    /// Rigid-sphere collision diameter [m].
    pub sigma: f64,
    /// Lennard-Jones well depth ε/k [K].
    pub lj_eps: f64,
    /// Born–Mayer prefactor φ₀ [J].
    pub bm_phi0: f64,
    /// Born–Mayer range parameter β [1/m].
    pub bm_beta: f64,
    /// Exponential-repulsion range parameter of the FHO model [1/m].
    pub fho_beta: f64,
    pub vss_dref: f64,
    pub vss_omega: f64,
    /// VSS deflection exponent α.
    pub vss_alpha: f64,
    pub vss_tref: f64,
    pub gss_dref: f64,
    pub gss_omega1: f64,
    pub gss_omega2: f64,
    pub gss_a1: f64,
    pub gss_a2: f64,
    /// GSS deflection exponent α, weighting the transport cross-sections.
    pub gss_alpha: f64,
    /// GSS reference energy ε_ref/k [K].
    pub gss_eps_ref: f64,
    /// Phenomenological-potential softness β.
    pub esa_beta: f64,
    /// Phenomenological-potential well depth ε₀/k [K].
    pub esa_eps0: f64,
    /// Phenomenological-potential equilibrium distance [m].
    pub esa_re: f64,
    /// Temperature above which `Switch` uses Born–Mayer instead of LJ [K].
    pub switch_temperature: f64,
}

impl InteractionData {
    pub fn from_array(values: [f64; INTERACTION_PARAMS]) -> Self {
        Self {
            reduced_mass: values[0],
            sigma: values[1],
            lj_eps: values[2],
            bm_phi0: values[3],
            bm_beta: values[4],
            fho_beta: values[5],
            vss_dref: values[6],
            vss_omega: values[7],
            vss_alpha: values[8],
            vss_tref: values[9],
            gss_dref: values[10],
            gss_omega1: values[11],
            gss_omega2: values[12],
            gss_a1: values[13],
            gss_a2: values[14],
            gss_alpha: values[15],
            gss_eps_ref: values[16],
            esa_beta: values[17],
            esa_eps0: values[18],
            esa_re: values[19],
            switch_temperature: values[20],
        }
    }

    pub fn to_array(&self) -> [f64; INTERACTION_PARAMS] {
        [
            self.reduced_mass,
            self.sigma,
            self.lj_eps,
            self.bm_phi0,
            self.bm_beta,
            self.fho_beta,
            self.vss_dref,
            self.vss_omega,
            self.vss_alpha,
            self.vss_tref,
            self.gss_dref,
            self.gss_omega1,
            self.gss_omega2,
            self.gss_a1,
            self.gss_a2,
            self.gss_alpha,
            self.gss_eps_ref,
            self.esa_beta,
            self.esa_eps0,
            self.esa_re,
            self.switch_temperature,
        ]
    }

    /// Rigid-sphere cross-section πσ².
    #[inline]
    pub fn rigid_sphere_area(&self) -> f64 {
        std::f64::consts::PI * self.sigma * self.sigma
    }
}

fn pair_key(a: &str, b: &str) -> (String, String) {
    if a <= b {
        (a.to_string(), b.to_string())
    } else {
        (b.to_string(), a.to_string())
    }
}

/// Interaction records keyed by the unordered species pair.
#[derive(Debug, Clone, Default)]
pub struct InteractionTable {
    entries: HashMap<(String, String), InteractionData>,
}

impl InteractionTable {
    pub fn load(path: &Path) -> Result<Self, DataError> {
        let path_str = path.to_string_lossy().to_string();
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .comment(Some(b'#'))
            .from_path(path)
            .map_err(|e| DataError::Csv {
                path: path_str.clone(),
                source: e,
            })?;

        let mut table = Self::default();
        for result in reader.records() {
            let record = result.map_err(|e| DataError::Csv {
                path: path_str.clone(),
                source: e,
            })?;
            let (first, second) = match (record.get(0), record.get(1)) {
                (Some(a), Some(b)) => (a, b),
                _ => {
                    return Err(DataError::InvalidRecord {
                        kind: "interaction",
                        key: format!("{:?}", record.iter().collect::<Vec<_>>()),
                        reason: "missing species columns".to_string(),
                    });
                }
            };
            let key = format!("{first}+{second}");
            if record.len() != INTERACTION_PARAMS + 2 {
                return Err(DataError::InvalidRecord {
                    kind: "interaction",
                    key,
                    reason: format!(
                        "expected {} columns, found {}",
                        INTERACTION_PARAMS + 2,
                        record.len()
                    ),
                });
            }

            let mut values = [0.0; INTERACTION_PARAMS];
            for (idx, value) in values.iter_mut().enumerate() {
                let raw = record.get(idx + 2).unwrap_or_default();
                *value = raw.parse::<f64>().map_err(|e| DataError::InvalidRecord {
                    kind: "interaction",
                    key: key.clone(),
                    reason: format!("column '{}': {e}", INTERACTION_COLUMNS[idx]),
                })?;
            }
            table.insert(first, second, InteractionData::from_array(values));
        }

        debug!(count = table.entries.len(), path = %path.display(), "Loaded interaction records.");
        Ok(table)
    }

    pub fn insert(&mut self, first: &str, second: &str, data: InteractionData) {
        self.entries.insert(pair_key(first, second), data);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, first: &str, second: &str) -> Result<&InteractionData, DataError> {
        self.entries
            .get(&pair_key(first, second))
            .ok_or_else(|| DataError::NotFound {
                kind: "interaction",
                key: format!("{first}+{second}"),
            })
    }
}

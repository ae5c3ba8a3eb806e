use super::UModel;
use crate::core::constants::{
    AMU_TO_KG, EV_TO_J, H_PLANCK, INERTIA_SCALE, K_BOLTZMANN, WAVENUMBER_TO_J,
};
use crate::core::data::{DataError, MoleculeRecord};
use std::f64::consts::PI;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VibrationalModel {
    Harmonic,
    #[default]
    Anharmonic,
    Table,
}

impl fmt::Display for VibrationalModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Harmonic => "harmonic",
            Self::Anharmonic => "anharmonic",
            Self::Table => "table",
        };
        f.write_str(name)
    }
}

impl FromStr for VibrationalModel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "harmonic" => Ok(Self::Harmonic),
            "anharmonic" => Ok(Self::Anharmonic),
            "table" => Ok(Self::Table),
            other => Err(format!("Unknown vibrational model: '{other}'")),
        }
    }
}

/// Spectroscopic structure of a diatomic molecule.
///
/// `num_rot` and `num_vibr` are the highest level indices, so `rot` holds
/// `num_rot + 1` and `vibr` holds `num_vibr + 1` energies [J]. Indexing past
/// those bounds is a caller error and panics.
#[derive(Debug, Clone, PartialEq)]
pub struct MolecularStructure {
    pub vibr_model: VibrationalModel,
    pub rot_symmetry: f64,
    pub num_rot: usize,
    pub num_vibr: usize,
    /// Moment of inertia [kg·m²].
    pub inertia: f64,
    /// Reduced mass of the two nuclei [kg].
    pub nuclear_reduced_mass: f64,
    /// Rotational constant h²/(8π²I) [J].
    pub rot_const: f64,
    /// Harmonic spectroscopic constant [J].
    pub hvc: f64,
    /// Anharmonicity (dimensionless).
    pub avc: f64,
    /// Dissociation energy [J].
    pub diss: f64,
    pub rot: Vec<f64>,
    pub vibr: Vec<f64>,
    /// Energy of the ground vibrational level [J].
    pub vibr_zero: f64,
    /// k/m [J/(kg·K)].
    pub crot: f64,
    /// Parker's limiting rotational collision number ζ∞.
    pub infcoll: f64,
}

fn invalid(name: &str, reason: String) -> DataError {
    DataError::InvalidRecord {
        kind: "molecule",
        key: name.to_string(),
        reason,
    }
}

impl MolecularStructure {
    /// Builds the level structure from a tabulated record. `mass` is in kg.
    pub fn from_record(
        name: &str,
        record: &MoleculeRecord,
        mass: f64,
        vibr_model: VibrationalModel,
    ) -> Result<Self, DataError> {
        if record.rot_symmetry != 1.0 && record.rot_symmetry != 2.0 {
            return Err(invalid(
                name,
                format!("rot-symmetry must be 1 or 2, got {}", record.rot_symmetry),
            ));
        }
        if !(record.inertia > 0.0) {
            return Err(invalid(
                name,
                format!("inertia must be positive, got {}", record.inertia),
            ));
        }

        let nuclear_reduced_mass = match record.nuclear_masses {
            None => 0.25 * mass,
            Some([m1, m2]) if m1 > 0.0 && m2 > 0.0 => m1 * m2 / (m1 + m2) * AMU_TO_KG,
            Some(masses) => {
                return Err(invalid(
                    name,
                    format!("nuclear-masses must be positive, got {masses:?}"),
                ));
            }
        };

        let inertia = record.inertia * INERTIA_SCALE;
        let rot_const = H_PLANCK * H_PLANCK / (8.0 * PI * PI * inertia);
        let hvc = record.hvc * WAVENUMBER_TO_J;
        let avc = record.avc;

        let vibr: Vec<f64> = match vibr_model {
            VibrationalModel::Harmonic => (0..=record.num_vibr_harmonic)
                .map(|i| hvc * (i as f64 + 0.5))
                .collect(),
            VibrationalModel::Anharmonic => (0..=record.num_vibr_anharmonic)
                .map(|i| {
                    let x = i as f64 + 0.5;
                    hvc * x - avc * hvc * x * x
                })
                .collect(),
            VibrationalModel::Table => match &record.vibr_levels {
                Some(levels) if !levels.is_empty() => {
                    levels.iter().map(|e| e * EV_TO_J).collect()
                }
                _ => {
                    return Err(invalid(
                        name,
                        "table vibrational model requires non-empty vibr-levels".to_string(),
                    ));
                }
            },
        };

        if let Some(idx) = vibr.windows(2).position(|w| w[1] <= w[0]) {
            return Err(invalid(
                name,
                format!("vibrational levels are not increasing at level {}", idx + 1),
            ));
        }

        let rot = (0..=record.num_rot)
            .map(|j| (j * (j + 1)) as f64 * rot_const)
            .collect();

        Ok(Self {
            vibr_model,
            rot_symmetry: record.rot_symmetry,
            num_rot: record.num_rot,
            num_vibr: vibr.len() - 1,
            inertia,
            nuclear_reduced_mass,
            rot_const,
            hvc,
            avc,
            diss: record.diss * EV_TO_J,
            rot,
            vibr_zero: vibr[0],
            vibr,
            crot: K_BOLTZMANN / mass,
            infcoll: record.infcoll,
        })
    }

    /// Energy of level `i` above the ground vibrational level [J].
    #[inline]
    pub fn level_energy(&self, i: usize) -> f64 {
        self.vibr[i] - self.vibr[0]
    }

    /// Equilibrium internuclear distance `√(I/μ)` [m], `μ` the nuclear reduced mass.
    pub fn equilibrium_distance(&self) -> f64 {
        (self.inertia / self.nuclear_reduced_mass).sqrt()
    }

    /// `Z_rot = 8π²·I·k·T / (σ·h²)`.
    pub fn z_rot(&self, t: f64) -> f64 {
        8.0 * PI * PI * self.inertia * K_BOLTZMANN * t / (self.rot_symmetry * H_PLANCK * H_PLANCK)
    }

    /// Mean rotational energy and mean squared energy of the rigid rotor truncated at
    /// `rot[num_rot]`, in joules and joules squared.
    pub(crate) fn rot_moments(&self, t: f64) -> (f64, f64) {
        let kt = K_BOLTZMANN * t;
        let x = self.rot[self.num_rot] / kt;
        if x == 0.0 {
            return (0.0, 0.0);
        }
        let ex = (-x).exp();
        let norm = -(-x).exp_m1();
        let avg = kt * (1.0 - (1.0 + x) * ex) / norm;
        let avg_sq = kt * kt * (2.0 - (x * x + 2.0 * x + 2.0) * ex) / norm;
        (avg, avg_sq)
    }

    fn z_at_inverse_temperature(&self, inv_t: f64) -> f64 {
        (0..=self.num_vibr)
            .map(|i| (-self.level_energy(i) * inv_t / K_BOLTZMANN).exp())
            .sum()
    }

    /// The characteristic temperature U of a Treanor–Marrone model [K].
    pub fn u_parameter(&self, t: f64, model: UModel) -> f64 {
        match model {
            UModel::Inf => f64::INFINITY,
            UModel::D6k => self.diss / (6.0 * K_BOLTZMANN),
            UModel::ThreeT => 3.0 * t,
        }
    }

    /// Equilibrium vibrational partition function over all levels, with energies
    /// counted from the ground level.
    ///
    /// `None` gives the Boltzmann sum at `T`; `Some(model)` evaluates the same sum at
    /// the negative temperature `−U` of the chosen Treanor–Marrone model.
    pub fn z_vibr_eq(&self, t: f64, model: Option<UModel>) -> f64 {
        let inv_t = match model {
            None => 1.0 / t,
            Some(model) => -1.0 / self.u_parameter(t, model),
        };
        self.z_at_inverse_temperature(inv_t)
    }

    /// Treanor–Marrone non-equilibrium factor of level `i`:
    /// `Z(T)/Z(−U)·exp(ε_i/k·(1/T + 1/U))`.
    pub fn z_diss(&self, t: f64, i: usize, model: UModel) -> f64 {
        let u = self.u_parameter(t, model);
        let ratio = self.z_vibr_eq(t, None) / self.z_vibr_eq(t, Some(model));
        ratio * (self.level_energy(i) / K_BOLTZMANN * (1.0 / t + 1.0 / u)).exp()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::particles::tests::nitrogen_record;
    use approx::assert_relative_eq;

    fn nitrogen(model: VibrationalModel) -> MolecularStructure {
        MolecularStructure::from_record("N2", &nitrogen_record(), 28.0134e-3 / 6.022e23, model)
            .unwrap()
    }

    #[test]
    fn nuclear_reduced_mass_follows_the_nuclear_masses() {
        let equal = nitrogen(VibrationalModel::Anharmonic);
        assert_relative_eq!(
            equal.nuclear_reduced_mass,
            0.25 * 28.0134e-3 / 6.022e23,
            max_relative = 1e-15
        );

        let mut record = nitrogen_record();
        record.nuclear_masses = Some([14.0067, 15.9994]);
        let mass = 30.0061e-3 / 6.022e23;
        let hetero =
            MolecularStructure::from_record("NO", &record, mass, VibrationalModel::Anharmonic)
                .unwrap();
        let mu = 14.0067 * 15.9994 / (14.0067 + 15.9994) * AMU_TO_KG;
        assert_relative_eq!(hetero.nuclear_reduced_mass, mu, max_relative = 1e-15);
        assert_relative_eq!(
            hetero.equilibrium_distance(),
            (hetero.inertia / mu).sqrt(),
            max_relative = 1e-15
        );
    }

    #[test]
    fn non_positive_nuclear_masses_are_rejected() {
        let mut record = nitrogen_record();
        record.nuclear_masses = Some([14.0, 0.0]);
        let result = MolecularStructure::from_record(
            "N2",
            &record,
            28.0134e-3 / 6.022e23,
            VibrationalModel::Anharmonic,
        );
        assert!(matches!(result, Err(DataError::InvalidRecord { .. })));
    }

    #[test]
    fn rotational_levels_follow_rigid_rotor() {
        let s = nitrogen(VibrationalModel::Anharmonic);
        assert_eq!(s.rot.len(), s.num_rot + 1);
        assert_eq!(s.rot[0], 0.0);
        assert_relative_eq!(s.rot[3], 12.0 * s.rot_const, max_relative = 1e-15);
    }

    #[test]
    fn harmonic_levels_are_equally_spaced() {
        let s = nitrogen(VibrationalModel::Harmonic);
        assert_eq!(s.num_vibr, nitrogen_record().num_vibr_harmonic);
        assert_relative_eq!(s.vibr_zero, 0.5 * s.hvc);
        assert_relative_eq!(s.vibr[2] - s.vibr[1], s.vibr[1] - s.vibr[0], max_relative = 1e-12);
    }

    #[test]
    fn anharmonic_levels_are_increasing_with_shrinking_gaps() {
        let s = nitrogen(VibrationalModel::Anharmonic);
        assert_eq!(s.vibr.len(), s.num_vibr + 1);
        assert!(s.vibr[2] - s.vibr[1] < s.vibr[1] - s.vibr[0]);
        assert_relative_eq!(s.level_energy(1), s.hvc * (1.0 - 2.0 * s.avc), max_relative = 1e-12);
    }

    #[test]
    fn table_model_requires_levels() {
        let record = nitrogen_record();
        let result = MolecularStructure::from_record("N2", &record, 1.0, VibrationalModel::Table);
        assert!(matches!(result, Err(DataError::InvalidRecord { .. })));

        let mut record = nitrogen_record();
        record.vibr_levels = Some(vec![0.1, 0.4, 0.65]);
        let s = MolecularStructure::from_record("N2", &record, 1.0, VibrationalModel::Table)
            .unwrap();
        assert_eq!(s.num_vibr, 2);
        assert_relative_eq!(s.vibr[1], 0.4 * EV_TO_J);
    }

    #[test]
    fn non_increasing_levels_are_rejected() {
        let mut record = nitrogen_record();
        record.vibr_levels = Some(vec![0.1, 0.4, 0.3]);
        let result = MolecularStructure::from_record("N2", &record, 1.0, VibrationalModel::Table);
        assert!(matches!(result, Err(DataError::InvalidRecord { .. })));
    }

    #[test]
    fn invalid_rotational_symmetry_is_rejected() {
        let mut record = nitrogen_record();
        record.rot_symmetry = 3.0;
        let result =
            MolecularStructure::from_record("N2", &record, 1.0, VibrationalModel::Anharmonic);
        assert!(matches!(result, Err(DataError::InvalidRecord { .. })));
    }

    #[test]
    fn z_vibr_eq_infinite_u_counts_levels() {
        let s = nitrogen(VibrationalModel::Anharmonic);
        assert_relative_eq!(
            s.z_vibr_eq(5000.0, Some(UModel::Inf)),
            (s.num_vibr + 1) as f64,
            max_relative = 1e-14
        );
    }

    #[test]
    fn z_vibr_eq_boltzmann_starts_at_one() {
        let s = nitrogen(VibrationalModel::Anharmonic);
        let z = s.z_vibr_eq(300.0, None);
        assert!(z >= 1.0);
        assert_relative_eq!(z, 1.0, max_relative = 1e-4);
    }

    #[test]
    fn z_diss_of_ground_level_is_partition_ratio() {
        let s = nitrogen(VibrationalModel::Anharmonic);
        let t = 8000.0;
        for model in [UModel::Inf, UModel::D6k, UModel::ThreeT] {
            let expected = s.z_vibr_eq(t, None) / s.z_vibr_eq(t, Some(model));
            assert_relative_eq!(s.z_diss(t, 0, model), expected, max_relative = 1e-14);
        }
    }

    #[test]
    fn z_diss_increases_with_level() {
        let s = nitrogen(VibrationalModel::Anharmonic);
        let t = 8000.0;
        assert!(s.z_diss(t, 10, UModel::D6k) > s.z_diss(t, 1, UModel::D6k));
    }
}

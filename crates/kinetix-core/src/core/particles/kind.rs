use super::multi_t::MoleculeMultiT;
use super::one_t::MoleculeOneT;
use super::rotational::{Molecule, RotationalCache};
use super::species::SpeciesConstants;
use super::structure::MolecularStructure;
use super::sts::MoleculeSts;
use crate::core::constants::K_BOLTZMANN;
use std::fmt;
use std::str::FromStr;

/// Characteristic temperature U of the Treanor–Marrone dissociation model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UModel {
    /// U = ∞
    Inf,
    /// U = D/6k
    D6k,
    /// U = 3T
    ThreeT,
}

impl fmt::Display for UModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Inf => "inf",
            Self::D6k => "D6k",
            Self::ThreeT => "3T",
        };
        f.write_str(name)
    }
}

impl FromStr for UModel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "inf" | "Inf" | "INF" => Ok(Self::Inf),
            "D6k" | "d6k" => Ok(Self::D6k),
            "3T" | "3t" => Ok(Self::ThreeT),
            other => Err(format!("Unknown U model: '{other}' (expected inf, D6k or 3T)")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KindTag {
    Sts,
    OneT,
    MultiT,
}

impl fmt::Display for KindTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Sts => "state-to-state",
            Self::OneT => "one-temperature",
            Self::MultiT => "multi-temperature",
        };
        f.write_str(name)
    }
}

/// A molecule of any flavour.
#[derive(Debug, Clone)]
pub enum MoleculeKind {
    Sts(MoleculeSts),
    OneT(MoleculeOneT),
    MultiT(MoleculeMultiT),
}

/// A molecule with a quasi-stationary vibrational distribution.
#[derive(Debug, Clone)]
pub enum QuasiMolecule {
    OneT(MoleculeOneT),
    MultiT(MoleculeMultiT),
}

impl MoleculeKind {
    pub fn tag(&self) -> KindTag {
        match self {
            Self::Sts(_) => KindTag::Sts,
            Self::OneT(_) => KindTag::OneT,
            Self::MultiT(_) => KindTag::MultiT,
        }
    }

    /// Energy added to the mixture per added molecule [J].
    ///
    /// `level` selects the vibrational level of a state-to-state molecule and `t1`
    /// the vibrational temperature of a multi-temperature one; each is ignored by
    /// the other flavours.
    pub fn du_dn(&self, t: f64, t1: f64, level: usize) -> f64 {
        let base = 1.5 * K_BOLTZMANN * t + self.avg_rot_energy(t, true) + self.species().form;
        match self {
            Self::Sts(m) => base + m.structure().vibr[level],
            Self::OneT(m) => base + m.avg_vibr_energy(t, true),
            Self::MultiT(m) => base + m.avg_vibr_energy(t, t1, true) + m.structure().vibr_zero,
        }
    }
}

impl QuasiMolecule {
    pub fn tag(&self) -> KindTag {
        match self {
            Self::OneT(_) => KindTag::OneT,
            Self::MultiT(_) => KindTag::MultiT,
        }
    }

    pub fn z_vibr(&self, t: f64, t1: f64) -> f64 {
        match self {
            Self::OneT(m) => m.z_vibr(t),
            Self::MultiT(m) => m.z_vibr(t, t1),
        }
    }

    pub fn z_int(&self, t: f64, t1: f64) -> f64 {
        self.z_rot(t) * self.z_vibr(t, t1)
    }

    /// Highest level index in the populated set.
    pub fn max_vibr_level(&self, t: f64, t1: f64) -> usize {
        match self {
            Self::OneT(m) => m.max_vibr_level(),
            Self::MultiT(m) => m.max_vibr_level(t, t1),
        }
    }

    /// Mean vibrational energy, in each flavour's own level reference: absolute
    /// for one-temperature molecules, above the ground level for multi-temperature
    /// ones.
    pub fn avg_vibr_energy(&self, t: f64, t1: f64, dimensional: bool) -> f64 {
        match self {
            Self::OneT(m) => m.avg_vibr_energy(t, dimensional),
            Self::MultiT(m) => m.avg_vibr_energy(t, t1, dimensional),
        }
    }

    pub fn avg_vibr_energy_sq(&self, t: f64, t1: f64, dimensional: bool) -> f64 {
        match self {
            Self::OneT(m) => m.avg_vibr_energy_sq(t, dimensional),
            Self::MultiT(m) => m.avg_vibr_energy_sq(t, t1, dimensional),
        }
    }

    pub fn avg_i(&self, t: f64, t1: f64) -> f64 {
        match self {
            Self::OneT(m) => m.avg_i(t),
            Self::MultiT(m) => m.avg_i(t, t1),
        }
    }

    pub fn avg_i_sq(&self, t: f64, t1: f64) -> f64 {
        match self {
            Self::OneT(m) => m.avg_i_sq(t),
            Self::MultiT(m) => m.avg_i_sq(t, t1),
        }
    }

    pub fn avg_vibr_energy_i(&self, t: f64, t1: f64) -> f64 {
        match self {
            Self::OneT(m) => m.avg_vibr_energy_i(t),
            Self::MultiT(m) => m.avg_vibr_energy_i(t, t1),
        }
    }

    /// Population fraction of vibrational level `i`.
    pub fn level_fraction(&self, t: f64, t1: f64, i: usize) -> f64 {
        match self {
            Self::OneT(m) => m.level_fraction(t, i),
            Self::MultiT(m) => m.level_fraction(t, t1, i),
        }
    }

    /// Energy reference of the internal partition function: formation energy, plus
    /// the zero-point energy when level energies are stored relative to it.
    pub fn reference_energy(&self) -> f64 {
        match self {
            Self::OneT(m) => m.species().form,
            Self::MultiT(m) => m.species().form + m.structure().vibr_zero,
        }
    }

    pub fn du_dn(&self, t: f64, t1: f64) -> f64 {
        let base = 1.5 * K_BOLTZMANN * t + self.avg_rot_energy(t, true) + self.species().form;
        match self {
            Self::OneT(m) => base + m.avg_vibr_energy(t, true),
            Self::MultiT(m) => base + m.avg_vibr_energy(t, t1, true) + m.structure().vibr_zero,
        }
    }
}

impl Molecule for MoleculeKind {
    fn species(&self) -> &SpeciesConstants {
        match self {
            Self::Sts(m) => m.species(),
            Self::OneT(m) => m.species(),
            Self::MultiT(m) => m.species(),
        }
    }

    fn structure(&self) -> &MolecularStructure {
        match self {
            Self::Sts(m) => m.structure(),
            Self::OneT(m) => m.structure(),
            Self::MultiT(m) => m.structure(),
        }
    }

    fn rotational_cache(&self) -> &RotationalCache {
        match self {
            Self::Sts(m) => m.rotational_cache(),
            Self::OneT(m) => m.rotational_cache(),
            Self::MultiT(m) => m.rotational_cache(),
        }
    }
}

impl Molecule for QuasiMolecule {
    fn species(&self) -> &SpeciesConstants {
        match self {
            Self::OneT(m) => m.species(),
            Self::MultiT(m) => m.species(),
        }
    }

    fn structure(&self) -> &MolecularStructure {
        match self {
            Self::OneT(m) => m.structure(),
            Self::MultiT(m) => m.structure(),
        }
    }

    fn rotational_cache(&self) -> &RotationalCache {
        match self {
            Self::OneT(m) => m.rotational_cache(),
            Self::MultiT(m) => m.rotational_cache(),
        }
    }
}

impl From<MoleculeSts> for MoleculeKind {
    fn from(m: MoleculeSts) -> Self {
        Self::Sts(m)
    }
}

impl From<MoleculeOneT> for MoleculeKind {
    fn from(m: MoleculeOneT) -> Self {
        Self::OneT(m)
    }
}

impl From<MoleculeMultiT> for MoleculeKind {
    fn from(m: MoleculeMultiT) -> Self {
        Self::MultiT(m)
    }
}

impl From<MoleculeOneT> for QuasiMolecule {
    fn from(m: MoleculeOneT) -> Self {
        Self::OneT(m)
    }
}

impl From<MoleculeMultiT> for QuasiMolecule {
    fn from(m: MoleculeMultiT) -> Self {
        Self::MultiT(m)
    }
}

impl From<QuasiMolecule> for MoleculeKind {
    fn from(m: QuasiMolecule) -> Self {
        match m {
            QuasiMolecule::OneT(m) => Self::OneT(m),
            QuasiMolecule::MultiT(m) => Self::MultiT(m),
        }
    }
}

impl TryFrom<MoleculeKind> for QuasiMolecule {
    type Error = MoleculeKind;

    fn try_from(m: MoleculeKind) -> Result<Self, Self::Error> {
        match m {
            MoleculeKind::OneT(m) => Ok(Self::OneT(m)),
            MoleculeKind::MultiT(m) => Ok(Self::MultiT(m)),
            other => Err(other),
        }
    }
}

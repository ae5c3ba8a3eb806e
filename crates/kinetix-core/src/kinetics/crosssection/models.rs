use std::fmt;
use std::str::FromStr;

/// Elastic cross-section models used inside velocity integrals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CrossSectionModel {
    #[default]
    RigidSphere,
    /// Variable soft sphere.
    Vss,
    /// Generalized soft sphere.
    Gss,
}

/// Potential models for the Ω^(l,r) collision integrals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OmegaModel {
    /// Phenomenological potential fits.
    Esa,
    /// Exponential repulsion (also accepted as "IPL").
    BornMayer,
    LennardJones,
    /// Lennard-Jones, continued above the switch temperature by a rescaled Born–Mayer.
    ModifiedLennardJones,
    RigidSphere,
    Vss,
    /// Lennard-Jones below the switch temperature, Born–Mayer above.
    Switch,
}

/// Normalisation of an omega integral.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OmegaScale {
    #[default]
    Dimensional,
    /// Dimensional without the `√(kT)` factor.
    DimensionalNoKt,
    /// Divided by the rigid-sphere value.
    Dimensionless,
}

/// Whether a velocity integral carries the `√(kT)` factor of `√(kT/2πμ)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KtScale {
    #[default]
    Full,
    NoKt,
}

/// Energy that has to exceed the dissociation threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DissociationEnergy {
    /// Relative translational energy along the line of centres: `σ_el(1 − (D − ε_i)/E)`.
    #[default]
    CenterOfMass,
    /// Total collision energy: `σ_el` above threshold.
    Total,
}

impl fmt::Display for CrossSectionModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::RigidSphere => "RS",
            Self::Vss => "VSS",
            Self::Gss => "GSS",
        };
        f.write_str(name)
    }
}

impl FromStr for CrossSectionModel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "RS" => Ok(Self::RigidSphere),
            "VSS" => Ok(Self::Vss),
            "GSS" => Ok(Self::Gss),
            other => Err(format!(
                "Unknown cross-section model: '{other}' (expected RS, VSS or GSS)"
            )),
        }
    }
}

impl fmt::Display for OmegaModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Esa => "ESA",
            Self::BornMayer => "BM",
            Self::LennardJones => "LJ",
            Self::ModifiedLennardJones => "MLJ",
            Self::RigidSphere => "RS",
            Self::Vss => "VSS",
            Self::Switch => "Switch",
        };
        f.write_str(name)
    }
}

impl FromStr for OmegaModel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "ESA" => Ok(Self::Esa),
            "BM" | "IPL" => Ok(Self::BornMayer),
            "LJ" => Ok(Self::LennardJones),
            "MLJ" => Ok(Self::ModifiedLennardJones),
            "RS" => Ok(Self::RigidSphere),
            "VSS" => Ok(Self::Vss),
            "SWITCH" => Ok(Self::Switch),
            other => Err(format!("Unknown omega model: '{other}'")),
        }
    }
}

impl fmt::Display for DissociationEnergy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CenterOfMass => f.write_str("center-of-mass"),
            Self::Total => f.write_str("total"),
        }
    }
}

impl FromStr for DissociationEnergy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "center-of-mass" | "com" => Ok(Self::CenterOfMass),
            "total" => Ok(Self::Total),
            other => Err(format!(
                "Unknown dissociation energy: '{other}' (expected center-of-mass or total)"
            )),
        }
    }
}

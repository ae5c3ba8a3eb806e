use crate::core::numerics::roots::{BrentOptions, brent_root_find};
use crate::core::particles::{Atom, Molecule, QuasiMolecule};
use crate::kinetics::KineticsError;
use crate::kinetics::rates::ln_rec_rate_sts_multiplier;
use tracing::{debug, instrument};

/// Absolute tolerance on the atomic mole fraction.
pub const DISS_EQ_XTOL: f64 = 1e-5;
pub const DISS_EQ_MAX_ITERATIONS: usize = 1000;

/// Atomic mole fraction at dissociation equilibrium.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DissociationEquilibrium {
    pub atom_fraction: f64,
    pub molecule_density: f64,
    pub atom_density: f64,
    pub iterations: usize,
}

/// Solves `Γ_diss = 0` for the binary mixture `A₂ ⇌ 2A` at temperature `t` and
/// total number density `n_total` [m⁻³].
///
/// The molecule is taken in thermal equilibrium (`T1 = T`). With `x` the atomic
/// mole fraction, `f₀` the ground-level fraction and `K` its recombination
/// multiplier,
///
/// ```text
/// Γ_diss = 1 − x² / (c·(1 − x)),   c = f₀ / (n·K)
/// ```
///
/// The search runs on `c·(1 − x)·Γ_diss`, scaled by `1/max(1, c)`, over `[0, 1]`.
/// `c` is formed from `ln K`, so the bracket ends stay finite at temperatures where
/// `K` itself overflows; there the fraction comes out as 0.
#[instrument(skip(molecule, atom), name = "dissociation_equilibrium")]
pub fn find_natom_diss_eq(
    t: f64,
    n_total: f64,
    molecule: &QuasiMolecule,
    atom: &Atom,
) -> Result<DissociationEquilibrium, KineticsError> {
    if !(t > 0.0) || !(n_total > 0.0) {
        return Err(KineticsError::InvalidArgument(format!(
            "temperature and number density must be positive, got T = {t}, n = {n_total}"
        )));
    }

    let ln_c = molecule.level_fraction(t, t, 0).ln()
        - n_total.ln()
        - ln_rec_rate_sts_multiplier(t, molecule, atom, atom, 0);
    if ln_c.is_nan() {
        return Err(KineticsError::InvalidArgument(format!(
            "equilibrium constant of {} is undefined at T = {t}",
            molecule.name()
        )));
    }
    let ln_scale = ln_c.max(0.0);
    let molecular = (ln_c - ln_scale).exp();
    let atomic = (-ln_scale).exp();
    let force = |x: f64| molecular * (1.0 - x) - atomic * x * x;
    let options = BrentOptions {
        xtol: DISS_EQ_XTOL,
        max_iterations: DISS_EQ_MAX_ITERATIONS,
        ..BrentOptions::default()
    };
    let result = brent_root_find(force, 0.0, 1.0, &options)?;
    debug!(
        ln_c,
        atom_fraction = result.root,
        iterations = result.iterations,
        "Dissociation equilibrium converged."
    );

    Ok(DissociationEquilibrium {
        atom_fraction: result.root,
        molecule_density: (1.0 - result.root) * n_total,
        atom_density: result.root * n_total,
        iterations: result.iterations,
    })
}

use crate::cli::EquilibriumArgs;
use crate::config::resolve_data_dir;
use crate::data::DataManager;
use crate::error::{CliError, Result};
use kinetix::core::data::{PARTICLES_FILE, ParticleLibrary};
use kinetix::core::particles::{Atom, MoleculeOneT, QuasiMolecule, VibrationalModel};
use kinetix::workflows::config::DEFAULT_NUMBER_DENSITY;
use kinetix::workflows::equilibrium::find_natom_diss_eq;
use std::path::Path;
use tracing::info;

pub fn run(args: EquilibriumArgs, data_dir: Option<&Path>) -> Result<()> {
    let vibr_model: VibrationalModel = args.vibr_model.parse().map_err(CliError::Argument)?;
    let n_total = args.number_density.unwrap_or(DEFAULT_NUMBER_DENSITY);

    let data_manager = DataManager::with_override(data_dir)?;
    let dir = resolve_data_dir(data_dir, None, &data_manager)?;
    let particles = ParticleLibrary::load(&dir.join(PARTICLES_FILE))?;

    let molecule: QuasiMolecule = MoleculeOneT::from_record(
        &args.molecule,
        particles.molecule(&args.molecule)?,
        vibr_model,
    )?
    .into();
    let atom = Atom::from_record(&args.atom, particles.atom(&args.atom)?)?;

    info!(
        "Solving {} <-> 2 {} at T = {} K, n = {:e} m^-3.",
        args.molecule, args.atom, args.temperature, n_total
    );
    let eq = find_natom_diss_eq(args.temperature, n_total, &molecule, &atom)?;

    println!("Atom mole fraction:  {:.6}", eq.atom_fraction);
    println!("{:<8} density:     {:e} m^-3", args.molecule, eq.molecule_density);
    println!("{:<8} density:     {:e} m^-3", args.atom, eq.atom_density);
    println!("Iterations:          {}", eq.iterations);
    Ok(())
}

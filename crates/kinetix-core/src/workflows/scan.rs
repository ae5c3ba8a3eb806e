use super::config::ScanConfig;
use super::progress::{Progress, ProgressReporter};
use crate::core::data::{
    DataError, DissociationProvider, InteractionProvider, SpeciesProvider, SpeciesRecord,
};
use crate::core::particles::{Molecule, MoleculeSts};
use crate::kinetics::KineticsError;
use crate::kinetics::crosssection::{OmegaScale, omega};
use crate::kinetics::rates::{
    diss_rate_integral_sts, diss_rate_treanor_marrone_sts, k_diss_eq, vt_rate_fho, vt_rate_ssh,
};
use crate::kinetics::relaxation::{rot_rel_time, vibr_rel_time};
use serde::Serialize;
use tracing::{debug, info, instrument};

/// Collision quantities of the scanned pair at one temperature.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub struct ScanRow {
    pub temperature: f64,
    pub k_diss_eq: f64,
    pub k_diss_treanor_marrone: f64,
    pub k_diss_integral: f64,
    pub k_vt_ssh: f64,
    pub k_vt_fho: f64,
    pub omega_11: f64,
    pub omega_22: f64,
    pub tau_rot: f64,
    pub tau_vibr: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScanTable {
    pub molecule: String,
    pub partner: String,
    pub level: usize,
    pub rows: Vec<ScanRow>,
}

fn load_molecule<D: SpeciesProvider + ?Sized>(
    data: &D,
    config: &ScanConfig,
) -> Result<MoleculeSts, DataError> {
    match data.species_record(&config.molecule)? {
        SpeciesRecord::Molecule(record) => {
            MoleculeSts::from_record(&config.molecule, record, config.models.vibr_model)
        }
        SpeciesRecord::Atom(_) => Err(DataError::InvalidRecord {
            kind: "molecule",
            key: config.molecule.clone(),
            reason: "species is an atom".to_string(),
        }),
    }
}

/// Evaluates rate constants, collision integrals and relaxation times of
/// `config.molecule` colliding with `config.partner` over the temperature range.
#[instrument(skip_all, name = "scan_workflow", fields(molecule = %config.molecule, partner = %config.partner))]
pub fn run<D>(
    data: &D,
    config: &ScanConfig,
    reporter: &ProgressReporter,
) -> Result<ScanTable, KineticsError>
where
    D: SpeciesProvider + InteractionProvider + DissociationProvider + ?Sized,
{
    reporter.report(Progress::PhaseStart {
        name: "Preparation",
    });
    let molecule = load_molecule(data, config)?;
    data.species_record(&config.partner)?;
    let idata = data.interaction(&config.molecule, &config.partner)?;
    let params = data.dissociation(&config.molecule, &config.partner)?;

    let level = config.level;
    let num_vibr = molecule.structure().num_vibr;
    if level == 0 || level > num_vibr {
        return Err(KineticsError::InvalidArgument(format!(
            "level {level} is outside 1..={num_vibr} for {}",
            config.molecule
        )));
    }
    reporter.report(Progress::PhaseFinish);

    let temperatures = config.temperatures.values();
    info!(
        points = temperatures.len(),
        level, "Scanning {} + {}.", config.molecule, config.partner
    );
    reporter.report(Progress::Message(format!(
        "{} + {}: level {level} of {num_vibr}, {} temperature point(s)",
        config.molecule,
        config.partner,
        temperatures.len()
    )));

    reporter.report(Progress::PhaseStart { name: "Scan" });
    reporter.report(Progress::TaskStart {
        total_steps: temperatures.len() as u64,
    });

    let models = &config.models;
    let n = config.number_density;
    let mut rows = Vec::with_capacity(temperatures.len());
    for t in temperatures {
        let row = ScanRow {
            temperature: t,
            k_diss_eq: k_diss_eq(t, &params, &molecule),
            k_diss_treanor_marrone: diss_rate_treanor_marrone_sts(
                t,
                &params,
                &molecule,
                level,
                models.u_model,
            ),
            k_diss_integral: diss_rate_integral_sts(
                t,
                &idata,
                &molecule,
                level,
                models.crosssection_model,
                models.diss_energy,
            ),
            k_vt_ssh: vt_rate_ssh(t, &idata, &molecule, level, -1)?,
            k_vt_fho: vt_rate_fho(t, &idata, &molecule, level, -1, models.crosssection_model)?,
            omega_11: omega(t, 1, 1, &idata, models.omega_model, OmegaScale::Dimensional)?,
            omega_22: omega(t, 2, 2, &idata, models.omega_model, OmegaScale::Dimensional)?,
            tau_rot: rot_rel_time(t, n, &idata, &molecule, models.omega_model)?,
            tau_vibr: vibr_rel_time(t, n, &idata, &molecule),
        };
        debug!(t, k_diss = row.k_diss_eq, "Scan point done.");
        rows.push(row);
        reporter.report(Progress::TaskIncrement);
    }

    reporter.report(Progress::TaskFinish);
    reporter.report(Progress::PhaseFinish);

    Ok(ScanTable {
        molecule: config.molecule.clone(),
        partner: config.partner.clone(),
        level,
        rows,
    })
}

use crate::cli::OmegaArgs;
use crate::config::resolve_data_dir;
use crate::data::DataManager;
use crate::error::{CliError, Result};
use kinetix::core::data::{INTERACTION_FILE, InteractionTable};
use kinetix::kinetics::crosssection::{OmegaModel, OmegaScale, omega};
use std::path::Path;
use tracing::info;

pub fn run(args: OmegaArgs, data_dir: Option<&Path>) -> Result<()> {
    let model: OmegaModel = args.model.parse().map_err(CliError::Argument)?;
    let scale = if args.dimensionless {
        OmegaScale::Dimensionless
    } else {
        OmegaScale::Dimensional
    };

    let data_manager = DataManager::with_override(data_dir)?;
    let dir = resolve_data_dir(data_dir, None, &data_manager)?;
    let table = InteractionTable::load(&dir.join(INTERACTION_FILE))?;
    let idata = table.get(&args.first, &args.second)?;

    info!(
        "Evaluating Ω^({},{}) of {}-{} at {} K with the {} potential.",
        args.l, args.r, args.first, args.second, args.temperature, model
    );
    let value = omega(args.temperature, args.l, args.r, idata, model, scale)?;

    let unit = if args.dimensionless { "" } else { " m^3/s" };
    println!(
        "Omega({},{}) [{}-{}, {}, T = {} K] = {:e}{}",
        args.l, args.r, args.first, args.second, model, args.temperature, value, unit
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn args(model: &str) -> OmegaArgs {
        OmegaArgs {
            first: "N2".to_string(),
            second: "N".to_string(),
            temperature: 2000.0,
            l: 2,
            r: 2,
            model: model.to_string(),
            dimensionless: false,
        }
    }

    #[test]
    fn data_dir_override_reads_tables_from_that_directory() {
        let temp_dir = tempdir().unwrap();
        DataManager::with_custom_path(temp_dir.path().to_path_buf())
            .init_data(false)
            .unwrap();

        assert!(run(args("LJ"), Some(temp_dir.path())).is_ok());
    }

    #[test]
    fn empty_data_dir_override_is_reported() {
        let temp_dir = tempdir().unwrap();
        let missing = temp_dir.path().join("absent");
        assert!(matches!(
            run(args("LJ"), Some(missing.as_path())),
            Err(CliError::Data(_))
        ));
    }
}

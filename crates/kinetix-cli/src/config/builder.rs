use super::defaults::DefaultsConfig;
use super::file::{FileConfig, FileModelConfig, FileScanConfig, FileTemperatureConfig};
use super::models::AppConfig;
use crate::cli::ScanArgs;
use crate::data::DataManager;
use crate::error::{CliError, Result};
use kinetix::workflows::config::ScanConfigBuilder;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Picks the data directory: CLI flag, then config file, then the managed directory.
pub fn resolve_data_dir(
    cli_arg: Option<&Path>,
    file_arg: Option<&Path>,
    data_manager: &DataManager,
) -> Result<PathBuf> {
    let path = cli_arg
        .or(file_arg)
        .unwrap_or_else(|| data_manager.get_data_path())
        .to_path_buf();
    if !path.is_dir() {
        return Err(CliError::Data(format!(
            "Data directory does not exist: {:?}.\nHint: Run 'kinetix data init' to write the bundled data files.",
            path
        )));
    }
    Ok(path)
}

fn parse_model<T>(cli_arg: Option<&str>, file_arg: Option<&str>, key: &str) -> Result<Option<T>>
where
    T: FromStr<Err = String>,
{
    cli_arg
        .or(file_arg)
        .map(|name| {
            name.parse::<T>()
                .map_err(|e| CliError::Argument(format!("{key}: {e}")))
        })
        .transpose()
}

pub fn build_scan_config(
    args: &ScanArgs,
    data_dir: Option<&Path>,
    data_manager: &DataManager,
) -> Result<AppConfig> {
    let defaults = DefaultsConfig::default();

    let file_config = if let Some(config_path) = &args.config {
        FileConfig::from_file(config_path)?
    } else {
        FileConfig::default()
    };

    let mut file_config = apply_set_values(file_config, &args.set_values)?;

    let scan_file = file_config.scan.take().unwrap_or_default();
    let models_file = file_config.models.take().unwrap_or_default();
    let temps_file = scan_file.temperatures.clone().unwrap_or_default();

    let molecule = args
        .molecule
        .clone()
        .or(scan_file.molecule)
        .ok_or_else(|| {
            CliError::Config(
                "A molecule is required either in the config file or via --molecule.".to_string(),
            )
        })?;
    let partner = args.partner.clone().or(scan_file.partner).ok_or_else(|| {
        CliError::Config(
            "A collision partner is required either in the config file or via --partner."
                .to_string(),
        )
    })?;

    let t_start = args.t_start.or(temps_file.start).unwrap_or(defaults.t_start);
    let t_end = args.t_end.or(temps_file.end).unwrap_or(defaults.t_end);
    let steps = args.steps.or(temps_file.steps).unwrap_or(defaults.steps);
    let level = args.level.or(scan_file.level).unwrap_or(defaults.level);
    let number_density = args
        .number_density
        .or(scan_file.number_density)
        .unwrap_or(defaults.number_density);

    let mut builder = ScanConfigBuilder::new()
        .molecule(molecule)
        .partner(partner)
        .temperatures(t_start, t_end, steps)
        .level(level)
        .number_density(number_density);

    if let Some(model) = parse_model(
        args.vibr_model.as_deref(),
        models_file.vibrational.as_deref(),
        "vibrational model",
    )? {
        builder = builder.vibr_model(model);
    }
    if let Some(model) = parse_model(
        args.u_model.as_deref(),
        models_file.u_model.as_deref(),
        "U model",
    )? {
        builder = builder.u_model(model);
    }
    if let Some(model) = parse_model(
        args.crosssection_model.as_deref(),
        models_file.crosssection.as_deref(),
        "cross-section model",
    )? {
        builder = builder.crosssection_model(model);
    }
    if let Some(model) = parse_model(
        args.omega_model.as_deref(),
        models_file.omega.as_deref(),
        "omega model",
    )? {
        builder = builder.omega_model(model);
    }
    if let Some(energy) = parse_model(
        args.diss_energy.as_deref(),
        models_file.diss_energy.as_deref(),
        "dissociation energy",
    )? {
        builder = builder.diss_energy(energy);
    }

    let core_config = builder
        .build()
        .map_err(|e| CliError::Config(e.to_string()))?;

    let data_dir = resolve_data_dir(data_dir, file_config.data_dir.as_deref(), data_manager)?;

    Ok(AppConfig {
        data_dir,
        output: args.output.clone(),
        core_config,
    })
}

fn parse_value<T: FromStr>(key: &str, value: &str, kind: &str) -> Result<T> {
    value
        .parse()
        .map_err(|_| CliError::Config(format!("Invalid {} value for {}: {}", kind, key, value)))
}

fn scan_section(config: &mut FileConfig) -> &mut FileScanConfig {
    config.scan.get_or_insert_with(Default::default)
}

fn temperature_section(config: &mut FileConfig) -> &mut FileTemperatureConfig {
    scan_section(config)
        .temperatures
        .get_or_insert_with(Default::default)
}

fn model_section(config: &mut FileConfig) -> &mut FileModelConfig {
    config.models.get_or_insert_with(Default::default)
}

fn apply_set_values(mut config: FileConfig, set_values: &[String]) -> Result<FileConfig> {
    if set_values.is_empty() {
        return Ok(config);
    }
    for kv_pair in set_values {
        let Some((key, value_str)) = kv_pair.split_once('=') else {
            return Err(CliError::Config(format!(
                "Invalid --set format: '{}'. Expected KEY=VALUE.",
                kv_pair
            )));
        };

        match key {
            "data-dir" => config.data_dir = Some(PathBuf::from(value_str)),
            "scan.molecule" => scan_section(&mut config).molecule = Some(value_str.to_string()),
            "scan.partner" => scan_section(&mut config).partner = Some(value_str.to_string()),
            "scan.level" => {
                scan_section(&mut config).level = Some(parse_value(key, value_str, "integer")?);
            }
            "scan.number-density" => {
                scan_section(&mut config).number_density =
                    Some(parse_value(key, value_str, "float")?);
            }
            "scan.temperatures.start" => {
                temperature_section(&mut config).start =
                    Some(parse_value(key, value_str, "float")?);
            }
            "scan.temperatures.end" => {
                temperature_section(&mut config).end = Some(parse_value(key, value_str, "float")?);
            }
            "scan.temperatures.steps" => {
                temperature_section(&mut config).steps =
                    Some(parse_value(key, value_str, "integer")?);
            }
            "models.vibrational" => {
                model_section(&mut config).vibrational = Some(value_str.to_string());
            }
            "models.u-model" => model_section(&mut config).u_model = Some(value_str.to_string()),
            "models.crosssection" => {
                model_section(&mut config).crosssection = Some(value_str.to_string());
            }
            "models.omega" => model_section(&mut config).omega = Some(value_str.to_string()),
            "models.diss-energy" => {
                model_section(&mut config).diss_energy = Some(value_str.to_string());
            }
            _ => {
                return Err(CliError::Config(format!(
                    "Unsupported configuration key for --set: '{}'",
                    key
                )));
            }
        }
    }
    Ok(config)
}

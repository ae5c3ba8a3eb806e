use crate::cli::ScanArgs;
use crate::config::{AppConfig, build_scan_config};
use crate::data::DataManager;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use kinetix::core::data::DataSet;
use kinetix::workflows::progress::ProgressReporter;
use kinetix::workflows::scan::{self, ScanTable};
use std::io;
use std::path::Path;
use tracing::{debug, info};

pub fn run(args: ScanArgs, data_dir: Option<&Path>, quiet: bool) -> Result<()> {
    info!("Starting 'scan' command...");
    let data_manager = DataManager::with_override(data_dir)?;
    let app_config = build_scan_config(&args, data_dir, &data_manager)?;
    debug!("Resolved scan configuration: {:?}", &app_config.core_config);

    info!("Loading data tables from {:?}", &app_config.data_dir);
    let data = DataSet::load_dir(&app_config.data_dir)?;

    let handler = if quiet {
        CliProgressHandler::hidden()
    } else {
        CliProgressHandler::new()
    };
    let reporter = ProgressReporter::with_callback(handler.get_callback());
    let table = scan::run(&data, &app_config.core_config, &reporter)?;
    info!(
        "Scan of {} + {} produced {} rows.",
        table.molecule,
        table.partner,
        table.rows.len()
    );

    write_table(&table, &app_config)
}

fn write_table(table: &ScanTable, app_config: &AppConfig) -> Result<()> {
    match &app_config.output {
        Some(path) => {
            let mut writer = csv::Writer::from_path(path)?;
            for row in &table.rows {
                writer.serialize(row)?;
            }
            writer.flush()?;
            info!("Table written to {:?}", path);
            println!("Wrote {} rows to {}", table.rows.len(), path.display());
        }
        None => {
            let mut writer = csv::Writer::from_writer(io::stdout());
            for row in &table.rows {
                writer.serialize(row)?;
            }
            writer.flush()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use kinetix::workflows::scan::ScanRow;
    use kinetix::workflows::config::ScanConfigBuilder;
    use std::path::PathBuf;
    use tempfile::tempdir;

    fn sample_row(temperature: f64) -> ScanRow {
        ScanRow {
            temperature,
            k_diss_eq: 1.0e-20,
            k_diss_treanor_marrone: 2.0e-20,
            k_diss_integral: 3.0e-20,
            k_vt_ssh: 4.0e-18,
            k_vt_fho: 5.0e-18,
            omega_11: 6.0e-16,
            omega_22: 7.0e-16,
            tau_rot: 8.0e-10,
            tau_vibr: 9.0e-7,
        }
    }

    #[test]
    fn table_is_written_as_csv_with_kebab_case_header() {
        let temp_dir = tempdir().unwrap();
        let output = temp_dir.path().join("scan.csv");
        let app_config = AppConfig {
            data_dir: PathBuf::from("unused"),
            output: Some(output.clone()),
            core_config: ScanConfigBuilder::new()
                .molecule("N2")
                .partner("N")
                .temperatures(1000.0, 2000.0, 2)
                .build()
                .unwrap(),
        };
        let table = ScanTable {
            molecule: "N2".to_string(),
            partner: "N".to_string(),
            level: 1,
            rows: vec![sample_row(1000.0), sample_row(2000.0)],
        };

        write_table(&table, &app_config).unwrap();

        let content = std::fs::read_to_string(&output).unwrap();
        let mut lines = content.lines();
        assert_eq!(
            lines.next().unwrap(),
            "temperature,k-diss-eq,k-diss-treanor-marrone,k-diss-integral,k-vt-ssh,k-vt-fho,\
             omega-11,omega-22,tau-rot,tau-vibr"
        );
        assert!(lines.next().unwrap().starts_with("1000.0,"));
        assert!(lines.next().unwrap().starts_with("2000.0,"));
        assert!(lines.next().is_none());
    }
}

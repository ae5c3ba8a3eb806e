use crate::cli::{DataArgs, DataCommands};
use crate::data::{DataManager, InitOutcome};
use crate::error::Result;
use std::path::{Path, PathBuf};
use tracing::info;

pub fn run(args: DataArgs, data_dir: Option<&Path>) -> Result<()> {
    match args.command {
        DataCommands::Init { force } => handle_init(DataManager::with_override(data_dir)?, force),
        DataCommands::Path => handle_path(DataManager::with_override(data_dir)?),
        DataCommands::SetPath { path } => handle_set_path(path),
        DataCommands::ResetPath => handle_reset_path(),
    }
}

fn handle_init(manager: DataManager, force: bool) -> Result<()> {
    println!("Writing bundled data to: {:?}", manager.get_data_path());

    for (name, outcome) in manager.init_data(force)? {
        match outcome {
            InitOutcome::Written => println!("  ✓ {name}"),
            InitOutcome::Skipped => println!("  - {name} (exists, use --force to overwrite)"),
        }
    }
    Ok(())
}

fn handle_path(manager: DataManager) -> Result<()> {
    println!("{}", manager.get_data_path().display());
    if !manager.is_initialized() {
        println!("(Note: data has not been initialized. Run `kinetix data init`.)");
    }
    Ok(())
}

fn handle_set_path(path: PathBuf) -> Result<()> {
    info!("Setting custom data path to: {:?}", &path);
    DataManager::set_custom_path(&path)?;
    println!("✓ Data path successfully set to: {}", path.display());
    println!("Run `kinetix data init` to populate the new location.");
    Ok(())
}

fn handle_reset_path() -> Result<()> {
    info!("Resetting data path to default.");
    DataManager::reset_path()?;
    let manager = DataManager::new()?;
    println!(
        "✓ Data path has been reset to the default location: {}",
        manager.get_data_path().display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use kinetix::core::data::DataSet;
    use tempfile::tempdir;

    #[test]
    fn init_honours_the_data_dir_override() {
        let temp_dir = tempdir().unwrap();
        let target = temp_dir.path().join("tables");
        let args = DataArgs {
            command: DataCommands::Init { force: false },
        };

        run(args, Some(target.as_path())).unwrap();

        let data = DataSet::load_dir(&target).unwrap();
        assert!(data.dissociation.get("O2", "O").is_ok());
    }
}

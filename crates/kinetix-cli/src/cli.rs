use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author = "Kinetix Developers",
    version,
    about = "Kinetix CLI - rate constants, collision integrals and relaxation times of reacting diatomic gases.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Directory holding particles.toml, interaction.csv and dissociation.csv.
    /// Overrides `data-dir` from the config file and the managed data directory.
    #[arg(short = 'd', long, global = true, value_name = "PATH")]
    pub data_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Tabulate rate constants, Ω-integrals and relaxation times of a collision pair over temperature.
    Scan(ScanArgs),
    /// Evaluate a single collision integral Ω^(l,r).
    Omega(OmegaArgs),
    /// Solve for the dissociation equilibrium of a binary A2 + A mixture.
    Equilibrium(EquilibriumArgs),
    /// Manage the local data directory.
    Data(DataArgs),
}

/// Arguments for the `scan` subcommand.
#[derive(Args, Debug, Default)]
pub struct ScanArgs {
    // --- Pair ---
    /// Molecule whose rates are tabulated (e.g. N2).
    #[arg(short, long, value_name = "NAME")]
    pub molecule: Option<String>,

    /// Collision partner (e.g. N).
    #[arg(short, long, value_name = "NAME")]
    pub partner: Option<String>,

    /// Path to a scan configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write the table as CSV to this file instead of standard output.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    // --- Temperature grid overrides ---
    /// First temperature of the scan [K].
    #[arg(long, value_name = "FLOAT")]
    pub t_start: Option<f64>,

    /// Last temperature of the scan [K].
    #[arg(long, value_name = "FLOAT")]
    pub t_end: Option<f64>,

    /// Number of temperatures, both ends included.
    #[arg(long, value_name = "INT")]
    pub steps: Option<usize>,

    // --- Physics overrides ---
    /// Vibrational level of the level-resolved rates.
    #[arg(short, long, value_name = "INT")]
    pub level: Option<usize>,

    /// Number density used for relaxation times [m^-3].
    #[arg(short = 'n', long, value_name = "FLOAT")]
    pub number_density: Option<f64>,

    /// Vibrational spectrum: harmonic, anharmonic or table.
    #[arg(long, value_name = "MODEL")]
    pub vibr_model: Option<String>,

    /// Treanor–Marrone U parameter: inf, D6k or 3T.
    #[arg(long, value_name = "MODEL")]
    pub u_model: Option<String>,

    /// Cross-section model of the velocity integrals: RS, VSS or GSS.
    #[arg(long, value_name = "MODEL")]
    pub crosssection_model: Option<String>,

    /// Potential of the Ω-integrals: ESA, BM, LJ, MLJ, RS, VSS or Switch.
    #[arg(long, value_name = "MODEL")]
    pub omega_model: Option<String>,

    /// Energy compared with the dissociation threshold: center-of-mass or total.
    #[arg(long, value_name = "MODEL")]
    pub diss_energy: Option<String>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S scan.level=4
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}

/// Arguments for the `omega` subcommand.
#[derive(Args, Debug)]
pub struct OmegaArgs {
    /// First species of the pair.
    #[arg(required = true)]
    pub first: String,

    /// Second species of the pair.
    #[arg(required = true)]
    pub second: String,

    /// Temperature [K].
    #[arg(short, long, required = true, value_name = "FLOAT")]
    pub temperature: f64,

    /// Order l of the integral.
    #[arg(short = 'l', default_value_t = 1, value_name = "INT")]
    pub l: u32,

    /// Order r of the integral.
    #[arg(short = 'r', default_value_t = 1, value_name = "INT")]
    pub r: u32,

    /// Potential: ESA, BM, LJ, MLJ, RS, VSS or Switch.
    #[arg(short, long, default_value = "LJ", value_name = "MODEL")]
    pub model: String,

    /// Divide by the rigid-sphere value of the same pair.
    #[arg(long)]
    pub dimensionless: bool,
}

/// Arguments for the `equilibrium` subcommand.
#[derive(Args, Debug)]
pub struct EquilibriumArgs {
    /// Diatomic molecule (e.g. N2).
    #[arg(required = true)]
    pub molecule: String,

    /// Atom it dissociates into (e.g. N).
    #[arg(required = true)]
    pub atom: String,

    /// Temperature [K].
    #[arg(short, long, required = true, value_name = "FLOAT")]
    pub temperature: f64,

    /// Total number density [m^-3].
    #[arg(short = 'n', long, value_name = "FLOAT")]
    pub number_density: Option<f64>,

    /// Vibrational spectrum: harmonic, anharmonic or table.
    #[arg(long, default_value = "anharmonic", value_name = "MODEL")]
    pub vibr_model: String,
}

/// Arguments for the `data` subcommand.
#[derive(Args, Debug)]
pub struct DataArgs {
    #[command(subcommand)]
    pub command: DataCommands,
}

/// Available commands for data management.
#[derive(Subcommand, Debug)]
pub enum DataCommands {
    /// Write the bundled species, interaction and dissociation tables to the data directory.
    Init {
        /// Overwrite files that already exist.
        #[arg(long)]
        force: bool,
    },
    /// Show the absolute path to the local data directory.
    Path,
    /// Set a custom absolute path for the local data directory.
    SetPath {
        /// The new path to use for storing data files.
        #[arg(required = true)]
        path: PathBuf,
    },
    /// Reset the data path to its default, OS-specific location.
    ResetPath,
}

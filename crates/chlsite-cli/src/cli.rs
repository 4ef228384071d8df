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
    version,
    about = "CHLSITE CLI - Classifies chlorophyll binding sites of a protein structure by their hydrogen-bond donor/acceptor balance.",
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
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Classify every cofactor site of a structure as donor- or acceptor-dominated.
    Predict(PredictArgs),
    /// Print a default configuration file.
    Config(ConfigArgs),
}

/// Arguments for the `predict` subcommand.
#[derive(Args, Debug)]
pub struct PredictArgs {
    // --- Core Arguments ---
    /// Path to the input structure file in PDB format.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Path for the output CSV table. Prints a summary to stdout if omitted.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    // --- Parameter Overrides ---
    /// Name of the cofactor atom the neighbor sphere is centered on (e.g., 'CMB').
    #[arg(short, long, value_name = "NAME")]
    pub pivot: Option<String>,

    /// Neighbor sphere radius in Angstroms.
    #[arg(short, long, value_name = "FLOAT")]
    pub radius: Option<f64>,

    /// Plane-angle threshold in degrees. Accepted for compatibility; it does not filter neighbors.
    #[arg(long, value_name = "DEGREES")]
    pub angle_threshold: Option<f64>,

    /// Comma-separated donor atom names, replacing the default list.
    #[arg(long, value_name = "NAMES", value_delimiter = ',')]
    pub donor_names: Option<Vec<String>>,

    /// Comma-separated acceptor atom names, replacing the default list.
    #[arg(long, value_name = "NAMES", value_delimiter = ',')]
    pub acceptor_names: Option<Vec<String>>,

    /// Override `exclude-alpha-helix` from the config file.
    #[command(flatten)]
    pub helix_exclusion: HelixExclusion,
}

/// A group to handle mutually exclusive flags for the helix backbone exclusion.
#[derive(Args, Debug, Clone, Copy)]
#[group(required = false, multiple = false)]
pub struct HelixExclusion {
    /// Force the removal of one backbone N/O pair per site.
    #[arg(long)]
    pub helix_exclusion: bool,
    /// Keep backbone N/O pairs in the counts.
    #[arg(long)]
    pub no_helix_exclusion: bool,
}

/// Arguments for the `config` subcommand.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Write the template to a file instead of stdout.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,
}

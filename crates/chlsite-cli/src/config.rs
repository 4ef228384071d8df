use crate::cli::{HelixExclusion, PredictArgs};
use crate::error::{CliError, Result};
use chlsite::core::chemistry::{DEFAULT_ACCEPTOR_NAMES, DEFAULT_DONOR_NAMES};
use chlsite::engine::config::{
    DEFAULT_ANGLE_THRESHOLD_DEGREES, PredictionConfig, PredictionConfigBuilder,
};
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

pub const DEFAULT_PIVOT_ATOM: &str = "CMB";
pub const DEFAULT_RADIUS: f64 = 4.0;

#[derive(Deserialize, Debug, Default, Clone, PartialEq)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct PartialPredictionConfig {
    pivot_atom: Option<String>,
    radius: Option<f64>,
    angle_threshold: Option<f64>,
    exclude_alpha_helix: Option<bool>,
    donor_names: Option<Vec<String>>,
    acceptor_names: Option<Vec<String>>,
}

impl PartialPredictionConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        debug!("Loading configuration from file: {:?}", path);
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content).map_err(|e| CliError::FileParsing {
            path: path.to_path_buf(),
            source: e.into(),
        })
    }

    fn from_toml_str(content: &str) -> std::result::Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Loads the file named by `--config`, or an empty configuration.
    pub fn load(args: &PredictArgs) -> Result<Self> {
        match &args.config {
            Some(path) => Self::from_file(path),
            None => Ok(Self::default()),
        }
    }

    /// Combines file values with CLI overrides; CLI arguments win.
    pub fn merge_with_cli(self, args: &PredictArgs) -> Result<PredictionConfig> {
        let pivot = args.pivot.clone().or(self.pivot_atom).ok_or_else(|| {
            CliError::Config(
                "A pivot atom is required either as `pivot-atom` in the config file or via --pivot."
                    .to_string(),
            )
        })?;
        let radius = args.radius.or(self.radius).ok_or_else(|| {
            CliError::Config(
                "A radius is required either as `radius` in the config file or via --radius."
                    .to_string(),
            )
        })?;

        let mut builder = PredictionConfigBuilder::new()
            .pivot_atom_name(pivot)
            .radius(radius)
            .exclude_alpha_helix(Self::merge_helix_exclusion(
                args.helix_exclusion,
                self.exclude_alpha_helix,
            ));

        if let Some(angle) = args.angle_threshold.or(self.angle_threshold) {
            builder = builder.angle_threshold(angle);
        }
        if let Some(names) = args.donor_names.clone().or(self.donor_names) {
            builder = builder.donor_names(Self::clean_names(names, "donor-names")?);
        }
        if let Some(names) = args.acceptor_names.clone().or(self.acceptor_names) {
            builder = builder.acceptor_names(Self::clean_names(names, "acceptor-names")?);
        }

        builder.build().map_err(|e| CliError::Config(e.to_string()))
    }

    fn merge_helix_exclusion(cli_flags: HelixExclusion, file_val: Option<bool>) -> bool {
        if cli_flags.helix_exclusion {
            true
        } else if cli_flags.no_helix_exclusion {
            false
        } else {
            file_val.unwrap_or(true)
        }
    }

    fn clean_names(names: Vec<String>, key: &str) -> Result<Vec<String>> {
        let cleaned: Vec<String> = names
            .into_iter()
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .collect();
        if cleaned.is_empty() {
            return Err(CliError::Config(format!(
                "`{key}` must contain at least one atom name."
            )));
        }
        Ok(cleaned)
    }
}

fn quoted_list(names: &[&str]) -> String {
    let quoted: Vec<String> = names.iter().map(|name| format!("\"{name}\"")).collect();
    format!("[{}]", quoted.join(", "))
}

/// A commented configuration file holding the built-in defaults.
pub fn default_template() -> String {
    format!(
        r#"# CHLSITE configuration.
# Values given on the command line take precedence over this file.

# Cofactor atom the neighbor sphere is centered on.
pivot-atom = "{DEFAULT_PIVOT_ATOM}"

# Neighbor sphere radius in Angstroms.
radius = {DEFAULT_RADIUS:.1}

# Plane-angle threshold in degrees. Logged only; it does not filter neighbors.
angle-threshold = {DEFAULT_ANGLE_THRESHOLD_DEGREES:.1}

# Drop one backbone N/O pair per site before averaging.
exclude-alpha-helix = true

# Atom names counted as hydrogen-bond donors. Donors take precedence.
donor-names = {donors}

# Atom names counted as hydrogen-bond acceptors.
acceptor-names = {acceptors}
"#,
        donors = quoted_list(DEFAULT_DONOR_NAMES),
        acceptors = quoted_list(DEFAULT_ACCEPTOR_NAMES),
    )
}

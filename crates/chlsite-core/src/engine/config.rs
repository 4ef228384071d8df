use crate::core::chemistry::{DEFAULT_ACCEPTOR_NAMES, DEFAULT_DONOR_NAMES};
use std::collections::HashSet;
use thiserror::Error;

/// Default plane-angle threshold in degrees.
pub const DEFAULT_ANGLE_THRESHOLD_DEGREES: f64 = 90.0;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),
    #[error("Invalid value for parameter '{name}': {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

/// Atom-name sets used to classify neighbors as donors or acceptors.
///
/// Names are matched exactly. A name present in both sets classifies as a
/// donor, since donors are tested first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassificationLists {
    donor_names: HashSet<String>,
    acceptor_names: HashSet<String>,
}

impl ClassificationLists {
    pub fn new<D, A, S>(donor_names: D, acceptor_names: A) -> Self
    where
        D: IntoIterator<Item = S>,
        A: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            donor_names: donor_names.into_iter().map(Into::into).collect(),
            acceptor_names: acceptor_names.into_iter().map(Into::into).collect(),
        }
    }

    pub fn is_donor(&self, atom_name: &str) -> bool {
        self.donor_names.contains(atom_name)
    }

    pub fn is_acceptor(&self, atom_name: &str) -> bool {
        self.acceptor_names.contains(atom_name)
    }

    pub fn donor_names(&self) -> &HashSet<String> {
        &self.donor_names
    }

    pub fn acceptor_names(&self) -> &HashSet<String> {
        &self.acceptor_names
    }
}

impl Default for ClassificationLists {
    fn default() -> Self {
        Self::new(
            DEFAULT_DONOR_NAMES.iter().copied(),
            DEFAULT_ACCEPTOR_NAMES.iter().copied(),
        )
    }
}

/// Parameters of a site-classification run.
#[derive(Debug, Clone, PartialEq)]
pub struct PredictionConfig {
    /// Name of the cofactor atom the neighbor sphere is centered on.
    pub pivot_atom_name: String,
    /// Neighbor sphere radius in Angstroms.
    pub radius: f64,
    /// Plane-angle threshold in degrees. Accepted and logged, but it does not
    /// filter neighbors: every plane angle passes.
    pub angle_threshold: f64,
    pub lists: ClassificationLists,
    /// Whether to drop one backbone N/O pair per site before averaging.
    pub exclude_alpha_helix: bool,
}

#[derive(Default)]
pub struct PredictionConfigBuilder {
    pivot_atom_name: Option<String>,
    radius: Option<f64>,
    angle_threshold: Option<f64>,
    donor_names: Option<Vec<String>>,
    acceptor_names: Option<Vec<String>>,
    exclude_alpha_helix: Option<bool>,
}

impl PredictionConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pivot_atom_name(mut self, name: impl Into<String>) -> Self {
        self.pivot_atom_name = Some(name.into());
        self
    }
    pub fn radius(mut self, radius: f64) -> Self {
        self.radius = Some(radius);
        self
    }
    pub fn angle_threshold(mut self, degrees: f64) -> Self {
        self.angle_threshold = Some(degrees);
        self
    }
    pub fn donor_names(mut self, names: Vec<String>) -> Self {
        self.donor_names = Some(names);
        self
    }
    pub fn acceptor_names(mut self, names: Vec<String>) -> Self {
        self.acceptor_names = Some(names);
        self
    }
    pub fn exclude_alpha_helix(mut self, enabled: bool) -> Self {
        self.exclude_alpha_helix = Some(enabled);
        self
    }

    pub fn build(self) -> Result<PredictionConfig, ConfigError> {
        let pivot_atom_name = self
            .pivot_atom_name
            .ok_or(ConfigError::MissingParameter("pivot_atom_name"))?
            .trim()
            .to_string();
        if pivot_atom_name.is_empty() {
            return Err(ConfigError::InvalidParameter {
                name: "pivot_atom_name",
                reason: "must not be empty".to_string(),
            });
        }

        let radius = self.radius.ok_or(ConfigError::MissingParameter("radius"))?;
        if !radius.is_finite() || radius <= 0.0 {
            return Err(ConfigError::InvalidParameter {
                name: "radius",
                reason: format!("must be a positive finite distance, got {radius}"),
            });
        }

        let angle_threshold = self
            .angle_threshold
            .unwrap_or(DEFAULT_ANGLE_THRESHOLD_DEGREES);
        if !angle_threshold.is_finite() {
            return Err(ConfigError::InvalidParameter {
                name: "angle_threshold",
                reason: format!("must be finite, got {angle_threshold}"),
            });
        }

        let defaults = ClassificationLists::default();
        let lists = ClassificationLists {
            donor_names: self
                .donor_names
                .map(|names| names.into_iter().collect())
                .unwrap_or(defaults.donor_names),
            acceptor_names: self
                .acceptor_names
                .map(|names| names.into_iter().collect())
                .unwrap_or(defaults.acceptor_names),
        };

        Ok(PredictionConfig {
            pivot_atom_name,
            radius,
            angle_threshold,
            lists,
            exclude_alpha_helix: self.exclude_alpha_helix.unwrap_or(true),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_applies_defaults_for_optional_parameters() {
        let config = PredictionConfigBuilder::new()
            .pivot_atom_name("CMB")
            .radius(4.0)
            .build()
            .unwrap();

        assert_eq!(config.pivot_atom_name, "CMB");
        assert_eq!(config.radius, 4.0);
        assert_eq!(config.angle_threshold, DEFAULT_ANGLE_THRESHOLD_DEGREES);
        assert!(config.exclude_alpha_helix);
        assert_eq!(config.lists, ClassificationLists::default());
        assert!(config.lists.is_donor("OMB"));
        assert!(config.lists.is_acceptor("O1A"));
    }

    #[test]
    fn builder_fails_without_required_parameters() {
        let missing_pivot = PredictionConfigBuilder::new().radius(4.0).build();
        assert_eq!(
            missing_pivot.unwrap_err(),
            ConfigError::MissingParameter("pivot_atom_name")
        );

        let missing_radius = PredictionConfigBuilder::new().pivot_atom_name("CMB").build();
        assert_eq!(
            missing_radius.unwrap_err(),
            ConfigError::MissingParameter("radius")
        );
    }

    #[test]
    fn builder_rejects_non_positive_or_non_finite_radius() {
        for radius in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let result = PredictionConfigBuilder::new()
                .pivot_atom_name("CMB")
                .radius(radius)
                .build();
            assert!(matches!(
                result,
                Err(ConfigError::InvalidParameter { name: "radius", .. })
            ));
        }
    }

    #[test]
    fn builder_rejects_blank_pivot_name() {
        let result = PredictionConfigBuilder::new()
            .pivot_atom_name("   ")
            .radius(4.0)
            .build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter { name: "pivot_atom_name", .. })
        ));
    }

    #[test]
    fn name_overrides_replace_defaults_independently() {
        let config = PredictionConfigBuilder::new()
            .pivot_atom_name("CMB")
            .radius(4.0)
            .donor_names(vec!["OX".to_string()])
            .exclude_alpha_helix(false)
            .build()
            .unwrap();

        assert!(config.lists.is_donor("OX"));
        assert!(!config.lists.is_donor("OMB"));
        assert_eq!(
            config.lists.acceptor_names(),
            ClassificationLists::default().acceptor_names()
        );
        assert!(!config.exclude_alpha_helix);
    }
}

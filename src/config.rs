//! YAML comparison configuration
//!
//! ```yaml
//! parameters:
//!   r: 0.05
//!   K: 1.0
//!   tf: 100.0
//!   h: 5.0
//! initial_conditions:
//!   - y0: 0.1
//!   - y0: 0.5
//!     active: false
//! ```
//!
//! Both sections are optional: missing parameters take the
//! [`ParameterSet::default`] values and a missing condition list is empty.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::comparison::{compare, ComparisonReport, InitialCondition, ParameterSet};
use crate::error::{ConfigError, SolverError};

/// Parameters plus the list of initial conditions to compare
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComparisonConfig {
    #[serde(default)]
    pub parameters: ParameterSet,

    #[serde(default)]
    pub initial_conditions: Vec<InitialCondition>,
}

impl ComparisonConfig {
    /// Parse and validate a YAML document
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate YAML from any reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_reader(reader)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a YAML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let file = File::open(path.as_ref())?;
        log::debug!("loading comparison configuration from {}", path.as_ref().display());
        Self::from_reader(BufReader::new(file))
    }

    /// Serialize back to YAML
    pub fn to_yaml_string(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Check the parameters and every active initial value
    pub fn validate(&self) -> Result<(), SolverError> {
        self.parameters.validate()?;
        self.initial_conditions
            .iter()
            .filter(|condition| condition.active)
            .try_for_each(|condition| condition.validate().map(|_| ()))
    }

    /// Run the comparison this configuration describes
    pub fn run(&self) -> Result<ComparisonReport, SolverError> {
        compare(&self.parameters, &self.initial_conditions)
    }
}

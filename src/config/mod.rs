pub mod source;

pub use source::{FileSource, TextSource};

#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_path, validate_required_field, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use std::path::PathBuf;

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "carpool-planner")]
#[command(about = "Computes the fewest cars needed to bring every employee to the office town")]
pub struct CliConfig {
    /// Scenario file to solve
    pub input: Option<PathBuf>,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// The scenario source named on the command line. Call after `validate`.
    pub fn source(&self) -> Result<FileSource> {
        let input = validate_required_field(&self.input)?;
        Ok(FileSource::new(input.clone()))
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        let input = validate_required_field(&self.input)?;
        validate_path("input", input)
    }
}

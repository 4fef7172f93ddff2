pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{FileSource, TextSource};
pub use crate::core::{
    allocation::{allocate, allocate_with, CapacityBuckets, DescendingGreedy},
    engine::CarpoolEngine,
    format::format_allocation,
};
pub use domain::model::{Allocation, CaseReport, Employee, Scenario, TownGroup};
pub use utils::error::{CarpoolError, Result};

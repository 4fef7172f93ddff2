pub mod allocation;
pub mod engine;
pub mod format;
pub mod loader;

pub use crate::domain::model::{Allocation, CaseReport, Employee, Scenario, TownGroup};
pub use crate::domain::ports::{ScenarioSource, VehicleCounter};
pub use crate::utils::error::Result;

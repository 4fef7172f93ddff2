use crate::domain::model::{Scenario, TownGroup};
use crate::utils::error::Result;

/// Where scenarios come from. Implementations read their input once and
/// release it before returning.
pub trait ScenarioSource {
    fn describe(&self) -> String;
    fn load(&self) -> Result<Vec<Scenario>>;
}

/// Counts the vehicles one town needs. Only called for groups where
/// `TownGroup::is_feasible` holds.
pub trait VehicleCounter {
    fn vehicles_needed(&self, group: &TownGroup) -> usize;
}

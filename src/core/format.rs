use crate::domain::model::{Allocation, CaseReport};
use std::fmt;

pub const INFEASIBLE_MARKER: &str = "IMPOSSIBLE";

/// Renders counts for towns 1..=town_count separated by single spaces, or
/// the infeasible marker.
pub fn format_allocation(allocation: &Allocation) -> String {
    allocation.to_string()
}

impl fmt::Display for Allocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Allocation::Infeasible => f.write_str(INFEASIBLE_MARKER),
            Allocation::Vehicles { town_count, counts } => {
                for town in 1..=*town_count {
                    if town > 1 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{}", counts.get(&town).copied().unwrap_or(0))?;
                }
                Ok(())
            }
        }
    }
}

impl fmt::Display for CaseReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Case #{}: {}", self.case, self.allocation)
    }
}

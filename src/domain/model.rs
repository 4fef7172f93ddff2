use std::collections::BTreeMap;

/// Seats an employee can offer besides their own.
pub const MAX_CAPACITY: u8 = 6;

/// Town ids run from 1 to `Scenario::town_count`.
pub type TownId = usize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Employee {
    pub hometown: TownId,
    /// Passengers this employee can take when driving, excluding themself.
    pub capacity: u8,
}

impl Employee {
    pub fn new(hometown: TownId, capacity: u8) -> Self {
        Self { hometown, capacity }
    }
}

/// One block of the input file. Values produced by the loader always satisfy
/// `1 <= office_town <= town_count` and `1 <= hometown <= town_count`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub town_count: usize,
    pub office_town: TownId,
    pub employees: Vec<Employee>,
}

/// Employees of a single non-office town.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TownGroup {
    pub town: TownId,
    pub capacities: Vec<u8>,
    pub total_capacity: usize,
}

impl TownGroup {
    pub fn new(town: TownId) -> Self {
        Self {
            town,
            capacities: Vec::new(),
            total_capacity: 0,
        }
    }

    pub fn push(&mut self, capacity: u8) {
        self.capacities.push(capacity);
        self.total_capacity += usize::from(capacity);
    }

    pub fn headcount(&self) -> usize {
        self.capacities.len()
    }

    pub fn is_feasible(&self) -> bool {
        self.headcount() <= self.total_capacity
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Allocation {
    Infeasible,
    /// Vehicle counts keyed by town. Towns in `1..=town_count` without an
    /// entry need no vehicles.
    Vehicles {
        town_count: usize,
        counts: BTreeMap<TownId, usize>,
    },
}

impl Allocation {
    pub fn is_feasible(&self) -> bool {
        matches!(self, Allocation::Vehicles { .. })
    }

    pub fn vehicles_for(&self, town: TownId) -> Option<usize> {
        match self {
            Allocation::Infeasible => None,
            Allocation::Vehicles { town_count, counts } => {
                if town == 0 || town > *town_count {
                    return None;
                }
                Some(counts.get(&town).copied().unwrap_or(0))
            }
        }
    }

    pub fn total_vehicles(&self) -> Option<usize> {
        match self {
            Allocation::Infeasible => None,
            Allocation::Vehicles { counts, .. } => Some(counts.values().sum()),
        }
    }
}

/// Result of one scenario, numbered from 1 in input order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseReport {
    pub case: usize,
    pub allocation: Allocation,
}

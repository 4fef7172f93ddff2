use crate::domain::model::{Allocation, Scenario, TownGroup, TownId, MAX_CAPACITY};
use crate::domain::ports::VehicleCounter;
use std::collections::BTreeMap;

/// Sorts capacities in descending order and hands out cars to the biggest
/// drivers first until everybody is seated.
#[derive(Debug, Clone, Copy, Default)]
pub struct DescendingGreedy;

impl VehicleCounter for DescendingGreedy {
    fn vehicles_needed(&self, group: &TownGroup) -> usize {
        let mut capacities = group.capacities.clone();
        capacities.sort_unstable_by(|a, b| b.cmp(a));

        let mut remaining = group.headcount();
        let mut vehicles = 0;
        for capacity in capacities {
            remaining = remaining.saturating_sub(usize::from(capacity));
            vehicles += 1;
            if remaining == 0 {
                break;
            }
        }
        vehicles
    }
}

/// Same result as [`DescendingGreedy`] without sorting: counts drivers per
/// capacity and takes whole buckets from the top. Linear in the town size
/// because capacities are bounded by `MAX_CAPACITY`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CapacityBuckets;

impl VehicleCounter for CapacityBuckets {
    fn vehicles_needed(&self, group: &TownGroup) -> usize {
        let mut buckets = [0usize; MAX_CAPACITY as usize + 1];
        for &capacity in &group.capacities {
            buckets[usize::from(capacity)] += 1;
        }

        let mut remaining = group.headcount();
        let mut vehicles = 0;
        for capacity in (1..=usize::from(MAX_CAPACITY)).rev() {
            let taken = remaining.div_ceil(capacity).min(buckets[capacity]);
            vehicles += taken;
            remaining = remaining.saturating_sub(taken * capacity);
            if remaining == 0 {
                break;
            }
        }
        vehicles
    }
}

/// Groups employees by hometown, leaving out the office town.
pub fn group_by_town(scenario: &Scenario) -> BTreeMap<TownId, TownGroup> {
    let mut groups: BTreeMap<TownId, TownGroup> = BTreeMap::new();
    for employee in &scenario.employees {
        if employee.hometown == scenario.office_town {
            continue;
        }
        groups
            .entry(employee.hometown)
            .or_insert_with(|| TownGroup::new(employee.hometown))
            .push(employee.capacity);
    }
    groups
}

pub fn allocate(scenario: &Scenario) -> Allocation {
    allocate_with(scenario, &DescendingGreedy)
}

/// Computes the vehicles every town needs, or `Infeasible` as soon as one
/// town has more employees than seats.
pub fn allocate_with<C: VehicleCounter>(scenario: &Scenario, counter: &C) -> Allocation {
    let mut counts = BTreeMap::new();

    for (town, group) in group_by_town(scenario) {
        if !group.is_feasible() {
            tracing::debug!(
                town,
                headcount = group.headcount(),
                total_capacity = group.total_capacity,
                "Town cannot be covered"
            );
            return Allocation::Infeasible;
        }

        let vehicles = counter.vehicles_needed(&group);
        tracing::debug!(
            town,
            headcount = group.headcount(),
            total_capacity = group.total_capacity,
            vehicles,
            "Town allocated"
        );

        counts.insert(town, vehicles);
    }

    Allocation::Vehicles {
        town_count: scenario.town_count,
        counts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Employee;

    fn scenario(town_count: usize, office_town: usize, employees: &[(usize, u8)]) -> Scenario {
        Scenario {
            town_count,
            office_town,
            employees: employees
                .iter()
                .map(|&(hometown, capacity)| Employee::new(hometown, capacity))
                .collect(),
        }
    }

    fn group(capacities: &[u8]) -> TownGroup {
        let mut group = TownGroup::new(2);
        for &capacity in capacities {
            group.push(capacity);
        }
        group
    }

    #[test]
    fn test_sufficient_capacity() {
        let s = scenario(2, 1, &[(2, 2), (2, 1), (2, 1), (2, 0)]);
        assert_eq!(allocate(&s).to_string(), "0 3");
    }

    #[test]
    fn test_sufficient_capacity_multiple_towns() {
        let s = scenario(
            4,
            1,
            &[
                (2, 2),
                (2, 1),
                (2, 1),
                (2, 0),
                (2, 2),
                (3, 1),
                (3, 1),
                (3, 3),
                (4, 2),
                (4, 1),
                (4, 1),
                (4, 0),
            ],
        );
        assert_eq!(allocate(&s).to_string(), "0 3 1 3");
    }

    #[test]
    fn test_insufficient_capacity() {
        let s = scenario(4, 1, &[(2, 0), (2, 0), (2, 1)]);
        assert_eq!(allocate(&s), Allocation::Infeasible);
    }

    #[test]
    fn test_one_infeasible_town_dooms_the_scenario() {
        let s = scenario(4, 1, &[(2, 6), (2, 0), (4, 0), (3, 2), (3, 1)]);
        assert_eq!(allocate(&s), Allocation::Infeasible);
        assert_eq!(allocate_with(&s, &CapacityBuckets), Allocation::Infeasible);
    }

    #[test]
    fn test_no_employees() {
        let s = scenario(2, 1, &[]);
        assert_eq!(allocate(&s).to_string(), "0 0");
    }

    #[test]
    fn test_single_town_is_the_office() {
        let s = scenario(1, 1, &[(1, 0), (1, 0)]);
        assert_eq!(allocate(&s).to_string(), "0");
    }

    #[test]
    fn test_office_town_residents_are_ignored() {
        let s = scenario(3, 2, &[(2, 0), (2, 0), (1, 1), (3, 0), (3, 4)]);
        assert_eq!(allocate(&s).to_string(), "1 0 1");
    }

    #[test]
    fn test_lone_employee_needs_a_spare_seat() {
        assert_eq!(allocate(&scenario(2, 1, &[(2, 0)])), Allocation::Infeasible);
        assert_eq!(allocate(&scenario(2, 1, &[(2, 1)])).to_string(), "0 1");
    }

    #[test]
    fn test_huge_town_count_is_stored_sparsely() {
        let s = scenario(usize::MAX, 1, &[(2, 1)]);
        let allocation = allocate(&s);
        assert!(allocation.is_feasible());
        assert_eq!(allocation.vehicles_for(2), Some(1));
        assert_eq!(allocation.vehicles_for(usize::MAX), Some(0));
        assert_eq!(allocation.total_vehicles(), Some(1));
    }

    #[test]
    fn test_greedy_prefers_largest_drivers() {
        let g = group(&[1, 0, 6, 1, 0, 0, 0]);
        assert_eq!(DescendingGreedy.vehicles_needed(&g), 2);
        assert_eq!(CapacityBuckets.vehicles_needed(&g), 2);

        let g = group(&[2, 2, 2, 2]);
        assert_eq!(DescendingGreedy.vehicles_needed(&g), 2);
        assert_eq!(CapacityBuckets.vehicles_needed(&g), 2);
    }

    #[test]
    fn test_group_by_town_skips_office() {
        let s = scenario(3, 1, &[(1, 6), (3, 2), (2, 1), (3, 0)]);
        let groups = group_by_town(&s);
        assert_eq!(groups.keys().copied().collect::<Vec<_>>(), vec![2, 3]);
        assert_eq!(groups[&3].capacities, vec![2, 0]);
        assert_eq!(groups[&3].total_capacity, 2);
        assert_eq!(groups[&2].headcount(), 1);
    }

    #[test]
    fn test_allocation_is_repeatable() {
        let s = scenario(4, 3, &[(1, 3), (1, 0), (2, 2), (4, 1), (4, 5), (1, 1)]);
        let first = allocate(&s);
        assert_eq!(first, allocate(&s));
        assert_eq!(first.to_string(), "1 1 0 1");
    }
}

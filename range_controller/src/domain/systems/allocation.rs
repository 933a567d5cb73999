use crate::domain::errors::ErrorCode;
use crate::domain::state::{GameAllocation, MACHINE_COUNT, Machines, allocation_total};
use tracing::{debug, error, warn};

/// Result of splitting the requested total across eligible machines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Distribution {
    pub allocation: GameAllocation,
    /// Requested total, clamped down to what actually fit on the machines.
    pub max_shootable_ammo: i32,
    pub error: ErrorCode,
}

/// Splits `max_shootable_ammo` evenly over eligible machines, then hands out the
/// remainder one unit per machine per scan in index order.
///
/// `allocation` always sums to the returned `max_shootable_ammo`.
pub fn distribute(machines: &Machines, max_shootable_ammo: i32) -> Distribution {
    let mut allocation = [0; MACHINE_COUNT];
    let eligible = machines.eligible_count() as i32;

    if eligible == 0 || max_shootable_ammo <= 0 {
        warn!(eligible, max_shootable_ammo, "no machines or ammo to distribute");
        return Distribution {
            allocation,
            max_shootable_ammo: 0,
            error: ErrorCode::InsufficientAmmoOrMachines,
        };
    }

    let base = max_shootable_ammo / eligible;
    let mut remainder = max_shootable_ammo % eligible;
    let mut code = ErrorCode::None;

    for (index, slot) in allocation.iter_mut().enumerate() {
        if !machines.is_eligible(index) {
            continue;
        }
        let capacity = machines.capacity[index];
        if capacity >= base {
            *slot = base;
        } else {
            // Short machine takes what it holds; the rest goes back to the pool.
            *slot = capacity;
            remainder += base - capacity;
            code = code.escalate(ErrorCode::UnevenDistribution);
            debug!(machine = index, capacity, base, "machine below even share");
        }
    }

    let mut total = max_shootable_ammo;
    while remainder > 0 {
        let mut progressed = false;
        for (index, slot) in allocation.iter_mut().enumerate() {
            if remainder == 0 {
                break;
            }
            if machines.is_eligible(index) && machines.capacity[index] > *slot {
                *slot += 1;
                remainder -= 1;
                progressed = true;
            }
        }

        if !progressed {
            total = allocation_total(&allocation);
            code = code.escalate(ErrorCode::InsufficientAmmoOrMachines);
            warn!(
                requested = max_shootable_ammo,
                distributed = total,
                undistributed = remainder,
                "machines cannot hold the requested ammo, clamping total"
            );
            break;
        }
    }

    Distribution {
        allocation,
        max_shootable_ammo: total,
        error: code,
    }
}

/// Simulates withdrawing every triple-fire group, then every double-fire group, from a
/// private copy of `allocation`. Each group takes one unit from each stocked machine in
/// index order.
///
/// Returns false when a group cannot be completed, or when the leftover pool does not
/// reconcile with `max_shootable_ammo` (an internal inconsistency, logged as an error).
pub fn check_fire_feasibility(
    allocation: &GameAllocation,
    double_fire: i32,
    triple_fire: i32,
    max_shootable_ammo: i32,
) -> bool {
    let double_fire = double_fire.max(0);
    let triple_fire = triple_fire.max(0);
    let mut pool = *allocation;

    for (group_size, groups) in [(3, triple_fire), (2, double_fire)] {
        for group in 0..groups {
            if !withdraw_group(&mut pool, group_size) {
                debug!(group_size, group, groups, "fire group cannot be completed");
                return false;
            }
        }
    }

    let remaining = allocation_total(&pool);
    let consistent = remaining + 2 * double_fire + 3 * triple_fire == max_shootable_ammo;
    if !consistent {
        error!(
            remaining,
            double_fire,
            triple_fire,
            max_shootable_ammo,
            "allocation does not reconcile with shootable total"
        );
    }
    consistent
}

fn withdraw_group(pool: &mut GameAllocation, group_size: usize) -> bool {
    let mut taken = 0;
    for stock in pool.iter_mut() {
        if taken == group_size {
            break;
        }
        if *stock > 0 {
            *stock -= 1;
            taken += 1;
        }
    }
    taken == group_size
}

#[cfg(test)]
mod tests {
    use super::*;

    fn machines(enabled: &[usize], capacity: &[i32]) -> Machines {
        let mut machines = Machines::default();
        for &index in enabled {
            machines.enabled[index] = true;
        }
        machines.capacity[..capacity.len()].copy_from_slice(capacity);
        machines
    }

    fn allocation(values: &[i32]) -> GameAllocation {
        let mut allocation = [0; MACHINE_COUNT];
        allocation[..values.len()].copy_from_slice(values);
        allocation
    }

    #[test]
    fn when_capacity_covers_even_share_then_remainder_goes_to_first_machine() {
        let result = distribute(&machines(&[0, 1, 2], &[5, 5, 5]), 10);

        assert_eq!(result.allocation, allocation(&[4, 3, 3]));
        assert_eq!(result.max_shootable_ammo, 10);
        assert_eq!(result.error, ErrorCode::None);
    }

    #[test]
    fn when_machine_is_short_then_shortfall_is_redistributed_and_flagged() {
        let result = distribute(&machines(&[0, 1, 2], &[1, 5, 5]), 10);

        assert_eq!(result.allocation, allocation(&[1, 5, 4]));
        assert_eq!(result.max_shootable_ammo, 10);
        assert_eq!(result.error, ErrorCode::UnevenDistribution);
    }

    #[test]
    fn when_no_machine_is_enabled_then_nothing_is_allocated() {
        let result = distribute(&machines(&[], &[5, 5, 5]), 5);

        assert_eq!(result.allocation, [0; MACHINE_COUNT]);
        assert_eq!(result.max_shootable_ammo, 0);
        assert_eq!(result.error, ErrorCode::InsufficientAmmoOrMachines);
    }

    #[test]
    fn when_requested_total_is_zero_then_nothing_is_allocated() {
        let result = distribute(&machines(&[0, 1], &[5, 5]), 0);

        assert_eq!(result.allocation, [0; MACHINE_COUNT]);
        assert_eq!(result.error, ErrorCode::InsufficientAmmoOrMachines);
    }

    #[test]
    fn when_enabled_machine_is_empty_then_it_does_not_count_toward_the_split() {
        let result = distribute(&machines(&[0, 1, 2], &[0, 4, 4]), 8);

        assert_eq!(result.allocation, allocation(&[0, 4, 4]));
        assert_eq!(result.error, ErrorCode::None);
    }

    #[test]
    fn when_request_exceeds_capacity_then_total_is_clamped_to_what_fits() {
        let result = distribute(&machines(&[0, 1, 2], &[2, 3, 1]), 12);

        assert_eq!(result.allocation, allocation(&[2, 3, 1]));
        assert_eq!(result.max_shootable_ammo, 6);
        assert_eq!(result.error, ErrorCode::InsufficientAmmoOrMachines);
    }

    #[test]
    fn when_disabled_machine_has_capacity_then_it_receives_nothing() {
        let result = distribute(&machines(&[1, 3], &[9, 2, 9, 9]), 7);

        assert_eq!(result.allocation, allocation(&[0, 2, 0, 5]));
        assert_eq!(result.error, ErrorCode::UnevenDistribution);
    }

    #[test]
    fn when_distributing_arbitrary_inputs_then_total_is_conserved_and_capacity_bounded() {
        let capacities = [3, 0, 7, 1, 12, 4, 4, 0, 9, 2];
        for mask in [0b11_1111_1111u16, 0b10_1010_1010, 0b00_0001_0111, 0b11_0000_0001] {
            for requested in [1, 5, 17, 33, 60] {
                let mut machines = Machines {
                    capacity: capacities,
                    ..Machines::default()
                };
                for (index, enabled) in machines.enabled.iter_mut().enumerate() {
                    *enabled = mask & (1 << index) != 0;
                }

                let result = distribute(&machines, requested);

                assert_eq!(allocation_total(&result.allocation), result.max_shootable_ammo);
                assert!(result.max_shootable_ammo <= requested);
                for index in 0..MACHINE_COUNT {
                    assert!(result.allocation[index] <= machines.capacity[index].max(0));
                    if !machines.enabled[index] {
                        assert_eq!(result.allocation[index], 0);
                    }
                }
            }
        }
    }

    #[test]
    fn when_groups_fit_across_machines_then_quota_is_feasible() {
        // Groups may mix machines: three machines with 2 units cover two triples.
        assert!(check_fire_feasibility(&allocation(&[2, 2, 2]), 0, 2, 6));
        assert!(check_fire_feasibility(&allocation(&[4, 3, 3]), 2, 1, 10));
    }

    #[test]
    fn when_too_few_machines_hold_stock_then_triple_fire_is_infeasible() {
        assert!(!check_fire_feasibility(&allocation(&[10, 10]), 0, 1, 20));
    }

    #[test]
    fn when_triples_drain_the_pool_then_double_fire_fails_first() {
        // Triples run first and leave only one stocked machine for the double.
        assert!(!check_fire_feasibility(&allocation(&[1, 1, 2]), 1, 1, 4));
    }

    #[test]
    fn when_no_groups_are_requested_then_quota_is_feasible() {
        assert!(check_fire_feasibility(&allocation(&[3]), 0, 0, 3));
        assert!(check_fire_feasibility(&[0; MACHINE_COUNT], 0, 0, 0));
    }

    #[test]
    fn when_pool_does_not_reconcile_with_total_then_quota_is_reported_infeasible() {
        assert!(!check_fire_feasibility(&allocation(&[3, 3, 3]), 1, 0, 12));
    }
}

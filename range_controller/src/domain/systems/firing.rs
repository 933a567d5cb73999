use crate::domain::ports::RandomSource;
use crate::domain::state::{FireMode, GameAllocation, MACHINE_COUNT, RangeState, SelectionResult};
use tracing::{debug, info};

/// Weighted pick of one machine, weight = its game allocation.
///
/// Only machines flagged in `eligible` with a positive allocation take part.
pub fn select_machine<R: RandomSource>(
    eligible: &[bool; MACHINE_COUNT],
    allocation: &GameAllocation,
    rng: &mut R,
) -> Option<usize> {
    let weight = |index: usize| -> u32 {
        if eligible[index] && allocation[index] > 0 {
            allocation[index] as u32
        } else {
            0
        }
    };

    let total: u32 = (0..MACHINE_COUNT).map(weight).sum();
    if total == 0 {
        return None;
    }

    let draw = rng.next_below(total);
    let mut cumulative = 0;
    for index in 0..MACHINE_COUNT {
        let w = weight(index);
        if w == 0 {
            continue;
        }
        cumulative += w;
        if draw < cumulative {
            return Some(index);
        }
    }
    None
}

/// Fires `mode.units()` distinct machines, spending one unit of capacity, allocation
/// and shootable ammo on each. A slot with no eligible machine left is skipped.
///
/// Returns the machines that fired, in selection order.
pub fn apply_fire<R: RandomSource>(
    mode: FireMode,
    range: &mut RangeState,
    selection: &mut SelectionResult,
    rng: &mut R,
) -> Vec<usize> {
    // Local copy: a machine that fired leaves the pool for the rest of this event only.
    let mut eligible = range.machines.enabled;
    let mut fired = Vec::with_capacity(mode.units());

    for _ in 0..mode.units() {
        let Some(index) = select_machine(&eligible, &range.allocation, rng) else {
            debug!(?mode, slot = fired.len(), "no machine left for fire slot");
            continue;
        };

        range.machines.capacity[index] -= 1;
        range.allocation[index] -= 1;
        range.quota.max_shootable_ammo -= 1;
        selection[index] = true;
        eligible[index] = false;
        fired.push(index);
    }

    match mode {
        FireMode::Single => {}
        FireMode::Double => range.quota.double_fire -= 1,
        FireMode::Triple => range.quota.triple_fire -= 1,
    }

    info!(
        ?mode,
        machines = ?fired,
        max_shootable_ammo = range.quota.max_shootable_ammo,
        "fired"
    );
    fired
}

/// Ends the game once no shootable ammo is left: pending double/triple fires are
/// dropped and the game allocation is cleared.
pub fn check_end_game(range: &mut RangeState) -> bool {
    if !range.quota.is_exhausted() {
        return false;
    }

    range.quota.double_fire = 0;
    range.quota.triple_fire = 0;
    range.allocation = [0; MACHINE_COUNT];
    true
}

use crate::domain::ports::RandomSource;
use crate::domain::state::{FireMode, FireQuota};
use crate::domain::tuning::FiringTuning;
use tracing::warn;

/// Picks single, double or triple fire with probability proportional to the units
/// each mode still accounts for. Returns `None` when no ammo is left.
///
/// A draw landing in a band whose precondition fails is redrawn, at most
/// `mode_retry_limit` times, before falling back to `tuning.fallback_mode`.
pub fn select_mode<R: RandomSource>(
    quota: &FireQuota,
    rng: &mut R,
    tuning: &FiringTuning,
) -> Option<FireMode> {
    if quota.is_exhausted() {
        return None;
    }

    let weights = [
        quota.simple_fire().max(0),
        2 * quota.double_fire.max(0),
        3 * quota.triple_fire.max(0),
    ];
    let total: i32 = weights.iter().sum();
    if total <= 0 {
        return Some(tuning.fallback_mode);
    }

    for _ in 0..=tuning.mode_retry_limit {
        let choice = rng.next_below(total as u32) as i32;
        let mode = band(choice, &weights);
        if is_available(mode, quota) {
            return Some(mode);
        }
    }

    warn!(
        max_shootable_ammo = quota.max_shootable_ammo,
        double_fire = quota.double_fire,
        triple_fire = quota.triple_fire,
        fallback = ?tuning.fallback_mode,
        "mode selection exhausted retries"
    );
    Some(tuning.fallback_mode)
}

fn band(choice: i32, weights: &[i32; 3]) -> FireMode {
    if choice < weights[0] {
        FireMode::Single
    } else if choice < weights[0] + weights[1] {
        FireMode::Double
    } else {
        FireMode::Triple
    }
}

fn is_available(mode: FireMode, quota: &FireQuota) -> bool {
    let ammo = quota.max_shootable_ammo;
    match mode {
        FireMode::Single => ammo >= 1,
        FireMode::Double => ammo >= 2 && quota.double_fire > 0,
        FireMode::Triple => ammo >= 3 && quota.triple_fire > 0,
    }
}

use crate::domain::state::DelayState;
use tracing::warn;

/// Outcome of the per-cycle delay gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelayGate {
    /// Firing allowed; the countdown restarts from the configured delay.
    Fire,
    /// Still cooling down; one cycle was consumed.
    Cooling,
    /// Configured delay is not positive. Nothing fires and the state is untouched.
    Fault,
}

/// Brings a persisted countdown back into `0..=configured`.
///
/// A non-positive configured delay is left alone so the fault path sees it unchanged.
pub fn normalize(delay: DelayState) -> DelayState {
    if delay.configured <= 0 {
        return delay;
    }
    DelayState {
        configured: delay.configured,
        remaining: delay.remaining.clamp(0, delay.configured),
    }
}

/// True once the countdown has passed its midpoint; the previous selection is cleared then.
pub fn clears_selection(delay: &DelayState) -> bool {
    delay.remaining < delay.configured / 2
}

pub fn advance(delay: &mut DelayState) -> DelayGate {
    if delay.configured <= 0 {
        warn!(configured = delay.configured, "non-positive fire delay, firing suppressed");
        return DelayGate::Fault;
    }

    if delay.remaining == 0 {
        delay.remaining = delay.configured;
        DelayGate::Fire
    } else {
        delay.remaining -= 1;
        DelayGate::Cooling
    }
}

// Use-case level inputs/outputs for game setup and the firing cycle.

use crate::domain::systems::delay::DelayGate;
use crate::domain::{
    DelayState, ErrorCode, FireMode, FireQuota, GameAllocation, Machines, RangeState,
    SelectionResult,
};

/// Operator request read at setup time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetupInput {
    pub machines: Machines,
    pub request: FireQuota,
    pub delay: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SetupOutcome {
    pub allocation: GameAllocation,
    // Quota with the shootable total clamped to what was distributed.
    pub quota: FireQuota,
    pub delay: i32,
    pub error: ErrorCode,
    // Feasibility against the post-clamp total, whatever the error code says.
    pub feasible: bool,
}

/// Everything one firing cycle reads from and writes back to the register store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CycleState {
    pub range: RangeState,
    pub delay: DelayState,
    pub selection: SelectionResult,
    // Units fired since the last setup.
    pub fired_count: i32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleOutcome {
    pub gate: DelayGate,
    pub selection_cleared: bool,
    pub mode: Option<FireMode>,
    pub fired: Vec<usize>,
    pub game_ended: bool,
}

impl CycleOutcome {
    pub(crate) fn gated(gate: DelayGate, selection_cleared: bool) -> Self {
        Self {
            gate,
            selection_cleared,
            mode: None,
            fired: Vec::new(),
            game_ended: false,
        }
    }
}

// Serializable views of the range for logs and dumps.
// These mirror the register layout; domain types stay serde-free.

use crate::domain::systems::delay::DelayGate;
use crate::domain::{ErrorCode, FireMode, MACHINE_COUNT, RegisterError, RegisterStore};
use crate::use_cases::register_map as regs;
use crate::use_cases::{CycleOutcome, SetupOutcome};
use serde::{Deserialize, Serialize};

/// Events the host emits while running a game.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "type", content = "data")]
pub enum RangeEvent {
    // Result of the setup invocation.
    Setup(SetupReport),
    // Result of one firing cycle.
    Cycle(CycleReport),
    // Full register view, usually at shutdown.
    Snapshot(RangeSnapshot),
}

#[derive(Debug, Clone, Serialize)]
pub struct SetupReport {
    pub allocation: Vec<i32>,
    pub max_shootable_ammo: i32,
    pub double_fire: i32,
    pub triple_fire: i32,
    pub delay: i32,
    pub error: ErrorCodeDto,
    pub feasible: bool,
}

impl From<&SetupOutcome> for SetupReport {
    fn from(outcome: &SetupOutcome) -> Self {
        Self {
            allocation: outcome.allocation.to_vec(),
            max_shootable_ammo: outcome.quota.max_shootable_ammo,
            double_fire: outcome.quota.double_fire,
            triple_fire: outcome.quota.triple_fire,
            delay: outcome.delay,
            error: outcome.error.into(),
            feasible: outcome.feasible,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCodeDto {
    None,
    InfeasibleFireQuota,
    UnevenDistribution,
    InsufficientAmmoOrMachines,
}

impl From<ErrorCode> for ErrorCodeDto {
    fn from(code: ErrorCode) -> Self {
        match code {
            ErrorCode::None => ErrorCodeDto::None,
            ErrorCode::InfeasibleFireQuota => ErrorCodeDto::InfeasibleFireQuota,
            ErrorCode::UnevenDistribution => ErrorCodeDto::UnevenDistribution,
            ErrorCode::InsufficientAmmoOrMachines => ErrorCodeDto::InsufficientAmmoOrMachines,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct CycleReport {
    pub cycle: u64,
    pub gate: &'static str,
    // Number of machines requested by the selected mode.
    pub mode: Option<usize>,
    pub fired: Vec<usize>,
    pub game_ended: bool,
}

impl CycleReport {
    pub fn new(cycle: u64, outcome: &CycleOutcome) -> Self {
        Self {
            cycle,
            gate: match outcome.gate {
                DelayGate::Fire => "fire",
                DelayGate::Cooling => "cooling",
                DelayGate::Fault => "fault",
            },
            mode: outcome.mode.map(FireMode::units),
            fired: outcome.fired.clone(),
            game_ended: outcome.game_ended,
        }
    }
}

/// Flattened copy of every mapped register range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RangeSnapshot {
    pub enabled: Vec<bool>,
    pub capacity: Vec<i16>,
    pub allocation: Vec<i16>,
    pub max_shootable_ammo: i16,
    pub double_fire: i16,
    pub triple_fire: i16,
    pub delay: i16,
    pub fired_count: i16,
    pub selection: Vec<bool>,
    pub error_code: i16,
    pub end_window: i16,
    pub remaining_delay: i16,
}

impl RangeSnapshot {
    pub fn capture<S: RegisterStore>(store: &S) -> Result<Self, RegisterError> {
        let mut enabled = [0i16; MACHINE_COUNT];
        let mut capacity = [0i16; MACHINE_COUNT];
        let mut allocation = [0i16; MACHINE_COUNT];
        let mut operational = [0i16; 5];
        let mut selection = [0i16; MACHINE_COUNT];
        store.read(regs::ENABLEMENT, &mut enabled)?;
        store.read(regs::CAPACITY, &mut capacity)?;
        store.read(regs::GAME_ALLOCATION, &mut allocation)?;
        store.read(regs::MAX_SHOOTABLE_AMMO, &mut operational)?;
        store.read(regs::SELECTION, &mut selection)?;

        Ok(Self {
            enabled: enabled.iter().map(|&word| word != 0).collect(),
            capacity: capacity.to_vec(),
            allocation: allocation.to_vec(),
            max_shootable_ammo: operational[0],
            double_fire: operational[1],
            triple_fire: operational[2],
            delay: operational[3],
            fired_count: operational[4],
            selection: selection.iter().map(|&word| word != 0).collect(),
            error_code: store.read_word(regs::ERROR_CODE)?,
            end_window: store.read_word(regs::END_WINDOW)?,
            remaining_delay: store.read_word(regs::REMAINING_DELAY)?,
        })
    }
}

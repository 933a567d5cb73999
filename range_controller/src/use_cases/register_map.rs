// Host register layout and typed reads/writes over a `RegisterStore`.

use crate::domain::{
    DelayState, FireQuota, GameAllocation, MACHINE_COUNT, Machines, RegisterError, RegisterStore,
    SelectionResult,
};

pub const ENABLEMENT: usize = 0;
pub const CAPACITY: usize = 10;
pub const GAME_ALLOCATION: usize = 100;
pub const MAX_SHOOTABLE_AMMO: usize = 110;
pub const DOUBLE_FIRE: usize = 111;
pub const TRIPLE_FIRE: usize = 112;
pub const CONFIGURED_DELAY: usize = 113;
pub const FIRED_COUNT: usize = 114;
pub const SELECTION: usize = 200;
pub const ERROR_CODE: usize = 300;
pub const END_GAME_CLEAR: usize = 400;
pub const END_WINDOW: usize = 500;
pub const REMAINING_DELAY: usize = 1000;

// Setup reads its request from its own copies, separate from the operational 110..=113.
pub const SETUP_MAX_SHOOTABLE_AMMO: usize = 1100;
pub const SETUP_DOUBLE_FIRE: usize = 1101;
pub const SETUP_TRIPLE_FIRE: usize = 1102;
pub const SETUP_DELAY: usize = 1103;

/// Highest address used plus one.
pub const REGISTER_SPAN: usize = SETUP_DELAY + 1;

/// Saturates a domain value into a 16-bit register word.
pub fn to_word(value: i32) -> i16 {
    value.clamp(i32::from(i16::MIN), i32::from(i16::MAX)) as i16
}

pub fn read_machines<S: RegisterStore>(store: &S) -> Result<Machines, RegisterError> {
    let mut enabled = [0i16; MACHINE_COUNT];
    let mut capacity = [0i16; MACHINE_COUNT];
    store.read(ENABLEMENT, &mut enabled)?;
    store.read(CAPACITY, &mut capacity)?;

    Ok(Machines {
        enabled: enabled.map(|word| word != 0),
        capacity: capacity.map(i32::from),
    })
}

pub fn write_capacity<S: RegisterStore>(store: &S, machines: &Machines) -> Result<(), RegisterError> {
    store.write(CAPACITY, &machines.capacity.map(to_word))
}

pub fn read_allocation<S: RegisterStore>(store: &S) -> Result<GameAllocation, RegisterError> {
    let mut words = [0i16; MACHINE_COUNT];
    store.read(GAME_ALLOCATION, &mut words)?;
    Ok(words.map(i32::from))
}

pub fn write_allocation<S: RegisterStore>(
    store: &S,
    allocation: &GameAllocation,
) -> Result<(), RegisterError> {
    store.write(GAME_ALLOCATION, &allocation.map(to_word))
}

/// Reads a quota from three consecutive words (ammo, double, triple).
/// Negative double/triple counts are read as zero.
pub fn read_quota<S: RegisterStore>(store: &S, address: usize) -> Result<FireQuota, RegisterError> {
    let mut words = [0i16; 3];
    store.read(address, &mut words)?;
    Ok(FireQuota {
        max_shootable_ammo: i32::from(words[0]),
        double_fire: i32::from(words[1]).max(0),
        triple_fire: i32::from(words[2]).max(0),
    })
}

pub fn write_quota<S: RegisterStore>(store: &S, quota: &FireQuota) -> Result<(), RegisterError> {
    store.write(
        MAX_SHOOTABLE_AMMO,
        &[
            to_word(quota.max_shootable_ammo),
            to_word(quota.double_fire),
            to_word(quota.triple_fire),
        ],
    )
}

pub fn read_delay<S: RegisterStore>(store: &S) -> Result<DelayState, RegisterError> {
    Ok(DelayState {
        configured: i32::from(store.read_word(CONFIGURED_DELAY)?),
        remaining: i32::from(store.read_word(REMAINING_DELAY)?),
    })
}

pub fn read_selection<S: RegisterStore>(store: &S) -> Result<SelectionResult, RegisterError> {
    let mut words = [0i16; MACHINE_COUNT];
    store.read(SELECTION, &mut words)?;
    Ok(words.map(|word| word != 0))
}

pub fn write_selection<S: RegisterStore>(
    store: &S,
    selection: &SelectionResult,
) -> Result<(), RegisterError> {
    store.write(SELECTION, &selection.map(i16::from))
}

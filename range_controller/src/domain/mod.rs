// Domain layer: range entities, ports and firing rules.

pub mod errors;
pub mod ports;
pub mod state;
pub mod systems;
pub mod tuning;

pub use errors::{ConfigError, ErrorCode, RegisterError};
pub use ports::{Clock, RandomSeeder, RandomSource, RegisterStore};
pub use state::{
    DelayState, FireMode, FireQuota, GameAllocation, MACHINE_COUNT, Machines, RangeState,
    SelectionResult,
};

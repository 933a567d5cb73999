// Range rules: ammo allocation, delay gating, mode and machine selection.

pub mod allocation;
pub mod delay;
pub mod firing;
pub mod mode;

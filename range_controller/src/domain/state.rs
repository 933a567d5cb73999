// Domain-level range entities: machines, per-game allocation, quota and delay.

/// Number of physical machines on the range. Index is machine identity.
pub const MACHINE_COUNT: usize = 10;

/// Ammo earmarked for the current game, per machine.
pub type GameAllocation = [i32; MACHINE_COUNT];

/// Which machines fired during the current cycle.
pub type SelectionResult = [bool; MACHINE_COUNT];

/// Operator-controlled enablement plus the overall ammo each machine holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Machines {
    pub enabled: [bool; MACHINE_COUNT],
    // Overall remaining ammo, independent of any single game.
    pub capacity: [i32; MACHINE_COUNT],
}

impl Machines {
    /// A machine takes part in allocation only when it is enabled and still holds ammo.
    pub fn is_eligible(&self, index: usize) -> bool {
        self.enabled[index] && self.capacity[index] > 0
    }

    pub fn eligible_count(&self) -> usize {
        (0..MACHINE_COUNT).filter(|&i| self.is_eligible(i)).count()
    }
}

/// Remaining fireable units and the simultaneous-fire events still owed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FireQuota {
    pub max_shootable_ammo: i32,
    pub double_fire: i32,
    pub triple_fire: i32,
}

impl FireQuota {
    /// Units left for single fires once every pending double/triple fire is honored.
    pub fn simple_fire(&self) -> i32 {
        self.max_shootable_ammo - 2 * self.double_fire - 3 * self.triple_fire
    }

    pub fn is_exhausted(&self) -> bool {
        self.max_shootable_ammo <= 0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DelayState {
    pub configured: i32,
    // Cycles left until the next fire-permitted cycle.
    pub remaining: i32,
}

/// Number of machines firing together in one cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FireMode {
    Single,
    Double,
    Triple,
}

impl FireMode {
    pub fn units(self) -> usize {
        match self {
            FireMode::Single => 1,
            FireMode::Double => 2,
            FireMode::Triple => 3,
        }
    }
}

/// Everything a fire touches: machines, the game allocation and the quota.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RangeState {
    pub machines: Machines,
    pub allocation: GameAllocation,
    pub quota: FireQuota,
}

pub fn allocation_total(allocation: &GameAllocation) -> i32 {
    allocation.iter().sum()
}

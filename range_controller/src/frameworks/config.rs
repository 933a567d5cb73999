use crate::domain::{ConfigError, FireQuota, MACHINE_COUNT, Machines};
use serde::Deserialize;
use std::{env, path::Path, time::Duration};

// Runtime/host constants (not firing tuning).

pub fn range_config_path() -> String {
    env::var("RANGE_CONFIG").unwrap_or_else(|_| "range.toml".to_string())
}

pub fn scan_interval() -> Duration {
    let millis = env::var("SCAN_INTERVAL_MS")
        .ok()
        .and_then(|value| value.parse::<u64>().ok())
        .unwrap_or(100);
    Duration::from_millis(millis)
}

// 0 keeps scanning until the game ends or the process is interrupted.
pub fn max_scan_cycles() -> u64 {
    env::var("MAX_SCAN_CYCLES")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(10_000)
}

/// Operator-facing description of the range: which machines exist and the game request.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct RangeConfig {
    pub machines: Vec<MachineConfig>,
    pub game: GameConfig,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct MachineConfig {
    pub enabled: bool,
    pub capacity: i16,
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq)]
#[serde(default)]
pub struct GameConfig {
    pub max_shootable_ammo: i16,
    pub double_fire: i16,
    pub triple_fire: i16,
    pub delay: i16,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_shootable_ammo: 0,
            double_fire: 0,
            triple_fire: 0,
            delay: 4,
        }
    }
}

impl RangeConfig {
    /// Machines beyond the listed entries are disabled and empty.
    pub fn machines(&self) -> Machines {
        let mut machines = Machines::default();
        for (index, machine) in self.machines.iter().take(MACHINE_COUNT).enumerate() {
            machines.enabled[index] = machine.enabled;
            machines.capacity[index] = i32::from(machine.capacity);
        }
        machines
    }

    pub fn request(&self) -> FireQuota {
        FireQuota {
            max_shootable_ammo: i32::from(self.game.max_shootable_ammo),
            double_fire: i32::from(self.game.double_fire),
            triple_fire: i32::from(self.game.triple_fire),
        }
    }
}

pub fn parse_range_config(raw: &str) -> Result<RangeConfig, ConfigError> {
    let config: RangeConfig = toml::from_str(raw)?;
    if config.machines.len() > MACHINE_COUNT {
        return Err(ConfigError::TooManyMachines {
            count: config.machines.len(),
            max: MACHINE_COUNT,
        });
    }
    Ok(config)
}

pub fn load_range_config(path: impl AsRef<Path>) -> Result<RangeConfig, ConfigError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.display().to_string(),
        source,
    })?;
    parse_range_config(&raw)
}

use thiserror::Error;

// Setup status reported to the operator through the error register.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorCode {
    #[default]
    None,
    InfeasibleFireQuota,
    UnevenDistribution,
    InsufficientAmmoOrMachines,
}

impl ErrorCode {
    /// Stable numeric value written to the error register.
    pub fn code(self) -> i16 {
        match self {
            ErrorCode::None => 0,
            ErrorCode::InfeasibleFireQuota => 1,
            ErrorCode::UnevenDistribution => 2,
            ErrorCode::InsufficientAmmoOrMachines => 3,
        }
    }

    pub fn from_code(code: i16) -> Option<Self> {
        match code {
            0 => Some(ErrorCode::None),
            1 => Some(ErrorCode::InfeasibleFireQuota),
            2 => Some(ErrorCode::UnevenDistribution),
            3 => Some(ErrorCode::InsufficientAmmoOrMachines),
            _ => None,
        }
    }

    fn severity(self) -> u8 {
        match self {
            ErrorCode::None => 0,
            ErrorCode::UnevenDistribution => 1,
            ErrorCode::InfeasibleFireQuota => 2,
            ErrorCode::InsufficientAmmoOrMachines => 3,
        }
    }

    /// Keeps the worse of the two conditions.
    pub fn escalate(self, other: ErrorCode) -> ErrorCode {
        if other.severity() > self.severity() {
            other
        } else {
            self
        }
    }
}

// Infrastructure failures at the register boundary.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RegisterError {
    #[error("register range {address}..{end} is outside the {size}-word store")]
    OutOfRange {
        address: usize,
        end: usize,
        size: usize,
    },
    #[error("register store lock poisoned")]
    Poisoned,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read range config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse range config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("range config lists {count} machines, at most {max} are supported")]
    TooManyMachines { count: usize, max: usize },
}

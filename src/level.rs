use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::{fmt, str};

/// Logging levels, in ascending order of priority.
///
/// - `Debug`: temporary calls added while debugging, removed before release.
/// - `Trace`: the flow of logic through some code.
/// - `Info`: interesting but non-critical, user-facing information.
/// - `Warn`: recoverable but undesirable state.
/// - `Error`: an irrecoverable fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug = 0,
    Trace = 1,
    Info = 2,
    Warn = 3,
    Error = 4,
}

impl LogLevel {
    pub const COUNT: usize = 5;

    /// Every level, indexed by rank.
    pub const ALL: [LogLevel; Self::COUNT] = [
        LogLevel::Debug,
        LogLevel::Trace,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
    ];

    pub const fn rank(self) -> usize {
        self as usize
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

/// Whether `fst` is of strictly lower priority than `snd`.
pub fn log_lt(fst: LogLevel, snd: LogLevel) -> bool {
    fst.rank() < snd.rank()
}

/// Whether `fst` is of lower or equal priority as `snd`.
pub fn log_lte(fst: LogLevel, snd: LogLevel) -> bool {
    fst.rank() <= snd.rank()
}

/// Whether `fst` is of strictly greater priority than `snd`.
pub fn log_gt(fst: LogLevel, snd: LogLevel) -> bool {
    fst.rank() > snd.rank()
}

/// Whether `fst` is of greater or equal priority as `snd`.
pub fn log_gte(fst: LogLevel, snd: LogLevel) -> bool {
    fst.rank() >= snd.rank()
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl str::FromStr for LogLevel {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let tag = s.trim();
        LogLevel::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(tag))
            .ok_or_else(|| {
                anyhow!("Unknown log level '{s}', expected one of debug, trace, info, warn, error")
            })
    }
}

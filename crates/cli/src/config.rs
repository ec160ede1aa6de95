//! Runtime configuration from the environment.

use anyhow::Context;
use katas_core::FixedClock;

use crate::commands::InputArgs;

/// Pins the invoice clock, `YYYY-MM-DD`.
pub const FIXED_DATE_VAR: &str = "KATAS_FIXED_DATE";

#[derive(Debug, Clone)]
pub struct Config {
    /// `None` means wall-clock time.
    pub fixed_date: Option<FixedClock>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let fixed_date = match std::env::var(FIXED_DATE_VAR) {
            Ok(raw) if !raw.trim().is_empty() => Some(
                FixedClock::parse_date(&raw).with_context(|| format!("{FIXED_DATE_VAR}={raw}"))?,
            ),
            _ => None,
        };
        Ok(Self { fixed_date })
    }

    /// Command-line flags win over the environment.
    pub fn with_overrides(&self, input: &InputArgs) -> Self {
        Self {
            fixed_date: input.date.or(self.fixed_date),
        }
    }
}

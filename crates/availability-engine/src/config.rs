//! Slot policy: grid granularity, horizon length, and closed weekdays.
//!
//! The defaults are the production rules: a 30-minute grid, a 7-day window,
//! and no recurring availability on Sundays. A policy can be loaded from TOML:
//!
//! ```toml
//! slot_minutes = 30
//! horizon_days = 7
//! recurring_closed_days = ["Sun"]
//! ```

use std::path::Path;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::error::{AvailabilityError, Result};
use crate::window::{DEFAULT_HORIZON_DAYS, MAX_HORIZON_DAYS};

/// Minutes in a civil day; the largest usable slot size.
const MINUTES_PER_DAY: u32 = 24 * 60;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlotPolicy {
    /// Step between consecutive slot labels.
    pub slot_minutes: u32,
    /// Number of consecutive days in the availability window.
    pub horizon_days: u32,
    /// Weekdays on which weekly-recurring openings never produce slots.
    /// One-off openings are not affected.
    pub recurring_closed_days: Vec<Weekday>,
}

impl Default for SlotPolicy {
    fn default() -> Self {
        Self {
            slot_minutes: 30,
            horizon_days: DEFAULT_HORIZON_DAYS,
            recurring_closed_days: vec![Weekday::Sun],
        }
    }
}

impl SlotPolicy {
    /// Parse and validate a policy from TOML text. Missing keys take defaults.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let policy: SlotPolicy =
            toml::from_str(content).map_err(|e| AvailabilityError::Config(e.to_string()))?;
        policy.validate()?;
        Ok(policy)
    }

    /// Read, parse and validate a policy file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        tracing::debug!(path = %path.as_ref().display(), "loading slot policy");
        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        if self.slot_minutes == 0 || self.slot_minutes > MINUTES_PER_DAY {
            return Err(AvailabilityError::Config(format!(
                "slot_minutes must be between 1 and {}, got {}",
                MINUTES_PER_DAY, self.slot_minutes
            )));
        }
        if self.horizon_days == 0 || self.horizon_days > MAX_HORIZON_DAYS {
            return Err(AvailabilityError::Config(format!(
                "horizon_days must be between 1 and {}, got {}",
                MAX_HORIZON_DAYS, self.horizon_days
            )));
        }
        Ok(())
    }

    /// Whether recurring openings are suppressed on `weekday`.
    pub fn is_closed_for_recurring(&self, weekday: Weekday) -> bool {
        self.recurring_closed_days.contains(&weekday)
    }
}

//! Simulation configuration: environment variables with code defaults.

use chrono::{FixedOffset, Offset, Utc};
use std::path::PathBuf;

use brewsim_core::Cents;

use crate::hours::BusinessHours;

/// All tunables for the simulator, seeded from `BREWSIM_*` environment
/// variables where set.
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    /// SQLite database file.
    pub db_path: String,
    /// Append-only reorder event log.
    pub reorder_log_path: PathBuf,
    /// Opening hour, local time (inclusive).
    pub open_hour: u32,
    /// Closing hour, local time (exclusive).
    pub close_hour: u32,
    /// Fixed shop timezone as hours east of UTC (no DST handling).
    pub utc_offset_hours: i32,
    /// Probability that an interactive tick produces a sale while open.
    pub tick_chance: f64,
    /// Probability that an order has no customer attached.
    pub walk_in_chance: f64,
    /// Level every reordered stock row is replenished to.
    pub restock_target: f64,
    /// Unit cost used when no menu item matches a stock row.
    pub default_unit_cost_cents: Cents,
    /// Pause range between standalone-loop sales, in seconds.
    pub min_pause_secs: u64,
    pub max_pause_secs: u64,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            db_path: "coffee_shop.db".to_string(),
            reorder_log_path: PathBuf::from("reorder_log.txt"),
            open_hour: 7,
            close_hour: 19,
            utc_offset_hours: -5,
            tick_chance: 0.3,
            walk_in_chance: 0.2,
            restock_target: 20.0,
            default_unit_cost_cents: 200,
            min_pause_secs: 10,
            max_pause_secs: 30,
        }
    }
}

impl SimConfig {
    /// Read configuration from the environment, falling back to defaults
    /// for anything unset or unparsable.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            db_path: env_or("BREWSIM_DB", defaults.db_path),
            reorder_log_path: PathBuf::from(env_or(
                "BREWSIM_REORDER_LOG",
                defaults.reorder_log_path.display().to_string(),
            )),
            open_hour: env_parsed("BREWSIM_OPEN_HOUR", defaults.open_hour),
            close_hour: env_parsed("BREWSIM_CLOSE_HOUR", defaults.close_hour),
            utc_offset_hours: env_parsed("BREWSIM_UTC_OFFSET_HOURS", defaults.utc_offset_hours),
            tick_chance: env_parsed("BREWSIM_TICK_CHANCE", defaults.tick_chance).clamp(0.0, 1.0),
            ..defaults
        }
    }

    pub fn offset(&self) -> FixedOffset {
        FixedOffset::east_opt(self.utc_offset_hours * 3600).unwrap_or_else(|| Utc.fix())
    }

    pub fn hours(&self) -> BusinessHours {
        BusinessHours::new(self.open_hour, self.close_hour, self.offset())
    }
}

fn env_or(key: &str, default: String) -> String {
    std::env::var(key).unwrap_or(default)
}

fn env_parsed<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_shop_constants() {
        let cfg = SimConfig::default();
        assert_eq!(cfg.open_hour, 7);
        assert_eq!(cfg.close_hour, 19);
        assert_eq!(cfg.restock_target, 20.0);
        assert_eq!(cfg.default_unit_cost_cents, 200);
    }

    #[test]
    fn offset_falls_back_to_utc_when_out_of_range() {
        let cfg = SimConfig {
            utc_offset_hours: 99,
            ..SimConfig::default()
        };
        assert_eq!(cfg.offset().local_minus_utc(), 0);
    }
}

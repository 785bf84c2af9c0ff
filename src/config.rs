use anyhow::anyhow;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;

/// Default calendar policy for Saturdays without an administrative override.
///
/// Observed deployments disagree on the default; the engine makes the policy
/// explicit instead of hard-coding one branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SaturdayPolicy {
    /// A Saturday with no override is non-working. This is the default.
    HolidayUnlessMarkedWorking,
    /// A Saturday with no override is a normal working day.
    WorkingUnlessMarkedHoliday,
}

impl Default for SaturdayPolicy {
    fn default() -> Self {
        SaturdayPolicy::HolidayUnlessMarkedWorking
    }
}

impl FromStr for SaturdayPolicy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "holiday_unless_marked_working" | "holiday" => {
                Ok(SaturdayPolicy::HolidayUnlessMarkedWorking)
            }
            "working_unless_marked_holiday" | "working" => {
                Ok(SaturdayPolicy::WorkingUnlessMarkedHoliday)
            }
            _ => Err(()),
        }
    }
}

/// What validation does when the calendar store cannot be read at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Block the request with an "unable to validate" error. Default.
    FailClosed,
    /// Let the request through with an explicit warning.
    FailOpen,
}

impl Default for FailurePolicy {
    fn default() -> Self {
        FailurePolicy::FailClosed
    }
}

impl FromStr for FailurePolicy {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fail_closed" | "closed" => Ok(FailurePolicy::FailClosed),
            "fail_open" | "open" => Ok(FailurePolicy::FailOpen),
            _ => Err(()),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    pub time_zone: Tz,
    pub cache_ttl_hours: u64,
    pub saturday_policy: SaturdayPolicy,
    pub failure_policy: FailurePolicy,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            time_zone: chrono_tz::UTC,
            cache_ttl_hours: 24,
            saturday_policy: SaturdayPolicy::default(),
            failure_policy: FailurePolicy::default(),
        }
    }
}

impl EngineConfig {
    pub fn load() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let time_zone_name = env::var("APP_TIMEZONE").unwrap_or_else(|_| "UTC".to_string());
        let time_zone: Tz = time_zone_name
            .parse()
            .map_err(|_| anyhow!("Invalid APP_TIMEZONE value: {}", time_zone_name))?;

        let cache_ttl_hours = env::var("CALENDAR_CACHE_TTL_HOURS")
            .unwrap_or_else(|_| "24".to_string())
            .parse()
            .unwrap_or(24);

        let saturday_policy = env::var("SATURDAY_POLICY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_default();

        let failure_policy = env::var("CALENDAR_FAILURE_POLICY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or_default();

        Ok(EngineConfig {
            time_zone,
            cache_ttl_hours,
            saturday_policy,
            failure_policy,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn saturday_policy_parses_both_spellings() {
        assert_eq!(
            "holiday_unless_marked_working".parse::<SaturdayPolicy>(),
            Ok(SaturdayPolicy::HolidayUnlessMarkedWorking)
        );
        assert_eq!(
            "working".parse::<SaturdayPolicy>(),
            Ok(SaturdayPolicy::WorkingUnlessMarkedHoliday)
        );
        assert!("weekend".parse::<SaturdayPolicy>().is_err());
    }

    #[test]
    fn failure_policy_parses() {
        assert_eq!(
            "fail_open".parse::<FailurePolicy>(),
            Ok(FailurePolicy::FailOpen)
        );
        assert_eq!("closed".parse::<FailurePolicy>(), Ok(FailurePolicy::FailClosed));
        assert!("explode".parse::<FailurePolicy>().is_err());
    }

    #[test]
    fn default_config_is_conservative() {
        let config = EngineConfig::default();
        assert_eq!(config.cache_ttl_hours, 24);
        assert_eq!(
            config.saturday_policy,
            SaturdayPolicy::HolidayUnlessMarkedWorking
        );
        assert_eq!(config.failure_policy, FailurePolicy::FailClosed);
        assert_eq!(config.time_zone, chrono_tz::UTC);
    }
}

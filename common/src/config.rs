use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

use crate::time::TimeFormat;

pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(1_000);
pub const DEFAULT_NOTIFICATION_TIMEOUT: Duration = Duration::from_millis(5_000);

/// Timing and display settings for the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardConfig {
    /// How long the simulated backend takes to accept a report.
    pub submit_delay: Duration,
    /// How long a banner stays on screen.
    pub notification_timeout: Duration,
    pub time_format: TimeFormat,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            submit_delay: DEFAULT_SUBMIT_DELAY,
            notification_timeout: DEFAULT_NOTIFICATION_TIMEOUT,
            time_format: TimeFormat::default(),
        }
    }
}

impl BoardConfig {
    /// Defaults with optional overrides, as read from build-time variables.
    /// Unparseable values are logged and ignored.
    pub fn with_overrides(
        submit_delay_ms: Option<&str>,
        notification_timeout_ms: Option<&str>,
        time_format: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            submit_delay: try_parse("submit delay", submit_delay_ms)
                .map(Duration::from_millis)
                .unwrap_or(defaults.submit_delay),
            notification_timeout: try_parse("notification timeout", notification_timeout_ms)
                .map(Duration::from_millis)
                .unwrap_or(defaults.notification_timeout),
            time_format: try_parse("time format", time_format).unwrap_or(defaults.time_format),
        }
    }
}

fn try_parse<T: FromStr>(name: &str, raw: Option<&str>) -> Option<T>
where
    T::Err: Display,
{
    let raw = raw.map(str::trim).filter(|s| !s.is_empty())?;
    raw.parse()
        .map_err(|e| {
            tracing::warn!("Invalid {name} value {raw:?}: {e}, using default");
        })
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BoardConfig::default();
        assert_eq!(config.submit_delay, Duration::from_secs(1));
        assert_eq!(config.notification_timeout, Duration::from_secs(5));
        assert_eq!(config.time_format, TimeFormat::TwelveHour);
    }

    #[test]
    fn test_overrides_apply() {
        let config = BoardConfig::with_overrides(Some("0"), Some("2500"), Some("24h"));
        assert_eq!(config.submit_delay, Duration::ZERO);
        assert_eq!(config.notification_timeout, Duration::from_millis(2500));
        assert_eq!(config.time_format, TimeFormat::TwentyFourHour);
    }

    #[test]
    fn test_bad_or_missing_overrides_fall_back() {
        let config = BoardConfig::with_overrides(Some("soon"), Some(""), None);
        assert_eq!(config, BoardConfig::default());
    }
}

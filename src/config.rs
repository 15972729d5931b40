use crate::telemetry::LogLevel;

const DEFAULT_TYPING_SPEED_MS: u32 = 150;
const DEFAULT_TYPING_PAUSE_MS: u32 = 2_000;
const DEFAULT_COUNT_UP_DURATION_MS: u32 = 2_000;
const DEFAULT_COUNT_UP_VISIBILITY: f64 = 0.5;
const DEFAULT_SKILLS_THRESHOLD: usize = 8;
const DEFAULT_SCROLL_LOOKAHEAD_PX: u32 = 100;
const DEFAULT_NAV_ELEVATION_PX: u32 = 50;
const DEFAULT_RESUME_CLEANUP_MS: u32 = 100;
const DEFAULT_LOG_LEVEL: LogLevel = LogLevel::Info;

const TYPING_SPEED_MS_BOUNDS: (u32, u32) = (20, 2_000);
const TYPING_PAUSE_MS_BOUNDS: (u32, u32) = (0, 10_000);
const COUNT_UP_DURATION_MS_BOUNDS: (u32, u32) = (0, 10_000);
const SKILLS_THRESHOLD_BOUNDS: (u32, u32) = (1, 64);
const SCROLL_LOOKAHEAD_PX_BOUNDS: (u32, u32) = (0, 1_000);

/// Tunables shared by every section of the page.
///
/// Defaults reproduce the shipped site. Overrides are baked in at build time
/// (`PORTFOLIO_*` variables seen by `trunk build`) because a static wasm
/// bundle has no process environment to read at runtime.
#[derive(Clone, Debug, PartialEq)]
pub struct PageConfig {
    pub typing_speed_ms: u32,
    pub typing_pause_ms: u32,
    pub count_up_duration_ms: u32,
    /// Fraction of a stat card that must be visible before it counts up.
    pub count_up_visibility: f64,
    pub skills_threshold: usize,
    pub scroll_lookahead_px: u32,
    pub nav_elevation_px: u32,
    pub resume_cleanup_ms: u32,
    pub log_level: LogLevel,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            typing_speed_ms: DEFAULT_TYPING_SPEED_MS,
            typing_pause_ms: DEFAULT_TYPING_PAUSE_MS,
            count_up_duration_ms: DEFAULT_COUNT_UP_DURATION_MS,
            count_up_visibility: DEFAULT_COUNT_UP_VISIBILITY,
            skills_threshold: DEFAULT_SKILLS_THRESHOLD,
            scroll_lookahead_px: DEFAULT_SCROLL_LOOKAHEAD_PX,
            nav_elevation_px: DEFAULT_NAV_ELEVATION_PX,
            resume_cleanup_ms: DEFAULT_RESUME_CLEANUP_MS,
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl PageConfig {
    pub fn from_build_env() -> Self {
        Self::from_values(BuildOverrides {
            typing_speed_ms: option_env!("PORTFOLIO_TYPING_SPEED_MS"),
            typing_pause_ms: option_env!("PORTFOLIO_TYPING_PAUSE_MS"),
            count_up_duration_ms: option_env!("PORTFOLIO_COUNT_UP_DURATION_MS"),
            skills_threshold: option_env!("PORTFOLIO_SKILLS_THRESHOLD"),
            scroll_lookahead_px: option_env!("PORTFOLIO_SCROLL_LOOKAHEAD_PX"),
            log_level: option_env!("PORTFOLIO_LOG_LEVEL"),
        })
    }

    fn from_values(overrides: BuildOverrides<'_>) -> Self {
        let typing_speed_ms = parse_u32_with_bounds(
            overrides.typing_speed_ms,
            DEFAULT_TYPING_SPEED_MS,
            TYPING_SPEED_MS_BOUNDS,
        );
        let typing_pause_ms = parse_u32_with_bounds(
            overrides.typing_pause_ms,
            DEFAULT_TYPING_PAUSE_MS,
            TYPING_PAUSE_MS_BOUNDS,
        );
        let count_up_duration_ms = parse_u32_with_bounds(
            overrides.count_up_duration_ms,
            DEFAULT_COUNT_UP_DURATION_MS,
            COUNT_UP_DURATION_MS_BOUNDS,
        );
        let skills_threshold = parse_u32_with_bounds(
            overrides.skills_threshold,
            DEFAULT_SKILLS_THRESHOLD as u32,
            SKILLS_THRESHOLD_BOUNDS,
        ) as usize;
        let scroll_lookahead_px = parse_u32_with_bounds(
            overrides.scroll_lookahead_px,
            DEFAULT_SCROLL_LOOKAHEAD_PX,
            SCROLL_LOOKAHEAD_PX_BOUNDS,
        );
        let log_level = parse_log_level(overrides.log_level, DEFAULT_LOG_LEVEL);

        Self {
            typing_speed_ms,
            typing_pause_ms,
            count_up_duration_ms,
            skills_threshold,
            scroll_lookahead_px,
            log_level,
            ..Self::default()
        }
    }
}

#[derive(Default)]
struct BuildOverrides<'a> {
    typing_speed_ms: Option<&'a str>,
    typing_pause_ms: Option<&'a str>,
    count_up_duration_ms: Option<&'a str>,
    skills_threshold: Option<&'a str>,
    scroll_lookahead_px: Option<&'a str>,
    log_level: Option<&'a str>,
}

fn parse_u32_with_bounds(value: Option<&str>, default: u32, bounds: (u32, u32)) -> u32 {
    value
        .and_then(|value| value.trim().parse::<u32>().ok())
        .filter(|value| (bounds.0..=bounds.1).contains(value))
        .unwrap_or(default)
}

fn parse_log_level(value: Option<&str>, default: LogLevel) -> LogLevel {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .and_then(|value| LogLevel::from_str(&value.to_ascii_lowercase()))
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_shipped_site() {
        let config = PageConfig::from_values(BuildOverrides::default());

        assert_eq!(config, PageConfig::default());
        assert_eq!(config.typing_speed_ms, 150);
        assert_eq!(config.typing_pause_ms, 2_000);
        assert_eq!(config.skills_threshold, 8);
        assert_eq!(config.scroll_lookahead_px, 100);
    }

    #[test]
    fn in_bounds_overrides_are_applied() {
        let config = PageConfig::from_values(BuildOverrides {
            typing_speed_ms: Some(" 90 "),
            skills_threshold: Some("12"),
            log_level: Some("DEBUG"),
            ..BuildOverrides::default()
        });

        assert_eq!(config.typing_speed_ms, 90);
        assert_eq!(config.skills_threshold, 12);
        assert_eq!(config.log_level, LogLevel::Debug);
    }

    #[test]
    fn invalid_overrides_fall_back_to_defaults() {
        let config = PageConfig::from_values(BuildOverrides {
            typing_speed_ms: Some("5"),
            typing_pause_ms: Some("soon"),
            skills_threshold: Some("0"),
            scroll_lookahead_px: Some("-1"),
            log_level: Some("verbose"),
            ..BuildOverrides::default()
        });

        assert_eq!(config, PageConfig::default());
    }

    #[test]
    fn bounds_are_inclusive() {
        assert_eq!(parse_u32_with_bounds(Some("20"), 150, TYPING_SPEED_MS_BOUNDS), 20);
        assert_eq!(parse_u32_with_bounds(Some("2000"), 150, TYPING_SPEED_MS_BOUNDS), 2_000);
        assert_eq!(parse_u32_with_bounds(Some("2001"), 150, TYPING_SPEED_MS_BOUNDS), 150);
    }
}

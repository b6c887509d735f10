use std::env;

use axum::http::HeaderValue;
use eyre::WrapErr;
use jiff::tz::TimeZone;

pub const DEFAULT_TIME_ZONE: &str = "UTC";
pub const DEFAULT_MAX_CASELOAD: usize = 2000;

/// Service settings, read once at start-up.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Zone used for calendar days when a request names none.
    pub time_zone: TimeZone,
    pub time_zone_name: String,
    /// Requests with more clients than this are rejected.
    pub max_caseload: usize,
    /// CORS origin; `None` allows any.
    pub allowed_origin: Option<HeaderValue>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            time_zone: TimeZone::UTC,
            time_zone_name: DEFAULT_TIME_ZONE.to_string(),
            max_caseload: DEFAULT_MAX_CASELOAD,
            allowed_origin: None,
        }
    }
}

impl ServiceConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key/value source. Unset keys take their defaults;
    /// set but invalid values are errors.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let mut config = Self::default();

        if let Some(name) = lookup("TEND_TIME_ZONE") {
            config.time_zone = TimeZone::get(&name)
                .wrap_err_with(|| format!("TEND_TIME_ZONE: unknown time zone {name:?}"))?;
            config.time_zone_name = name;
        }

        if let Some(raw) = lookup("TEND_MAX_CASELOAD") {
            let max: usize = raw
                .parse()
                .wrap_err_with(|| format!("TEND_MAX_CASELOAD: not a number: {raw:?}"))?;
            if max == 0 {
                eyre::bail!("TEND_MAX_CASELOAD must be at least 1");
            }
            config.max_caseload = max;
        }

        if let Some(origin) = lookup("TEND_ALLOWED_ORIGIN")
            && origin != "*"
        {
            let value = HeaderValue::from_str(&origin)
                .wrap_err_with(|| format!("TEND_ALLOWED_ORIGIN: invalid origin {origin:?}"))?;
            config.allowed_origin = Some(value);
        }

        Ok(config)
    }
}

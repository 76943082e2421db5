// Run configuration. Built once at startup (see `cli`) and passed into the
// pipeline so nothing below `main` reads the environment.

use std::fmt;

pub const DEFAULT_ENDPOINT: &str = "https://api.github.com/graphql";
pub const DEFAULT_YEAR: i32 = 2023;

#[derive(Clone)]
pub struct Config {
    /// Login whose calendar is fetched. May be empty; it is sent as is.
    pub username: String,
    /// Personal access token sent as a bearer credential.
    pub token: String,
    pub year: i32,
    pub endpoint: String,
    /// Style the chart with ANSI colors.
    pub color: bool,
}

impl Config {
    pub fn range(&self) -> CalendarRange {
        CalendarRange::year(self.year)
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            username: String::new(),
            token: String::new(),
            year: DEFAULT_YEAR,
            endpoint: DEFAULT_ENDPOINT.into(),
            color: false,
        }
    }
}

// Keeps the token out of debug logs.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let token = if self.token.is_empty() { "<unset>" } else { "<redacted>" };
        f.debug_struct("Config")
            .field("username", &self.username)
            .field("token", &token)
            .field("year", &self.year)
            .field("endpoint", &self.endpoint)
            .field("color", &self.color)
            .finish()
    }
}

/// Inclusive UTC instants bounding the contributions query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarRange {
    pub from: String,
    pub to: String,
}

impl CalendarRange {
    /// Whole calendar year, January 1st 00:00:00 to December 31st 23:59:59.
    pub fn year(year: i32) -> Self {
        CalendarRange {
            from: format!("{year:04}-01-01T00:00:00Z"),
            to: format!("{year:04}-12-31T23:59:59Z"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn year_range_covers_calendar_year() {
        let range = CalendarRange::year(2023);
        assert_eq!(range.from, "2023-01-01T00:00:00Z");
        assert_eq!(range.to, "2023-12-31T23:59:59Z");
    }

    #[test]
    fn debug_hides_token() {
        let cfg = Config {
            token: "ghp_secret".into(),
            ..Config::default()
        };
        let shown = format!("{:?}", cfg);
        assert!(!shown.contains("ghp_secret"));
        assert!(shown.contains("<redacted>"));
    }
}

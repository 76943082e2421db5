// Command-line surface. Every flag falls back to an environment variable so
// the tool also runs with nothing but `GITHUB_USERNAME` and `GITHUB_TOKEN`
// exported, and a missing value is an empty string rather than an error.

use clap::Parser;
use std::ffi::OsStr;
use std::io::IsTerminal;

use crate::config::{Config, DEFAULT_ENDPOINT, DEFAULT_YEAR};

#[derive(Parser, Debug)]
#[command(name = "contrib-chart")]
#[command(about = "Print a year of GitHub contributions as a weekly bar chart.")]
pub struct Cli {
    /// GitHub login whose contributions are charted
    #[arg(short, long, env = "GITHUB_USERNAME", default_value = "")]
    pub user: String,

    /// Access token sent as a bearer credential
    #[arg(long, env = "GITHUB_TOKEN", default_value = "", hide_env_values = true, hide_default_value = true)]
    pub token: String,

    /// Calendar year to chart
    #[arg(short, long, env = "CONTRIB_YEAR", default_value_t = DEFAULT_YEAR)]
    pub year: i32,

    /// GraphQL endpoint
    #[arg(long, env = "GITHUB_GRAPHQL_URL", default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String,

    /// Print plain glyphs without ANSI colors
    #[arg(long)]
    pub no_color: bool,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

/// Color is used only on a terminal, and not when `NO_COLOR` is set to a
/// non-empty value or `TERM` is `dumb`.
pub fn color_enabled(is_terminal: bool, no_color: Option<&OsStr>, term: Option<&OsStr>) -> bool {
    let no_color = no_color.is_some_and(|v| !v.is_empty());
    let dumb = term.is_some_and(|t| t == "dumb");
    is_terminal && !no_color && !dumb
}

impl From<Cli> for Config {
    fn from(cli: Cli) -> Self {
        let color = !cli.no_color
            && color_enabled(
                std::io::stdout().is_terminal(),
                std::env::var_os("NO_COLOR").as_deref(),
                std::env::var_os("TERM").as_deref(),
            );
        Config {
            username: cli.user,
            token: cli.token,
            year: cli.year,
            endpoint: cli.endpoint,
            color,
        }
    }
}

// Pipeline: query -> request -> decode -> render, each stage run once and in
// order. The first error ends the run.

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::Write;
use std::time::Duration;
use tracing::{info, warn};

use crate::api::{ApiClient, GraphqlRequest};
use crate::chart;
use crate::config::Config;

/// Fetch the configured user's calendar and write the chart to `out`.
/// Returns the number of lines written.
pub fn run<W: Write>(config: &Config, out: &mut W) -> Result<usize> {
    if config.token.is_empty() {
        warn!("no access token configured; the API will likely refuse the request");
    }

    let api = ApiClient::new(&config.endpoint, &config.token)?;
    let request = GraphqlRequest::contributions(&config.username, &config.range());

    // Spinner is drawn on stderr and stays hidden when that is not a terminal.
    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}")?);
    spinner.set_message(format!("Fetching {} contributions for {}...", config.year, config.username));
    spinner.enable_steady_tick(Duration::from_millis(100));
    let response = api.fetch(&request);
    spinner.finish_and_clear();
    let response = response?;

    // An errors payload is reported but still rendered (as nothing).
    for err in &response.errors {
        warn!(message = %err.message, "GraphQL error");
    }

    let calendar = response.calendar();
    let lines = chart::render_calendar(&calendar, out, config.color)?;
    info!(weeks = calendar.weeks.len(), lines, "chart rendered");
    Ok(lines)
}

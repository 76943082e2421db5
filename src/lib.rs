// Library root
// -----------
// The binary (`main.rs`) parses the configuration and hands it to
// `app::run`; everything else lives here so it can be tested without a
// terminal or the real API.
//
// Module responsibilities:
// - `cli` / `config`: flags and environment turned into one `Config` value.
// - `api`: the contributions query and the blocking HTTP client.
// - `model`: records mirroring the GraphQL response.
// - `chart`: turning weeks into colored glyph lines.
// - `app`: the pipeline tying the stages together.
pub mod api;
pub mod app;
pub mod chart;
pub mod cli;
pub mod config;
pub mod model;

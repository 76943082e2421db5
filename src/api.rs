// API client module: builds the contributions query and sends it to the
// GraphQL endpoint with a small blocking HTTP client. One request per run,
// no retries.

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::CalendarRange;
use crate::model::GraphqlResponse;

/// Query document. The user and range are bound as variables rather than
/// spliced into the text, so a login containing quotes cannot break it.
pub const CONTRIBUTIONS_QUERY: &str = r#"query($login: String!, $from: DateTime!, $to: DateTime!) {
  user(login: $login) {
    contributionsCollection(from: $from, to: $to) {
      contributionCalendar {
        weeks {
          contributionDays {
            contributionCount
            date
          }
        }
      }
    }
  }
}"#;

/// Variables bound into `CONTRIBUTIONS_QUERY`.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct QueryVariables {
    pub login: String,
    pub from: String,
    pub to: String,
}

/// Request body posted to the endpoint: `{"query": ..., "variables": ...}`.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct GraphqlRequest {
    pub query: String,
    pub variables: QueryVariables,
}

impl GraphqlRequest {
    /// Contributions calendar request for `login` over `range`. The login is
    /// not validated; an empty or unknown one comes back as an empty result.
    pub fn contributions(login: &str, range: &CalendarRange) -> Self {
        GraphqlRequest {
            query: CONTRIBUTIONS_QUERY.to_string(),
            variables: QueryVariables {
                login: login.to_string(),
                from: range.from.clone(),
                to: range.to.clone(),
            },
        }
    }
}

/// Decode a raw response body. Only malformed JSON is an error; a payload
/// carrying `errors` instead of `data` decodes to an empty calendar.
pub fn decode_response(body: &[u8]) -> Result<GraphqlResponse> {
    serde_json::from_slice(body).context("Parsing GraphQL response json")
}

/// Blocking client holding the endpoint URL and the bearer token.
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    endpoint: String,
    token: String,
}

impl ApiClient {
    pub fn new(endpoint: &str, token: &str) -> Result<Self> {
        let client = Client::builder()
            // GitHub rejects requests without a user agent.
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .context("Failed to build HTTP client")?;
        Ok(ApiClient {
            client,
            endpoint: endpoint.to_string(),
            token: token.to_string(),
        })
    }

    fn auth_headers(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        let val = format!("bearer {}", self.token);
        let val = HeaderValue::from_str(&val).context("Token is not a valid header value")?;
        headers.insert(AUTHORIZATION, val);
        Ok(headers)
    }

    /// POST the request and decode the reply. The status code is logged but
    /// not acted on; whatever body comes back goes through the decoder.
    pub fn fetch(&self, request: &GraphqlRequest) -> Result<GraphqlResponse> {
        let body = serde_json::to_vec(request).context("Serializing GraphQL request")?;
        debug!(endpoint = %self.endpoint, login = %request.variables.login, "sending contributions query");

        let res = self.client.post(&self.endpoint)
            .headers(self.auth_headers()?)
            .body(body)
            .send()
            .context("Failed to send contributions request")?;

        let status = res.status();
        debug!(%status, "received response");
        if !status.is_success() {
            warn!(%status, "endpoint answered with a non-success status");
        }

        let bytes = res.bytes().context("Failed to read response body")?;
        decode_response(&bytes)
    }
}

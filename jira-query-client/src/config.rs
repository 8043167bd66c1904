//! Environment-backed configuration for the Jira client.
//!
//! Settings are resolved once at process start and stay immutable for the
//! process lifetime. The resolved struct is passed into the client
//! constructor rather than read from globals.

use anyhow::Result;

/// Environment variable storing the Jira host configuration.
pub const ENV_JIRA_HOST: &str = "JIRA_HOST";
/// Environment variable storing the Jira bearer token.
pub const ENV_JIRA_API_TOKEN: &str = "JIRA_API_TOKEN";
/// Environment variable overriding the Jira REST API version.
pub const ENV_JIRA_API_VERSION: &str = "JIRA_API_VERSION";
/// Environment variable holding an optional proxy URL.
pub const ENV_PROXY_AGENT: &str = "PROXY_AGENT";

const DEFAULT_API_VERSION: &str = "2";

/// Resolved Jira connection settings.
#[derive(Clone)]
pub struct JiraConfig {
  /// Base URL of the Jira host, scheme included, no trailing slash.
  pub host: String,
  /// Bearer token sent with every request.
  pub token: String,
  /// REST API version segment, e.g. "2".
  pub api_version: String,
  /// Optional proxy URL; scheme selects the transport.
  pub proxy_url: Option<String>,
}

impl JiraConfig {
  /// Resolve configuration from the environment.
  ///
  /// `JIRA_HOST` and `JIRA_API_TOKEN` are required; `JIRA_API_VERSION`
  /// defaults to "2" and `PROXY_AGENT` is optional.
  pub fn from_env() -> Result<Self> {
    let host = std::env::var(ENV_JIRA_HOST)
      .map_err(|_| anyhow::anyhow!("Jira host environment variable '{ENV_JIRA_HOST}' not set"))?;
    let token = std::env::var(ENV_JIRA_API_TOKEN)
      .map_err(|_| anyhow::anyhow!("Jira token environment variable '{ENV_JIRA_API_TOKEN}' not set"))?;
    let api_version =
      std::env::var(ENV_JIRA_API_VERSION).unwrap_or_else(|_| DEFAULT_API_VERSION.to_string());
    let proxy_url = std::env::var(ENV_PROXY_AGENT).ok().filter(|v| !v.trim().is_empty());

    Ok(Self {
      host: normalize_host(&host),
      token,
      api_version,
      proxy_url,
    })
  }
}

/// Normalize a configured host into a base URL.
///
/// If the host doesn't include a scheme (http:// or https://), assumes
/// https://. Trailing slashes are trimmed so URL joins stay stable.
fn normalize_host(host: &str) -> String {
  let trimmed = host.trim().trim_end_matches('/');
  if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
    trimmed.to_string()
  } else {
    format!("https://{trimmed}")
  }
}

use anyhow::{Context, Result};
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method, Proxy, RequestBuilder, Response};
use url::Url;

use crate::config::JiraConfig;

/// Represents a Jira API client
pub struct JiraClient {
  pub(crate) client: Client,
  pub(crate) config: JiraConfig,
}

impl JiraClient {
  /// Create a new Jira client from resolved configuration.
  ///
  /// Fails when the configured proxy URL carries an unsupported scheme; the
  /// client never starts with an ambiguous proxy configuration.
  pub fn new(config: JiraConfig) -> Result<Self> {
    let mut builder = Client::builder();
    if let Some(proxy_url) = config.proxy_url.as_deref() {
      builder = builder.proxy(select_proxy(proxy_url)?);
    }
    let client = builder.build().context("Failed to build HTTP client")?;

    Ok(Self { client, config })
  }

  /// Build the URL for a path under the versioned REST API root.
  pub(crate) fn api_url(&self, path: &str) -> String {
    format!("{}/rest/api/{}/{}", self.config.host, self.config.api_version, path)
  }

  /// Build an authenticated request for the given method and URL.
  pub(crate) fn request(&self, method: Method, url: &str) -> RequestBuilder {
    tracing::trace!(%method, %url, "Jira request");
    self
      .client
      .request(method, url)
      .bearer_auth(&self.config.token)
      .header(CONTENT_TYPE, "application/json")
  }

  pub(crate) fn get(&self, url: &str) -> RequestBuilder {
    self.request(Method::GET, url)
  }

  pub(crate) fn post(&self, url: &str) -> RequestBuilder {
    self.request(Method::POST, url)
  }
}

/// Create a Jira client from resolved configuration.
pub fn create_jira_client(config: JiraConfig) -> Result<JiraClient> {
  JiraClient::new(config)
}

/// Pass through a successful response, or convert a non-2xx response into an
/// error carrying the status code, status text, and response body.
///
/// Reading the body is best-effort: a failed read omits the detail instead of
/// masking the HTTP error.
pub(crate) async fn ensure_success(response: Response) -> Result<Response> {
  let status = response.status();
  if status.is_success() {
    return Ok(response);
  }

  let reason = status.canonical_reason().unwrap_or("Unknown Status");
  let detail = match response.text().await {
    Ok(text) if !text.is_empty() => format!(" - {text}"),
    _ => String::new(),
  };
  Err(anyhow::anyhow!("HTTP {}: {}{}", status.as_u16(), reason, detail))
}

/// Select the proxy transport from the proxy URL scheme.
///
/// SOCKS schemes use the SOCKS-capable transport; http/https schemes tunnel
/// over HTTP. Any other scheme is rejected before the client is built.
fn select_proxy(proxy_url: &str) -> Result<Proxy> {
  let url = Url::parse(proxy_url).with_context(|| format!("Invalid proxy URL: {proxy_url}"))?;

  match url.scheme() {
    scheme if scheme.starts_with("socks") => {
      tracing::debug!(%url, "using SOCKS proxy transport");
      Proxy::all(proxy_url).context("Failed to configure SOCKS proxy")
    }
    "http" | "https" => {
      tracing::debug!(%url, "using HTTP proxy transport");
      Proxy::all(proxy_url).context("Failed to configure HTTP proxy")
    }
    other => Err(anyhow::anyhow!("Unsupported proxy protocol: {other}")),
  }
}

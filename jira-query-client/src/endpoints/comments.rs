//! # Jira Comment Endpoints
//!
//! Jira API endpoint implementation for adding comments to an issue.

use anyhow::{Context, Result};
use serde_json::json;

use crate::client::{JiraClient, ensure_success};
use crate::models::{CommentResult, RawComment};

impl JiraClient {
  /// Add a comment to a Jira issue
  pub async fn add_comment(&self, issue_key: &str, comment_text: &str) -> Result<CommentResult> {
    let url = self.api_url(&format!("issue/{issue_key}/comment"));

    let response = self
      .post(&url)
      .json(&json!({ "body": comment_text }))
      .send()
      .await
      .context("Failed to add Jira comment")?;
    let response = ensure_success(response).await?;

    let comment = response
      .json::<RawComment>()
      .await
      .context("Failed to parse add-comment response")?;
    Ok(CommentResult::from(comment))
  }
}

#[cfg(test)]
mod tests {
  use wiremock::matchers::{body_json, method, path};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use crate::client::JiraClient;
  use crate::config::JiraConfig;

  fn test_client(mock_server: &MockServer) -> JiraClient {
    JiraClient::new(JiraConfig {
      host: mock_server.uri(),
      token: "test_token".to_string(),
      api_version: "2".to_string(),
      proxy_url: None,
    })
    .unwrap()
  }

  #[tokio::test]
  async fn test_add_comment() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = test_client(&mock_server);

    Mock::given(method("POST"))
      .and(path("/rest/api/2/issue/TEST-123/comment"))
      .and(body_json(serde_json::json!({ "body": "Deployed to staging" })))
      .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
          "id": "20001",
          "body": "Deployed to staging",
          "author": { "displayName": "Jane Doe" },
          "created": "2024-01-05T12:00:00.000+0000",
          "self": format!("{}/rest/api/2/issue/TEST-123/comment/20001", mock_server.uri())
      })))
      .expect(1)
      .mount(&mock_server)
      .await;

    let comment = client.add_comment("TEST-123", "Deployed to staging").await?;

    assert_eq!(comment.id.as_deref(), Some("20001"));
    assert_eq!(comment.author, "Jane Doe");
    assert_eq!(comment.body.as_deref(), Some("Deployed to staging"));

    Ok(())
  }

  #[tokio::test]
  async fn test_add_comment_without_author() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = test_client(&mock_server);

    Mock::given(method("POST"))
      .and(path("/rest/api/2/issue/TEST-123/comment"))
      .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
          "id": "20002",
          "body": "Automated note"
      })))
      .mount(&mock_server)
      .await;

    let comment = client.add_comment("TEST-123", "Automated note").await?;
    assert_eq!(comment.author, "Unknown");

    Ok(())
  }

  #[tokio::test]
  async fn test_add_comment_http_error() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = test_client(&mock_server);

    Mock::given(method("POST"))
      .and(path("/rest/api/2/issue/LOCKED-1/comment"))
      .respond_with(ResponseTemplate::new(403).set_body_string("Issue is locked"))
      .mount(&mock_server)
      .await;

    let error = client.add_comment("LOCKED-1", "Nope").await.unwrap_err().to_string();
    assert!(error.contains("HTTP 403"));
    assert!(error.contains("Issue is locked"));

    Ok(())
  }
}

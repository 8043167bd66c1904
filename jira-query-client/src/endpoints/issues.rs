//! # Jira Issue Endpoints
//!
//! Jira API endpoint implementations for issue operations: fetching an issue
//! by key and the create-then-refetch sequence.

use anyhow::{Context, Result};
use serde_json::json;

use crate::client::{JiraClient, ensure_success};
use crate::models::{CreatedIssue, CreatedIssueRef, Issue};

/// Parameters for creating a Jira issue.
#[derive(Debug, Clone)]
pub struct CreateIssueParams {
  pub project_key: String,
  pub summary: String,
  pub description: Option<String>,
  /// Issue type name; "Task" when absent.
  pub issue_type: Option<String>,
}

impl JiraClient {
  /// Get a Jira issue by key
  pub async fn get_issue(&self, issue_key: &str) -> Result<Issue> {
    let url = self.api_url(&format!("issue/{issue_key}"));

    let response = self
      .get(&url)
      .send()
      .await
      .context("Failed to fetch Jira issue")?;
    let response = ensure_success(response).await?;

    response.json::<Issue>().await.context("Failed to parse Jira issue")
  }

  /// Create an issue, then immediately re-fetch it by the returned key.
  ///
  /// The two calls are strictly sequential: the fetch is issued only after
  /// the create response has been read and validated, so the returned issue
  /// reflects the committed create.
  pub async fn create_issue_and_fetch(&self, params: &CreateIssueParams) -> Result<(CreatedIssueRef, Issue)> {
    let url = self.api_url("issue");

    let mut fields = json!({
      "project": { "key": params.project_key },
      "summary": params.summary,
      "issuetype": { "name": params.issue_type.as_deref().unwrap_or("Task") },
    });
    // Some Jira configurations reject an empty description; omit the field
    // entirely unless there is content.
    if let Some(description) = params.description.as_deref().filter(|d| !d.is_empty()) {
      fields["description"] = json!(description);
    }

    let response = self
      .post(&url)
      .json(&json!({ "fields": fields }))
      .send()
      .await
      .context("Failed to create Jira issue")?;
    let response = ensure_success(response).await?;

    let created = response
      .json::<CreatedIssue>()
      .await
      .context("Failed to parse create-issue response")?;
    let created = CreatedIssueRef::from_response(created)?;

    let issue = self.get_issue(&created.key).await?;
    Ok((created, issue))
  }
}

#[cfg(test)]
mod tests {
  use wiremock::matchers::{body_json, header, method, path};
  use wiremock::{Mock, MockServer, ResponseTemplate};

  use crate::client::JiraClient;
  use crate::config::JiraConfig;
  use crate::endpoints::issues::CreateIssueParams;

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
  async fn test_get_issue() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = test_client(&mock_server);

    Mock::given(method("GET"))
      .and(path("/rest/api/2/issue/TEST-123"))
      .and(header("Authorization", "Bearer test_token"))
      .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
          "id": "10000",
          "key": "TEST-123",
          "fields": {
              "summary": "Test issue",
              "description": "This is a test issue",
              "status": { "name": "In Progress" }
          }
      })))
      .mount(&mock_server)
      .await;

    let issue = client.get_issue("TEST-123").await?;
    assert_eq!(issue.key, "TEST-123");
    assert_eq!(issue.fields.summary.as_deref(), Some("Test issue"));
    assert_eq!(issue.fields.status.unwrap().name.as_deref(), Some("In Progress"));

    Ok(())
  }

  #[tokio::test]
  async fn test_get_issue_not_found() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = test_client(&mock_server);

    Mock::given(method("GET"))
      .and(path("/rest/api/2/issue/NONEXISTENT-123"))
      .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
          "errorMessages": ["Issue does not exist or you do not have permission to see it."],
          "errors": {}
      })))
      .mount(&mock_server)
      .await;

    let error = client.get_issue("NONEXISTENT-123").await.unwrap_err().to_string();
    assert!(error.contains("HTTP 404"));
    assert!(error.contains("Issue does not exist"));

    Ok(())
  }

  #[tokio::test]
  async fn test_create_issue_and_fetch() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = test_client(&mock_server);

    // Exact body match also proves the empty description is omitted, not
    // sent as null.
    Mock::given(method("POST"))
      .and(path("/rest/api/2/issue"))
      .and(body_json(serde_json::json!({
          "fields": {
              "project": { "key": "PROJ" },
              "summary": "New issue",
              "issuetype": { "name": "Task" }
          }
      })))
      .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
          "id": "10042",
          "key": "PROJ-42",
          "self": format!("{}/rest/api/2/issue/10042", mock_server.uri())
      })))
      .expect(1)
      .mount(&mock_server)
      .await;

    Mock::given(method("GET"))
      .and(path("/rest/api/2/issue/PROJ-42"))
      .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
          "key": "PROJ-42",
          "fields": { "summary": "New issue", "status": { "name": "To Do" } }
      })))
      .expect(1)
      .mount(&mock_server)
      .await;

    let (created, issue) = client
      .create_issue_and_fetch(&CreateIssueParams {
        project_key: "PROJ".to_string(),
        summary: "New issue".to_string(),
        description: None,
        issue_type: None,
      })
      .await?;

    assert_eq!(created.key, "PROJ-42");
    assert_eq!(created.id.as_deref(), Some("10042"));
    assert_eq!(issue.key, "PROJ-42");

    Ok(())
  }

  #[tokio::test]
  async fn test_create_issue_includes_description_and_type() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = test_client(&mock_server);

    Mock::given(method("POST"))
      .and(path("/rest/api/2/issue"))
      .and(body_json(serde_json::json!({
          "fields": {
              "project": { "key": "PROJ" },
              "summary": "Broken build",
              "issuetype": { "name": "Bug" },
              "description": "CI fails on main"
          }
      })))
      .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({
          "id": "10043",
          "key": "PROJ-43"
      })))
      .expect(1)
      .mount(&mock_server)
      .await;

    Mock::given(method("GET"))
      .and(path("/rest/api/2/issue/PROJ-43"))
      .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
          "key": "PROJ-43",
          "fields": { "summary": "Broken build" }
      })))
      .mount(&mock_server)
      .await;

    let (created, _issue) = client
      .create_issue_and_fetch(&CreateIssueParams {
        project_key: "PROJ".to_string(),
        summary: "Broken build".to_string(),
        description: Some("CI fails on main".to_string()),
        issue_type: Some("Bug".to_string()),
      })
      .await?;

    assert_eq!(created.key, "PROJ-43");

    Ok(())
  }

  /// A 2xx create response without a key is a data-integrity failure; no
  /// follow-up fetch is attempted.
  #[tokio::test]
  async fn test_create_issue_missing_key() -> anyhow::Result<()> {
    let mock_server = MockServer::start().await;
    let client = test_client(&mock_server);

    Mock::given(method("POST"))
      .and(path("/rest/api/2/issue"))
      .respond_with(ResponseTemplate::new(201).set_body_json(serde_json::json!({ "id": "10044" })))
      .expect(1)
      .mount(&mock_server)
      .await;

    let error = client
      .create_issue_and_fetch(&CreateIssueParams {
        project_key: "PROJ".to_string(),
        summary: "New issue".to_string(),
        description: None,
        issue_type: None,
      })
      .await
      .unwrap_err()
      .to_string();

    assert!(error.contains("Create issue succeeded but no issue key was returned"));

    Ok(())
  }
}

//! Parameter structs for the Jira tools.
//!
//! Wire argument names are camelCase to match the published tool schemas; the
//! required lists in the schemas come from the non-optional fields.

use schemars::JsonSchema;
use serde::Deserialize;

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GetIssueParams {
  /// The Jira issue key (e.g., PROJ-123).
  pub issue_key: String,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateIssueToolParams {
  /// The Jira project key (e.g., 'PROJ').
  pub project_key: String,
  /// Summary/title of the issue.
  pub summary: String,
  /// (Optional) Description of the issue.
  pub description: Option<String>,
  /// (Optional) Issue type name (e.g., 'Task', 'Bug'). Default: 'Task'.
  pub issue_type: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTicketTemplateParams {
  /// The Jira project key (e.g., 'PROJ').
  pub project_key: String,
  /// The sub-application name to be wrapped in full-width brackets, e.g. '微信运营平台运维'.
  pub app_name: String,
  /// The ticket title (will be appended after 【appName】).
  pub title: String,
  /// Task description body to be placed under "任务描述：".
  pub task_description: String,
  /// (Optional) 提出日期 in YYYY-MM-DD. Default: today's local date.
  pub submitted_date: Option<String>,
  /// (Optional) Issue type name (e.g., 'Task', 'Bug'). Default: 'Task'.
  pub issue_type: Option<String>,
}

#[derive(Debug, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct AddCommentParams {
  /// The Jira issue key (e.g., PROJ-123).
  pub issue_key: String,
  /// The comment to add to the issue.
  pub comment: String,
}

//! Structured response payloads for the Jira tools.
//!
//! Each payload is pretty-printed as the text content of the tool result
//! envelope. `get_jira_issue` returns the bare [`SimplifiedIssue`]; the write
//! tools wrap it together with a `message` field.

use jira_query_client::{CommentResult, CreatedIssueRef, SimplifiedIssue};
use serde::Serialize;

/// Payload for `create_jira_issue`.
#[derive(Debug, Serialize)]
pub struct CreateIssueResponse {
  pub message: &'static str,
  pub created: CreatedIssueRef,
  pub issue: SimplifiedIssue,
}

/// Payload for `create_jira_ticket_template`.
#[derive(Debug, Serialize)]
pub struct CreateTicketTemplateResponse {
  pub message: &'static str,
  pub template: TemplateStrings,
  pub created: CreatedIssueRef,
  pub issue: SimplifiedIssue,
}

/// The rendered template strings that were sent to Jira.
#[derive(Debug, Serialize)]
pub struct TemplateStrings {
  pub summary: String,
  pub description: String,
}

/// Payload for `add_jira_comment`.
#[derive(Debug, Serialize)]
pub struct AddCommentResponse {
  pub message: &'static str,
  pub comment: CommentResult,
  pub issue: SimplifiedIssue,
}

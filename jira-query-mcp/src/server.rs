//! MCP server implementation: tool dispatch over the Jira client.
//!
//! Every tool call is routed through [`JiraMcpServer::dispatch`], which wraps
//! the outcome in a uniform result envelope. Errors from any step are
//! converted there; none escape to the protocol layer.

use std::sync::Arc;

use anyhow::{Context, Result};
use jira_query_client::{CreateIssueParams, JiraClient, SimplifiedIssue};
use rmcp::handler::server::ServerHandler;
use rmcp::model::{
  CallToolRequestParams, CallToolResult, Content, ListToolsResult, PaginatedRequestParams, ServerCapabilities,
  ServerInfo,
};
use rmcp::service::RequestContext;
use rmcp::{ErrorData as McpError, RoleServer};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::registry;
use crate::template;
use crate::tools::{AddCommentParams, CreateIssueToolParams, CreateTicketTemplateParams, GetIssueParams};
use crate::types::{AddCommentResponse, CreateIssueResponse, CreateTicketTemplateResponse, TemplateStrings};

type ArgumentMap = serde_json::Map<String, Value>;

#[derive(Clone)]
pub struct JiraMcpServer {
  client: Arc<JiraClient>,
}

impl JiraMcpServer {
  pub fn new(client: JiraClient) -> Self {
    Self {
      client: Arc::new(client),
    }
  }

  /// Route a tool invocation to its handler and wrap the outcome in a result
  /// envelope.
  pub(crate) async fn dispatch(&self, name: &str, arguments: Option<ArgumentMap>) -> CallToolResult {
    tracing::debug!(tool = name, "dispatching tool call");

    let outcome = match name {
      "get_jira_issue" => self.get_jira_issue(arguments).await,
      "create_jira_issue" => self.create_jira_issue(arguments).await,
      "create_jira_ticket_template" => self.create_jira_ticket_template(arguments).await,
      "add_jira_comment" => self.add_jira_comment(arguments).await,
      other => Err(anyhow::anyhow!("Unknown tool: {other}")),
    };

    match outcome {
      Ok(text) => CallToolResult::success(vec![Content::text(text)]),
      Err(e) => {
        tracing::warn!(tool = name, error = %e, "tool call failed");
        CallToolResult::error(vec![Content::text(format!("Error: {e}"))])
      }
    }
  }

  async fn get_jira_issue(&self, arguments: Option<ArgumentMap>) -> Result<String> {
    let params: GetIssueParams = parse_params(arguments)?;

    let issue = self.client.get_issue(&params.issue_key).await?;
    to_json_text(&SimplifiedIssue::from(&issue))
  }

  async fn create_jira_issue(&self, arguments: Option<ArgumentMap>) -> Result<String> {
    let params: CreateIssueToolParams = parse_params(arguments)?;

    let (created, issue) = self
      .client
      .create_issue_and_fetch(&CreateIssueParams {
        project_key: params.project_key,
        summary: params.summary,
        description: params.description,
        issue_type: params.issue_type,
      })
      .await?;

    to_json_text(&CreateIssueResponse {
      message: "Issue created successfully",
      created,
      issue: SimplifiedIssue::from(&issue),
    })
  }

  async fn create_jira_ticket_template(&self, arguments: Option<ArgumentMap>) -> Result<String> {
    let params: CreateTicketTemplateParams = parse_params(arguments)?;

    let summary = template::build_summary(&params.app_name, &params.title)?;
    let description = template::build_description(params.submitted_date.as_deref(), Some(&params.task_description));

    let (created, issue) = self
      .client
      .create_issue_and_fetch(&CreateIssueParams {
        project_key: params.project_key,
        summary: summary.clone(),
        description: Some(description.clone()),
        issue_type: params.issue_type,
      })
      .await?;

    to_json_text(&CreateTicketTemplateResponse {
      message: "Issue created successfully (template)",
      template: TemplateStrings { summary, description },
      created,
      issue: SimplifiedIssue::from(&issue),
    })
  }

  async fn add_jira_comment(&self, arguments: Option<ArgumentMap>) -> Result<String> {
    let params: AddCommentParams = parse_params(arguments)?;

    let comment = self.client.add_comment(&params.issue_key, &params.comment).await?;
    // Re-fetch unconditionally so the caller sees the issue's full current
    // comment list, not just the comment that was added.
    let issue = self.client.get_issue(&params.issue_key).await?;

    to_json_text(&AddCommentResponse {
      message: "Comment added successfully",
      comment,
      issue: SimplifiedIssue::from(&issue),
    })
  }
}

impl ServerHandler for JiraMcpServer {
  fn get_info(&self) -> ServerInfo {
    ServerInfo {
      instructions: Some(
        "Jira MCP server. Fetches issues, creates issues (plain or templated), \
         and adds comments through the configured Jira host."
          .into(),
      ),
      capabilities: ServerCapabilities::builder().enable_tools().build(),
      ..Default::default()
    }
  }

  async fn list_tools(
    &self,
    _request: Option<PaginatedRequestParams>,
    _context: RequestContext<RoleServer>,
  ) -> Result<ListToolsResult, McpError> {
    Ok(ListToolsResult {
      next_cursor: None,
      tools: registry::tools(),
      meta: None,
    })
  }

  async fn call_tool(
    &self,
    request: CallToolRequestParams,
    _context: RequestContext<RoleServer>,
  ) -> Result<CallToolResult, McpError> {
    Ok(self.dispatch(&request.name, request.arguments).await)
  }
}

/// Deserialize the invocation's argument object into a typed parameter
/// struct.
///
/// Missing or mis-typed required arguments fail here, at dispatch entry, with
/// a message naming the offending field instead of deep inside a handler.
fn parse_params<T: DeserializeOwned>(arguments: Option<ArgumentMap>) -> Result<T> {
  serde_json::from_value(Value::Object(arguments.unwrap_or_default()))
    .map_err(|e| anyhow::anyhow!("Invalid arguments: {e}"))
}

/// Pretty-print a success payload as the envelope's text content.
fn to_json_text<T: Serialize>(payload: &T) -> Result<String> {
  serde_json::to_string_pretty(payload).context("Failed to serialize tool response")
}

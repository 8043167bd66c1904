//! Static tool descriptors advertised by the server.
//!
//! Purely declarative: names, human descriptions, and input schemas derived
//! from the parameter structs in [`crate::tools`].

use std::sync::Arc;

use rmcp::model::Tool;
use schemars::JsonSchema;

use crate::tools::{AddCommentParams, CreateIssueToolParams, CreateTicketTemplateParams, GetIssueParams};

/// JSON schema for a parameter struct, as the object shape rmcp expects.
fn schema_for<T: JsonSchema>() -> Arc<serde_json::Map<String, serde_json::Value>> {
  let schema = schemars::schema_for!(T);
  match serde_json::to_value(&schema) {
    Ok(serde_json::Value::Object(map)) => Arc::new(map),
    _ => Arc::new(serde_json::Map::new()),
  }
}

/// The fixed set of tools this server exposes.
pub fn tools() -> Vec<Tool> {
  vec![
    Tool {
      name: "get_jira_issue".into(),
      title: None,
      description: Some("Get a specific Jira issue by key".into()),
      input_schema: schema_for::<GetIssueParams>(),
      output_schema: None,
      annotations: None,
      icons: None,
      execution: None,
      meta: None,
    },
    Tool {
      name: "create_jira_issue".into(),
      title: None,
      description: Some("Create a basic Jira issue (ticket) and then fetch it by key".into()),
      input_schema: schema_for::<CreateIssueToolParams>(),
      output_schema: None,
      annotations: None,
      icons: None,
      execution: None,
      meta: None,
    },
    Tool {
      name: "create_jira_ticket_template".into(),
      title: None,
      description: Some(
        "Create a Jira ticket using a fixed template: summary as 【appName】title and description \
         with 提出日期/任务描述/解决方案(留空), then fetch it"
          .into(),
      ),
      input_schema: schema_for::<CreateTicketTemplateParams>(),
      output_schema: None,
      annotations: None,
      icons: None,
      execution: None,
      meta: None,
    },
    Tool {
      name: "add_jira_comment".into(),
      title: None,
      description: Some("Add a comment to a Jira issue".into()),
      input_schema: schema_for::<AddCommentParams>(),
      output_schema: None,
      annotations: None,
      icons: None,
      execution: None,
      meta: None,
    },
  ]
}

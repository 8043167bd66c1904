use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Represents a Jira issue as returned by the REST API.
///
/// Field coverage is deliberately partial: everything downstream consumes is
/// optional or defaulted so that any syntactically valid issue payload
/// deserializes, however sparse.
#[derive(Debug, Clone, Deserialize)]
pub struct Issue {
  pub key: String,
  #[serde(default)]
  pub fields: IssueFields,
}

/// Represents the `fields` sub-record of a Jira issue.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct IssueFields {
  #[serde(default)]
  pub summary: Option<String>,
  #[serde(default)]
  pub description: Option<String>,
  #[serde(default)]
  pub status: Option<NamedField>,
  #[serde(default)]
  pub assignee: Option<User>,
  #[serde(default)]
  pub priority: Option<NamedField>,
  #[serde(default, rename = "issuetype")]
  pub issue_type: Option<NamedField>,
  #[serde(default)]
  pub created: Option<String>,
  #[serde(default)]
  pub updated: Option<String>,
  #[serde(default)]
  pub labels: Vec<String>,
  #[serde(default)]
  pub attachment: Vec<Attachment>,
  #[serde(default)]
  pub comment: Option<CommentPage>,
}

/// A Jira sub-record carrying a display name, e.g. status or priority.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NamedField {
  #[serde(default)]
  pub name: Option<String>,
}

/// A Jira user reference.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct User {
  #[serde(default, rename = "displayName")]
  pub display_name: Option<String>,
}

/// An attachment entry on an issue.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Attachment {
  #[serde(default)]
  pub filename: Option<String>,
  #[serde(default)]
  pub author: Option<User>,
  #[serde(default)]
  pub created: Option<String>,
  #[serde(default)]
  pub size: Option<u64>,
  #[serde(default, rename = "mimeType")]
  pub mime_type: Option<String>,
  #[serde(default)]
  pub content: Option<String>,
}

/// The paged comment container nested under `fields.comment`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CommentPage {
  #[serde(default)]
  pub comments: Vec<Comment>,
}

/// A single comment entry on an issue.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Comment {
  #[serde(default)]
  pub author: Option<User>,
  #[serde(default)]
  pub body: Option<String>,
  #[serde(default)]
  pub created: Option<String>,
}

/// Response body of a successful issue-create call.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatedIssue {
  #[serde(default)]
  pub id: Option<String>,
  #[serde(default)]
  pub key: Option<String>,
  #[serde(default, rename = "self")]
  pub self_link: Option<String>,
}

/// Reference to a newly created issue; the key is guaranteed non-empty.
#[derive(Debug, Clone, Serialize)]
pub struct CreatedIssueRef {
  pub key: String,
  pub id: Option<String>,
  #[serde(rename = "self")]
  pub self_link: Option<String>,
}

impl CreatedIssueRef {
  /// Validate a create response into a reference.
  ///
  /// A 2xx create response without an issue key is a malformed upstream
  /// response, reported distinctly from HTTP-level failures.
  pub fn from_response(created: CreatedIssue) -> Result<Self> {
    match created.key {
      Some(key) if !key.is_empty() => Ok(Self {
        key,
        id: created.id,
        self_link: created.self_link,
      }),
      _ => Err(anyhow::anyhow!(
        "Create issue succeeded but no issue key was returned by Jira."
      )),
    }
  }
}

/// Response body of a successful add-comment call.
#[derive(Debug, Clone, Deserialize)]
pub struct RawComment {
  #[serde(default)]
  pub id: Option<String>,
  #[serde(default)]
  pub body: Option<String>,
  #[serde(default)]
  pub author: Option<User>,
  #[serde(default)]
  pub created: Option<String>,
  #[serde(default, rename = "self")]
  pub self_link: Option<String>,
}

/// Normalized projection of a created comment.
#[derive(Debug, Clone, Serialize)]
pub struct CommentResult {
  pub id: Option<String>,
  pub body: Option<String>,
  pub author: String,
  pub created: Option<String>,
  #[serde(rename = "self")]
  pub self_link: Option<String>,
}

impl From<RawComment> for CommentResult {
  fn from(comment: RawComment) -> Self {
    Self {
      id: comment.id,
      body: comment.body,
      author: comment
        .author
        .and_then(|a| a.display_name)
        .unwrap_or_else(|| "Unknown".to_string()),
      created: comment.created,
      self_link: comment.self_link,
    }
  }
}

/// Compact, fixed-shape projection of a Jira issue.
///
/// Every field is always serialized; data absent upstream degrades to null,
/// "Unassigned", or an empty sequence rather than being dropped.
#[derive(Debug, Clone, Serialize)]
pub struct SimplifiedIssue {
  pub key: String,
  pub summary: Option<String>,
  pub description: Option<String>,
  pub status: Option<String>,
  pub assignee: String,
  pub priority: Option<String>,
  #[serde(rename = "issueType")]
  pub issue_type: Option<String>,
  pub created: Option<String>,
  pub updated: Option<String>,
  pub labels: Vec<String>,
  pub attachments: Vec<SimplifiedAttachment>,
  pub comments: Vec<SimplifiedComment>,
}

/// Attachment entry of a [`SimplifiedIssue`].
#[derive(Debug, Clone, Serialize)]
pub struct SimplifiedAttachment {
  pub filename: Option<String>,
  pub author: Option<String>,
  pub created: Option<String>,
  pub size: Option<u64>,
  #[serde(rename = "mimeType")]
  pub mime_type: Option<String>,
  pub content: Option<String>,
}

/// Comment entry of a [`SimplifiedIssue`].
#[derive(Debug, Clone, Serialize)]
pub struct SimplifiedComment {
  pub author: Option<String>,
  pub body: Option<String>,
  pub created: Option<String>,
}

impl From<&Issue> for SimplifiedIssue {
  /// Total normalization: never fails for any deserialized [`Issue`].
  fn from(issue: &Issue) -> Self {
    let fields = &issue.fields;

    Self {
      key: issue.key.clone(),
      summary: fields.summary.clone(),
      description: fields.description.clone(),
      status: fields.status.as_ref().and_then(|s| s.name.clone()),
      assignee: fields
        .assignee
        .as_ref()
        .and_then(|a| a.display_name.clone())
        .unwrap_or_else(|| "Unassigned".to_string()),
      priority: fields.priority.as_ref().and_then(|p| p.name.clone()),
      issue_type: fields.issue_type.as_ref().and_then(|t| t.name.clone()),
      created: fields.created.clone(),
      updated: fields.updated.clone(),
      labels: fields.labels.clone(),
      attachments: fields
        .attachment
        .iter()
        .map(|a| SimplifiedAttachment {
          filename: a.filename.clone(),
          author: a.author.as_ref().and_then(|u| u.display_name.clone()),
          created: a.created.clone(),
          size: a.size,
          mime_type: a.mime_type.clone(),
          content: a.content.clone(),
        })
        .collect(),
      comments: fields
        .comment
        .as_ref()
        .map(|page| {
          page
            .comments
            .iter()
            .map(|c| SimplifiedComment {
              author: c.author.as_ref().and_then(|u| u.display_name.clone()),
              body: c.body.clone(),
              created: c.created.clone(),
            })
            .collect()
        })
        .unwrap_or_default(),
    }
  }
}

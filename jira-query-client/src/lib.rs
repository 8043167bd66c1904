//! # Jira API Client
//!
//! Provides Jira REST API integration for issue management, supporting
//! bearer-token authentication, optional proxy transports, and the issue
//! fetch/create/comment operations exposed by the jira-query MCP server.

mod client;
pub mod config;
mod endpoints;
pub mod models;

// Re-export the client
pub use client::{JiraClient, create_jira_client};
// Re-export configuration
pub use config::JiraConfig;
// Re-export models
pub use endpoints::issues::CreateIssueParams;
pub use models::{CommentResult, CreatedIssueRef, Issue, SimplifiedIssue};

//! # Jira API Endpoints
//!
//! Organized endpoint implementations for the Jira resources the tools
//! touch: issues and issue comments.

pub mod comments;
pub mod issues;

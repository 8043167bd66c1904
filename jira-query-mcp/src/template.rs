//! Fixed-format ticket template builders.
//!
//! The produced summary and description layouts are a hard contract with the
//! downstream ticket consumers; the tests pin the exact strings.

use anyhow::{Result, bail};

/// Build the `【appName】title` summary line.
///
/// Both inputs are trimmed; either trimming to empty is a validation error.
/// The full-width brackets are literal, not locale-dependent.
pub fn build_summary(app_name: &str, title: &str) -> Result<String> {
  let app_name = app_name.trim();
  let title = title.trim();

  if app_name.is_empty() {
    bail!("appName is required");
  }
  if title.is_empty() {
    bail!("title is required");
  }

  Ok(format!("【{app_name}】{title}"))
}

/// Build the fixed description body.
///
/// The submitted date falls back to today's local calendar date when absent
/// or blank, the task description falls back to empty, and the 解决方案
/// section is intentionally left blank:
///
/// ```text
/// 提出日期： <date>
///
/// 任务描述：
/// <taskDescription>
///
/// 解决方案：
/// ```
pub fn build_description(submitted_date: Option<&str>, task_description: Option<&str>) -> String {
  let date = submitted_date
    .map(str::trim)
    .filter(|d| !d.is_empty())
    .map(str::to_string)
    .unwrap_or_else(local_date);
  let description = task_description.map(str::trim).filter(|d| !d.is_empty()).unwrap_or("");

  format!("提出日期： {date}\n\n任务描述：\n{description}\n\n解决方案：\n")
}

/// Today's local calendar date as zero-padded YYYY-MM-DD (local time zone,
/// not UTC).
fn local_date() -> String {
  chrono::Local::now().format("%Y-%m-%d").to_string()
}

//! Frontend Models
//!
//! Data structures matching the board's REST API.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Server-assigned task id
pub type TaskId = i64;

/// Column a task belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// The sidebar quick-task list
    QuickList,
    Todo,
    InProgress,
    Done,
}

impl Category {
    /// Kanban columns in display order
    pub const BOARD: [Category; 3] = [Category::Todo, Category::InProgress, Category::Done];

    /// Wire name, also used for `data-category` / `data-status` attributes
    pub fn as_str(self) -> &'static str {
        match self {
            Category::QuickList => "quick-list",
            Category::Todo => "todo",
            Category::InProgress => "in-progress",
            Category::Done => "done",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Category::QuickList => "quick list",
            Category::Todo => "todo",
            Category::InProgress => "in progress",
            Category::Done => "done",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category `{0}`")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "quick-list" => Ok(Category::QuickList),
            "todo" => Ok(Category::Todo),
            "in-progress" => Ok(Category::InProgress),
            "done" => Ok(Category::Done),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

/// Task data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub content: String,
    pub category: Category,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Body of `POST /api/tasks`
#[derive(Debug, Clone, Serialize)]
pub struct NewTask<'a> {
    pub content: &'a str,
    pub category: Category,
}

/// Partial update for `PUT /api/tasks/{id}`; absent fields are left alone.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<Category>,
}

impl TaskPatch {
    pub fn category(category: Category) -> Self {
        Self { category: Some(category), ..Default::default() }
    }

    pub fn content(content: impl Into<String>) -> Self {
        Self { content: Some(content.into()), ..Default::default() }
    }
}

/// The singleton note
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub content: String,
}

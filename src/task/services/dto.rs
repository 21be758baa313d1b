//! Request and response shapes consumed and produced by the task use cases.

use crate::task::domain::Task;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Maximum number of characters accepted in a task title.
pub const MAX_TITLE_CHARS: usize = 255;

const TITLE_REQUIRED: &str = "Title is required";
const TITLE_TOO_LONG: &str = "Title cannot exceed 255 characters";

/// Presence marker for a field of a partial update.
///
/// `Keep` means the field was omitted and the stored value stays; `Set`
/// carries the replacement. For nullable fields `Set(None)` clears the value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldUpdate<T> {
    /// Field omitted; keep the current value.
    #[default]
    Keep,
    /// Field supplied with a replacement value.
    Set(T),
}

impl<T> FieldUpdate<T> {
    /// Returns `true` when a replacement value was supplied.
    #[must_use]
    pub const fn is_set(&self) -> bool {
        matches!(self, Self::Set(_))
    }

    /// Returns the supplied value by reference, if any.
    #[must_use]
    pub const fn as_set(&self) -> Option<&T> {
        match self {
            Self::Keep => None,
            Self::Set(value) => Some(value),
        }
    }

    /// Returns the supplied value or computes the current one.
    pub fn unwrap_or_else(self, current: impl FnOnce() -> T) -> T {
        match self {
            Self::Keep => current(),
            Self::Set(value) => value,
        }
    }
}

impl<T> From<Option<T>> for FieldUpdate<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Keep, Self::Set)
    }
}

// Only called for keys present in the payload; absent keys fall back to
// `Default` via `#[serde(default)]`.
impl<'de, T> Deserialize<'de> for FieldUpdate<T>
where
    T: Deserialize<'de>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Self::Set)
    }
}

/// Failed input rules, in the order they were checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors(Vec<String>);

impl ValidationErrors {
    /// Returns the individual rule violations.
    #[must_use]
    pub fn messages(&self) -> &[String] {
        &self.0
    }

    fn check(messages: Vec<&str>) -> Result<(), Self> {
        if messages.is_empty() {
            return Ok(());
        }
        Err(Self(messages.into_iter().map(str::to_owned).collect()))
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(", "))
    }
}

impl std::error::Error for ValidationErrors {}

/// Checks a title against the required and maximum length rules.
fn title_violations(title: &str) -> Vec<&'static str> {
    let mut violations = Vec::new();
    if title.trim().is_empty() {
        violations.push(TITLE_REQUIRED);
    }
    if title.chars().count() > MAX_TITLE_CHARS {
        violations.push(TITLE_TOO_LONG);
    }
    violations
}

/// Input for creating a task.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateTaskRequest {
    #[serde(default)]
    title: String,
    #[serde(default)]
    description: Option<String>,
}

impl CreateTaskRequest {
    /// Creates a request with the required title.
    #[must_use]
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: None,
        }
    }

    /// Sets the task description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Returns the requested title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the requested description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Validates the title rules.
    ///
    /// # Errors
    ///
    /// Returns every violated rule when the title is blank or too long.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        ValidationErrors::check(title_violations(&self.title))
    }

    pub(crate) fn into_parts(self) -> (String, Option<String>) {
        (self.title, self.description)
    }
}

/// Update of a task.
///
/// A request carrying only `completed` is a status toggle: title rules and
/// the duplicate-title check are skipped. Anything else is a full update,
/// which must carry a valid title; omitted `description` and `completed`
/// keep their stored values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UpdateTaskRequest {
    #[serde(default)]
    title: FieldUpdate<String>,
    #[serde(default)]
    description: FieldUpdate<Option<String>>,
    #[serde(default)]
    completed: FieldUpdate<bool>,
}

/// Which branch of the update use case a request takes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum UpdateMode {
    StatusToggle(bool),
    Full(UpdateTaskRequest),
}

impl UpdateTaskRequest {
    /// Creates an empty request that keeps every field.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a status-toggle request.
    #[must_use]
    pub fn toggle(completed: bool) -> Self {
        Self::new().with_completed(completed)
    }

    /// Replaces the title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = FieldUpdate::Set(title.into());
        self
    }

    /// Replaces the description; `None` clears it.
    #[must_use]
    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = FieldUpdate::Set(description);
        self
    }

    /// Replaces the completion flag.
    #[must_use]
    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = FieldUpdate::Set(completed);
        self
    }

    /// Returns the title update.
    #[must_use]
    pub const fn title(&self) -> &FieldUpdate<String> {
        &self.title
    }

    /// Returns the description update.
    #[must_use]
    pub const fn description(&self) -> &FieldUpdate<Option<String>> {
        &self.description
    }

    /// Returns the completion update.
    #[must_use]
    pub const fn completed(&self) -> &FieldUpdate<bool> {
        &self.completed
    }

    /// Returns `true` when only `completed` was supplied.
    #[must_use]
    pub const fn is_status_toggle_only(&self) -> bool {
        self.completed.is_set() && !self.title.is_set() && !self.description.is_set()
    }

    /// Validates the title rules for a full update.
    ///
    /// Status toggles never reach this check.
    ///
    /// # Errors
    ///
    /// Returns every violated rule when the title is omitted, blank or too
    /// long.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        match &self.title {
            FieldUpdate::Keep => ValidationErrors::check(vec![TITLE_REQUIRED]),
            FieldUpdate::Set(title) => ValidationErrors::check(title_violations(title)),
        }
    }

    pub(crate) fn into_mode(self) -> UpdateMode {
        match (self.is_status_toggle_only(), self.completed) {
            (true, FieldUpdate::Set(completed)) => UpdateMode::StatusToggle(completed),
            _ => UpdateMode::Full(self),
        }
    }

    pub(crate) fn into_parts(
        self,
    ) -> (
        FieldUpdate<String>,
        FieldUpdate<Option<String>>,
        FieldUpdate<bool>,
    ) {
        (self.title, self.description, self.completed)
    }
}

/// Task representation returned by every use case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskResponse {
    /// Task identifier.
    pub id: i64,
    /// Task title.
    pub title: String,
    /// Task description, omitted when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Completion flag.
    pub completed: bool,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Latest mutation timestamp.
    pub updated_at: DateTime<Utc>,
}

impl From<&Task> for TaskResponse {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id().value(),
            title: task.title().to_owned(),
            description: task.description().map(str::to_owned),
            completed: task.completed(),
            created_at: task.created_at(),
            updated_at: task.updated_at(),
        }
    }
}

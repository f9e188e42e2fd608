use std::fmt;
use std::str::FromStr;

use anyhow::anyhow;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

/// Prompt language. `Pt` is the primary variant and the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    Pt,
    En,
}

impl Default for Language {
    fn default() -> Self {
        Language::Pt
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Language::Pt => write!(f, "pt"),
            Language::En => write!(f, "en"),
        }
    }
}

impl FromStr for Language {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pt" => Ok(Language::Pt),
            "en" => Ok(Language::En),
            other => Err(anyhow!("Unknown language '{other}', expected 'pt' or 'en'")),
        }
    }
}

/// Caller-supplied description of the goal to break down.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GoalSpec {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub importance_level: u8,
    pub effort_estimated: u8,
}

/// Task priority, three fixed labels.
///
/// Deserialization is deliberately lenient: any unrecognized, empty, or
/// missing value becomes `Medium` instead of rejecting the task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

impl Priority {
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "high" => Priority::High,
            "low" => Priority::Low,
            _ => Priority::Medium,
        }
    }
}

pub(super) fn lenient_priority<'de, D>(deserializer: D) -> Result<Priority, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw
        .map(|label| Priority::from_label(&label))
        .unwrap_or_default())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Milestone {
    pub title: String,
    pub description: String,
    pub order_sequence: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub title: String,
    pub description: String,
    #[serde(default, deserialize_with = "lenient_priority")]
    pub priority: Priority,
    pub estimated_duration: u32,
    pub due_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prerequisites: Option<Vec<String>>,
    pub order_sequence: u32,
}

/// Validated milestone/task structure, ready for persistence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    #[serde(default)]
    pub milestones: Vec<Milestone>,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

/// Inclusive date window every task due date must fall into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanWindow {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

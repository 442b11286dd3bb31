use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub type GoalID = i64;

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum GoalType {
    Daily,
    Weekly,
    Monthly,
}

impl GoalType {
    pub fn as_str(&self) -> &'static str {
        match self {
            GoalType::Daily => "daily",
            GoalType::Weekly => "weekly",
            GoalType::Monthly => "monthly",
        }
    }

    pub fn from_str(s: &str) -> Option<GoalType> {
        match s {
            "daily" => Some(GoalType::Daily),
            "weekly" => Some(GoalType::Weekly),
            "monthly" => Some(GoalType::Monthly),
            _ => None,
        }
    }
}

/// A stored goal record as served over the wire.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    #[serde(with = "crate::data::id_string")]
    pub id: GoalID,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub goal_type: GoalType,
    pub target_count: i64,
    pub current_count: i64,
    pub completed: bool,
    pub end_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// A validated goal ready to persist. Progress always starts at zero no
/// matter what the creation request claimed.
#[derive(Debug, Clone)]
pub struct NewGoal {
    pub title: String,
    pub description: Option<String>,
    pub goal_type: GoalType,
    pub target_count: i64,
    pub end_date: DateTime<Utc>,
}

/// Raw creation input. Fields arrive untrusted; `service::validate_goal`
/// turns this into a `NewGoal` or rejects it. Unknown fields (including
/// attempts to preset `currentCount` or `completed`) are dropped by serde.
#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct CreateGoalRequest {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, rename = "type")]
    pub goal_type: Option<String>,
    #[serde(default)]
    pub target_count: Option<i64>,
    #[serde(default)]
    pub end_date: Option<String>,
}

/// Partial update: every field is present-or-absent and merged one by one,
/// never a raw field map.
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct GoalUpdate {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, rename = "type")]
    pub goal_type: Option<String>,
    #[serde(default)]
    pub target_count: Option<i64>,
    #[serde(default)]
    pub current_count: Option<i64>,
    #[serde(default)]
    pub completed: Option<bool>,
    #[serde(default)]
    pub end_date: Option<String>,
}

#[derive(Serialize, Deserialize, Debug)]
pub struct DeleteGoalResponse {
    pub message: String,
}

use chrono::{DateTime, Duration, Utc};
use rusqlite::Connection;

use crate::api_error::{ApiError, ApiResult};
use crate::data::parse_date;

use super::data::*;
use super::helpers::*;

pub fn validate_goal(request: CreateGoalRequest) -> ApiResult<NewGoal> {
    let title = match request.title {
        Some(title) if !title.trim().is_empty() => title,
        _ => return Err(ApiError::Validation("title is required".to_string())),
    };

    let goal_type = match request.goal_type {
        None => GoalType::Weekly,
        Some(raw) => GoalType::from_str(&raw)
            .ok_or_else(|| ApiError::Validation(format!("unknown goal type '{}'", raw)))?,
    };

    let target_count = match request.target_count {
        Some(count) if count >= 1 => count,
        Some(count) => {
            return Err(ApiError::Validation(format!(
                "targetCount must be at least 1, got {}",
                count
            )))
        }
        None => return Err(ApiError::Validation("targetCount is required".to_string())),
    };

    let end_date = match request.end_date {
        Some(raw) => parse_date(&raw)
            .ok_or_else(|| ApiError::Validation(format!("invalid endDate '{}'", raw)))?,
        None => return Err(ApiError::Validation("endDate is required".to_string())),
    };

    Ok(NewGoal {
        title,
        description: request.description,
        goal_type,
        target_count,
        end_date,
    })
}

pub fn create_goal(request: CreateGoalRequest, db_connection: &Connection) -> ApiResult<Goal> {
    let new_goal = validate_goal(request)?;
    add_goal_to_db(&new_goal, db_connection)
}

/// Unconditional: incrementing neither stops at the target nor checks the
/// deadline, and completion is re-derived from the new count every time.
pub fn increment_goal(goal_id: GoalID, db_connection: &Connection) -> ApiResult<Goal> {
    increment_goal_in_db(goal_id, db_connection)
}

/// Field-by-field merge of the given fields into the stored record. Completion
/// is deliberately not re-derived here; only the next increment recomputes it.
pub fn update_goal(
    goal_id: GoalID,
    update: GoalUpdate,
    db_connection: &Connection,
) -> ApiResult<Goal> {
    let mut goal = get_goal_from_db(goal_id, db_connection)?;

    if let Some(title) = update.title {
        goal.title = title;
    }
    if let Some(description) = update.description {
        goal.description = Some(description);
    }
    if let Some(raw) = update.goal_type {
        goal.goal_type = GoalType::from_str(&raw)
            .ok_or_else(|| ApiError::Validation(format!("unknown goal type '{}'", raw)))?;
    }
    if let Some(target_count) = update.target_count {
        goal.target_count = target_count;
    }
    if let Some(current_count) = update.current_count {
        goal.current_count = current_count;
    }
    if let Some(completed) = update.completed {
        goal.completed = completed;
    }
    if let Some(raw) = update.end_date {
        goal.end_date = parse_date(&raw)
            .ok_or_else(|| ApiError::Validation(format!("invalid endDate '{}'", raw)))?;
    }

    update_goal_in_db(&goal, db_connection)?;

    Ok(goal)
}

pub fn delete_goal(goal_id: GoalID, db_connection: &Connection) -> ApiResult<()> {
    delete_goal_from_db(goal_id, db_connection)
}

/// Human-readable time until the deadline: whole days when at least a day is
/// left, whole hours below that (floored, so under an hour reads "0 hour
/// left"), "Expired" once the deadline has passed.
pub fn time_remaining(goal: &Goal, now: DateTime<Utc>) -> String {
    let diff = goal.end_date.signed_duration_since(now);

    if diff <= Duration::zero() {
        return "Expired".to_string();
    }

    let days = diff.num_days();
    let hours = diff.num_hours() % 24;

    if days > 0 {
        format!("{} day{} left", days, if days > 1 { "s" } else { "" })
    } else {
        format!("{} hour{} left", hours, if hours > 1 { "s" } else { "" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn goal_ending_at(end_date: DateTime<Utc>) -> Goal {
        Goal {
            id: 1,
            title: "Read 5 books".to_string(),
            description: None,
            goal_type: GoalType::Monthly,
            target_count: 5,
            current_count: 0,
            completed: false,
            end_date,
            created_at: Utc::now(),
        }
    }

    fn create_request(title: Option<&str>) -> CreateGoalRequest {
        CreateGoalRequest {
            title: title.map(str::to_string),
            description: None,
            goal_type: None,
            target_count: Some(5),
            end_date: Some("2099-01-01".to_string()),
        }
    }

    #[test]
    fn time_remaining_expired_at_and_past_deadline() {
        let now = Utc::now();
        let goal = goal_ending_at(now);
        assert_eq!(time_remaining(&goal, now), "Expired");
        assert_eq!(time_remaining(&goal, now + Duration::seconds(1)), "Expired");
    }

    #[test]
    fn time_remaining_just_before_deadline_is_hour_based() {
        let now = Utc::now();
        let goal = goal_ending_at(now + Duration::seconds(1));
        assert_eq!(time_remaining(&goal, now), "0 hour left");
    }

    #[test]
    fn time_remaining_floors_hours() {
        let now = Utc::now();
        assert_eq!(
            time_remaining(&goal_ending_at(now + Duration::minutes(90)), now),
            "1 hour left"
        );
        assert_eq!(
            time_remaining(&goal_ending_at(now + Duration::hours(5)), now),
            "5 hours left"
        );
    }

    #[test]
    fn time_remaining_switches_to_days_at_twenty_four_hours() {
        let now = Utc::now();
        assert_eq!(
            time_remaining(&goal_ending_at(now + Duration::hours(23)), now),
            "23 hours left"
        );
        assert_eq!(
            time_remaining(&goal_ending_at(now + Duration::hours(24)), now),
            "1 day left"
        );
        assert_eq!(
            time_remaining(&goal_ending_at(now + Duration::hours(49)), now),
            "2 days left"
        );
    }

    #[test]
    fn validate_fills_defaults() {
        let new_goal = validate_goal(create_request(Some("Read 5 books"))).unwrap();
        assert_eq!(new_goal.goal_type, GoalType::Weekly);
        assert_eq!(new_goal.target_count, 5);
    }

    #[test]
    fn validate_rejects_missing_or_blank_title() {
        assert!(matches!(
            validate_goal(create_request(None)),
            Err(ApiError::Validation(_))
        ));
        assert!(matches!(
            validate_goal(create_request(Some("   "))),
            Err(ApiError::Validation(_))
        ));
    }

    #[test]
    fn validate_rejects_bad_target_and_type_and_date() {
        let mut request = create_request(Some("ok"));
        request.target_count = Some(0);
        assert!(matches!(
            validate_goal(request),
            Err(ApiError::Validation(_))
        ));

        let mut request = create_request(Some("ok"));
        request.goal_type = Some("hourly".to_string());
        assert!(matches!(
            validate_goal(request),
            Err(ApiError::Validation(_))
        ));

        let mut request = create_request(Some("ok"));
        request.end_date = Some("not a date".to_string());
        assert!(matches!(
            validate_goal(request),
            Err(ApiError::Validation(_))
        ));

        let mut request = create_request(Some("ok"));
        request.end_date = None;
        assert!(matches!(
            validate_goal(request),
            Err(ApiError::Validation(_))
        ));
    }
}

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, Row};

use crate::api_error::{ApiError, ApiResult};

use super::data::*;

const GOAL_COLUMNS: &str =
    "rowid, title, description, goal_type, target_count, current_count, completed, end_date, created_at";

fn goal_from_row(row: &Row) -> ApiResult<Goal> {
    let goal_type_text = row.get::<usize, String>(3)?;
    let goal_type = GoalType::from_str(&goal_type_text)
        .ok_or_else(|| ApiError::Storage(format!("unknown goal type '{}'", goal_type_text)))?;

    Ok(Goal {
        id: row.get::<usize, GoalID>(0)?,
        title: row.get::<usize, String>(1)?,
        description: row.get::<usize, Option<String>>(2)?,
        goal_type,
        target_count: row.get::<usize, i64>(4)?,
        current_count: row.get::<usize, i64>(5)?,
        completed: row.get::<usize, bool>(6)?,
        end_date: row.get::<usize, DateTime<Utc>>(7)?,
        created_at: row.get::<usize, DateTime<Utc>>(8)?,
    })
}

pub fn add_goal_to_db(goal: &NewGoal, db_connection: &Connection) -> ApiResult<Goal> {
    db_connection.execute(
        "INSERT INTO goals (title, description, goal_type, target_count, current_count, completed, end_date, created_at)
         VALUES (?1, ?2, ?3, ?4, 0, 0, ?5, ?6)",
        params![
            goal.title,
            goal.description,
            goal.goal_type.as_str(),
            goal.target_count,
            goal.end_date,
            Utc::now(),
        ],
    )?;

    get_goal_from_db(db_connection.last_insert_rowid(), db_connection)
}

pub fn get_all_goals_from_db(db_connection: &Connection) -> ApiResult<Vec<Goal>> {
    let mut statement =
        db_connection.prepare(&format!("SELECT {} FROM goals", GOAL_COLUMNS))?;

    let rows = statement.query_and_then([], |row| goal_from_row(row))?;

    let mut goals = vec![];
    for row_result in rows {
        goals.push(row_result?);
    }

    Ok(goals)
}

pub fn get_goal_from_db(goal_id: GoalID, db_connection: &Connection) -> ApiResult<Goal> {
    let mut statement = db_connection.prepare(&format!(
        "SELECT {} FROM goals WHERE rowid = ?1",
        GOAL_COLUMNS
    ))?;

    let mut rows = statement.query_and_then(params![goal_id], |row| goal_from_row(row))?;

    match rows.next() {
        Some(goal) => goal,
        None => Err(ApiError::NotFound(format!("no goal with id {}", goal_id))),
    }
}

pub fn update_goal_in_db(goal: &Goal, db_connection: &Connection) -> ApiResult<()> {
    let changed = db_connection.execute(
        "UPDATE goals
         SET title = ?1, description = ?2, goal_type = ?3, target_count = ?4,
             current_count = ?5, completed = ?6, end_date = ?7
         WHERE rowid = ?8",
        params![
            goal.title,
            goal.description,
            goal.goal_type.as_str(),
            goal.target_count,
            goal.current_count,
            goal.completed,
            goal.end_date,
            goal.id,
        ],
    )?;

    if changed == 0 {
        return Err(ApiError::NotFound(format!("no goal with id {}", goal.id)));
    }

    Ok(())
}

pub fn delete_goal_from_db(goal_id: GoalID, db_connection: &Connection) -> ApiResult<()> {
    let changed = db_connection.execute("DELETE FROM goals WHERE rowid = ?1", params![goal_id])?;

    if changed == 0 {
        return Err(ApiError::NotFound(format!("no goal with id {}", goal_id)));
    }

    Ok(())
}

/// Bumps the count and re-derives completion in one statement so concurrent
/// increments cannot lose an update. The right-hand side sees the old row, so
/// `current_count + 1` is the post-increment value on both assignments.
pub fn increment_goal_in_db(goal_id: GoalID, db_connection: &Connection) -> ApiResult<Goal> {
    let changed = db_connection.execute(
        "UPDATE goals
         SET current_count = current_count + 1,
             completed = (current_count + 1 >= target_count)
         WHERE rowid = ?1",
        params![goal_id],
    )?;

    if changed == 0 {
        return Err(ApiError::NotFound(format!("no goal with id {}", goal_id)));
    }

    get_goal_from_db(goal_id, db_connection)
}

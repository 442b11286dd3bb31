use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, Row};

use crate::api_error::{ApiError, ApiResult};

use super::data::*;

const TASK_COLUMNS: &str = "rowid, title, description, priority, status, due_date, created_at";

fn task_from_row(row: &Row) -> ApiResult<Task> {
    let priority_text = row.get::<usize, String>(3)?;
    let priority = TaskPriority::from_str(&priority_text)
        .ok_or_else(|| ApiError::Storage(format!("unknown priority '{}'", priority_text)))?;

    let status_text = row.get::<usize, String>(4)?;
    let status = TaskStatus::from_str(&status_text)
        .ok_or_else(|| ApiError::Storage(format!("unknown status '{}'", status_text)))?;

    Ok(Task {
        id: row.get::<usize, TaskID>(0)?,
        title: row.get::<usize, String>(1)?,
        description: row.get::<usize, Option<String>>(2)?,
        priority,
        status,
        due_date: row.get::<usize, Option<DateTime<Utc>>>(5)?,
        created_at: row.get::<usize, DateTime<Utc>>(6)?,
    })
}

pub fn add_task_to_db(task: &NewTask, db_connection: &Connection) -> ApiResult<Task> {
    db_connection.execute(
        "INSERT INTO tasks (title, description, priority, status, due_date, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            task.title,
            task.description,
            task.priority.as_str(),
            task.status.as_str(),
            task.due_date,
            Utc::now(),
        ],
    )?;

    get_task_from_db(db_connection.last_insert_rowid(), db_connection)
}

pub fn get_all_tasks_from_db(db_connection: &Connection) -> ApiResult<Vec<Task>> {
    let mut statement = db_connection.prepare(&format!("SELECT {} FROM tasks", TASK_COLUMNS))?;

    let rows = statement.query_and_then([], |row| task_from_row(row))?;

    let mut tasks = vec![];
    for row_result in rows {
        tasks.push(row_result?);
    }

    Ok(tasks)
}

pub fn get_task_from_db(task_id: TaskID, db_connection: &Connection) -> ApiResult<Task> {
    let mut statement = db_connection.prepare(&format!(
        "SELECT {} FROM tasks WHERE rowid = ?1",
        TASK_COLUMNS
    ))?;

    let mut rows = statement.query_and_then(params![task_id], |row| task_from_row(row))?;

    match rows.next() {
        Some(task) => task,
        None => Err(ApiError::NotFound(format!("no task with id {}", task_id))),
    }
}

pub fn update_task_in_db(task: &Task, db_connection: &Connection) -> ApiResult<()> {
    let changed = db_connection.execute(
        "UPDATE tasks
         SET title = ?1, description = ?2, priority = ?3, status = ?4, due_date = ?5
         WHERE rowid = ?6",
        params![
            task.title,
            task.description,
            task.priority.as_str(),
            task.status.as_str(),
            task.due_date,
            task.id,
        ],
    )?;

    if changed == 0 {
        return Err(ApiError::NotFound(format!("no task with id {}", task.id)));
    }

    Ok(())
}

pub fn delete_task_from_db(task_id: TaskID, db_connection: &Connection) -> ApiResult<()> {
    let changed = db_connection.execute("DELETE FROM tasks WHERE rowid = ?1", params![task_id])?;

    if changed == 0 {
        return Err(ApiError::NotFound(format!("no task with id {}", task_id)));
    }

    Ok(())
}

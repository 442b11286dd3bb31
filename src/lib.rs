use rocket::serde::json::Json;
use rocket::{get, routes, Build, Rocket};
use rusqlite::{params, Connection};

pub mod api_error;
pub mod config;
pub mod data;
pub mod goals;
pub mod tasks;

use data::DBConnection;

/// Creates the two collections backing the API. Safe to run on every startup.
pub fn init_db(connection: &Connection) -> rusqlite::Result<()> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS goals (
            title TEXT NOT NULL,
            description TEXT,
            goal_type TEXT NOT NULL,
            target_count INTEGER NOT NULL,
            current_count INTEGER NOT NULL,
            completed INTEGER NOT NULL,
            end_date TEXT NOT NULL,
            created_at TEXT NOT NULL
        )",
        params![],
    )?;
    connection.execute(
        "CREATE TABLE IF NOT EXISTS tasks (
            title TEXT NOT NULL,
            description TEXT,
            priority TEXT NOT NULL,
            status TEXT NOT NULL,
            due_date TEXT,
            created_at TEXT NOT NULL
        )",
        params![],
    )?;

    Ok(())
}

#[get("/")]
fn index() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "message": "Welcome to TaskFlow Pro API!" }))
}

pub fn rocket(db_connection: DBConnection) -> Rocket<Build> {
    rocket::build()
        .manage(db_connection)
        .mount(
            "/api",
            routes![
                goals::endpoints::get_goals,
                goals::endpoints::get_goal,
                goals::endpoints::add_goal,
                goals::endpoints::update_goal,
                goals::endpoints::delete_goal,
                goals::endpoints::increment_goal,
                tasks::endpoints::get_tasks,
                tasks::endpoints::get_task,
                tasks::endpoints::add_task,
                tasks::endpoints::update_task,
                tasks::endpoints::delete_task,
            ],
        )
        .mount("/", routes![index])
}

use rocket::response::status::Created;
use rocket::serde::json::Json;
use rocket::{delete, get, post, put, State};

use crate::api_error::ApiResult;
use crate::data::DBConnection;

use super::data::*;
use super::helpers::*;

#[get("/tasks")]
pub fn get_tasks(db_connection: &State<DBConnection>) -> ApiResult<Json<Vec<Task>>> {
    let db_connection = db_connection.lock()?;

    let tasks = get_all_tasks_from_db(&db_connection)?;

    Ok(Json(tasks))
}

#[get("/tasks/<id>")]
pub fn get_task(id: TaskID, db_connection: &State<DBConnection>) -> ApiResult<Json<Task>> {
    let db_connection = db_connection.lock()?;

    let task = get_task_from_db(id, &db_connection)?;

    Ok(Json(task))
}

#[post("/tasks", format = "json", data = "<create_task_request>")]
pub fn add_task(
    create_task_request: Json<CreateTaskRequest>,
    db_connection: &State<DBConnection>,
) -> ApiResult<Created<Json<Task>>> {
    let db_connection = db_connection.lock()?;

    let new_task = create_task_request.into_inner().validate()?;
    let task = add_task_to_db(&new_task, &db_connection)?;

    let location = format!("/api/tasks/{}", task.id);
    Ok(Created::new(location).body(Json(task)))
}

#[put("/tasks/<id>", format = "json", data = "<task_update>")]
pub fn update_task(
    id: TaskID,
    task_update: Json<TaskUpdate>,
    db_connection: &State<DBConnection>,
) -> ApiResult<Json<Task>> {
    let db_connection = db_connection.lock()?;

    let mut task = get_task_from_db(id, &db_connection)?;
    task_update.into_inner().apply(&mut task)?;
    update_task_in_db(&task, &db_connection)?;

    Ok(Json(task))
}

#[delete("/tasks/<id>")]
pub fn delete_task(
    id: TaskID,
    db_connection: &State<DBConnection>,
) -> ApiResult<Json<DeleteTaskResponse>> {
    let db_connection = db_connection.lock()?;

    delete_task_from_db(id, &db_connection)?;

    Ok(Json(DeleteTaskResponse {
        message: "Task deleted successfully".to_string(),
    }))
}

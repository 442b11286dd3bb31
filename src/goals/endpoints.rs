use rocket::response::status::Created;
use rocket::serde::json::Json;
use rocket::{delete, get, post, put, State};

use crate::api_error::ApiResult;
use crate::data::DBConnection;

use super::data::*;
use super::helpers::{get_all_goals_from_db, get_goal_from_db};
use super::service;

#[get("/goals")]
pub fn get_goals(db_connection: &State<DBConnection>) -> ApiResult<Json<Vec<Goal>>> {
    let db_connection = db_connection.lock()?;

    let goals = get_all_goals_from_db(&db_connection)?;

    Ok(Json(goals))
}

#[get("/goals/<id>")]
pub fn get_goal(id: GoalID, db_connection: &State<DBConnection>) -> ApiResult<Json<Goal>> {
    let db_connection = db_connection.lock()?;

    let goal = get_goal_from_db(id, &db_connection)?;

    Ok(Json(goal))
}

#[post("/goals", format = "json", data = "<create_goal_request>")]
pub fn add_goal(
    create_goal_request: Json<CreateGoalRequest>,
    db_connection: &State<DBConnection>,
) -> ApiResult<Created<Json<Goal>>> {
    let db_connection = db_connection.lock()?;

    let goal = service::create_goal(create_goal_request.into_inner(), &db_connection)?;

    let location = format!("/api/goals/{}", goal.id);
    Ok(Created::new(location).body(Json(goal)))
}

#[put("/goals/<id>", format = "json", data = "<goal_update>")]
pub fn update_goal(
    id: GoalID,
    goal_update: Json<GoalUpdate>,
    db_connection: &State<DBConnection>,
) -> ApiResult<Json<Goal>> {
    let db_connection = db_connection.lock()?;

    let goal = service::update_goal(id, goal_update.into_inner(), &db_connection)?;

    Ok(Json(goal))
}

#[delete("/goals/<id>")]
pub fn delete_goal(
    id: GoalID,
    db_connection: &State<DBConnection>,
) -> ApiResult<Json<DeleteGoalResponse>> {
    let db_connection = db_connection.lock()?;

    service::delete_goal(id, &db_connection)?;

    Ok(Json(DeleteGoalResponse {
        message: "Goal deleted successfully".to_string(),
    }))
}

#[post("/goals/<id>/increment")]
pub fn increment_goal(id: GoalID, db_connection: &State<DBConnection>) -> ApiResult<Json<Goal>> {
    let db_connection = db_connection.lock()?;

    let goal = service::increment_goal(id, &db_connection)?;

    Ok(Json(goal))
}

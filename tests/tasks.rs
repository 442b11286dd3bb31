use rocket::http::{ContentType, Status};
use rocket::local::blocking::{Client, LocalResponse};
use rusqlite::Connection;
use serde_json::{json, Value};

use std::sync::{Arc, Mutex};

fn client() -> Client {
    let connection = Connection::open_in_memory().expect("in-memory sqlite");
    taskflow::init_db(&connection).expect("schema init");
    Client::tracked(taskflow::rocket(Arc::new(Mutex::new(connection))))
        .expect("valid rocket instance")
}

fn post_task(client: &Client, body: Value) -> LocalResponse<'_> {
    client
        .post("/api/tasks")
        .header(ContentType::JSON)
        .body(body.to_string())
        .dispatch()
}

fn create_task(client: &Client, body: Value) -> Value {
    let response = post_task(client, body);
    assert_eq!(response.status(), Status::Created);
    response.into_json().expect("task body")
}

#[test]
fn creation_fills_defaults() {
    let client = client();
    let task = create_task(&client, json!({ "title": "Water the plants" }));

    assert_eq!(task["priority"], "medium");
    assert_eq!(task["status"], "pending");
    assert!(task["id"].is_string());
    assert!(task.get("dueDate").is_none());
}

#[test]
fn creation_rejects_bad_input() {
    let client = client();

    assert_eq!(post_task(&client, json!({})).status(), Status::BadRequest);
    assert_eq!(
        post_task(&client, json!({ "title": " " })).status(),
        Status::BadRequest
    );
    assert_eq!(
        post_task(&client, json!({ "title": "t", "priority": "urgent" })).status(),
        Status::BadRequest
    );
    assert_eq!(
        post_task(&client, json!({ "title": "t", "status": "done" })).status(),
        Status::BadRequest
    );
    assert_eq!(
        post_task(&client, json!({ "title": "t", "dueDate": "soon" })).status(),
        Status::BadRequest
    );
}

#[test]
fn create_then_fetch_round_trips() {
    let client = client();
    let created = create_task(
        &client,
        json!({
            "title": "File taxes",
            "description": "before the deadline",
            "priority": "high",
            "status": "in-progress",
            "dueDate": "2099-04-15"
        }),
    );

    let id = created["id"].as_str().unwrap();
    let response = client.get(format!("/api/tasks/{}", id)).dispatch();
    assert_eq!(response.status(), Status::Ok);
    let fetched: Value = response.into_json().unwrap();

    assert_eq!(fetched, created);
    assert_eq!(fetched["priority"], "high");
    assert_eq!(fetched["status"], "in-progress");
}

#[test]
fn update_merges_present_fields_only() {
    let client = client();
    let task = create_task(
        &client,
        json!({ "title": "Call plumber", "priority": "low" }),
    );
    let id = task["id"].as_str().unwrap();

    let response = client
        .put(format!("/api/tasks/{}", id))
        .header(ContentType::JSON)
        .body(json!({ "status": "completed" }).to_string())
        .dispatch();
    assert_eq!(response.status(), Status::Ok);
    let updated: Value = response.into_json().unwrap();

    assert_eq!(updated["status"], "completed");
    assert_eq!(updated["title"], "Call plumber");
    assert_eq!(updated["priority"], "low");
}

#[test]
fn update_rejects_unknown_enum_values() {
    let client = client();
    let task = create_task(&client, json!({ "title": "Tidy desk" }));
    let id = task["id"].as_str().unwrap();

    let response = client
        .put(format!("/api/tasks/{}", id))
        .header(ContentType::JSON)
        .body(json!({ "priority": "urgent" }).to_string())
        .dispatch();
    assert_eq!(response.status(), Status::BadRequest);
}

#[test]
fn unknown_ids_are_404() {
    let client = client();

    assert_eq!(
        client.get("/api/tasks/424242").dispatch().status(),
        Status::NotFound
    );
    assert_eq!(
        client.delete("/api/tasks/424242").dispatch().status(),
        Status::NotFound
    );
    let response = client
        .put("/api/tasks/424242")
        .header(ContentType::JSON)
        .body(json!({ "title": "nope" }).to_string())
        .dispatch();
    assert_eq!(response.status(), Status::NotFound);
}

#[test]
fn delete_then_fetch_is_404() {
    let client = client();
    let task = create_task(&client, json!({ "title": "Recycle" }));
    let id = task["id"].as_str().unwrap().to_string();

    let response = client.delete(format!("/api/tasks/{}", id)).dispatch();
    assert_eq!(response.status(), Status::Ok);
    let body: Value = response.into_json().unwrap();
    assert_eq!(body["message"], "Task deleted successfully");

    assert_eq!(
        client
            .get(format!("/api/tasks/{}", id))
            .dispatch()
            .status(),
        Status::NotFound
    );
}

#[test]
fn list_returns_every_task() {
    let client = client();
    create_task(&client, json!({ "title": "One" }));
    create_task(&client, json!({ "title": "Two" }));
    create_task(&client, json!({ "title": "Three" }));

    let response = client.get("/api/tasks").dispatch();
    assert_eq!(response.status(), Status::Ok);
    let tasks: Vec<Value> = response.into_json().unwrap();
    assert_eq!(tasks.len(), 3);
}

//! CRUD lifecycle over a real socket with a file-backed store.
//!
//! # Design
//! Starts the server on a random port with a `JsonFileCollection` in a temp
//! directory, drives it with ureq, then reopens the data file to check that
//! what the server answered is what it persisted.

use serde_json::{json, Value};
use todo_core::{JsonFileCollection, TodoStore};
use todo_server::AppState;

struct Reply {
    status: u16,
    body: String,
}

impl Reply {
    fn json(&self) -> Value {
        serde_json::from_str(&self.body).unwrap()
    }
}

/// Disables ureq's status-as-error behavior so 4xx/5xx come back as data.
fn send(method: &str, url: &str, body: Option<Value>) -> Reply {
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .build()
        .new_agent();

    let mut response = match (method, body) {
        ("GET", _) => agent.get(url).call(),
        ("DELETE", _) => agent.delete(url).call(),
        ("POST", Some(body)) => agent
            .post(url)
            .content_type("application/json")
            .send(body.to_string().as_bytes()),
        ("PUT", Some(body)) => agent
            .put(url)
            .content_type("application/json")
            .send(body.to_string().as_bytes()),
        (other, _) => panic!("unsupported request: {other}"),
    }
    .expect("HTTP transport error");

    Reply {
        status: response.status().as_u16(),
        body: response.body_mut().read_to_string().unwrap_or_default(),
    }
}

#[test]
fn crud_lifecycle_persists_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let data_file = dir.path().join("todos.json");

    // Step 1: start the server on a random port.
    let std_listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = std_listener.local_addr().unwrap();
    std_listener.set_nonblocking(true).unwrap();

    let server_file = data_file.clone();
    std::thread::spawn(move || {
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        rt.block_on(async {
            let collection = JsonFileCollection::open(server_file).await.unwrap();
            let state = AppState::new(TodoStore::new(collection));
            let listener = tokio::net::TcpListener::from_std(std_listener).unwrap();
            todo_server::run(listener, state).await
        })
        .unwrap();
    });

    let base = format!("http://{addr}");

    // Step 2: root and empty list.
    let reply = send("GET", &format!("{base}/"), None);
    assert_eq!(reply.status, 200);
    assert_eq!(reply.json(), json!("Hello World"));

    let reply = send("GET", &format!("{base}/todos"), None);
    assert_eq!(reply.status, 200);
    assert_eq!(reply.json(), json!([]));

    // Step 3: create two todos.
    let reply = send(
        "POST",
        &format!("{base}/todos"),
        Some(json!({"description": "buy milk", "done": false})),
    );
    assert_eq!(reply.status, 201);
    let milk = reply.json();
    let milk_id = milk["id"].as_str().unwrap().to_string();

    let reply = send(
        "POST",
        &format!("{base}/todos"),
        Some(json!({"description": "walk dog", "done": false})),
    );
    assert_eq!(reply.status, 201);
    let dog_id = reply.json()["id"].as_str().unwrap().to_string();

    // Step 4: update one, delete the other.
    let reply = send(
        "PUT",
        &format!("{base}/todos/{milk_id}"),
        Some(json!({"done": true})),
    );
    assert_eq!(reply.status, 200);
    assert_eq!(
        reply.json(),
        json!({"id": milk_id, "description": "buy milk", "done": true})
    );

    let reply = send("DELETE", &format!("{base}/todos/{dog_id}"), None);
    assert_eq!(reply.status, 200);
    assert_eq!(reply.json()["description"], "walk dog");

    // Step 5: the deleted todo is gone, a second delete is 404.
    let reply = send("GET", &format!("{base}/todos/{dog_id}"), None);
    assert_eq!(reply.status, 404);
    assert!(reply.body.is_empty());
    let reply = send("DELETE", &format!("{base}/todos/{dog_id}"), None);
    assert_eq!(reply.status, 404);

    // Step 6: a malformed id is a 500 with a message.
    let reply = send("GET", &format!("{base}/todos/not-an-id"), None);
    assert_eq!(reply.status, 500);
    assert_eq!(reply.json(), json!({"message": "invalid document id \"not-an-id\""}));

    // Step 7: the data file holds exactly the surviving todo.
    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .unwrap();
    let persisted = rt.block_on(async {
        let store = TodoStore::new(JsonFileCollection::open(&data_file).await.unwrap());
        store.find_all().await.unwrap()
    });
    assert_eq!(persisted.len(), 1);
    assert_eq!(persisted[0].id.to_string(), milk_id);
    assert_eq!(persisted[0].get("done"), Some(&json!(true)));
}

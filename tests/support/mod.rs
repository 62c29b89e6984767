//! A json-server stand-in for integration tests, served by wiremock.
//!
//! One catch-all mock answers `/posts` and `/comments` from shared in-memory
//! tables. Records are matched on the string form of their `id`, a duplicate
//! id on create is answered with 500 and writes to unknown ids with 404, like
//! json-server does.

#![allow(dead_code)]

use serde_json::{json, Value};
use std::net::TcpListener;
use std::sync::{Arc, Mutex};
use tokio::runtime::Runtime;
use wiremock::matchers::any;
use wiremock::{Mock, MockServer, Request, Respond, ResponseTemplate};

#[derive(Default)]
struct State {
    posts: Vec<Value>,
    comments: Vec<Value>,
    requests: Vec<String>,
    reject_writes: Option<u16>,
}

impl State {
    fn table(&mut self, name: &str) -> Option<&mut Vec<Value>> {
        match name {
            "posts" => Some(&mut self.posts),
            "comments" => Some(&mut self.comments),
            _ => None,
        }
    }
}

struct JsonServer {
    state: Arc<Mutex<State>>,
}

impl Respond for JsonServer {
    fn respond(&self, request: &Request) -> ResponseTemplate {
        let body = serde_json::from_slice(&request.body).ok();
        let mut state = self.state.lock().unwrap();
        let (status, reply) = respond(
            &mut state,
            request.method.as_str(),
            request.url.path(),
            body,
        );
        ResponseTemplate::new(status).set_body_json(reply)
    }
}

pub struct StubServer {
    pub url: String,
    state: Arc<Mutex<State>>,
    // Dropped before the runtime it was started on.
    server: MockServer,
    runtime: Runtime,
}

impl StubServer {
    pub fn start() -> Self {
        let runtime = Runtime::new().unwrap();
        let state = Arc::new(Mutex::new(State::default()));

        let server = runtime.block_on(async {
            let server = MockServer::builder().start().await;
            Mock::given(any())
                .respond_with(JsonServer {
                    state: Arc::clone(&state),
                })
                .mount(&server)
                .await;
            server
        });

        Self {
            url: server.uri(),
            state,
            server,
            runtime,
        }
    }

    pub fn with_post(self, id: &str, title: &str, views: i64) -> Self {
        self.state.lock().unwrap().posts.push(json!({
            "id": id, "title": title, "views": views, "isDeleted": false
        }));
        self
    }

    pub fn with_comment(self, id: &str, text: &str, post_id: &str) -> Self {
        self.state.lock().unwrap().comments.push(json!({
            "id": id, "text": text, "postId": post_id
        }));
        self
    }

    pub fn with_raw(self, table: &str, record: Value) -> Self {
        self.state
            .lock()
            .unwrap()
            .table(table)
            .expect("unknown table")
            .push(record);
        self
    }

    pub fn reject_writes(&self, status: u16) {
        self.state.lock().unwrap().reject_writes = Some(status);
    }

    pub fn posts(&self) -> Vec<Value> {
        self.state.lock().unwrap().posts.clone()
    }

    pub fn comments(&self) -> Vec<Value> {
        self.state.lock().unwrap().comments.clone()
    }

    /// Requests seen so far, as "METHOD /path".
    pub fn requests(&self) -> Vec<String> {
        self.state.lock().unwrap().requests.clone()
    }
}

/// A base url nothing listens on.
pub fn dead_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").unwrap();
    format!("http://{}", listener.local_addr().unwrap())
}

fn respond(state: &mut State, method: &str, path: &str, body: Option<Value>) -> (u16, Value) {
    state.requests.push(format!("{} {}", method, path));

    let segments: Vec<&str> = path.trim_matches('/').split('/').collect();
    let (name, id) = match segments.as_slice() {
        [name] => (*name, None),
        [name, id] => (*name, Some(*id)),
        _ => return (404, json!({})),
    };
    if method != "GET" {
        if let Some(status) = state.reject_writes {
            return (status, json!({}));
        }
    }
    let Some(table) = state.table(name) else {
        return (404, json!({}));
    };
    let position = id.and_then(|id| table.iter().position(|r| id_of(r).as_deref() == Some(id)));

    match (method, id, position) {
        ("GET", None, _) => (200, Value::Array(table.clone())),
        ("GET", Some(_), Some(i)) => (200, table[i].clone()),
        ("POST", None, _) => {
            let record = body.unwrap_or_else(|| json!({}));
            let new_id = id_of(&record);
            if table.iter().any(|r| id_of(r) == new_id) {
                return (500, json!({}));
            }
            table.push(record.clone());
            (201, record)
        }
        ("PUT", Some(_), Some(i)) => {
            let mut record = body.unwrap_or_else(|| json!({}));
            record["id"] = table[i]["id"].clone();
            table[i] = record.clone();
            (200, record)
        }
        ("PATCH", Some(_), Some(i)) => {
            if let (Some(target), Some(Value::Object(fields))) =
                (table[i].as_object_mut(), body)
            {
                target.extend(fields);
            }
            (200, table[i].clone())
        }
        ("DELETE", Some(_), Some(i)) => {
            table.remove(i);
            (200, json!({}))
        }
        _ => (404, json!({})),
    }
}

fn id_of(record: &Value) -> Option<String> {
    match record.get("id")? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

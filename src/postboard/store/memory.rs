use super::RecordStore;
use crate::error::{BoardError, Result};
use crate::model::Resource;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::cell::RefCell;
use std::collections::HashMap;

/// In-memory record store for testing and development.
/// Does NOT persist data.
///
/// Behaves like a json-server backend: records keep insertion order, ids
/// match on their string form, duplicate ids are refused on create, and
/// writes to unknown ids answer 404.
///
/// Every request is recorded (e.g. `"PATCH /posts/3"`) so tests can assert
/// on what was sent. Uses `RefCell` because reads take `&self`.
#[derive(Default)]
pub struct InMemoryStore {
    records: HashMap<Resource, Vec<Value>>,
    requests: RefCell<Vec<String>>,
    reject_writes: Option<u16>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every write answer with `status` until cleared with `None`.
    pub fn set_reject_writes(&mut self, status: Option<u16>) {
        self.reject_writes = status;
    }

    /// Requests seen so far, oldest first.
    pub fn requests(&self) -> Vec<String> {
        self.requests.borrow().clone()
    }

    pub fn clear_requests(&self) {
        self.requests.borrow_mut().clear();
    }

    /// Raw stored JSON of a resource.
    pub fn raw(&self, resource: Resource) -> &[Value] {
        self.records.get(&resource).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Insert a raw JSON record without going through the request log.
    pub fn seed(&mut self, resource: Resource, record: Value) {
        self.records.entry(resource).or_default().push(record);
    }

    fn log(&self, method: &str, path: &str) {
        self.requests
            .borrow_mut()
            .push(format!("{} {}", method, path));
    }

    fn position(&self, resource: Resource, id: &str) -> Option<usize> {
        self.records
            .get(&resource)?
            .iter()
            .position(|record| id_of(record).as_deref() == Some(id))
    }

    fn begin_write(&self, method: &str, path: String) -> Result<String> {
        self.log(method, &path);
        match self.reject_writes {
            Some(status) => Err(BoardError::Rejected {
                method: method.to_string(),
                path,
                status,
            }),
            None => Ok(path),
        }
    }
}

fn id_of(record: &Value) -> Option<String> {
    match record.get("id")? {
        Value::String(s) => Some(s.clone()),
        Value::Null => None,
        other => Some(other.to_string()),
    }
}

fn not_found(method: &str, path: String) -> BoardError {
    BoardError::Rejected {
        method: method.to_string(),
        path,
        status: 404,
    }
}

impl RecordStore for InMemoryStore {
    fn list<T: DeserializeOwned>(&self, resource: Resource) -> Result<Vec<T>> {
        self.log("GET", &format!("/{}", resource));
        self.raw(resource)
            .iter()
            .map(|record| Ok(serde_json::from_value(record.clone())?))
            .collect()
    }

    fn get<T: DeserializeOwned>(&self, resource: Resource, id: &str) -> Result<Option<T>> {
        self.log("GET", &format!("/{}/{}", resource, id));
        match self.position(resource, id) {
            Some(pos) => Ok(Some(serde_json::from_value(
                self.records[&resource][pos].clone(),
            )?)),
            None => Ok(None),
        }
    }

    fn create<T: Serialize>(&mut self, resource: Resource, record: &T) -> Result<()> {
        let path = self.begin_write("POST", format!("/{}", resource))?;
        let value = serde_json::to_value(record)?;
        if let Some(id) = id_of(&value) {
            if self.position(resource, &id).is_some() {
                return Err(BoardError::Rejected {
                    method: "POST".to_string(),
                    path,
                    status: 500,
                });
            }
        }
        self.records.entry(resource).or_default().push(value);
        Ok(())
    }

    fn replace<T: Serialize>(&mut self, resource: Resource, id: &str, record: &T) -> Result<()> {
        let path = self.begin_write("PUT", format!("/{}/{}", resource, id))?;
        let value = serde_json::to_value(record)?;
        let pos = self
            .position(resource, id)
            .ok_or_else(|| not_found("PUT", path))?;
        if let Some(slot) = self.records.get_mut(&resource) {
            slot[pos] = value;
        }
        Ok(())
    }

    fn patch<T: Serialize>(&mut self, resource: Resource, id: &str, fields: &T) -> Result<()> {
        let path = self.begin_write("PATCH", format!("/{}/{}", resource, id))?;
        let fields = serde_json::to_value(fields)?;
        let pos = self
            .position(resource, id)
            .ok_or_else(|| not_found("PATCH", path.clone()))?;
        let record = self
            .records
            .get_mut(&resource)
            .and_then(|records| records.get_mut(pos))
            .and_then(Value::as_object_mut);
        match (record, fields) {
            (Some(record), Value::Object(fields)) => {
                record.extend(fields);
                Ok(())
            }
            _ => Err(BoardError::Rejected {
                method: "PATCH".to_string(),
                path,
                status: 400,
            }),
        }
    }

    fn delete(&mut self, resource: Resource, id: &str) -> Result<()> {
        let path = self.begin_write("DELETE", format!("/{}/{}", resource, id))?;
        let pos = self
            .position(resource, id)
            .ok_or_else(|| not_found("DELETE", path))?;
        if let Some(records) = self.records.get_mut(&resource) {
            records.remove(pos);
        }
        Ok(())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::{Comment, Post};

    pub struct StoreFixture {
        pub store: InMemoryStore,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryStore::new(),
            }
        }

        pub fn with_post(mut self, id: &str, title: &str, views: i64) -> Self {
            let post = Post::new(id.to_string(), title.to_string(), views);
            self.seed(Resource::Posts, &post);
            self
        }

        pub fn with_deleted_post(mut self, id: &str, title: &str) -> Self {
            let mut post = Post::new(id.to_string(), title.to_string(), 0);
            post.is_deleted = true;
            self.seed(Resource::Posts, &post);
            self
        }

        pub fn with_comment(mut self, id: &str, text: &str, post_id: &str) -> Self {
            let comment = Comment::new(id.to_string(), text.to_string(), post_id.to_string());
            self.seed(Resource::Comments, &comment);
            self
        }

        /// Seed a record verbatim, e.g. with a numeric or malformed id.
        pub fn with_raw(mut self, resource: Resource, record: Value) -> Self {
            self.store.seed(resource, record);
            self
        }

        fn seed<T: Serialize>(&mut self, resource: Resource, record: &T) {
            let value = serde_json::to_value(record).unwrap();
            self.store.seed(resource, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::StoreFixture;
    use super::*;
    use crate::model::{Comment, Post};
    use serde_json::json;

    #[test]
    fn get_matches_numeric_ids_by_string_form() {
        let store = StoreFixture::new()
            .with_raw(Resource::Posts, json!({"id": 3, "title": "Numeric"}))
            .store;

        let post: Option<Post> = store.get(Resource::Posts, "3").unwrap();
        assert_eq!(post.unwrap().title, "Numeric");

        let missing: Option<Post> = store.get(Resource::Posts, "4").unwrap();
        assert!(missing.is_none());
    }

    #[test]
    fn create_refuses_duplicate_ids() {
        let mut store = StoreFixture::new().with_post("1", "First", 0).store;
        let err = store
            .create(Resource::Posts, &Post::new("1".into(), "Again".into(), 0))
            .unwrap_err();
        assert!(matches!(err, BoardError::Rejected { status: 500, .. }));
        assert_eq!(store.raw(Resource::Posts).len(), 1);
    }

    #[test]
    fn patch_merges_fields() {
        let mut store = StoreFixture::new().with_post("1", "Title", 5).store;
        store
            .patch(Resource::Posts, "1", &json!({"isDeleted": true}))
            .unwrap();
        assert_eq!(
            store.raw(Resource::Posts)[0],
            json!({"id": "1", "title": "Title", "views": 5, "isDeleted": true})
        );
    }

    #[test]
    fn writes_to_unknown_ids_answer_not_found() {
        let mut store = InMemoryStore::new();
        let err = store.delete(Resource::Comments, "9").unwrap_err();
        assert!(matches!(err, BoardError::Rejected { status: 404, .. }));
        let err = store
            .replace(
                Resource::Comments,
                "9",
                &Comment::new("9".into(), "x".into(), "1".into()),
            )
            .unwrap_err();
        assert!(matches!(err, BoardError::Rejected { status: 404, .. }));
    }

    #[test]
    fn rejected_writes_leave_records_untouched() {
        let mut store = StoreFixture::new().with_comment("1", "Hi", "1").store;
        store.set_reject_writes(Some(503));
        let err = store.delete(Resource::Comments, "1").unwrap_err();
        assert!(matches!(err, BoardError::Rejected { status: 503, .. }));
        assert_eq!(store.raw(Resource::Comments).len(), 1);
    }

    #[test]
    fn records_requests_in_order() {
        let mut store = StoreFixture::new().with_comment("1", "Hi", "1").store;
        let _: Vec<Comment> = store.list(Resource::Comments).unwrap();
        store.delete(Resource::Comments, "1").unwrap();
        assert_eq!(
            store.requests(),
            vec!["GET /comments".to_string(), "DELETE /comments/1".to_string()]
        );
    }
}

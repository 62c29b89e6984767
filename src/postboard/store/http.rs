use super::RecordStore;
use crate::error::{BoardError, Result};
use crate::model::Resource;
use reqwest::blocking::{Client, Response};
use reqwest::{Method, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, warn};

/// REST client talking to a json-server style backend.
pub struct HttpStore {
    client: Client,
    base_url: Url,
}

impl HttpStore {
    /// Builds a client for `base_url`. Requests wait indefinitely unless a
    /// timeout is given.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let base_url = Url::parse(base_url.trim())
            .map_err(|e| BoardError::Config(format!("Invalid API url '{}': {}", base_url, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(BoardError::Config(format!(
                "API url '{}' cannot have resource paths",
                base_url
            )));
        }
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self { client, base_url })
    }

    /// Url of a resource collection, or of one record when `id` is given.
    /// The id is percent-encoded as a single path segment.
    pub fn url_for(&self, resource: Resource, id: Option<&str>) -> Result<Url> {
        let mut url = self.base_url.clone();
        {
            let mut segments = url
                .path_segments_mut()
                .map_err(|_| BoardError::Config(format!("Invalid API url '{}'", self.base_url)))?;
            segments.pop_if_empty().push(resource.path());
            if let Some(id) = id {
                segments.push(id);
            }
        }
        Ok(url)
    }

    fn send(&self, method: Method, url: Url, body: Option<&impl Serialize>) -> Result<Response> {
        debug!(%method, %url, "sending request");
        let mut request = self.client.request(method.clone(), url.clone());
        if let Some(body) = body {
            request = request.json(body);
        }
        let response = request.send()?;
        debug!(%method, %url, status = response.status().as_u16(), "received response");
        Ok(response)
    }

    fn expect_success(method: Method, url: &Url, response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        warn!(%method, %url, status = status.as_u16(), "request rejected");
        Err(BoardError::Rejected {
            method: method.to_string(),
            path: url.path().to_string(),
            status: status.as_u16(),
        })
    }

    fn write<T: Serialize>(&self, method: Method, url: Url, body: Option<&T>) -> Result<()> {
        let response = self.send(method.clone(), url.clone(), body)?;
        Self::expect_success(method, &url, response)?;
        Ok(())
    }
}

impl RecordStore for HttpStore {
    fn list<T: DeserializeOwned>(&self, resource: Resource) -> Result<Vec<T>> {
        let url = self.url_for(resource, None)?;
        let response = self.send(Method::GET, url.clone(), None::<&()>)?;
        let response = Self::expect_success(Method::GET, &url, response)?;
        Ok(response.json()?)
    }

    fn get<T: DeserializeOwned>(&self, resource: Resource, id: &str) -> Result<Option<T>> {
        let url = self.url_for(resource, Some(id))?;
        let response = self.send(Method::GET, url.clone(), None::<&()>)?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let response = Self::expect_success(Method::GET, &url, response)?;
        Ok(Some(response.json()?))
    }

    fn create<T: Serialize>(&mut self, resource: Resource, record: &T) -> Result<()> {
        let url = self.url_for(resource, None)?;
        self.write(Method::POST, url, Some(record))
    }

    fn replace<T: Serialize>(&mut self, resource: Resource, id: &str, record: &T) -> Result<()> {
        let url = self.url_for(resource, Some(id))?;
        self.write(Method::PUT, url, Some(record))
    }

    fn patch<T: Serialize>(&mut self, resource: Resource, id: &str, fields: &T) -> Result<()> {
        let url = self.url_for(resource, Some(id))?;
        self.write(Method::PATCH, url, Some(fields))
    }

    fn delete(&mut self, resource: Resource, id: &str) -> Result<()> {
        let url = self.url_for(resource, Some(id))?;
        self.write::<()>(Method::DELETE, url, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_collection_and_record_urls() {
        let store = HttpStore::new("http://localhost:3000", None).unwrap();
        assert_eq!(
            store.url_for(Resource::Posts, None).unwrap().as_str(),
            "http://localhost:3000/posts"
        );
        assert_eq!(
            store.url_for(Resource::Comments, Some("12")).unwrap().as_str(),
            "http://localhost:3000/comments/12"
        );
    }

    #[test]
    fn keeps_base_path_and_ignores_trailing_slash() {
        let store = HttpStore::new("http://example.com/api/", None).unwrap();
        assert_eq!(
            store.url_for(Resource::Posts, Some("1")).unwrap().as_str(),
            "http://example.com/api/posts/1"
        );
    }

    #[test]
    fn encodes_ids_as_a_single_segment() {
        let store = HttpStore::new("http://localhost:3000", None).unwrap();
        let url = store.url_for(Resource::Posts, Some("a/b c")).unwrap();
        assert_eq!(url.path(), "/posts/a%2Fb%20c");
    }

    #[test]
    fn rejects_unusable_base_urls() {
        assert!(matches!(
            HttpStore::new("not a url", None),
            Err(BoardError::Config(_))
        ));
        assert!(matches!(
            HttpStore::new("mailto:someone@example.com", None),
            Err(BoardError::Config(_))
        ));
    }
}

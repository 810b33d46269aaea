//! HTTP implementation of the content API client.

use std::collections::HashMap;
use std::io::Read;
use std::sync::Mutex;
use std::time::Duration;

use serde_json::json;

use super::types::{Collection, ListQuery};
use super::{ApiError, ApiResult, CloudClient};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
const READ_TIMEOUT: Duration = Duration::from_secs(30);
const WRITE_TIMEOUT: Duration = Duration::from_secs(30);

/// Cap on response bodies read into memory.
const MAX_RESPONSE_BYTES: usize = 4 * 1024 * 1024;

/// `CloudClient` backed by the drive's REST endpoints.
///
/// Keeps a listing cache keyed by folder id and query; `force_fetch`
/// bypasses the cache and refreshes the stored page.
pub struct HttpClient {
    agent: ureq::Agent,
    base_url: String,
    token: Option<String>,
    listing_cache: Mutex<HashMap<String, Collection>>,
}

impl HttpClient {
    pub fn new(base_url: impl Into<String>, token: Option<String>) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(CONNECT_TIMEOUT)
            .timeout_read(READ_TIMEOUT)
            .timeout_write(WRITE_TIMEOUT)
            .build();

        Self {
            agent,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
            listing_cache: Mutex::new(HashMap::new()),
        }
    }

    fn authorize(&self, request: ureq::Request) -> ureq::Request {
        match &self.token {
            Some(token) => request.set("Authorization", &format!("Bearer {}", token.trim())),
            None => request,
        }
    }

    fn listing_url(&self, folder_id: &str, query: &ListQuery) -> String {
        format!(
            "{}/folders/{}/items?limit={}&offset={}&sort={}&direction={}",
            self.base_url,
            folder_id,
            query.limit,
            query.offset,
            query.sort_by.as_str(),
            query.direction.as_str(),
        )
    }

    /// Send a move/copy request: `PUT` re-parents in place, `POST .../copy`
    /// duplicates into the destination. Response bodies are ignored.
    fn transfer(&self, url: &str, method: &str, dest_folder_id: &str) -> ApiResult<()> {
        let request = self
            .authorize(self.agent.request(method, url))
            .set("Accept", "application/json");

        let payload = json!({ "parent": { "id": dest_folder_id } });
        match request.send_json(payload) {
            Ok(_) => Ok(()),
            Err(e) => Err(map_error(e)),
        }
    }
}

impl CloudClient for HttpClient {
    fn folder_items(&self, folder_id: &str, query: &ListQuery) -> ApiResult<Collection> {
        let url = self.listing_url(folder_id, query);

        if !query.force_fetch
            && let Ok(cache) = self.listing_cache.lock()
            && let Some(cached) = cache.get(&url)
        {
            return Ok(cached.clone());
        }

        let response = self
            .authorize(self.agent.get(&url))
            .set("Accept", "application/json")
            .call()
            .map_err(map_error)?;

        let body = read_body(response)?;
        let collection: Collection =
            serde_json::from_str(&body).map_err(|e| ApiError::Decode(e.to_string()))?;

        if let Ok(mut cache) = self.listing_cache.lock() {
            cache.insert(url, collection.clone());
        }
        Ok(collection)
    }

    fn move_file(&self, file_id: &str, dest_folder_id: &str) -> ApiResult<()> {
        let url = format!("{}/files/{}", self.base_url, file_id);
        self.transfer(&url, "PUT", dest_folder_id)
    }

    fn copy_file(&self, file_id: &str, dest_folder_id: &str) -> ApiResult<()> {
        let url = format!("{}/files/{}/copy", self.base_url, file_id);
        self.transfer(&url, "POST", dest_folder_id)
    }

    fn move_folder(&self, folder_id: &str, dest_folder_id: &str) -> ApiResult<()> {
        let url = format!("{}/folders/{}", self.base_url, folder_id);
        self.transfer(&url, "PUT", dest_folder_id)
    }

    fn copy_folder(&self, folder_id: &str, dest_folder_id: &str) -> ApiResult<()> {
        let url = format!("{}/folders/{}/copy", self.base_url, folder_id);
        self.transfer(&url, "POST", dest_folder_id)
    }
}

fn map_error(error: ureq::Error) -> ApiError {
    match error {
        ureq::Error::Status(status, response) => {
            let body = read_body(response).unwrap_or_default();
            ApiError::Status { status, body }
        }
        ureq::Error::Transport(e) => ApiError::Transport(e.to_string()),
    }
}

fn read_body(response: ureq::Response) -> ApiResult<String> {
    let mut limited = response.into_reader().take(MAX_RESPONSE_BYTES as u64 + 1);
    let mut body = String::new();
    limited
        .read_to_string(&mut body)
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    if body.len() > MAX_RESPONSE_BYTES {
        return Err(ApiError::Decode(format!(
            "response exceeded {} bytes",
            MAX_RESPONSE_BYTES
        )));
    }
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::{SortField, SortOrder};

    #[test]
    fn test_listing_url_carries_query() {
        let client = HttpClient::new("https://drive.example.com/api/2/", None);
        let query = ListQuery {
            limit: 1000,
            offset: 0,
            sort_by: SortField::Name,
            direction: SortOrder::Asc,
            force_fetch: true,
        };
        assert_eq!(
            client.listing_url("123", &query),
            "https://drive.example.com/api/2/folders/123/items?limit=1000&offset=0&sort=name&direction=ASC"
        );
    }
}

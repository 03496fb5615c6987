//! HTTP API Client
//!
//! gloo-net implementation of the entries API, sharing request and response
//! types with the CLI client.

use async_trait::async_trait;
use gloo_net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;

use metodo::client::{
    entry_path, examples_path, search_path, AbsurdRequest, AbsurdResponse, AnalyzeResponse,
    ArchivedEntry, ChatRequest, ChatResponse, ConceptRequest, CreatedEntry, DevelopResponse,
    Entry, EntryError, EntryFilter, EntryResult, EntryStore, ListEntriesResponse, NewEntry,
    SearchResponse,
};
use metodo::endpoint::{ApiEndpoint, PageLocation};

/// Resolve the API base from the page the app was served on.
///
/// Runs once at startup; the result is injected through global state.
pub fn resolve_endpoint() -> ApiEndpoint {
    let location = window().location();
    let pathname = location.pathname().unwrap_or_default();
    let hostname = location.hostname().unwrap_or_default();
    let endpoint = ApiEndpoint::resolve(PageLocation {
        pathname: &pathname,
        hostname: &hostname,
    });

    web_sys::console::log_1(&format!("API endpoint: {}", endpoint).into());
    endpoint
}

fn window() -> web_sys::Window {
    leptos::window()
}

/// Entries API client for the browser
#[derive(Debug, Clone, PartialEq)]
pub struct BrowserStore {
    endpoint: ApiEndpoint,
}

impl BrowserStore {
    pub fn new(endpoint: ApiEndpoint) -> Self {
        Self { endpoint }
    }

    fn url(&self, path: &str) -> String {
        self.endpoint.url(path)
    }

    /// Fetch one entry with its content
    pub async fn get_entry(&self, id: &str) -> EntryResult<Entry> {
        fetch_json(Request::get(&self.url(&entry_path(id)))).await
    }

    pub async fn search(&self, query: &str) -> EntryResult<Vec<Entry>> {
        let response: SearchResponse = fetch_json(Request::get(&self.url(&search_path(query)))).await?;
        Ok(response.results)
    }

    /// Archive an entry
    pub async fn archive_entry(&self, id: &str) -> EntryResult<ArchivedEntry> {
        fetch_json(Request::delete(&self.url(&entry_path(id)))).await
    }

    // ============ Writing assistant ============

    pub async fn develop(&self, concepto: &str) -> EntryResult<String> {
        let body = ConceptRequest {
            concepto: concepto.to_string(),
        };
        let response: DevelopResponse = post_json(&self.url("/agent/develop"), &body).await?;
        Ok(response.sugerencias)
    }

    pub async fn absurd(&self, elemento_mecanico: &str) -> EntryResult<String> {
        let body = AbsurdRequest {
            elemento_mecanico: elemento_mecanico.to_string(),
        };
        let response: AbsurdResponse = post_json(&self.url("/agent/absurd"), &body).await?;
        Ok(response.realidades_absurdas)
    }

    pub async fn analyze(&self, concepto: &str) -> EntryResult<String> {
        let body = ConceptRequest {
            concepto: concepto.to_string(),
        };
        let response: AnalyzeResponse = post_json(&self.url("/agent/analyze"), &body).await?;
        Ok(response.analisis)
    }

    pub async fn chat(&self, message: &str, include_library: bool) -> EntryResult<String> {
        let body = ChatRequest {
            message: message.to_string(),
            include_library,
        };
        let response: ChatResponse = post_json(&self.url("/agent/chat"), &body).await?;
        Ok(response.response)
    }

    pub async fn examples(&self, tecnica: Option<&str>, concepto: Option<&str>) -> EntryResult<String> {
        let url = self.url(&examples_path(tecnica, concepto));
        let response: ChatResponse = fetch_json(Request::get(&url)).await?;
        Ok(response.response)
    }
}

#[async_trait(?Send)]
impl EntryStore for BrowserStore {
    async fn create_entry(&self, entry: &NewEntry) -> EntryResult<CreatedEntry> {
        post_json(&self.url("/entries"), entry).await
    }

    async fn list_entries(&self, filter: &EntryFilter) -> EntryResult<Vec<Entry>> {
        let response: ListEntriesResponse = fetch_json(Request::get(&self.url(&filter.path()))).await?;
        Ok(response.entries)
    }
}

// ============ Helpers ============

async fn post_json<B, T>(url: &str, body: &B) -> EntryResult<T>
where
    B: Serialize,
    T: DeserializeOwned,
{
    let request = Request::post(url)
        .json(body)
        .map_err(|e| EntryError::Request(e.to_string()))?;

    let response = request.send().await.map_err(transport_error)?;
    read_json(response).await
}

async fn fetch_json<T: DeserializeOwned>(request: RequestBuilder) -> EntryResult<T> {
    let response = request.send().await.map_err(transport_error)?;
    read_json(response).await
}

async fn read_json<T: DeserializeOwned>(response: Response) -> EntryResult<T> {
    if !response.ok() {
        let message = response.text().await.unwrap_or_default();
        return Err(EntryError::Api {
            status: response.status(),
            message,
        });
    }

    response.json().await.map_err(transport_error)
}

fn transport_error(e: gloo_net::Error) -> EntryError {
    match e {
        gloo_net::Error::SerdeError(e) => EntryError::Parse(e.to_string()),
        other => EntryError::Network(other.to_string()),
    }
}

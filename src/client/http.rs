//! Entry-storage REST client
//!
//! reqwest client for the entries API. Requests are sent once: there is no
//! retry, and no timeout unless one is configured.

use async_trait::async_trait;
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use std::time::Duration;

use super::dto::{
    entry_path, search_path, ArchivedEntry, CreatedEntry, Entry, EntryFilter, ListEntriesResponse,
    NewEntry, SearchResponse, ServiceStatus,
};
use super::error::{EntryError, EntryResult};
use super::store::EntryStore;
use crate::endpoint::ApiEndpoint;

/// Entry-storage API client
#[derive(Debug, Clone)]
pub struct EntryClient {
    client: Client,
    endpoint: ApiEndpoint,
}

impl EntryClient {
    /// Create a client for the given endpoint
    pub fn new(endpoint: ApiEndpoint, timeout: Option<Duration>) -> EntryResult<Self> {
        Ok(Self {
            client: build_http_client(timeout)?,
            endpoint,
        })
    }

    pub fn endpoint(&self) -> &ApiEndpoint {
        &self.endpoint
    }

    /// Check that the API answers
    pub async fn health_check(&self) -> EntryResult<ServiceStatus> {
        send_json(self.client.get(self.endpoint.url("/"))).await
    }

    /// Save an entry
    pub async fn create_entry(&self, entry: &NewEntry) -> EntryResult<CreatedEntry> {
        tracing::debug!(titulo = %entry.titulo, tags = entry.tags.len(), "Creating entry");

        let request = self.client.post(self.endpoint.url("/entries")).json(entry);
        send_json(request).await
    }

    /// List entries, optionally filtered by type
    pub async fn list_entries(&self, filter: &EntryFilter) -> EntryResult<Vec<Entry>> {
        let request = self.client.get(self.endpoint.url(&filter.path()));
        let response: ListEntriesResponse = send_json(request).await?;

        tracing::debug!(count = response.entries.len(), "Listed entries");
        Ok(response.entries)
    }

    /// Fetch one entry including its content
    pub async fn get_entry(&self, id: &str) -> EntryResult<Entry> {
        send_json(self.client.get(self.endpoint.url(&entry_path(id)))).await
    }

    /// Full-text search over stored entries
    pub async fn search(&self, query: &str) -> EntryResult<Vec<Entry>> {
        let request = self.client.get(self.endpoint.url(&search_path(query)));
        let response: SearchResponse = send_json(request).await?;
        Ok(response.results)
    }

    /// Archive an entry; the store keeps it but stops listing it
    pub async fn archive_entry(&self, id: &str) -> EntryResult<ArchivedEntry> {
        send_json(self.client.delete(self.endpoint.url(&entry_path(id)))).await
    }
}

#[async_trait(?Send)]
impl EntryStore for EntryClient {
    async fn create_entry(&self, entry: &NewEntry) -> EntryResult<CreatedEntry> {
        EntryClient::create_entry(self, entry).await
    }

    async fn list_entries(&self, filter: &EntryFilter) -> EntryResult<Vec<Entry>> {
        EntryClient::list_entries(self, filter).await
    }
}

pub(crate) fn build_http_client(timeout: Option<Duration>) -> EntryResult<Client> {
    let mut builder = Client::builder();
    if let Some(timeout) = timeout {
        builder = builder.timeout(timeout);
    }
    builder
        .build()
        .map_err(|e| EntryError::Request(format!("Failed to create HTTP client: {}", e)))
}

/// Send a request and decode a JSON body from a success response
pub(crate) async fn send_json<T: DeserializeOwned>(request: RequestBuilder) -> EntryResult<T> {
    let response = request.send().await?;

    let status = response.status();
    if !status.is_success() {
        let message = response.text().await.unwrap_or_default();
        return Err(EntryError::Api {
            status: status.as_u16(),
            message,
        });
    }

    Ok(response.json().await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::EntryListing;
    use crate::form::FormState;
    use crate::session::{load_listing, AnalysisSession, Notice};
    use axum::{
        extract::{Path, Query},
        http::StatusCode,
        routing::get,
        Json, Router,
    };
    use serde_json::{json, Value};
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    /// Serve a router on an ephemeral port and point a client at it
    async fn spawn_stub(router: Router) -> EntryClient {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });

        let endpoint = ApiEndpoint::Custom(format!("http://{}", addr));
        EntryClient::new(endpoint, Some(Duration::from_secs(5))).unwrap()
    }

    #[tokio::test]
    async fn test_create_entry_posts_payload() {
        let received = Arc::new(Mutex::new(None::<Value>));
        let sink = Arc::clone(&received);

        let router = Router::new().route(
            "/entries",
            axum::routing::post(move |Json(body): Json<Value>| {
                let sink = Arc::clone(&sink);
                async move {
                    *sink.lock().unwrap() = Some(body);
                    Json(json!({ "id": "page-1", "url": "https://notion.so/page-1" }))
                }
            }),
        );
        let client = spawn_stub(router).await;

        let entry = NewEntry {
            titulo: "ANÁLISIS: x...".to_string(),
            tipo: "Análisis".to_string(),
            contenido: "## CHISTE".to_string(),
            tags: vec!["absurdo".to_string()],
        };
        let created = client.create_entry(&entry).await.unwrap();
        assert_eq!(created.id.as_deref(), Some("page-1"));

        let body = received.lock().unwrap().clone().unwrap();
        assert_eq!(body["titulo"], "ANÁLISIS: x...");
        assert_eq!(body["tipo"], "Análisis");
        assert_eq!(body["tags"], json!(["absurdo"]));
    }

    #[tokio::test]
    async fn test_create_entry_server_error() {
        let router = Router::new().route(
            "/entries",
            axum::routing::post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "notion down") }),
        );
        let client = spawn_stub(router).await;

        let err = client
            .create_entry(&NewEntry::from_analysis(&Default::default()))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            EntryError::Api {
                status: 500,
                message: "notion down".to_string()
            }
        );
    }

    #[tokio::test]
    async fn test_list_entries_sends_filter() {
        let router = Router::new().route(
            "/entries",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                let tipo = params.get("tipo").cloned().unwrap_or_default();
                Json(json!({
                    "count": 1,
                    "entries": [{ "id": "e1", "titulo": "Uno", "tipo": tipo }]
                }))
            }),
        );
        let client = spawn_stub(router).await;

        let entries = client.list_entries(&EntryFilter::analyses()).await.unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].tipo.as_deref(), Some("Análisis"));
        assert!(entries[0].tags.is_empty());
    }

    #[tokio::test]
    async fn test_list_entries_malformed_body() {
        let router = Router::new().route("/entries", get(|| async { "not json" }));
        let client = spawn_stub(router).await;

        let err = client.list_entries(&EntryFilter::analyses()).await.unwrap_err();
        assert!(matches!(err, EntryError::Parse(_)));
    }

    #[tokio::test]
    async fn test_get_and_archive_entry() {
        let router = Router::new().route(
            "/entries/:id",
            get(|Path(id): Path<String>| async move {
                Json(json!({ "id": id, "titulo": "T", "contenido": "cuerpo", "tags": [] }))
            })
            .delete(|Path(id): Path<String>| async move {
                Json(json!({ "id": id, "archived": true }))
            }),
        );
        let client = spawn_stub(router).await;

        let entry = client.get_entry("abc").await.unwrap();
        assert_eq!(entry.contenido.as_deref(), Some("cuerpo"));

        let archived = client.archive_entry("abc").await.unwrap();
        assert_eq!(archived.id, "abc");
        assert!(archived.archived);
    }

    #[tokio::test]
    async fn test_search() {
        let router = Router::new().route(
            "/search",
            get(|Query(params): Query<HashMap<String, String>>| async move {
                let q = params.get("q").cloned().unwrap_or_default();
                Json(json!({ "count": 1, "results": [{ "id": "s1", "titulo": q, "tags": ["x"] }] }))
            }),
        );
        let client = spawn_stub(router).await;

        let results = client.search("casa vieja").await.unwrap();
        assert_eq!(results[0].titulo.as_deref(), Some("casa vieja"));
    }

    #[tokio::test]
    async fn test_network_failure() {
        // Bind then drop to get a port nobody listens on
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let client =
            EntryClient::new(ApiEndpoint::Custom(format!("http://{}", addr)), None).unwrap();
        let err = client.list_entries(&EntryFilter::analyses()).await.unwrap_err();
        assert!(matches!(err, EntryError::Network(_)));
    }

    #[tokio::test]
    async fn test_health_check() {
        let router = Router::new().route(
            "/",
            get(|| async {
                Json(json!({ "status": "ok", "service": "metodo-api", "version": "1.0.0" }))
            }),
        );
        let client = spawn_stub(router).await;

        assert!(matches!(client.endpoint(), ApiEndpoint::Custom(url) if url.starts_with("http://127.0.0.1:")));

        let status = client.health_check().await.unwrap();
        assert_eq!(status.status, "ok");
        assert_eq!(status.service.as_deref(), Some("metodo-api"));
        assert_eq!(status.version.as_deref(), Some("1.0.0"));
    }

    #[tokio::test]
    async fn test_empty_listing_shows_placeholder() {
        let router = Router::new().route("/entries", get(|| async { Json(json!({ "entries": [] })) }));
        let client = spawn_stub(router).await;

        let listing = load_listing(&client).await;
        assert_eq!(listing, EntryListing::Empty);
        assert_eq!(listing.placeholder(), Some("No hay análisis guardados"));
    }

    #[tokio::test]
    async fn test_session_save_server_error_keeps_form() {
        let router = Router::new().route(
            "/entries",
            axum::routing::post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "notion down") })
                .get(|| async { Json(json!({ "entries": [] })) }),
        );
        let client = spawn_stub(router).await;

        let mut form = FormState::new();
        form.joke.text = "Mi perro ladra en binario".to_string();
        form.concepto = "perro".to_string();

        let mut session = AnalysisSession::with_form(client, form.clone());
        let notice = session.save().await;

        assert_eq!(notice, Notice::SaveFailed);
        assert_eq!(notice.message(), "Error al guardar el análisis");
        assert_eq!(session.form, form);
        assert!(session.entries().is_none());
    }
}

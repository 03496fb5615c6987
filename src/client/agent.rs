//! Writing assistant client
//!
//! The backend fronts a language model that suggests directions for a
//! joke without writing it. Each call is a single request/response.

use reqwest::Client;
use std::time::Duration;

use super::dto::{
    examples_path, AbsurdRequest, AbsurdResponse, AnalyzeResponse, ChatRequest, ChatResponse,
    ConceptRequest, DevelopResponse,
};
use super::error::EntryResult;
use super::http::{build_http_client, send_json};
use crate::endpoint::ApiEndpoint;

/// Client for the `/agent` endpoints
#[derive(Debug, Clone)]
pub struct AgentClient {
    client: Client,
    endpoint: ApiEndpoint,
}

impl AgentClient {
    pub fn new(endpoint: ApiEndpoint, timeout: Option<Duration>) -> EntryResult<Self> {
        Ok(Self {
            client: build_http_client(timeout)?,
            endpoint,
        })
    }

    /// Free-form conversation, optionally grounded on the saved library
    pub async fn chat(&self, message: &str, include_library: bool) -> EntryResult<String> {
        let body = ChatRequest {
            message: message.to_string(),
            include_library,
        };
        let request = self.client.post(self.endpoint.url("/agent/chat")).json(&body);
        let response: ChatResponse = send_json(request).await?;
        Ok(response.response)
    }

    /// Ways to develop a concept into a premise
    pub async fn develop(&self, concepto: &str) -> EntryResult<String> {
        let body = ConceptRequest {
            concepto: concepto.to_string(),
        };
        let request = self.client.post(self.endpoint.url("/agent/develop")).json(&body);
        let response: DevelopResponse = send_json(request).await?;
        Ok(response.sugerencias)
    }

    /// Absurd realities reachable from a mechanical element
    pub async fn absurd(&self, elemento_mecanico: &str) -> EntryResult<String> {
        let body = AbsurdRequest {
            elemento_mecanico: elemento_mecanico.to_string(),
        };
        let request = self.client.post(self.endpoint.url("/agent/absurd")).json(&body);
        let response: AbsurdResponse = send_json(request).await?;
        Ok(response.realidades_absurdas)
    }

    /// Types, contexts and associations of a concept
    pub async fn analyze(&self, concepto: &str) -> EntryResult<String> {
        let body = ConceptRequest {
            concepto: concepto.to_string(),
        };
        let request = self.client.post(self.endpoint.url("/agent/analyze")).json(&body);
        let response: AnalyzeResponse = send_json(request).await?;
        Ok(response.analisis)
    }

    /// Library examples using a technique or a similar concept
    pub async fn examples(&self, tecnica: Option<&str>, concepto: Option<&str>) -> EntryResult<String> {
        let url = self.endpoint.url(&examples_path(tecnica, concepto));
        let response: ChatResponse = send_json(self.client.get(url)).await?;
        Ok(response.response)
    }
}

//! No-WASM HTTP client implementation using reqwest
//!
//! This module provides HTTP functionality for non-WASM environments
//! using the reqwest crate for making HTTP requests.

use crate::error::Result;
use crate::interface::{HttpClient, RequestApi};
use crate::model::dtos::CourseListParams;
use reqwest::Client;
use serde_json::Value;

/// HTTP client for no-WASM environments using reqwest
#[derive(Debug, Clone)]
pub struct NoWasmClient {
    client: Client,
}

impl HttpClient for NoWasmClient {
    async fn new() -> Result<Self> {
        let client = Client::builder().build()?;

        Ok(Self { client })
    }
}

impl RequestApi for NoWasmClient {
    async fn get_course_list(&self, params: CourseListParams) -> Result<Value> {
        tracing::debug!("GET {}", params.endpoint);

        let resp = self
            .client
            .get(&params.endpoint)
            .send()
            .await?
            .error_for_status()?;

        Ok(resp.json::<Value>().await?)
    }
}

// Legacy compatibility functions that use the Client directly (for backward compatibility)
pub async fn create_client() -> Result<Client> {
    Client::builder().build().map_err(|e| e.into())
}

pub async fn get_course_list(client: &Client, endpoint: &str) -> Result<Value> {
    let wrapper = NoWasmClient {
        client: client.clone(),
    };
    wrapper
        .get_course_list(CourseListParams {
            endpoint: endpoint.to_string(),
        })
        .await
}

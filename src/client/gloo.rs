//! WASM HTTP client implementation using gloo_net
//!
//! This module provides HTTP functionality for WASM environments
//! using the gloo_net crate for making HTTP requests via the browser's fetch API.

use crate::error::{ErrorKind, Result};
use crate::interface::{HttpClient, RequestApi};
use crate::model::dtos::CourseListParams;
use gloo_net::http::{Request, RequestBuilder};
use serde_json::Value;
use web_sys::{RequestCredentials, RequestMode};

/// HTTP client for WASM environments using gloo_net
#[derive(Debug, Clone)]
pub struct WasmClient;

impl HttpClient for WasmClient {
    async fn new() -> Result<Self> {
        Ok(Self)
    }
}

impl WasmClient {
    /// Build a request with common headers and settings
    fn build_request(url: &str) -> RequestBuilder {
        Request::get(url)
            .mode(RequestMode::Cors)
            .credentials(RequestCredentials::SameOrigin)
            .header("Accept", "application/json")
    }

    /// Handle JSON response with error checking
    async fn handle_json_response(resp: gloo_net::http::Response) -> Result<Value> {
        let status = resp.ok();
        let text = resp.text().await?;

        if !status {
            return Err(ErrorKind::ParseError(format!("Request failed: {text}")).into());
        }

        match serde_json::from_str::<Value>(&text) {
            Ok(json) => Ok(json),
            Err(_) => Err(ErrorKind::ParseError(format!("Invalid JSON response: {text}")).into()),
        }
    }
}

impl RequestApi for WasmClient {
    async fn get_course_list(&self, params: CourseListParams) -> Result<Value> {
        tracing::debug!("GET {}", params.endpoint);

        let resp = Self::build_request(&params.endpoint).send().await?;

        tracing::debug!("Course list response status: {:?}", resp.status());

        Self::handle_json_response(resp).await
    }
}

// Legacy compatibility functions (for backward compatibility)
pub async fn get_course_list(endpoint: &str) -> Result<Value> {
    let client = WasmClient;
    client
        .get_course_list(CourseListParams {
            endpoint: endpoint.to_string(),
        })
        .await
}

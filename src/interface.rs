#![allow(async_fn_in_trait)]

use crate::error::Result;
use crate::model::dtos::CourseListParams;
use serde_json::Value;

/// Common trait for HTTP client functionality
pub trait HttpClient {
    /// Create a new HTTP client instance
    async fn new() -> Result<Self>
    where
        Self: Sized;
}

/// Common interface for all HTTP operations
pub trait RequestApi {
    /// Fetch the raw course list from the endpoint
    async fn get_course_list(&self, params: CourseListParams) -> Result<Value>;
}

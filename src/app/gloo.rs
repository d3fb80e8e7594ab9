//! WASM application implementation
//!
//! Browser-facing half of the crate: fetches the course list through the
//! gloo_net client. DOM rendering belongs to the web GUI embedding this
//! crate; it drives the same `SelectionSession` as the terminal frontend.

use crate::app::parse_course_list;
use crate::client::gloo;
use crate::error::Result;
use crate::model::structs::Course;

/// Fetch and parse the course list from the endpoint.
pub async fn fetch_course_list(endpoint: &str) -> Result<Vec<Course>> {
    let resp = gloo::get_course_list(endpoint).await?;
    parse_course_list(resp)
}

//! Wire-level request and response bodies.
//!
//! Field names are pinned with serde renames to exactly what the server
//! consumes (`sessionId`, `pageHeight`, `pageWeight`); they are part of the
//! HTTP contract, not a style choice.

use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize)]
pub(crate) struct GotoRequest<'a> {
    pub url: &'a str,
    #[serde(rename = "pageHeight", skip_serializing_if = "Option::is_none")]
    pub page_height: Option<i64>,
    #[serde(rename = "pageWeight", skip_serializing_if = "Option::is_none")]
    pub page_weight: Option<i64>,
}

#[derive(Debug, Serialize)]
pub(crate) struct ImplicitWaitRequest {
    pub seconds: i32,
}

#[derive(Debug, Serialize)]
pub(crate) struct ScrollRequest {
    pub x: i64,
    pub y: i64,
}

#[derive(Debug, Serialize)]
pub(crate) struct SelectorRequest<'a> {
    pub selector: &'a str,
}

/// Serializes to `{}` for endpoints that expect an empty JSON object.
#[derive(Debug, Serialize)]
pub(crate) struct Empty {}

#[derive(Debug, Deserialize)]
pub(crate) struct CreateSessionResponse {
    #[serde(rename = "sessionId")]
    pub session_id: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ContentResponse {
    pub content: String,
}

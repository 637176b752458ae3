use crate::domain::model::{ErrorBody, LookupResult};
use crate::utils::error::{LookupError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Gateway proxy response: status, headers and a pre-serialised JSON body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse {
    pub status_code: u16,
    pub headers: BTreeMap<String, String>,
    pub body: String,
}

fn json_headers() -> BTreeMap<String, String> {
    let mut headers = BTreeMap::new();
    headers.insert("Content-Type".to_string(), "application/json".to_string());
    headers
}

impl ApiResponse {
    pub fn success(result: &LookupResult, cache_ttl: u64) -> Result<Self> {
        let mut headers = json_headers();
        headers.insert(
            "Cache-Control".to_string(),
            format!("public, max-age={}", cache_ttl),
        );

        Ok(Self {
            status_code: 200,
            headers,
            body: serde_json::to_string(result)?,
        })
    }

    pub fn failure(error: &LookupError) -> Self {
        let body = ErrorBody {
            errors: vec![error.to_string()],
        };

        Self {
            status_code: error.status_code(),
            headers: json_headers(),
            body: serde_json::to_string(&body)
                .unwrap_or_else(|_| r#"{"errors":["internal error"]}"#.to_string()),
        }
    }

    pub fn from_outcome(outcome: Result<LookupResult>, cache_ttl: u64) -> Self {
        match outcome.and_then(|result| Self::success(&result, cache_ttl)) {
            Ok(response) => response,
            Err(e) => Self::failure(&e),
        }
    }
}

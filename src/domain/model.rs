use serde::{Deserialize, Serialize};

/// Validated input of one lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupQuery {
    pub domain: String,
    pub job_id: String,
}

/// Values scraped from the error page; they only live for one invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionArtifacts {
    pub company_id: String,
    pub csrf_token: String,
    /// `Name=Value` only, attributes stripped.
    pub cookie: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LookupResult {
    pub domain: String,
    pub job_id: String,
    #[serde(flatten)]
    pub artifacts: SessionArtifacts,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub req_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub errors: Vec<String>,
}

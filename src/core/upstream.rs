use crate::core::extract::PatternExtractor;
use crate::core::{ArtifactExtractor, ConfigProvider, SessionArtifacts, Upstream};
use crate::utils::error::{LookupError, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, ACCEPT, CONTENT_TYPE, COOKIE, SET_COOKIE};
use reqwest::{Client, StatusCode};

const ERROR_PAGE_PATH: &str = "/errorpage/?errortype=Exception";
const CREATE_PAYLOAD_PATH: &str = "/services/cas/createpayload/";
const SESSION_COOKIE_NAME: &str = "JSESSIONID";
const CSRF_HEADER: &str = "X-CSRF-Token";
const REQ_ID_FIELD: &str = "career_job_req_id";

/// Talks to the career site over HTTP(S).
pub struct HttpUpstream<E: ArtifactExtractor = PatternExtractor> {
    client: Client,
    scheme: String,
    extractor: E,
}

impl HttpUpstream<PatternExtractor> {
    pub fn new<C: ConfigProvider>(config: &C) -> Result<Self> {
        Self::with_extractor(config, PatternExtractor::new()?)
    }
}

impl<E: ArtifactExtractor> HttpUpstream<E> {
    pub fn with_extractor<C: ConfigProvider>(config: &C, extractor: E) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self {
            client,
            scheme: config.scheme().to_string(),
            extractor,
        })
    }

    fn url(&self, domain: &str, path: &str) -> String {
        format!("{}://{}{}", self.scheme, domain, path)
    }
}

/// First `Set-Cookie` carrying the session id, reduced to `Name=Value`.
pub fn session_cookie(headers: &HeaderMap) -> Option<String> {
    headers
        .get_all(SET_COOKIE)
        .iter()
        .map(|value| String::from_utf8_lossy(value.as_bytes()))
        .find(|value| value.contains(SESSION_COOKIE_NAME))
        .and_then(|value| value.split(';').next().map(|pair| pair.trim().to_string()))
}

/// Reads the requisition id from the payload body; numbers are stringified.
pub fn req_id_from_payload(payload: &serde_json::Value) -> Option<String> {
    match payload.get(REQ_ID_FIELD)? {
        serde_json::Value::String(s) => Some(s.clone()),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

#[async_trait]
impl<E: ArtifactExtractor> Upstream for HttpUpstream<E> {
    async fn bootstrap(&self, domain: &str) -> Result<SessionArtifacts> {
        let url = self.url(domain, ERROR_PAGE_PATH);
        tracing::debug!("Fetching error page: {}", url);

        // The error page is usually served with a non-2xx status; only the body matters.
        let response = self.client.get(&url).send().await?;
        tracing::debug!("Error page status: {}", response.status());

        let cookie = session_cookie(response.headers());
        let html = response.text().await?;

        let company_id = self
            .extractor
            .company_id(&html)
            .ok_or_else(|| LookupError::upstream_not_found("no instance found at given domain"))?;
        let csrf_token = self
            .extractor
            .csrf_token(&html)
            .ok_or_else(|| LookupError::upstream_protocol("failed to find token"))?;
        let cookie =
            cookie.ok_or_else(|| LookupError::upstream_protocol("failed to find session cookie"))?;

        Ok(SessionArtifacts {
            company_id: company_id.to_string(),
            csrf_token: csrf_token.to_string(),
            cookie,
        })
    }

    async fn resolve(
        &self,
        domain: &str,
        artifacts: &SessionArtifacts,
        job_id: &str,
    ) -> Result<Option<String>> {
        let url = self.url(domain, CREATE_PAYLOAD_PATH);
        let body = serde_json::json!({
            "context": {
                "action": "apply",
                "jobID": job_id,
            }
        });
        tracing::debug!("Requesting payload: {}", url);

        let response = self
            .client
            .post(&url)
            .header(COOKIE, &artifacts.cookie)
            .header(CSRF_HEADER, &artifacts.csrf_token)
            .header(ACCEPT, "application/json")
            .header(CONTENT_TYPE, "application/json")
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("Payload response status: {}", status);

        match status {
            StatusCode::OK => {
                let payload: serde_json::Value = response.json().await?;
                Ok(req_id_from_payload(&payload))
            }
            StatusCode::GONE => Err(LookupError::RequisitionNotFoundError {
                message: "no req id returned".to_string(),
            }),
            _ => Err(LookupError::UpstreamRequestError {
                message: "failed to retrieve req id".to_string(),
            }),
        }
    }
}

use crate::domain::model::SessionArtifacts;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

pub trait ConfigProvider: Send + Sync {
    /// `max-age` advertised on successful responses, in seconds.
    fn cache_ttl(&self) -> u64;
    fn request_timeout(&self) -> Duration;
    fn scheme(&self) -> &str;
}

/// Pulls tenant id and CSRF token out of the error page markup.
pub trait ArtifactExtractor: Send + Sync {
    fn company_id<'a>(&self, html: &'a str) -> Option<&'a str>;
    fn csrf_token<'a>(&self, html: &'a str) -> Option<&'a str>;
}

#[async_trait]
pub trait Upstream: Send + Sync {
    async fn bootstrap(&self, domain: &str) -> Result<SessionArtifacts>;
    async fn resolve(
        &self,
        domain: &str,
        artifacts: &SessionArtifacts,
        job_id: &str,
    ) -> Result<Option<String>>;
}

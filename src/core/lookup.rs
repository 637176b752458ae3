use crate::core::response::ApiResponse;
use crate::core::{ConfigProvider, LookupQuery, LookupResult, Upstream};
use crate::utils::error::{LookupError, Result};
use crate::utils::validation::{validate_domain, validate_job_id};
use std::collections::HashMap;

/// Checks presence first, then the job id, then the domain shape.
pub fn parse_query(params: &HashMap<String, String>) -> Result<LookupQuery> {
    let domain = params.get("domain").filter(|v| !v.is_empty());
    let job_id = params.get("jobId").filter(|v| !v.is_empty());

    let (Some(domain), Some(job_id)) = (domain, job_id) else {
        return Err(LookupError::validation("no domain/jobId given"));
    };

    validate_job_id(job_id)?;
    validate_domain(domain)?;

    Ok(LookupQuery {
        domain: domain.clone(),
        job_id: job_id.clone(),
    })
}

pub struct LookupEngine<U: Upstream> {
    upstream: U,
    cache_ttl: u64,
}

impl<U: Upstream> LookupEngine<U> {
    pub fn new<C: ConfigProvider>(upstream: U, config: &C) -> Self {
        Self {
            upstream,
            cache_ttl: config.cache_ttl(),
        }
    }

    pub fn cache_ttl(&self) -> u64 {
        self.cache_ttl
    }

    pub async fn run(&self, query: &LookupQuery) -> Result<LookupResult> {
        let artifacts = self.upstream.bootstrap(&query.domain).await?;
        tracing::debug!("Session bootstrapped for company {}", artifacts.company_id);

        let req_id = self
            .upstream
            .resolve(&query.domain, &artifacts, &query.job_id)
            .await?;

        Ok(LookupResult {
            domain: query.domain.clone(),
            job_id: query.job_id.clone(),
            artifacts,
            req_id,
        })
    }

    /// Full invocation: raw query parameters in, gateway response out. Never fails.
    pub async fn handle(&self, params: &HashMap<String, String>) -> ApiResponse {
        let outcome = match parse_query(params) {
            Ok(query) => {
                tracing::info!(domain = %query.domain, job_id = %query.job_id, "Resolving requisition id");
                self.run(&query).await
            }
            Err(e) => Err(e),
        };

        let response = ApiResponse::from_outcome(outcome, self.cache_ttl);
        if response.status_code == 200 {
            tracing::info!("Lookup succeeded");
        } else {
            tracing::warn!(status = response.status_code, body = %response.body, "Lookup failed");
        }
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LookupConfig;
    use crate::core::SessionArtifacts;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    enum Script {
        Ok(Option<&'static str>),
        BootstrapFails(fn() -> LookupError),
        ResolveFails(fn() -> LookupError),
    }

    struct StubUpstream {
        script: Script,
        calls: AtomicUsize,
    }

    impl StubUpstream {
        fn new(script: Script) -> Self {
            Self {
                script,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl Upstream for StubUpstream {
        async fn bootstrap(&self, _domain: &str) -> Result<SessionArtifacts> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if let Script::BootstrapFails(make) = &self.script {
                return Err(make());
            }
            Ok(SessionArtifacts {
                company_id: "ACME".to_string(),
                csrf_token: "tok".to_string(),
                cookie: "JSESSIONID=abc".to_string(),
            })
        }

        async fn resolve(
            &self,
            _domain: &str,
            artifacts: &SessionArtifacts,
            job_id: &str,
        ) -> Result<Option<String>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            assert_eq!(artifacts.csrf_token, "tok");
            assert_eq!(job_id, "42");
            match &self.script {
                Script::Ok(req_id) => Ok(req_id.map(str::to_string)),
                Script::ResolveFails(make) => Err(make()),
                Script::BootstrapFails(_) => unreachable!(),
            }
        }
    }

    fn ttl(cache_ttl: u64) -> LookupConfig {
        LookupConfig {
            cache_ttl,
            ..LookupConfig::default()
        }
    }

    fn params(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_parse_query_missing_inputs() {
        for p in [
            params(&[]),
            params(&[("domain", "careers.example.com")]),
            params(&[("jobId", "42")]),
            params(&[("domain", ""), ("jobId", "42")]),
            params(&[("domain", "careers.example.com"), ("jobId", "")]),
        ] {
            let err = parse_query(&p).unwrap_err();
            assert_eq!(err.status_code(), 422);
            assert_eq!(err.to_string(), "no domain/jobId given");
        }
    }

    #[test]
    fn test_parse_query_bad_job_id() {
        for job_id in ["12a", "-5", "1.0", "4 2"] {
            let err = parse_query(&params(&[("domain", "careers.example.com"), ("jobId", job_id)]))
                .unwrap_err();
            assert_eq!(err.status_code(), 422);
            assert_eq!(err.to_string(), "jobId may only contain numbers");
        }
    }

    #[test]
    fn test_parse_query_ok() {
        for job_id in ["0", "123456"] {
            let query =
                parse_query(&params(&[("domain", "careers.example.com"), ("jobId", job_id)]))
                    .unwrap();
            assert_eq!(query.job_id, job_id);
            assert_eq!(query.domain, "careers.example.com");
        }
    }

    #[test]
    fn test_invalid_input_never_reaches_upstream() {
        let engine = LookupEngine::new(StubUpstream::new(Script::Ok(Some("R"))), &ttl(3600));
        let response = tokio_test::block_on(engine.handle(&params(&[("jobId", "x")])));
        assert_eq!(response.status_code, 422);
        assert_eq!(engine.upstream.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_success_merges_everything() {
        let engine = LookupEngine::new(StubUpstream::new(Script::Ok(Some("REQ-42"))), &ttl(900));
        let response = tokio_test::block_on(
            engine.handle(&params(&[("domain", "careers.example.com"), ("jobId", "42")])),
        );

        assert_eq!(response.status_code, 200);
        assert_eq!(response.headers["Cache-Control"], "public, max-age=900");
        let body: serde_json::Value = serde_json::from_str(&response.body).unwrap();
        assert_eq!(body["reqId"], "REQ-42");
        assert_eq!(body["companyId"], "ACME");
        assert_eq!(engine.upstream.calls.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn test_bootstrap_failure_skips_resolve() {
        let engine = LookupEngine::new(
            StubUpstream::new(Script::BootstrapFails(|| {
                LookupError::upstream_not_found("no instance found at given domain")
            })),
            &ttl(3600),
        );
        let response = tokio_test::block_on(
            engine.handle(&params(&[("domain", "careers.example.com"), ("jobId", "42")])),
        );

        assert_eq!(response.status_code, 422);
        assert_eq!(
            response.body,
            r#"{"errors":["no instance found at given domain"]}"#
        );
        assert_eq!(engine.upstream.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_resolve_failure_is_atomic() {
        let engine = LookupEngine::new(
            StubUpstream::new(Script::ResolveFails(|| LookupError::RequisitionNotFoundError {
                message: "no req id returned".to_string(),
            })),
            &ttl(3600),
        );
        let response = tokio_test::block_on(
            engine.handle(&params(&[("domain", "careers.example.com"), ("jobId", "42")])),
        );

        assert_eq!(response.status_code, 404);
        assert_eq!(response.body, r#"{"errors":["no req id returned"]}"#);
    }
}

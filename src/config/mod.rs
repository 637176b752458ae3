pub mod env;

#[cfg(feature = "cli")]
pub mod cli;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_range, validate_scheme, Validate};
use std::time::Duration;

pub const DEFAULT_CACHE_TTL: u64 = 3600;
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_SCHEME: &str = "https";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupConfig {
    pub cache_ttl: u64,
    pub request_timeout_secs: u64,
    pub scheme: String,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            cache_ttl: DEFAULT_CACHE_TTL,
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            scheme: DEFAULT_SCHEME.to_string(),
        }
    }
}

impl LookupConfig {
    pub fn is_tls(&self) -> bool {
        self.scheme == "https"
    }
}

impl ConfigProvider for LookupConfig {
    fn cache_ttl(&self) -> u64 {
        self.cache_ttl
    }

    fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    fn scheme(&self) -> &str {
        &self.scheme
    }
}

impl Validate for LookupConfig {
    fn validate(&self) -> Result<()> {
        validate_range("request_timeout_secs", self.request_timeout_secs, 1, 300)?;
        validate_scheme("scheme", &self.scheme)?;

        if !self.is_tls() {
            tracing::warn!(
                "Upstream scheme is '{}'; session cookie and CSRF token travel unencrypted",
                self.scheme
            );
        }

        tracing::debug!("Configuration validation passed");
        Ok(())
    }
}

use crate::config::{LookupConfig, DEFAULT_CACHE_TTL, DEFAULT_SCHEME, DEFAULT_TIMEOUT_SECS};
use std::env;

pub const CACHE_TTL_VAR: &str = "CACHE_TTL";
pub const TIMEOUT_VAR: &str = "UPSTREAM_TIMEOUT_SECS";
pub const SCHEME_VAR: &str = "UPSTREAM_SCHEME";

pub struct EnvConfig;

impl EnvConfig {
    pub fn from_env() -> LookupConfig {
        Self::from_vars(|key| env::var(key).ok())
    }

    pub fn from_vars<F>(lookup: F) -> LookupConfig
    where
        F: Fn(&str) -> Option<String>,
    {
        LookupConfig {
            cache_ttl: parse_or_default(&lookup, CACHE_TTL_VAR, DEFAULT_CACHE_TTL),
            request_timeout_secs: parse_or_default(&lookup, TIMEOUT_VAR, DEFAULT_TIMEOUT_SECS),
            scheme: lookup(SCHEME_VAR)
                .filter(|s| !s.trim().is_empty())
                .map(|s| s.trim().to_ascii_lowercase())
                .unwrap_or_else(|| DEFAULT_SCHEME.to_string()),
        }
    }
}

fn parse_or_default<F>(lookup: &F, key: &str, default: u64) -> u64
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("Ignoring unparseable {}={:?}, using {}", key, raw, default);
            default
        }),
        None => default,
    }
}

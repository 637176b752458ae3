use crate::config::LookupConfig;
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "reqid-lookup")]
#[command(about = "Resolve a job id into its requisition id on a career site")]
pub struct CliConfig {
    /// Hostname of the career site instance
    #[arg(long)]
    pub domain: String,

    #[arg(long)]
    pub job_id: String,

    /// Overrides CACHE_TTL
    #[arg(long)]
    pub cache_ttl: Option<u64>,

    /// Overrides UPSTREAM_TIMEOUT_SECS
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Overrides UPSTREAM_SCHEME
    #[arg(long)]
    pub scheme: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Layers the flags that were given over `base`.
    pub fn merge_into(&self, base: LookupConfig) -> LookupConfig {
        LookupConfig {
            cache_ttl: self.cache_ttl.unwrap_or(base.cache_ttl),
            request_timeout_secs: self.timeout.unwrap_or(base.request_timeout_secs),
            scheme: self.scheme.clone().unwrap_or(base.scheme),
        }
    }
}

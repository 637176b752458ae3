use clap::Parser;
use reqid_lookup::core::lookup::parse_query;
use reqid_lookup::utils::error::ErrorCategory;
use reqid_lookup::utils::{logger, validation::Validate};
use reqid_lookup::{ApiResponse, CliConfig, EnvConfig, HttpUpstream, LookupEngine};
use std::collections::HashMap;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    let config = cli.merge_into(EnvConfig::from_env());
    if cli.verbose {
        tracing::debug!("Effective config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(3);
    }

    let upstream = HttpUpstream::new(&config)?;
    let engine = LookupEngine::new(upstream, &config);

    let params = HashMap::from([
        ("domain".to_string(), cli.domain.clone()),
        ("jobId".to_string(), cli.job_id.clone()),
    ]);
    let outcome = match parse_query(&params) {
        Ok(query) => engine.run(&query).await,
        Err(e) => Err(e),
    };

    let exit_code = match &outcome {
        Ok(_) => 0,
        Err(e) => {
            tracing::error!("Lookup failed: {} (Category: {:?})", e, e.category());
            match e.category() {
                ErrorCategory::Input => 2,
                ErrorCategory::Upstream => 1,
                ErrorCategory::Internal => 3,
            }
        }
    };

    let response = ApiResponse::from_outcome(outcome, engine.cache_ttl());
    println!("{}", response.body);

    if exit_code > 0 {
        std::process::exit(exit_code);
    }

    Ok(())
}

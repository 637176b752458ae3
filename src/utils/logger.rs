use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Logs go to stderr; stdout carries only the JSON response body so it can be piped.
pub fn init_cli_logger(verbose: bool) {
    let default = if verbose {
        "reqid_lookup=debug,warn"
    } else {
        "reqid_lookup=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

/// `RUST_LOG` wins; otherwise the level configured on the function
/// (`AWS_LAMBDA_LOG_LEVEL`) applies to this crate only.
pub fn init_lambda_logger() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(lambda_directive(std::env::var("AWS_LAMBDA_LOG_LEVEL").ok()))
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .json()
                .flatten_event(true)
                .with_current_span(false)
                .with_target(false)
                // Lambda stamps every log line itself
                .without_time(),
        )
        .init();
}

fn lambda_directive(level: Option<String>) -> String {
    let level = match level.as_deref().map(str::to_ascii_lowercase).as_deref() {
        Some("trace") => "trace",
        Some("debug") => "debug",
        Some("warn") => "warn",
        Some("error") | Some("fatal") => "error",
        _ => "info",
    };
    format!("reqid_lookup={}", level)
}

use crate::utils::error::{LookupError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Accepts `host` or `host:port`, nothing else.
pub fn validate_domain(domain: &str) -> Result<()> {
    let url = Url::parse(&format!("https://{}/", domain))
        .map_err(|_| LookupError::validation("domain must be a bare hostname"))?;

    let bare = url.host_str().is_some_and(|h| !h.is_empty())
        && url.username().is_empty()
        && url.password().is_none()
        && url.path() == "/"
        && url.query().is_none()
        && url.fragment().is_none();

    if !bare {
        return Err(LookupError::validation("domain must be a bare hostname"));
    }
    Ok(())
}

/// Job ids are ASCII digits only, at least one.
pub fn validate_job_id(job_id: &str) -> Result<()> {
    if job_id.is_empty() || !job_id.bytes().all(|b| b.is_ascii_digit()) {
        return Err(LookupError::validation("jobId may only contain numbers"));
    }
    Ok(())
}

pub fn validate_scheme(field_name: &str, scheme: &str) -> Result<()> {
    match scheme {
        "http" | "https" => Ok(()),
        other => Err(LookupError::ConfigError {
            message: format!("{}: unsupported scheme '{}'", field_name, other),
        }),
    }
}

pub fn validate_range<T: PartialOrd + std::fmt::Display + Copy>(
    field_name: &str,
    value: T,
    min: T,
    max: T,
) -> Result<()> {
    if value < min || value > max {
        return Err(LookupError::ConfigError {
            message: format!("{}: value {} must be between {} and {}", field_name, value, min, max),
        });
    }
    Ok(())
}

use crate::core::ArtifactExtractor;
use crate::utils::error::Result;
use regex::Regex;

const COMPANY_ID_PATTERN: &str = r#""ssoCompanyId"\s*:\s*'(.*?)'"#;
const CSRF_TOKEN_PATTERN: &str = r#""X-CSRF-Token"\s*:\s*"(.*?)""#;

/// Regex scraping of the inline settings object on the error page.
#[derive(Debug, Clone)]
pub struct PatternExtractor {
    company_id: Regex,
    csrf_token: Regex,
}

impl PatternExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            company_id: Regex::new(COMPANY_ID_PATTERN)?,
            csrf_token: Regex::new(CSRF_TOKEN_PATTERN)?,
        })
    }
}

fn first_capture<'a>(re: &Regex, haystack: &'a str) -> Option<&'a str> {
    re.captures(haystack)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

impl ArtifactExtractor for PatternExtractor {
    fn company_id<'a>(&self, html: &'a str) -> Option<&'a str> {
        first_capture(&self.company_id, html)
    }

    fn csrf_token<'a>(&self, html: &'a str) -> Option<&'a str> {
        first_capture(&self.csrf_token, html)
    }
}

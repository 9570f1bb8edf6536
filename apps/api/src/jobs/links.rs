//! Job link normalization.
//!
//! Model-invented links are usually placeholders. Any link that is missing,
//! points at `example.com`, or is not an absolute http(s) URL is replaced by a
//! LinkedIn job search for the listing's title and location.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::Url;

pub const JOB_SEARCH_BASE: &str = "https://www.linkedin.com/jobs/search/";

const PLACEHOLDER_DOMAIN: &str = "example.com";

/// Characters `encodeURIComponent` leaves alone.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, URI_COMPONENT).to_string()
}

pub fn job_search_url(title: &str, location: &str) -> String {
    format!(
        "{JOB_SEARCH_BASE}?keywords={}&location={}",
        encode_component(title),
        encode_component(location)
    )
}

pub fn is_placeholder(link: &str) -> bool {
    let link = link.trim();
    if link.is_empty() || link.contains(PLACEHOLDER_DOMAIN) {
        return true;
    }
    match Url::parse(link) {
        Ok(url) => !matches!(url.scheme(), "http" | "https") || url.host_str().is_none(),
        Err(_) => true,
    }
}

/// Keeps a usable link, otherwise builds the search link.
pub fn resolve_link(link: Option<&str>, title: Option<&str>, location: Option<&str>) -> String {
    match link {
        Some(link) if !is_placeholder(link) => link.trim().to_string(),
        _ => job_search_url(title.unwrap_or(""), location.unwrap_or("")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_component_matches_encode_uri_component() {
        assert_eq!(encode_component("San Francisco, CA"), "San%20Francisco%2C%20CA");
        assert_eq!(encode_component("C++ & Rust/Go"), "C%2B%2B%20%26%20Rust%2FGo");
        assert_eq!(encode_component("it's (mostly) fine!*~._-"), "it's%20(mostly)%20fine!*~._-");
        assert_eq!(encode_component("Zürich"), "Z%C3%BCrich");
    }

    #[test]
    fn test_job_search_url_template() {
        assert_eq!(
            job_search_url("Senior Engineer", "Remote"),
            "https://www.linkedin.com/jobs/search/?keywords=Senior%20Engineer&location=Remote"
        );
        assert_eq!(
            job_search_url("", ""),
            "https://www.linkedin.com/jobs/search/?keywords=&location="
        );
    }

    #[test]
    fn test_placeholder_detection() {
        assert!(is_placeholder(""));
        assert!(is_placeholder("   "));
        assert!(is_placeholder("https://example.com/job-link"));
        assert!(is_placeholder("https://careers.example.com/123"));
        assert!(is_placeholder("not a url"));
        assert!(is_placeholder("/jobs/123"));
        assert!(is_placeholder("mailto:jobs@acme.io"));
        assert!(!is_placeholder("https://jobs.acme.io/openings/42"));
    }

    #[test]
    fn test_resolve_link_keeps_real_links() {
        let link = "https://boards.greenhouse.io/acme/jobs/1";
        assert_eq!(resolve_link(Some(link), Some("Dev"), Some("NYC")), link);
    }

    #[test]
    fn test_resolve_link_trims_kept_links() {
        let link = resolve_link(Some(" https://jobs.acme.io/1 \n"), Some("Dev"), None);
        assert_eq!(link, "https://jobs.acme.io/1");
    }

    #[test]
    fn test_resolve_link_replaces_missing_link() {
        assert_eq!(
            resolve_link(None, Some("Data Engineer"), None),
            "https://www.linkedin.com/jobs/search/?keywords=Data%20Engineer&location="
        );
    }

    #[test]
    fn test_generated_links_parse() {
        let link = resolve_link(Some("https://example.com"), Some("Dev/Ops #1"), Some("São Paulo"));
        assert!(Url::parse(&link).is_ok());
    }
}

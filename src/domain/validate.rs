use url::{Host, Url};

/// Syntactic URL check performed before any network call: the URL must
/// parse, use the `http` or `https` scheme, and carry a host that is either
/// an IP address or a well-formed domain name.
pub fn is_valid_url(raw: &str) -> bool {
    let parsed = match Url::parse(raw) {
        Ok(parsed) => parsed,
        Err(_) => return false,
    };

    if parsed.scheme() != "http" && parsed.scheme() != "https" {
        return false;
    }

    match parsed.host() {
        Some(Host::Domain(domain)) => is_valid_domain(domain),
        Some(Host::Ipv4(_)) | Some(Host::Ipv6(_)) => true,
        None => false,
    }
}

/// Every label must be non-empty, at most 63 characters, consist of
/// alphanumerics and hyphens, and neither start nor end with a hyphen.
fn is_valid_domain(domain: &str) -> bool {
    if domain.is_empty() {
        return false;
    }

    domain.split('.').all(|label| {
        !label.is_empty()
            && label.len() <= 63
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
            && !label.starts_with('-')
            && !label.ends_with('-')
    })
}

pub fn has_allowed_extension(filename: &str, allowed: &[&str]) -> bool {
    filename
        .rsplit_once('.')
        .map(|(_, ext)| allowed.contains(&ext.to_ascii_lowercase().as_str()))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_http_and_https_urls() {
        assert!(is_valid_url("http://example.com"));
        assert!(is_valid_url("https://example.com/path?q=1"));
        assert!(is_valid_url("https://sub.example.co.uk:8080/x"));
        assert!(is_valid_url("http://127.0.0.1:5000/report"));
    }

    #[test]
    fn rejects_malformed_urls() {
        assert!(!is_valid_url("not-a-url"));
        assert!(!is_valid_url(""));
        assert!(!is_valid_url("http://"));
    }

    #[test]
    fn rejects_disallowed_schemes() {
        assert!(!is_valid_url("ftp://example.com/file"));
        assert!(!is_valid_url("file:///etc/passwd"));
        assert!(!is_valid_url("javascript:alert(1)"));
    }

    #[test]
    fn rejects_bad_domain_labels() {
        assert!(!is_valid_url("http://-example.com"));
        assert!(!is_valid_url("http://exa_mple.com"));
    }

    #[test]
    fn extension_check_is_case_insensitive() {
        assert!(has_allowed_extension("page.HTML", &["html", "htm"]));
        assert!(has_allowed_extension("page.htm", &["html", "htm"]));
        assert!(!has_allowed_extension("page.txt", &["html", "htm"]));
        assert!(!has_allowed_extension("page", &["html", "htm"]));
    }
}

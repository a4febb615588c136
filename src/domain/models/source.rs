use serde::Serialize;

/// The one content source a conversion request supplied, resolved once per
/// request. Precedence when a JSON body carries several fields: inline
/// content first, then URL. Uploads only arrive via multipart.
#[derive(Debug, Clone)]
pub enum HtmlSource {
    Inline {
        html: String,
        filename: Option<String>,
    },
    Url {
        url: String,
    },
    Upload {
        filename: String,
        content: Vec<u8>,
    },
}

impl HtmlSource {
    /// Picks the supplied source from a JSON request body. Returns `None`
    /// when no recognized input field is present.
    pub fn from_json_fields(
        html_content: Option<String>,
        url: Option<String>,
        filename: Option<String>,
    ) -> Option<Self> {
        if let Some(html) = html_content {
            return Some(Self::Inline { html, filename });
        }
        if let Some(url) = url {
            return Some(Self::Url { url });
        }
        None
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceKind {
    Inline,
    Url,
    Upload,
}

impl SourceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Inline => "inline",
            Self::Url => "url",
            Self::Upload => "upload",
        }
    }
}

/// Normalized conversion input: the HTML to render plus the target filename
/// and a descriptor of where the content came from.
#[derive(Debug, Clone)]
pub struct ResolvedInput {
    pub html: String,
    pub filename: String,
    pub kind: SourceKind,
    /// Original URL when the source was a fetch; empty otherwise.
    pub source_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inline_content_takes_precedence_over_url() {
        let source = HtmlSource::from_json_fields(
            Some("<p>hi</p>".to_string()),
            Some("https://example.com".to_string()),
            None,
        );
        assert!(matches!(source, Some(HtmlSource::Inline { .. })));
    }

    #[test]
    fn url_is_used_when_no_inline_content() {
        let source =
            HtmlSource::from_json_fields(None, Some("https://example.com".to_string()), None);
        match source {
            Some(HtmlSource::Url { url }) => assert_eq!(url, "https://example.com"),
            other => panic!("expected Url source, got {:?}", other),
        }
    }

    #[test]
    fn no_fields_yields_none() {
        assert!(HtmlSource::from_json_fields(None, None, None).is_none());
    }
}

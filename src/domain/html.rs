use chrono::Utc;
use scraper::Html;

/// Re-serializes arbitrary HTML through a permissive parser so the renderer
/// never sees malformed markup. Unclosed tags, unknown elements and invalid
/// nesting are corrected silently; nothing is filtered out, scripts
/// included. Disabling script execution is the renderer's job.
pub fn tidy(input: &str) -> String {
    Html::parse_document(input).root_element().html()
}

/// Wraps inline content in a minimal document frame carrying the render
/// timestamp, matching what the converter emits at the top of every
/// generated document.
pub fn framed_document(content: &str) -> String {
    let timestamp = Utc::now().format("%Y-%m-%d %H:%M:%S");
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <style>
        body {{
            margin: 0;
            padding: 5px 10px;
            font-family: Arial, sans-serif;
            font-size: 10px;
        }}
    </style>
</head>
<body>
    <div style="text-align: left;">{timestamp}</div>
{content}
</body>
</html>
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closes_unclosed_tags() {
        let cleaned = tidy("<p>hi");
        assert!(cleaned.contains("<p>hi</p>"));
    }

    #[test]
    fn tolerates_unknown_elements_and_bad_nesting() {
        let cleaned = tidy("<widget><b>bold<i>both</b>italic</i></widget>");
        assert!(cleaned.contains("widget"));
        assert!(cleaned.contains("bold"));
    }

    #[test]
    fn never_fails_on_garbage() {
        let cleaned = tidy("<<<>>>&&&\u{0}");
        assert!(cleaned.starts_with("<html"));
    }

    #[test]
    fn preserves_script_tags() {
        let cleaned = tidy("<script>alert(1)</script><p>x</p>");
        assert!(cleaned.contains("<script>"));
    }

    #[test]
    fn frame_carries_the_content() {
        let framed = framed_document("<p>report</p>");
        assert!(framed.contains("<p>report</p>"));
        assert!(framed.starts_with("<!DOCTYPE html>"));
    }
}

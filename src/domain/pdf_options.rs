use serde::Deserialize;

/// Renderer invocation options with named fields instead of a loose flag
/// map. Defaults match the converter's fixed option set; per-request
/// overrides win field by field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfOptions {
    pub page_size: String,
    pub orientation: Option<String>,
    pub margin_top: String,
    pub margin_right: String,
    pub margin_bottom: String,
    pub margin_left: String,
    pub encoding: String,
    pub outline: bool,
    pub local_file_access: bool,
    pub smart_shrinking: bool,
    pub print_media_type: bool,
    pub javascript: bool,
}

impl Default for PdfOptions {
    fn default() -> Self {
        Self {
            page_size: "A4".to_string(),
            orientation: None,
            margin_top: "0.75in".to_string(),
            margin_right: "0.75in".to_string(),
            margin_bottom: "0.75in".to_string(),
            margin_left: "0.75in".to_string(),
            encoding: "UTF-8".to_string(),
            outline: false,
            local_file_access: true,
            smart_shrinking: false,
            print_media_type: true,
            javascript: false,
        }
    }
}

impl PdfOptions {
    pub fn merged(overrides: PdfOptionOverrides) -> Self {
        let mut options = Self::default();
        options.apply(overrides);
        options
    }

    pub fn apply(&mut self, overrides: PdfOptionOverrides) {
        if let Some(page_size) = overrides.page_size {
            self.page_size = page_size;
        }
        if overrides.orientation.is_some() {
            self.orientation = overrides.orientation;
        }
        if let Some(margin_top) = overrides.margin_top {
            self.margin_top = margin_top;
        }
        if let Some(margin_right) = overrides.margin_right {
            self.margin_right = margin_right;
        }
        if let Some(margin_bottom) = overrides.margin_bottom {
            self.margin_bottom = margin_bottom;
        }
        if let Some(margin_left) = overrides.margin_left {
            self.margin_left = margin_left;
        }
        if let Some(encoding) = overrides.encoding {
            self.encoding = encoding;
        }
        if let Some(no_outline) = overrides.no_outline {
            self.outline = !no_outline;
        }
        if let Some(enabled) = overrides.enable_local_file_access {
            self.local_file_access = enabled;
        }
        if let Some(disabled) = overrides.disable_smart_shrinking {
            self.smart_shrinking = !disabled;
        }
        if let Some(enabled) = overrides.print_media_type {
            self.print_media_type = enabled;
        }
        if let Some(disabled) = overrides.disable_javascript {
            self.javascript = !disabled;
        }
    }

    /// Command-line arguments for the rendering binary.
    pub fn to_args(&self) -> Vec<String> {
        let mut args = vec![
            "--page-size".to_string(),
            self.page_size.clone(),
            "--margin-top".to_string(),
            self.margin_top.clone(),
            "--margin-right".to_string(),
            self.margin_right.clone(),
            "--margin-bottom".to_string(),
            self.margin_bottom.clone(),
            "--margin-left".to_string(),
            self.margin_left.clone(),
            "--encoding".to_string(),
            self.encoding.clone(),
        ];

        if let Some(orientation) = &self.orientation {
            args.push("--orientation".to_string());
            args.push(orientation.clone());
        }
        if !self.outline {
            args.push("--no-outline".to_string());
        }
        if self.local_file_access {
            args.push("--enable-local-file-access".to_string());
        } else {
            args.push("--disable-local-file-access".to_string());
        }
        if !self.smart_shrinking {
            args.push("--disable-smart-shrinking".to_string());
        }
        if self.print_media_type {
            args.push("--print-media-type".to_string());
        }
        if !self.javascript {
            args.push("--disable-javascript".to_string());
        }

        args
    }
}

/// Caller-supplied overrides, keyed the way the rendering binary names its
/// flags.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PdfOptionOverrides {
    #[serde(rename = "page-size")]
    pub page_size: Option<String>,
    #[serde(rename = "orientation")]
    pub orientation: Option<String>,
    #[serde(rename = "margin-top")]
    pub margin_top: Option<String>,
    #[serde(rename = "margin-right")]
    pub margin_right: Option<String>,
    #[serde(rename = "margin-bottom")]
    pub margin_bottom: Option<String>,
    #[serde(rename = "margin-left")]
    pub margin_left: Option<String>,
    #[serde(rename = "encoding")]
    pub encoding: Option<String>,
    #[serde(rename = "no-outline")]
    pub no_outline: Option<bool>,
    #[serde(rename = "enable-local-file-access")]
    pub enable_local_file_access: Option<bool>,
    #[serde(rename = "disable-smart-shrinking")]
    pub disable_smart_shrinking: Option<bool>,
    #[serde(rename = "print-media-type")]
    pub print_media_type: Option<bool>,
    #[serde(rename = "disable-javascript")]
    pub disable_javascript: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn caller_override_wins_per_field() {
        let overrides: PdfOptionOverrides =
            serde_json::from_str(r#"{"page-size": "Letter"}"#).unwrap();
        let options = PdfOptions::merged(overrides);

        assert_eq!(options.page_size, "Letter");
        // Untouched defaults survive the merge.
        assert_eq!(options.margin_top, "0.75in");
        assert_eq!(options.encoding, "UTF-8");
        assert!(!options.outline);
        assert!(options.local_file_access);
    }

    #[test]
    fn empty_overrides_keep_the_default_set() {
        let options = PdfOptions::merged(PdfOptionOverrides::default());
        assert_eq!(options, PdfOptions::default());
    }

    #[test]
    fn default_args_cover_the_full_flag_set() {
        let args = PdfOptions::default().to_args();
        let joined = args.join(" ");

        assert!(joined.contains("--page-size A4"));
        assert!(joined.contains("--margin-top 0.75in"));
        assert!(joined.contains("--margin-left 0.75in"));
        assert!(joined.contains("--encoding UTF-8"));
        assert!(args.contains(&"--no-outline".to_string()));
        assert!(args.contains(&"--enable-local-file-access".to_string()));
        assert!(args.contains(&"--disable-smart-shrinking".to_string()));
        assert!(args.contains(&"--print-media-type".to_string()));
        assert!(args.contains(&"--disable-javascript".to_string()));
    }

    #[test]
    fn orientation_is_only_emitted_when_set() {
        assert!(!PdfOptions::default()
            .to_args()
            .contains(&"--orientation".to_string()));

        let overrides: PdfOptionOverrides =
            serde_json::from_str(r#"{"orientation": "Landscape"}"#).unwrap();
        let args = PdfOptions::merged(overrides).to_args();
        assert!(args.contains(&"--orientation".to_string()));
        assert!(args.contains(&"Landscape".to_string()));
    }
}

use std::ffi::OsString;
use std::path::PathBuf;
use std::process::Stdio;

use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{info, warn};

use crate::{domain::pdf_options::PdfOptions, services::error::RenderError};

const RENDERER_BINARY: &str = "wkhtmltopdf";

const WELL_KNOWN_PATHS: &[&str] = &[
    "/usr/bin/wkhtmltopdf",
    "/usr/local/bin/wkhtmltopdf",
    "/opt/wkhtmltopdf/bin/wkhtmltopdf",
];

/// Immutable handle to the external rendering binary, produced by a single
/// startup probe. Every render call checks availability; the probe is never
/// repeated per request.
#[derive(Debug, Clone)]
pub struct RendererHandle {
    binary: Option<PathBuf>,
}

impl RendererHandle {
    /// Probes for the binary: explicit override first, then a `PATH` scan,
    /// then a fixed list of well-known locations. The first existing path
    /// wins; finding none yields an unavailable handle.
    pub fn discover(override_path: Option<PathBuf>) -> Self {
        let binary = locate(override_path, std::env::var_os("PATH"));

        match &binary {
            Some(path) => info!("wkhtmltopdf found at {}", path.display()),
            None => warn!("wkhtmltopdf not found; PDF rendering is unavailable"),
        }

        Self { binary }
    }

    pub fn available(&self) -> bool {
        self.binary.is_some()
    }

    /// Single synchronous invocation: HTML on stdin, PDF on stdout. No
    /// retries; callers may retry at the HTTP layer.
    pub async fn render(&self, html: &str, options: &PdfOptions) -> Result<Vec<u8>, RenderError> {
        let binary = self.binary.as_ref().ok_or(RenderError::Unavailable)?;

        let mut child = Command::new(binary)
            .args(options.to_args())
            .arg("--quiet")
            .arg("-")
            .arg("-")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    RenderError::Unavailable
                } else {
                    RenderError::Failed(e.to_string())
                }
            })?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| RenderError::Failed("failed to open renderer stdin".to_string()))?;
        stdin
            .write_all(html.as_bytes())
            .await
            .map_err(|e| RenderError::Failed(e.to_string()))?;
        drop(stdin);

        let output = child
            .wait_with_output()
            .await
            .map_err(|e| RenderError::Failed(e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(RenderError::Failed(stderr));
        }

        if !output.stdout.starts_with(b"%PDF") {
            return Err(RenderError::Failed(
                "renderer produced no PDF output".to_string(),
            ));
        }

        Ok(output.stdout)
    }
}

fn locate(override_path: Option<PathBuf>, search_path: Option<OsString>) -> Option<PathBuf> {
    if let Some(path) = override_path {
        if path.is_file() {
            return Some(path);
        }
        warn!(
            "configured renderer path {} does not exist, falling back to discovery",
            path.display()
        );
    }

    if let Some(search_path) = search_path {
        for dir in std::env::split_paths(&search_path) {
            let candidate = dir.join(RENDERER_BINARY);
            if candidate.is_file() {
                return Some(candidate);
            }
        }
    }

    WELL_KNOWN_PATHS
        .iter()
        .map(PathBuf::from)
        .find(|path| path.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fake_binary(dir: &std::path::Path) -> PathBuf {
        let path = dir.join(RENDERER_BINARY);
        std::fs::write(&path, b"#!/bin/sh\n").unwrap();
        path
    }

    #[test]
    fn explicit_override_wins() {
        let dir = tempfile::tempdir().unwrap();
        let binary = fake_binary(dir.path());

        let found = locate(Some(binary.clone()), None);
        assert_eq!(found, Some(binary));
    }

    #[test]
    fn falls_back_to_path_scan() {
        let dir = tempfile::tempdir().unwrap();
        let binary = fake_binary(dir.path());
        let search = std::env::join_paths([dir.path()]).unwrap();

        let found = locate(None, Some(search));
        assert_eq!(found, Some(binary));
    }

    #[test]
    fn missing_override_does_not_win() {
        let dir = tempfile::tempdir().unwrap();
        let binary = fake_binary(dir.path());
        let search = std::env::join_paths([dir.path()]).unwrap();

        let found = locate(Some(PathBuf::from("/nonexistent/wkhtmltopdf")), Some(search));
        assert_eq!(found, Some(binary));
    }

    #[test]
    fn empty_search_falls_through_to_well_known_locations() {
        let dir = tempfile::tempdir().unwrap();
        let search = std::env::join_paths([dir.path()]).unwrap();

        // Nothing on the provided search path; only a system-wide install
        // under a well-known location may still be picked up.
        match locate(None, Some(search)) {
            None => {}
            Some(found) => assert!(WELL_KNOWN_PATHS.contains(&found.to_str().unwrap())),
        }
    }

    #[tokio::test]
    async fn render_without_binary_reports_unavailable() {
        let handle = RendererHandle { binary: None };
        let result = handle.render("<p>x</p>", &PdfOptions::default()).await;
        assert!(matches!(result, Err(RenderError::Unavailable)));
    }
}

//! Where rendered documents go
//!
//! A [`Surface`] holds exactly one document at a time. Each render replaces
//! the whole content of its root.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{Error, Result};

pub trait Surface: Send {
    /// Replace the content of the document root with `markup`
    fn replace(&mut self, markup: &str) -> Result<()>;
}

const DOCUMENT_HEAD: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="utf-8">
    <meta name="viewport" content="width=device-width, initial-scale=1, shrink-to-fit=no">
    <title>Mission Mars</title>
    <link rel="stylesheet" href="assets/css/bootstrap.min.css">
    <link rel="stylesheet" href="assets/css/style.css">
</head>
<body>
<div id="root">"#;

const DOCUMENT_TAIL: &str = r#"
</div>
</body>
</html>
"#;

/// Wrap `markup` in the page shell
pub fn document(markup: &str) -> String {
    format!("{}{}{}", DOCUMENT_HEAD, markup, DOCUMENT_TAIL)
}

/// Writes each render to an HTML file, for the gateway to serve
#[derive(Debug, Clone)]
pub struct FileSurface {
    path: PathBuf,
}

impl FileSurface {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write(&self, contents: &str) -> std::io::Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        // Readers never observe a half-written document
        let staging = self.path.with_extension("html.tmp");
        std::fs::write(&staging, contents)?;
        std::fs::rename(&staging, &self.path)
    }
}

impl Surface for FileSurface {
    fn replace(&mut self, markup: &str) -> Result<()> {
        self.write(&document(markup)).map_err(|source| Error::Render {
            path: self.path.clone(),
            source,
        })?;
        debug!(path = %self.path.display(), bytes = markup.len(), "Document replaced");
        Ok(())
    }
}

/// Keeps every render in memory
#[derive(Debug, Clone, Default)]
pub struct MemorySurface {
    history: Vec<String>,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Markup of the latest render
    pub fn current(&self) -> Option<&str> {
        self.history.last().map(String::as_str)
    }

    pub fn renders(&self) -> &[String] {
        &self.history
    }
}

impl Surface for MemorySurface {
    fn replace(&mut self, markup: &str) -> Result<()> {
        self.history.push(markup.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_surface_replaces_document() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("dashboard.html");
        let mut surface = FileSurface::new(&path);

        surface.replace("<p>first</p>").unwrap();
        surface.replace("<p>second</p>").unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.contains("<div id=\"root\"><p>second</p>"));
        assert!(!written.contains("first"));
        assert!(!path.with_extension("html.tmp").exists());
    }

    #[test]
    fn test_memory_surface_keeps_history() {
        let mut surface = MemorySurface::new();
        assert_eq!(surface.current(), None);
        surface.replace("a").unwrap();
        surface.replace("b").unwrap();
        assert_eq!(surface.current(), Some("b"));
        assert_eq!(surface.renders().len(), 2);
    }
}

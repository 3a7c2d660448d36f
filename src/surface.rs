//! Display surfaces the widget writes rendered markup into
//!
//! A surface is the host-owned region the widget renders to. The widget
//! only ever overwrites it whole; it never creates, destroys, or diffs it.

use std::fs;
use std::path::{Path, PathBuf};

use crate::convert::escape;
use crate::error::Result;

/// A host-owned write target for rendered HTML.
pub trait DisplaySurface {
    /// Replaces the entire contents of the surface with `html`.
    fn replace_content(&mut self, html: &str) -> Result<()>;

    /// The fragment currently shown on the surface.
    fn content(&self) -> &str;
}

/// An in-memory surface for embedding and tests.
#[derive(Debug, Clone, Default)]
pub struct InMemorySurface {
    html: String,
}

impl InMemorySurface {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DisplaySurface for InMemorySurface {
    fn replace_content(&mut self, html: &str) -> Result<()> {
        self.html.clear();
        self.html.push_str(html);
        Ok(())
    }

    fn content(&self) -> &str {
        &self.html
    }
}

/// A surface that hosts the fragment inside a standalone HTML page.
///
/// The page body carries the widget's default colors inline, so the
/// document needs no stylesheet.
#[derive(Debug, Clone)]
pub struct DocumentSurface {
    title: String,
    fg: String,
    bg: String,
    html: String,
}

impl DocumentSurface {
    pub fn new(title: impl Into<String>) -> Self {
        Self::with_colors(title, "#FFF", "#000")
    }

    pub fn with_colors(
        title: impl Into<String>,
        fg: impl Into<String>,
        bg: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            fg: fg.into(),
            bg: bg.into(),
            html: String::new(),
        }
    }

    /// Renders the full host page around the current fragment.
    pub fn to_document(&self) -> String {
        format!(
            "<!DOCTYPE html>\n<html>\n<head><meta charset=\"utf-8\"><title>{}</title></head>\n\
             <body style=\"background-color:{};color:{}\">\n\
             <div style=\"font-family:monospace;white-space:pre-wrap\">{}</div>\n\
             </body>\n</html>\n",
            escape(&self.title),
            self.bg,
            self.fg,
            self.html
        )
    }
}

impl DisplaySurface for DocumentSurface {
    fn replace_content(&mut self, html: &str) -> Result<()> {
        self.html.clear();
        self.html.push_str(html);
        Ok(())
    }

    fn content(&self) -> &str {
        &self.html
    }
}

/// A surface whose host document lives on disk.
///
/// Every `replace_content` re-writes the whole file, mirroring the
/// unconditional-overwrite contract of the in-memory surfaces.
#[derive(Debug, Clone)]
pub struct FileSurface {
    path: PathBuf,
    document: DocumentSurface,
}

impl FileSurface {
    pub fn new(path: impl Into<PathBuf>, document: DocumentSurface) -> Self {
        Self {
            path: path.into(),
            document,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DisplaySurface for FileSurface {
    fn replace_content(&mut self, html: &str) -> Result<()> {
        self.document.replace_content(html)?;
        fs::write(&self.path, self.document.to_document())?;
        Ok(())
    }

    fn content(&self) -> &str {
        self.document.content()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn in_memory_surface_overwrites_whole_content() {
        let mut surface = InMemorySurface::new();
        surface.replace_content("first").unwrap();
        surface.replace_content("second").unwrap();
        assert_eq!(surface.content(), "second");
    }

    #[test]
    fn document_surface_wraps_fragment_in_page() {
        let mut surface = DocumentSurface::new("log <view>");
        surface.replace_content("<span>hi</span>").unwrap();
        let doc = surface.to_document();
        assert!(doc.starts_with("<!DOCTYPE html>"));
        assert!(doc.contains("<title>log &lt;view&gt;</title>"));
        assert!(doc.contains("background-color:#000;color:#FFF"));
        assert!(doc.contains("<span>hi</span>"));
        assert_eq!(surface.content(), "<span>hi</span>");
    }

    #[test]
    fn file_surface_rewrites_document_on_every_render() {
        let path = std::env::temp_dir().join("ansiview-surface-test.html");
        let mut surface = FileSurface::new(&path, DocumentSurface::new("t"));
        surface.replace_content("one").unwrap();
        surface.replace_content("two").unwrap();
        let written = fs::read_to_string(&path).unwrap();
        assert!(written.contains("two"));
        assert!(!written.contains("one"));
        fs::remove_file(&path).ok();
    }
}

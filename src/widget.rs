//! The rendering widget: a payload in, styled HTML onto a surface

use serde::{Deserialize, Serialize};

use crate::convert::{ConvertOptions, Converter};
use crate::error::Result;
use crate::marker;
use crate::surface::DisplaySurface;

/// The payload handed over by the host for each render request.
///
/// `ansi` is the entire wire contract: raw text interspersed with ANSI
/// escape sequences and optional `BRANCH~~ ... ~~` marker tokens. The
/// widget reads no other fields and keeps no reference to the payload
/// after `render` returns.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderPayload {
    pub ansi: String,
}

impl RenderPayload {
    pub fn new(ansi: impl Into<String>) -> Self {
        Self { ansi: ansi.into() }
    }

    /// Parses a JSON payload (`{"ansi": "..."}`) from a host.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Dimension hints supplied by the host at initialization and on resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceSize {
    pub width: u32,
    pub height: u32,
}

impl Default for SurfaceSize {
    fn default() -> Self {
        Self {
            width: 80,
            height: 24,
        }
    }
}

/// The contract a host drives after initialization.
pub trait Widget {
    /// Converts the payload and overwrites the surface with the result.
    fn render(&mut self, payload: &RenderPayload) -> Result<()>;

    /// Accepts a new dimension hint. See [`AnsiWidget::resize`].
    fn resize(&mut self, width: u32, height: u32);
}

/// The ANSI rendering widget.
///
/// Owns its conversion routine (injected at construction, never resolved
/// dynamically) and the display surface it was bound to. Each render is
/// stateless with respect to previous renders: the same payload always
/// produces the same markup.
pub struct AnsiWidget<S: DisplaySurface> {
    converter: Converter,
    surface: S,
    size: SurfaceSize,
}

impl<S: DisplaySurface> AnsiWidget<S> {
    /// Binds a widget to `surface` with the fixed default configuration.
    ///
    /// Never fails; the dimension hint is stored but unused.
    pub fn new(surface: S, size: SurfaceSize) -> Self {
        Self::with_options(surface, size, ConvertOptions::default())
    }

    pub fn with_options(surface: S, size: SurfaceSize, options: ConvertOptions) -> Self {
        Self {
            converter: Converter::new(options),
            surface,
            size,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    pub fn size(&self) -> SurfaceSize {
        self.size
    }
}

impl<S: DisplaySurface> Widget for AnsiWidget<S> {
    fn render(&mut self, payload: &RenderPayload) -> Result<()> {
        let html = self.converter.to_html(&payload.ansi)?;
        let html = marker::highlight_branches(&html);
        log::debug!(
            "rendered {} bytes of ANSI into {} bytes of HTML",
            payload.ansi.len(),
            html.len()
        );
        self.surface.replace_content(&html)
    }

    /// Deliberately unimplemented: the hint is stored and logged, but the
    /// content is neither re-rendered nor reflowed.
    fn resize(&mut self, width: u32, height: u32) {
        self.size = SurfaceSize { width, height };
        log::debug!("resize to {}x{} ignored: no reflow", width, height);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::InMemorySurface;

    #[test]
    fn test_payload_from_json() {
        let payload = RenderPayload::from_json(r#"{"ansi":"\u001b[31mhi"}"#).unwrap();
        assert_eq!(payload.ansi, "\x1b[31mhi");
    }

    #[test]
    fn test_payload_missing_field_is_an_error() {
        assert!(RenderPayload::from_json("{}").is_err());
        assert!(RenderPayload::from_json("not json").is_err());
    }

    #[test]
    fn test_render_writes_converted_markup() {
        let mut widget = AnsiWidget::new(InMemorySurface::new(), SurfaceSize::default());
        widget.render(&RenderPayload::new("\x1b[31mhi\x1b[0m")).unwrap();
        assert_eq!(widget.surface().content(), "<span style=\"color:#A00\">hi</span>");
    }

    #[test]
    fn test_resize_updates_hint_only() {
        let mut widget = AnsiWidget::new(InMemorySurface::new(), SurfaceSize::default());
        widget.render(&RenderPayload::new("text")).unwrap();
        widget.resize(1920, 1080);
        assert_eq!(widget.size(), SurfaceSize { width: 1920, height: 1080 });
        assert_eq!(widget.surface().content(), "text");
    }
}

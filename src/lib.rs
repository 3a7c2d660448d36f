//! ansiview
//!
//! A small embeddable widget that converts ANSI-escaped terminal text into
//! styled HTML and writes it into a host-owned display surface.
//!
//! # Features
//!
//! - **Inline styles only**: output is `<span style="...">` runs, no
//!   stylesheet dependency in the host page
//! - **Fixed safe defaults**: white on black, newline conversion, markup
//!   escaping of the input
//! - **Marker highlighting**: `BRANCH~~ ... ~~` delimiter pairs become
//!   yellow highlight spans
//! - **Swappable surfaces**: in-memory, standalone document, or on-disk
//!   host page behind one trait
//!
//! # Example
//!
//! ```
//! use ansiview::{new_widget, DisplaySurface, InMemorySurface, RenderPayload, SurfaceSize, Widget};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut widget = new_widget(InMemorySurface::new(), SurfaceSize::default());
//! widget.render(&RenderPayload::new("\x1b[32mok\x1b[0m BRANCH~~main~~"))?;
//!
//! let html = widget.surface().content();
//! assert!(html.contains("<span style=\"color:#0A0\">ok</span>"));
//! assert!(html.contains("<span style=\"color: yellow;\">~main~</span>"));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub use error::{Error, Result};

pub mod convert;
pub mod marker;
pub mod surface;
pub mod widget;

pub use convert::{ConvertOptions, Converter};
pub use surface::{DisplaySurface, DocumentSurface, FileSurface, InMemorySurface};
pub use widget::{AnsiWidget, RenderPayload, SurfaceSize, Widget};

/// Creates a widget bound to `surface` with the fixed default conversion
/// configuration (white on black, newline conversion, markup escaping,
/// whole-buffer mode).
///
/// This is the `initialize` entry point of the widget contract: it always
/// succeeds, stores the surface for later renders, and accepts the
/// dimension hint without acting on it.
pub fn new_widget<S: DisplaySurface>(surface: S, size: SurfaceSize) -> AnsiWidget<S> {
    AnsiWidget::new(surface, size)
}

//! ANSI-to-HTML conversion
//!
//! The conversion routine behind the widget: it scans a text buffer for
//! ANSI escape sequences, tracks the SGR style state they select, and emits
//! the text as runs of inline-styled `<span>` elements. Everything that is
//! not an SGR sequence (cursor movement, charset selection, ...) is
//! stripped from the output; text between sequences is passed through with
//! optional markup escaping and newline conversion.

mod color;
mod esc;
mod sgr;

pub use esc::escape;
pub use sgr::SgrStyle;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::Result;

/// Matches ANSI escape sequences: CSI sequences plus the `ESC ( B` charset
/// reset some tools emit.
static ANSI_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new("\u{1b}(\\[[0-9;?]*[A-HJKSTfhilmnsu]|\\(B)").expect("static regex"));

/// Configuration for the conversion routine.
///
/// The widget uses the defaults unchanged: white on black, newlines become
/// `<br/>`, markup characters in the input are escaped, and each call
/// converts a whole buffer.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Default foreground color, restored by SGR 39
    pub fg: String,
    /// Default background color, restored by SGR 49
    pub bg: String,
    /// Convert `\n` to `<br/>`
    pub newline: bool,
    /// Escape `& < > " '` in the input before conversion
    pub escape_xml: bool,
    /// Carry the style state across calls instead of resetting per buffer
    pub stream: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            fg: "#FFF".to_string(),
            bg: "#000".to_string(),
            newline: true,
            escape_xml: true,
            stream: false,
        }
    }
}

/// A reusable ANSI-to-HTML converter.
///
/// # Examples
///
/// ```
/// use ansiview::convert::{ConvertOptions, Converter};
///
/// let mut converter = Converter::new(ConvertOptions::default());
/// let html = converter.to_html("\x1b[31mred\x1b[0m").unwrap();
/// assert_eq!(html, "<span style=\"color:#A00\">red</span>");
/// ```
pub struct Converter {
    opts: ConvertOptions,
    style: SgrStyle,
}

impl Converter {
    pub fn new(opts: ConvertOptions) -> Self {
        Self {
            opts,
            style: SgrStyle::default(),
        }
    }

    pub fn options(&self) -> &ConvertOptions {
        &self.opts
    }

    /// Converts one buffer of ANSI-escaped text to HTML.
    ///
    /// In whole-buffer mode (`stream: false`) the style state starts fresh
    /// and every span is closed before returning, so equal inputs always
    /// produce equal output.
    pub fn to_html(&mut self, input: &str) -> Result<String> {
        if !self.opts.stream {
            self.style = SgrStyle::default();
        }
        let input = if self.opts.escape_xml {
            escape(input)
        } else {
            input.to_owned()
        };

        let mut out = String::with_capacity(input.len());
        let mut open: Option<String> = None;
        let mut last = 0;
        for m in ANSI_REGEX.find_iter(&input) {
            self.emit_text(&input[last..m.start()], &mut out, &mut open);
            last = m.end();
            let seq = m.as_str();
            if let Some(params) = seq
                .strip_prefix("\u{1b}[")
                .and_then(|s| s.strip_suffix('m'))
            {
                self.style.apply(params, &self.opts)?;
            }
        }
        self.emit_text(&input[last..], &mut out, &mut open);
        if open.is_some() {
            out.push_str("</span>");
        }
        Ok(out)
    }

    /// Appends a run of literal text, opening or switching the enclosing
    /// span when the style state changed since the last run.
    fn emit_text(&self, text: &str, out: &mut String, open: &mut Option<String>) {
        if text.is_empty() {
            return;
        }
        let css = self.style.css();
        if *open != css {
            if open.is_some() {
                out.push_str("</span>");
            }
            if let Some(css) = &css {
                out.push_str("<span style=\"");
                out.push_str(css);
                out.push_str("\">");
            }
            *open = css;
        }
        if self.opts.newline {
            out.push_str(&text.replace('\n', "<br/>"));
        } else {
            out.push_str(text);
        }
    }
}

//! SGR (Select Graphic Rendition) style state

use std::str::Split;

use crate::convert::{color, ConvertOptions};
use crate::error::{Error, Result};

/// The style state accumulated from SGR parameters.
///
/// `fg`/`bg` hold resolved CSS color values; `None` means the host default
/// applies and no color property is emitted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SgrStyle {
    pub fg: Option<String>,
    pub bg: Option<String>,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub strikethrough: bool,
}

impl SgrStyle {
    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Inline CSS for the current state, or `None` when unstyled.
    ///
    /// Property order is fixed (color, background-color, font-weight,
    /// font-style, text-decoration) so equal states always produce
    /// byte-identical markup.
    pub fn css(&self) -> Option<String> {
        if self.is_default() {
            return None;
        }
        let mut props = Vec::new();
        if let Some(fg) = &self.fg {
            props.push(format!("color:{fg}"));
        }
        if let Some(bg) = &self.bg {
            props.push(format!("background-color:{bg}"));
        }
        if self.bold {
            props.push("font-weight:bold".to_string());
        }
        if self.italic {
            props.push("font-style:italic".to_string());
        }
        match (self.underline, self.strikethrough) {
            (true, true) => props.push("text-decoration:underline line-through".to_string()),
            (true, false) => props.push("text-decoration:underline".to_string()),
            (false, true) => props.push("text-decoration:line-through".to_string()),
            (false, false) => {}
        }
        Some(props.join(";"))
    }

    /// Applies one SGR parameter list (the `...` of `ESC [ ... m`).
    ///
    /// Unknown parameters are ignored and a list that does not parse as
    /// numbers is dropped whole, matching how terminal emulators tolerate
    /// junk. An extended-color introducer (38/48) with a missing or unknown
    /// mode is an error that propagates to the caller.
    pub fn apply(&mut self, params: &str, opts: &ConvertOptions) -> Result<()> {
        let mut ps = params.split(';');
        while let Some(p) = ps.next() {
            let n: u16 = if p.is_empty() {
                0
            } else {
                match p.parse() {
                    Ok(n) => n,
                    Err(_) => return Ok(()),
                }
            };
            match n {
                0 => *self = SgrStyle::default(),
                1 => self.bold = true,
                3 => self.italic = true,
                4 => self.underline = true,
                9 => self.strikethrough = true,
                22 => self.bold = false,
                23 => self.italic = false,
                24 => self.underline = false,
                29 => self.strikethrough = false,
                30..=37 => self.fg = Some(color::four_bit((n - 30) as u8).to_string()),
                38 => self.fg = Some(extended_color(params, &mut ps)?),
                39 => self.fg = Some(opts.fg.clone()),
                40..=47 => self.bg = Some(color::four_bit((n - 40) as u8).to_string()),
                48 => self.bg = Some(extended_color(params, &mut ps)?),
                49 => self.bg = Some(opts.bg.clone()),
                90..=97 => self.fg = Some(color::four_bit((n - 90 + 8) as u8).to_string()),
                100..=107 => self.bg = Some(color::four_bit((n - 100 + 8) as u8).to_string()),
                _ => {}
            }
        }
        Ok(())
    }
}

/// Resolves an extended color (`38;5;n` or `38;2;r;g;b`) from the remaining
/// parameters.
fn extended_color(params: &str, ps: &mut Split<'_, char>) -> Result<String> {
    match ps.next() {
        Some("5") => {
            let n = ps
                .next()
                .and_then(|v| v.parse::<u8>().ok())
                .ok_or_else(|| Error::InvalidSgr(params.to_string()))?;
            Ok(color::fixed(n))
        }
        Some("2") => {
            let mut component = || {
                ps.next()
                    .and_then(|v| v.parse::<u8>().ok())
                    .ok_or_else(|| Error::InvalidSgr(params.to_string()))
            };
            let r = component()?;
            let g = component()?;
            let b = component()?;
            Ok(color::rgb(r, g, b))
        }
        _ => Err(Error::InvalidSgr(params.to_string())),
    }
}

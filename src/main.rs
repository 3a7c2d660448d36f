use std::fs;
use std::io::Read;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;

use ansiview::{
    AnsiWidget, ConvertOptions, DisplaySurface, DocumentSurface, FileSurface, InMemorySurface,
    RenderPayload, SurfaceSize, Widget,
};

/// Render ANSI-escaped terminal text as styled HTML.
#[derive(Parser, Debug)]
#[command(name = "ansiview", version, about)]
struct Cli {
    /// Input file with ANSI text; reads stdin when omitted
    input: Option<PathBuf>,

    /// Write the result here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Treat the input as a JSON render payload ({"ansi": "..."})
    #[arg(long)]
    json: bool,

    /// Default foreground color
    #[arg(long, default_value = "#FFF")]
    fg: String,

    /// Default background color
    #[arg(long, default_value = "#000")]
    bg: String,

    /// Emit only the HTML fragment instead of a full document
    #[arg(long)]
    fragment: bool,

    /// Title of the generated document
    #[arg(long, default_value = "ansiview")]
    title: String,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let raw = match &cli.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            buf
        }
    };

    let payload = if cli.json {
        RenderPayload::from_json(&raw)?
    } else {
        RenderPayload::new(raw)
    };

    let options = ConvertOptions {
        fg: cli.fg.clone(),
        bg: cli.bg.clone(),
        ..Default::default()
    };
    let size = SurfaceSize::default();

    let html = if cli.fragment {
        let mut widget = AnsiWidget::with_options(InMemorySurface::new(), size, options);
        widget.render(&payload)?;
        widget.into_surface().content().to_string()
    } else {
        let document = DocumentSurface::with_colors(&cli.title, &cli.fg, &cli.bg);
        if let Some(path) = &cli.output {
            // The file surface re-writes the host page itself.
            let mut widget =
                AnsiWidget::with_options(FileSurface::new(path, document), size, options);
            widget.render(&payload)?;
            return Ok(());
        }
        let mut widget = AnsiWidget::with_options(document, size, options);
        widget.render(&payload)?;
        widget.into_surface().to_document()
    };

    match &cli.output {
        Some(path) => fs::write(path, html)
            .with_context(|| format!("writing {}", path.display()))?,
        None => print!("{html}"),
    }

    Ok(())
}

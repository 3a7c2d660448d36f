//! Render snapshot demo - converts colored sample buffers and prints the HTML

use ansiview::{new_widget, DisplaySurface, InMemorySurface, RenderPayload, SurfaceSize, Widget};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("ansiview - Render Snapshot Demo\n");

    let samples = vec![
        "\x1b[1;32mPASS\x1b[0m all checks green",
        "\x1b[31merror:\x1b[0m broken pipe on line 3\nBRANCH~~release/1.4~~ merged",
        "plain text with <markup> & \"quotes\"",
    ];

    let mut widget = new_widget(InMemorySurface::new(), SurfaceSize::default());

    for sample in samples {
        println!("{}", "=".repeat(60));
        println!("ANSI input: {:?}", sample);
        widget.render(&RenderPayload::new(sample))?;
        println!("{}", "-".repeat(60));
        println!("HTML: {}", widget.surface().content());
    }
    println!("{}", "=".repeat(60));
    println!("Done!");

    Ok(())
}

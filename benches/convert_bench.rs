use criterion::{criterion_group, criterion_main, Criterion};

use ansiview::{
    new_widget, ConvertOptions, Converter, InMemorySurface, RenderPayload, SurfaceSize, Widget,
};

fn sample_buffer(lines: usize) -> String {
    let mut buf = String::new();
    for i in 0..lines {
        buf.push_str(&format!(
            "\x1b[1;34m{i:>4}\x1b[0m \x1b[32m+\x1b[0m change in BRANCH~~feature/{i}~~ <tag> & more\n"
        ));
    }
    buf
}

fn bench_convert(c: &mut Criterion) {
    let input = sample_buffer(200);
    let mut converter = Converter::new(ConvertOptions::default());

    c.bench_function("convert_200_lines", |b| {
        b.iter(|| converter.to_html(&input).unwrap())
    });
}

fn bench_widget_render(c: &mut Criterion) {
    let payload = RenderPayload::new(sample_buffer(200));
    let mut widget = new_widget(InMemorySurface::new(), SurfaceSize::default());

    c.bench_function("widget_render_200_lines", |b| {
        b.iter(|| widget.render(&payload).unwrap())
    });
}

criterion_group!(benches, bench_convert, bench_widget_render);
criterion_main!(benches);

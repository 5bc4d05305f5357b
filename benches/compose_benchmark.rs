//! Compose benchmark: Measure shell composition and frame drawing.
//!
//! Composition is a single presence check plus one wrapping allocation;
//! drawing dominates at realistic terminal sizes.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use vestibule::{layout, AppShell, Element, Frame, Page, PageProps, Rect};

fn home(_props: &PageProps) -> Element {
    Element::text("THIS IS A LOGIN PAGE")
}

fn plain(_props: &PageProps) -> Element {
    Element::text("X")
}

fn compose_with_declared_layout(c: &mut Criterion) {
    let shell = AppShell::new();
    let page = Page::new("/", home).with_layout(layout::centered);
    let props = PageProps::new();

    c.bench_function("compose_declared", |b| {
        b.iter(|| shell.compose(black_box(&page), black_box(&props)))
    });
}

fn compose_with_default_fallback(c: &mut Criterion) {
    let shell = AppShell::new();
    let page = Page::new("/plain", plain);
    let props = PageProps::new();

    c.bench_function("compose_fallback", |b| {
        b.iter(|| shell.compose(black_box(&page), black_box(&props)))
    });
}

fn navigate_mounted_route(c: &mut Criterion) {
    let mut shell = AppShell::new();
    shell.mount(Page::new("/", home).with_layout(layout::centered));
    let props = PageProps::new();

    c.bench_function("navigate", |b| {
        b.iter(|| shell.navigate(black_box("/"), black_box(&props)).unwrap())
    });
}

fn draw_composed_frame(c: &mut Criterion) {
    let shell = AppShell::new();
    let page = Page::new("/", home).with_layout(layout::centered);
    let composed = shell.compose(&page, &PageProps::new());
    let mut frame = Frame::new(80, 24);

    c.bench_function("draw_80x24", |b| {
        b.iter(|| {
            frame.clear();
            frame.draw(black_box(&composed), Rect::from_size(80, 24));
        })
    });
}

criterion_group!(
    benches,
    compose_with_declared_layout,
    compose_with_default_fallback,
    navigate_mounted_route,
    draw_composed_frame,
);
criterion_main!(benches);

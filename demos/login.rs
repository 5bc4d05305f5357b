//! Demo: a login placeholder page composed with the centered layout,
//! alongside a default-layout page, presented on the real terminal.
//!
//! Run with: `cargo run --example login`

use vestibule::{layout, AppShell, Element, Frame, Page, PageProps, Rect, Screen};

fn home(_props: &PageProps) -> Element {
    Element::text("THIS IS A LOGIN PAGE")
}

fn about(props: &PageProps) -> Element {
    Element::stack(vec![
        Element::text("About"),
        Element::text(props.get("version").unwrap_or("dev")),
    ])
}

fn main() -> vestibule::Result<()> {
    let mut shell = AppShell::new();
    shell.mount(Page::new("/", home).with_layout(layout::centered));
    shell.mount(Page::new("/about", about));

    let (width, height) = Screen::size().unwrap_or((80, 24));
    let mut frame = Frame::new(width, height);
    let mut screen = Screen::new();

    // Home declares the centered layout.
    let composed = shell.navigate("/", &PageProps::new())?;
    frame.draw(&composed, Rect::from_size(width, height));
    screen.present(&frame)?;
    std::thread::sleep(std::time::Duration::from_secs(2));

    // About declares nothing and falls back to the nav layout.
    let props = PageProps::new().with("version", "0.1.0");
    let composed = shell.navigate("/about", &props)?;
    frame.clear();
    frame.draw(&composed, Rect::from_size(width, height));
    screen.present(&frame)?;
    std::thread::sleep(std::time::Duration::from_secs(2));

    Ok(())
}

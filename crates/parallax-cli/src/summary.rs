use console::Style;
use parallax_core::config::{ParallaxConfig, ScaleMode};
use parallax_core::engine::ParallaxEngine;
use parallax_core::geometry::Rect;

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    method: Style,
    disabled: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            method: Style::new().green(),
            disabled: Style::new().dim().yellow(),
        }
    }
}

fn print_title(s: &Styles, title: &str) {
    println!();
    println!("  {}", s.title.apply_to(title));
    println!(
        "  {}",
        s.title.apply_to("\u{2550}".repeat(title.chars().count()))
    );
    println!();
}

pub fn print_params_summary(config: &ParallaxConfig, engine: &ParallaxEngine) {
    let s = Styles::new();
    print_title(&s, "Parallax Parameters");

    // Inputs
    println!("  {}", s.header.apply_to("Layout"));
    println!(
        "    {:<14}{}",
        s.label.apply_to("Image"),
        s.value
            .apply_to(format!("{}x{}", config.image.width, config.image.height))
    );
    println!(
        "    {:<14}{}",
        s.label.apply_to("Viewport"),
        s.value.apply_to(format!(
            "{}x{}",
            config.viewport.width, config.viewport.height
        ))
    );
    println!(
        "    {:<14}{}",
        s.label.apply_to("Pages"),
        s.value.apply_to(config.page_count)
    );
    println!(
        "    {:<14}{}",
        s.label.apply_to("Scale Mode"),
        s.method.apply_to(config.scale_mode)
    );
    if config.scale_mode == ScaleMode::FitHeight {
        println!(
            "    {:<14}{}",
            s.label.apply_to("Overlap"),
            s.value.apply_to(config.overlap)
        );
    } else {
        println!(
            "    {:<14}{}",
            s.label.apply_to("Overlap"),
            s.disabled.apply_to("unused")
        );
    }
    println!();

    // Derived
    println!("  {}", s.header.apply_to("Derived"));
    if config.viewport.height == config.image.height {
        println!(
            "    {:<14}{}",
            s.label.apply_to("Scaling"),
            s.disabled.apply_to("none (viewport height matches image)")
        );
    }
    println!(
        "    {:<14}{}",
        s.label.apply_to("Chunk"),
        s.value.apply_to(format!("{} px", engine.chunk_width()))
    );
    println!(
        "    {:<14}{}",
        s.label.apply_to("Projected"),
        s.value.apply_to(format!("{} px", engine.projected_width()))
    );
    let source = engine.source();
    println!(
        "    {:<14}{}",
        s.label.apply_to("Crop Rows"),
        s.value.apply_to(format!("{}..{}", source.top, source.bottom))
    );
    println!();
}

pub fn print_scroll_summary(page: usize, offset: f32, engine: &ParallaxEngine) {
    let s = Styles::new();
    print_title(&s, "Scroll Position");

    println!(
        "    {:<14}{}",
        s.label.apply_to("Position"),
        s.value.apply_to(format!("{:.3}", page as f32 + offset))
    );
    print_rect(&s, "Source", engine.source());
    print_rect(&s, "Destination", engine.destination());
    println!();
}

fn print_rect(s: &Styles, label: &str, rect: Rect) {
    println!(
        "    {:<14}{} {}",
        s.label.apply_to(label),
        s.value.apply_to(rect),
        s.label
            .apply_to(format!("({}x{})", rect.width(), rect.height()))
    );
}

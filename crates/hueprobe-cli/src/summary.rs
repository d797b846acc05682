use console::Style;
use hueprobe_core::config::HueprobeConfig;
use hueprobe_core::error::SampleError;
use hueprobe_core::pixel::{CapturedImage, DetectedColor};
use hueprobe_core::session::SessionState;

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    color: Style,
    missing: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            color: Style::new().green().bold(),
            missing: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

/// Nearest xterm 256-color cube entry for an RGB color.
fn cube_index(color: DetectedColor) -> u8 {
    let level = |c: u8| ((c as u16 * 5 + 127) / 255) as u8;
    16 + 36 * level(color.r) + 6 * level(color.g) + level(color.b)
}

fn swatch(color: DetectedColor) -> String {
    Style::new()
        .on_color256(cube_index(color))
        .apply_to("      ")
        .to_string()
}

pub fn print_settings(config: &HueprobeConfig) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("hueprobe"));
    println!(
        "  {:<10}{}",
        s.label.apply_to("Filter"),
        s.value.apply_to(config.sampler.filter)
    );
    println!(
        "  {:<10}{}",
        s.label.apply_to("Quality"),
        s.value.apply_to(format!("{:.2}", config.capture.quality))
    );
    println!(
        "  {:<10}{}",
        s.label.apply_to("Overlap"),
        s.value.apply_to(config.session.overlap)
    );
    println!();
}

fn print_image(image: &CapturedImage, s: &Styles) {
    let source = image
        .source
        .as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "<memory>".to_string());
    println!(
        "  {:<10}{} ({}x{})",
        s.label.apply_to("Image"),
        s.path.apply_to(source),
        image.width,
        image.height
    );
}

/// Render the outcome of one capture cycle.
pub fn print_result(color: Option<DetectedColor>, failure: Option<&SampleError>) {
    let s = Styles::new();
    match color {
        Some(color) => println!(
            "  {:<10}{} {}",
            s.label.apply_to("Color"),
            s.color.apply_to(color),
            swatch(color)
        ),
        None => {
            println!("  {:<10}{}", s.label.apply_to("Color"), s.missing.apply_to("no color"));
            if let Some(reason) = failure {
                println!("  {:<10}{}", s.label.apply_to("Reason"), s.missing.apply_to(reason));
            }
        }
    }
}

/// Render a session state, as seen by an observer.
pub fn print_state(state: &SessionState) {
    let s = Styles::new();
    println!("  {:<10}{}", s.label.apply_to("State"), s.title.apply_to(state.phase()));
    if let Some(image) = state.image() {
        print_image(image, &s);
    }
    match state {
        SessionState::Sampled { .. } | SessionState::Failed { .. } => {
            print_result(state.color(), state.failure())
        }
        _ => {}
    }
}

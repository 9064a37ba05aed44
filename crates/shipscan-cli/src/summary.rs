use std::path::Path;

use console::Style;
use shipscan_core::detection::{DetectionConfig, ShipDetection};

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    disabled: Style,
    path: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            disabled: Style::new().dim().yellow(),
            path: Style::new().underlined(),
        }
    }
}

pub fn print_detection_config(config: &DetectionConfig, input: &Path, output: &Path) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Ship Detection"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(14)));
    println!();

    println!(
        "  {:<14}{}",
        s.label.apply_to("Input"),
        s.path.apply_to(input.display())
    );
    println!(
        "  {:<14}{}",
        s.label.apply_to("Output"),
        s.path.apply_to(output.display())
    );
    println!();

    println!("  {}", s.header.apply_to("Parameters"));
    println!(
        "    {:<12}{}",
        s.label.apply_to("Water"),
        s.value.apply_to(format!("> {}", config.water_threshold))
    );
    println!(
        "    {:<12}{}",
        s.label.apply_to("Ship"),
        s.value.apply_to(format!("<= -{}", config.ship_threshold))
    );
    if config.erosion_iterations == 0 {
        println!(
            "    {:<12}{}",
            s.label.apply_to("Erosion"),
            s.disabled.apply_to("disabled")
        );
    } else {
        println!(
            "    {:<12}{}",
            s.label.apply_to("Erosion"),
            s.value.apply_to(format!("{} passes", config.erosion_iterations))
        );
    }
    println!(
        "    {:<12}{}",
        s.label.apply_to("Box"),
        s.value.apply_to(format!("{0}x{0} px", config.box_side))
    );
    println!();
}

pub fn print_detection_result(detection: &ShipDetection) {
    let s = Styles::new();

    println!("  {}", s.header.apply_to("Result"));
    let rows = [
        ("Water", detection.water_mask.count_true()),
        ("Denoised", detection.denoised_mask.count_true()),
        ("Eroded", detection.eroded_mask.count_true()),
        ("Candidates", detection.candidates.count_true()),
    ];
    for (label, count) in rows {
        println!(
            "    {:<12}{}",
            s.label.apply_to(label),
            s.value.apply_to(format!("{count} px"))
        );
    }
    println!(
        "    {:<12}{}",
        s.label.apply_to("Ships"),
        s.value.apply_to(detection.boxes.len())
    );
    for (i, b) in detection.boxes.iter().enumerate() {
        println!(
            "      {}. rows {}..{}, cols {}..{}",
            s.label.apply_to(i + 1),
            b.row_start,
            b.row_end,
            b.col_start,
            b.col_end
        );
    }
    println!();
}

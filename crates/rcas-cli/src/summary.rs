use console::Style;
use rcas_core::sharpen::params::{RcasConfig, RcasParams};

struct Styles {
    title: Style,
    label: Style,
    value: Style,
    method: Style,
    disabled: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            method: Style::new().green(),
            disabled: Style::new().dim().yellow(),
        }
    }
}

/// Print the resolved sharpening parameters.
///
/// `config` is what the user asked for; `params` is what the kernel will
/// actually use after clamping.
pub fn print_sharpen_summary(config: &RcasConfig, params: &RcasParams) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("RCAS Sharpening"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(15)));
    println!();

    let mode = if config.extended { "extended" } else { "standard" };
    println!(
        "    {:<14}{}",
        s.label.apply_to("Mode"),
        s.method.apply_to(mode)
    );
    println!(
        "    {:<14}{}",
        s.label.apply_to("Sharpness"),
        s.value.apply_to(format!("{:.3}", params.sharpness()))
    );
    println!(
        "    {:<14}{}",
        s.label.apply_to("Limit"),
        s.value.apply_to(format!("{:.4}", params.limit()))
    );
    if params.denoise() {
        println!(
            "    {:<14}{}",
            s.label.apply_to("Denoise"),
            s.method.apply_to(format!("on ({} luma)", params.luma_mode()))
        );
    } else {
        println!(
            "    {:<14}{}",
            s.label.apply_to("Denoise"),
            s.disabled.apply_to("disabled")
        );
    }
    if params.passthrough_alpha() {
        println!(
            "    {:<14}{}",
            s.label.apply_to("Alpha"),
            s.value.apply_to("pass-through")
        );
    } else {
        println!(
            "    {:<14}{}",
            s.label.apply_to("Alpha"),
            s.disabled.apply_to("dropped")
        );
    }
    println!(
        "    {:<14}{}",
        s.label.apply_to("Border"),
        s.value.apply_to(config.border)
    );
    println!();
}

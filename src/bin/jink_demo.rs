//! Renders bundled sample data through the highlighter.

use clap::Parser;
use jink::config::available_themes;
use jink::highlight::{Highlighter, Theme};

const CONFIG: &str = include_str!("../../samples/config.conf");
const SET_CONFIG: &str = include_str!("../../samples/set_config.conf");
const THEME_SAMPLE: &str = include_str!("../../samples/theme_sample.conf");

const SHOW_OUTPUTS: [(&str, &str); 5] = [
    ("show bgp summary", include_str!("../../samples/bgp_summary.txt")),
    ("show ospf neighbor", include_str!("../../samples/ospf_neighbors.txt")),
    ("show interfaces terse", include_str!("../../samples/interface_terse.txt")),
    ("show route", include_str!("../../samples/route_table.txt")),
    ("show chassis hardware", include_str!("../../samples/chassis_hardware.txt")),
];

/// jink-demo - preview Junos highlighting themes
#[derive(Parser, Debug)]
#[command(name = "jink-demo")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Color theme
    #[arg(short, long, value_name = "NAME", default_value = "default")]
    theme: String,

    /// Show set-style config instead of hierarchical
    #[arg(short, long)]
    set: bool,

    /// Show a short sample in every theme
    #[arg(short, long)]
    all: bool,

    /// Show command output (BGP, OSPF, interfaces, routes, hardware)
    #[arg(short = 'o', long)]
    show: bool,
}

fn main() {
    let args = Args::parse();

    if args.all {
        show_all_themes();
        return;
    }

    let highlighter = Highlighter::with_theme(Theme::by_name(&args.theme.to_lowercase()));

    if args.show {
        println!(
            "\n=== Junos Show Output Highlighting Demo (Theme: {}) ===",
            args.theme
        );
        for (title, output) in SHOW_OUTPUTS {
            println!("\n--- {title} ---");
            println!("{}", highlighter.highlight_show_output(output));
        }
        return;
    }

    let config = if args.set { SET_CONFIG } else { CONFIG };
    println!(
        "\n=== Junos Syntax Highlighting Demo (Theme: {}) ===\n",
        args.theme
    );
    println!("{}", highlighter.highlight(config));
}

fn show_all_themes() {
    for (i, name) in available_themes().into_iter().enumerate() {
        let highlighter = Highlighter::with_theme(Theme::by_name(name));
        let suffix = if i == 0 { " (default)" } else { "" };
        println!("\n=== Theme: {name}{suffix} ===");
        println!("{}", highlighter.highlight(THEME_SAMPLE));
    }
}

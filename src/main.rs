use std::path::Path;
use std::process::ExitCode;

use bubble_renderer::{IconCompositor, export};
use tracing_subscriber::EnvFilter;

const OUTPUT_PATH: &str = "app_icon.png";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    println!("Generating app icon...");
    let icon = IconCompositor::new().compose();

    match export::write_png(&icon, Path::new(OUTPUT_PATH)) {
        Ok(()) => {
            println!("Icon saved to {OUTPUT_PATH}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

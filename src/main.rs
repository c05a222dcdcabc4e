use clap::Parser;
use std::path::Path;
use vary_colors::imaging::RustBackend;
use vary_colors::{config, output, scan, vary};

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "vary-colors")]
#[command(about = "Give image assets a subtle random color variation, in place")]
#[command(long_about = "\
Give image assets a subtle random color variation, in place

Every matching file under the asset roots is decoded, shifted slightly in
hue, saturation and brightness, and written back over itself in its
original format. Alpha is left untouched. Each file gets its own random
variation.

Defaults:

  roots:      assets/tiles, assets/plants
  extension:  png
  excluded:   any path through a `characters` or `ui` directory
  hue shift:  -3..=3 (on a 0-255 hue circle)
  saturation: x0.98..=x1.02
  brightness: x0.98..=x1.02

Override any of these with a vary-colors.toml in the working directory.
There is no undo: commit or back up your assets first.")]
#[command(version = version_string())]
struct Cli {}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _cli = Cli::parse();
    let base = Path::new(".");

    let config = config::load_config(base)?;
    let roots = config.scan.resolve_roots(base);
    let discovery = scan::discover(&roots, &config.scan.extension, &config.scan.exclude)?;
    output::print_scan_output(&discovery, &config.scan.extension, base);

    let summary = vary::vary_files(
        &RustBackend::new(),
        &discovery.files,
        &config.variation.ranges(),
        &mut rand::rng(),
        |event| {
            for line in output::format_vary_event(event, base) {
                println!("{}", line);
            }
        },
    )?;
    output::print_summary(&summary);

    Ok(())
}

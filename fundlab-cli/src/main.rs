//! Fundlab CLI — fetch the three NAV feeds and write the JSON snapshots.
//!
//! Single entry point, no flags: endpoints, output location, and the
//! UTC+8 timestamp offset are fixed for the process lifetime.

use anyhow::Result;
use clap::Parser;
use fundlab_core::config::PipelineConfig;
use fundlab_core::fetch::{HttpNavSource, StdoutProgress};
use fundlab_core::pipeline;

#[derive(Parser)]
#[command(
    name = "fundlab",
    about = "Fetch fund NAV feeds and write JSON snapshots"
)]
struct Cli {}

fn main() -> Result<()> {
    Cli::parse();

    let config = PipelineConfig::default();
    let source = HttpNavSource::new(config.http_timeout);
    let progress = StdoutProgress;

    println!("Fund data snapshot run starting");
    match pipeline::run(&config, &source, &progress) {
        Ok(summary) => {
            println!();
            println!("=== Run Summary ===");
            println!("Total funds:    {}", summary.total_funds);
            println!("Popular funds:  {}", summary.popular_funds);
            println!("NAV cache keys: {}", summary.nav_cache_size);
            println!("Output dir:     {}", config.output_dir.display());

            if !summary.all_written() {
                for (file, err) in &summary.write_failures {
                    eprintln!("Write failed for {file}: {err}");
                }
                std::process::exit(1);
            }
            Ok(())
        }
        Err(e) => {
            eprintln!("Fatal: {e}");
            std::process::exit(1);
        }
    }
}

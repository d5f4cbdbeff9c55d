use cidr_registry::config::{init_logging, Settings};
use cidr_registry::output::render;
use cidr_registry::{load_registry, overlap_report, RegistryError};
use clap::Parser;
use colored::Colorize;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    dotenv::dotenv().ok();
    let settings = Settings::parse();
    init_logging(&settings.log_config)?;
    log::info!("#Start main() registry_file={}", settings.registry_file);

    let registry = match load_registry(Some(&settings.registry_file)) {
        Ok(registry) => registry,
        Err(e) => {
            if settings.all_conflicts && matches!(e, RegistryError::Overlap(_)) {
                let all = overlap_report(&settings.registry_file)?;
                eprintln!("{} {} overlapping pair(s)", "ERROR".on_red(), all.len());
                for conflict in &all {
                    eprintln!("  {conflict}");
                }
            } else {
                eprintln!("{} {e}", "ERROR".on_red());
            }
            std::process::exit(1);
        }
    };

    let out = render(&registry, settings.format)?;
    if out.ends_with('\n') {
        print!("{out}");
    } else {
        println!("{out}");
    }
    Ok(())
}

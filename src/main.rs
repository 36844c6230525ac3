use anyhow::Result;
use salesboard::config::Config;
use salesboard::ui::app;
use salesboard::utils::logging;

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn print_help() {
    println!("salesboard - interactive dashboard for the electronics sales sample dataset");
    println!();
    println!("Usage:");
    println!("  salesboard [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --generate-config  Write a commented default config file and exit");
    println!("  -h, --help         Show this help");
    println!("  -V, --version      Show the version");
    println!();
    println!("The dataset is embedded; there is nothing to load.");
    println!("Keys inside the dashboard: ? shows the full list.");
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|a| a == "-h" || a == "--help") {
        print_help();
        return Ok(());
    }
    if args.iter().any(|a| a == "-V" || a == "--version") {
        println!("salesboard {}", VERSION);
        return Ok(());
    }

    if args.iter().any(|a| a == "--generate-config") {
        let path = Config::get_config_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&path, Config::create_default_with_comments())?;
        println!("Configuration file created at: {}", path.display());
        println!("Edit this file to customize the dashboard.");
        return Ok(());
    }

    match logging::init_tracing() {
        Ok(log_path) => {
            eprintln!("Logs: {}", log_path.display());
        }
        Err(err) => {
            // a missing log file is not worth refusing to start over
            eprintln!("Logging disabled: {}", err);
        }
    }

    let config = Config::load().unwrap_or_else(|err| {
        eprintln!("Config error ({}), using defaults", err);
        Config::default()
    });

    app::run(config)
}

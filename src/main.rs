use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing::info;

use penny::config::{paths::PennyPaths, settings::Settings};

#[derive(Parser)]
#[command(
    name = "penny",
    version,
    about = "Track expenses and savings goals from the terminal",
    long_about = "Penny keeps a running list of expenses and savings goals while it \
                  runs. Entries live in memory only and are gone when you quit."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive TUI (default)
    #[command(alias = "ui")]
    Tui,

    /// Write the default settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = PennyPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    penny::logging::init(&paths, &settings)?;

    match cli.command.unwrap_or(Commands::Tui) {
        Commands::Tui => {
            penny::tui::run_tui(&settings)?;
        }
        Commands::Init => {
            if paths.is_initialized() {
                println!(
                    "Settings already exist at: {}",
                    paths.settings_file().display()
                );
            } else {
                settings.save(&paths)?;
                info!(path = %paths.settings_file().display(), "settings written");
                println!("Wrote settings to: {}", paths.settings_file().display());
            }
        }
        Commands::Config => {
            println!("Penny Configuration");
            println!("===================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!("Log file:         {}", paths.log_file().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Tick rate (ms):  {}", settings.tick_rate_ms);
            println!("  Mouse capture:   {}", settings.mouse_capture);
            println!("  Log level:       {}", settings.log_level);
        }
    }

    Ok(())
}

use std::io;
use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use addressbook::cli::MenuSession;
use addressbook::config::{AddressBookPaths, Settings};
use addressbook::logging;

#[derive(Parser)]
#[command(
    name = "addressbook",
    version,
    about = "Terminal-based address book manager",
    long_about = "Create named address books, fill them with contacts, search them \
                  by city, state or ZIP code and export everything to CSV, JSON or YAML."
)]
struct Cli {
    /// Directory for settings, logs and exports
    #[arg(long, global = true, env = "ADDRESSBOOK_DATA_DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive menu (default)
    #[command(alias = "run")]
    Menu,

    /// Write default settings to the data directory
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = match cli.data_dir {
        Some(dir) => AddressBookPaths::with_base_dir(dir),
        None => AddressBookPaths::new()?,
    };
    let settings = Settings::load_or_create(&paths)?;

    match cli.command.unwrap_or(Commands::Menu) {
        Commands::Menu => {
            logging::init(&paths, &settings)?;

            let stdin = io::stdin();
            let stdout = io::stdout();
            let mut session = MenuSession::new(stdin.lock(), stdout.lock(), paths, settings);
            session.run()?;
        }
        Commands::Init => {
            let existed = paths.is_initialized();
            settings.save(&paths)?;
            if existed {
                println!("Settings rewritten: {}", paths.settings_file().display());
            } else {
                println!("Settings written to: {}", paths.settings_file().display());
            }
        }
        Commands::Config => {
            println!("Address Book Configuration");
            println!("==========================");
            println!("Data directory:   {}", paths.base_dir().display());
            println!(
                "Settings file:    {}{}",
                paths.settings_file().display(),
                if paths.is_initialized() { "" } else { " (not written yet)" }
            );
            println!("Log file:         {}", paths.log_file().display());
            println!("Export directory: {}", paths.export_dir().display());
            println!();
            println!("Settings:");
            println!("  Log level:   {}", settings.log_level);
            println!("  Pretty JSON: {}", settings.pretty_json);
            println!("  CSV file:    {}", settings.csv_file_name);
            println!("  JSON file:   {}", settings.json_file_name);
            println!("  YAML file:   {}", settings.yaml_file_name);
        }
    }

    Ok(())
}

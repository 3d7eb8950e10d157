use anyhow::Result;
use clap::{Parser, Subcommand};

use user_admin::cli::{handle_log_command, handle_user_command, LogCommands, UserCommands};
use user_admin::clock::SystemClock;
use user_admin::config::{paths::AdminPaths, settings::Settings};
use user_admin::storage::{initialize_storage, seed_demo_users, Storage};

/// Environment variable holding a tracing filter directive
const LOG_ENV: &str = "USER_ADMIN_LOG";

#[derive(Parser)]
#[command(
    name = "user-admin",
    version,
    about = "Manage user records with a full audit trail",
    long_about = "user-admin keeps a small store of user records and writes an \
                  audit log entry, with before and after snapshots, for every \
                  create, update and delete."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// User management commands
    #[command(subcommand)]
    Users(UserCommands),

    /// Audit log commands
    #[command(subcommand, alias = "log")]
    Logs(LogCommands),

    /// Initialize the data directory and seed demo users
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and settings
    let paths = AdminPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    init_tracing(&settings.log_level)?;

    // Initialize storage
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;
    let clock = SystemClock;

    match cli.command {
        Some(Commands::Users(cmd)) => {
            handle_user_command(&storage, &clock, &settings, cmd)?;
        }
        Some(Commands::Logs(cmd)) => {
            handle_log_command(&storage, &clock, &settings, cmd)?;
        }
        Some(Commands::Init) => {
            println!("Initializing user-admin at: {}", paths.base_dir().display());
            initialize_storage(&paths)?;
            settings.save(&paths)?;

            let seeded = if settings.seed_demo_users {
                seed_demo_users(&storage, &clock)?
            } else {
                0
            };
            storage.save_all()?;

            println!("Initialization complete!");
            if seeded > 0 {
                println!("Created {} demo users.", seeded);
            }
            println!();
            println!("Run 'user-admin users list' to see all users.");
        }
        Some(Commands::Config) => {
            println!("user-admin Configuration");
            println!("========================");
            println!("Base directory:   {}", paths.base_dir().display());
            println!("Data directory:   {}", paths.data_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("Settings:");
            println!("  Date format:      {}", settings.date_format);
            println!("  Log level:        {}", settings.log_level);
            println!("  Seed demo users:  {}", settings.seed_demo_users);
        }
        None => {
            println!("user-admin - user records with an audit trail");
            println!();
            println!("Run 'user-admin --help' for usage information.");
            if !storage.is_initialized() {
                println!("Run 'user-admin init' to create the demo users.");
            }
        }
    }

    Ok(())
}

fn init_tracing(default_level: &str) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))?;

    Ok(())
}

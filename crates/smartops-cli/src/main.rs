use anyhow::Result;
use clap::{Parser, Subcommand};
use smartops_core::config::Environment;
use std::path::PathBuf;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;

/// SmartOps CLI - field service session and catalog client
#[derive(Parser, Debug)]
#[command(name = "smartops")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    debug: bool,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Backend environment (development, production)
    #[arg(long, global = true)]
    env: Option<Environment>,

    /// Override the API base URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Directory holding config.toml and storage.json
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Sign in and store the session
    Login {
        #[arg(long)]
        email: String,

        /// Password (prefer the SMARTOPS_PASSWORD environment variable)
        #[arg(long, env = "SMARTOPS_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Clear the stored session
    Logout,
    /// Show the current session
    Status,
    /// Customer records
    Clients {
        #[command(subcommand)]
        action: RecordAction,
    },
    /// Product catalog
    Products {
        #[command(subcommand)]
        action: RecordAction,
    },
    /// Inspect configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
enum RecordAction {
    /// List all records
    List,
    /// Show one record
    Show { id: u64 },
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Print the resolved configuration and endpoints
    Show,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(&cli);

    let options = commands::GlobalOptions {
        environment: cli.env,
        base_url: cli.base_url,
        data_dir: cli.data_dir,
    };

    match cli.command {
        Commands::Login { email, password } => commands::auth::login(&options, &email, &password).await?,
        Commands::Logout => commands::auth::logout(&options).await?,
        Commands::Status => commands::auth::status(&options).await?,
        Commands::Clients { action } => match action {
            RecordAction::List => commands::catalog::list_clients(&options).await?,
            RecordAction::Show { id } => commands::catalog::show_client(&options, id).await?,
        },
        Commands::Products { action } => match action {
            RecordAction::List => commands::catalog::list_products(&options).await?,
            RecordAction::Show { id } => commands::catalog::show_product(&options, id).await?,
        },
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show(&options)?,
        },
    }

    Ok(())
}

/// Logs go to stderr so stdout stays parseable.
fn init_tracing(cli: &Cli) {
    let filter = if cli.debug {
        EnvFilter::new("debug,hyper=warn,hyper_util=warn,h2=warn,reqwest=warn,rustls=warn,tokio=warn")
    } else if cli.verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .try_init();
}

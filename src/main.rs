use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

use gumdrop::api::{self, DoClient};
use gumdrop::config;
use gumdrop::error::AppError;
use gumdrop::handlers;
use gumdrop::prompt::TerminalPrompter;
use gumdrop::store::ConfigStore;

#[derive(Parser)]
#[command(
    name = "gumdrop",
    author,
    version,
    about = "Create DigitalOcean droplet configurations",
    long_about = r#"gumdrop walks you through choosing an image, region, size, floating IP and volumes for a droplet, using the live catalog of your DigitalOcean account, and saves the result under a name for later reuse.

The API token is read from the config file (default: $HOME/.gumdrop.yaml) or from the GUMDROP_APIKEY environment variable.

Examples:
  gumdrop config create
  gumdrop config list
  gumdrop --config ./team.yaml config list
"#,
    after_help = "Use `gumdrop <subcommand> --help` to get subcommand specific options and usage examples."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
    /// Config file (default is $HOME/.gumdrop.yaml)
    #[arg(long, global = true)]
    config: Option<String>,
    /// Path to .env file
    #[arg(long, global = true)]
    env_file: Option<String>,
    /// Disable colorized output
    #[arg(long, global = true)]
    no_color: bool,
    /// Print every API request and response
    #[arg(long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Droplet configuration (list, create)
    Config {
        #[command(subcommand)]
        sub: ConfigCommands,
    },
    /// Validate the stored API token against the account status
    #[command(about = "Validate configuration and ensure API connectivity.")]
    CheckConfig,
}

#[derive(Subcommand)]
enum ConfigCommands {
    #[command(about = "Create a new droplet configuration", long_about = "Interactively choose image, region, size, floating IP and volumes, then save the result under a name. Creates the config file first if it does not exist.")]
    Create,
    #[command(about = "List existing droplet configurations", long_about = "Show every stored droplet configuration together with the status of a running droplet of the same name, if any.")]
    List,
}

fn connect(api_key: &str) -> Result<DoClient, AppError> {
    DoClient::new(&config::get_api_base_url(), api_key)
}

async fn run(cli: Cli) -> Result<(), AppError> {
    let store = ConfigStore::new(config::resolve_config_path(cli.config.as_deref()));
    match cli.command {
        Commands::Config { sub: ConfigCommands::Create } => {
            let mut prompter = TerminalPrompter::new();
            handlers::config_create(&store, connect, &mut prompter).await?;
        }
        Commands::Config { sub: ConfigCommands::List } => {
            handlers::config_list(&store, connect).await?;
        }
        Commands::CheckConfig => {
            handlers::check_config(&store, connect).await?;
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    if cli.no_color {
        yansi::whenever(yansi::Condition::NEVER);
    }
    if cli.verbose {
        api::set_verbose(true);
    }
    config::load_env_file(cli.env_file.as_deref());

    if let Err(e) = run(cli).await {
        match e {
            AppError::Interrupted => println!("interrupted"),
            ref err => {
                tracing::error!(%err, "command failed");
                eprintln!("{}: {}", yansi::Paint::new("Error").red().bold(), err);
            }
        }
        process::exit(e.exit_code());
    }
}

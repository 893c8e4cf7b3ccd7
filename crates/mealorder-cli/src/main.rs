mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use cmd::{catalog::CatalogSubcommand, config::ConfigSubcommand, order::OrderSubcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "mealorder",
    about = "Build weekly meal orders from a menu catalog and send them to the kitchen",
    version,
    propagate_version = true
)]
struct Cli {
    /// Project root (default: auto-detect from .mealorder/)
    #[arg(long, global = true, env = "MEALORDER_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create .mealorder/config.yaml and a blank order draft
    Init {
        /// Contact number orders are sent to
        #[arg(long)]
        phone: Option<String>,

        /// Menu catalog file (YAML or JSON), relative to the project root
        #[arg(long)]
        catalog: Option<PathBuf>,
    },

    /// Render or check an order draft
    Order {
        #[command(subcommand)]
        subcommand: OrderSubcommand,
    },

    /// Inspect the weekly menu catalog
    Catalog {
        #[command(subcommand)]
        subcommand: CatalogSubcommand,
    },

    /// Validate the project configuration
    Config {
        #[command(subcommand)]
        subcommand: ConfigSubcommand,
    },

    /// Open the order message in the messaging app
    Send {
        /// Order draft (default: .mealorder/order.yaml)
        #[arg(long, short = 'f')]
        file: Option<PathBuf>,

        /// Print the links instead of opening them
        #[arg(long)]
        dry_run: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let root_path = cli.root.as_deref();
    let root = root::resolve_root(root_path);

    let result = match cli.command {
        Commands::Init { phone, catalog } => {
            cmd::init::run(&root, phone.as_deref(), catalog.as_deref())
        }
        Commands::Order { subcommand } => cmd::order::run(&root, subcommand, cli.json),
        Commands::Catalog { subcommand } => cmd::catalog::run(&root, subcommand, cli.json),
        Commands::Config { subcommand } => cmd::config::run(&root, subcommand, cli.json),
        Commands::Send { file, dry_run } => {
            cmd::send::run(&root, file.as_deref(), dry_run, cli.json)
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

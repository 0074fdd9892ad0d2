//! Carelink command-line client.
//!
//! Drives the wellness service's client data layer end to end: sign in,
//! check the session, and list appointments grouped the way the app's
//! appointments screen groups them.
//!
//! ## Environment Variables
//! - `CARELINK_API_URL`: Service base URL (default: the hosted instance)
//! - `CARELINK_TOKEN_FILE`: Where to persist the session token between
//!   invocations (default: no persistence; the session lives in memory for
//!   one invocation)

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use carelink_client::{ApiClient, AppointmentsApi, AuthGate, TokenCell, TokenStore};
use carelink_core::{
    config, AppointmentCard, AppointmentsScreen, ClientConfig, LoginScreen,
};

#[derive(Parser)]
#[command(name = "carelink")]
#[command(about = "Carelink wellness service CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in and store the session token
    Login {
        /// Account email
        email: String,
        /// Account password
        password: String,
    },
    /// Drop the stored session token
    Logout,
    /// Show whether a session token is held
    Status,
    /// List appointments
    Appointments {
        /// Show only past appointments
        #[arg(long, conflicts_with = "upcoming")]
        past: bool,
        /// Show only upcoming appointments
        #[arg(long)]
        upcoming: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("carelink=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let base_url =
        std::env::var("CARELINK_API_URL").unwrap_or_else(|_| config::DEFAULT_BASE_URL.into());
    let token_file = std::env::var("CARELINK_TOKEN_FILE").ok().map(PathBuf::from);
    let cfg = ClientConfig::new(base_url, token_file)?;
    tracing::debug!("using base URL {}", cfg.base_url());

    let store = TokenStore::new(cfg.token_file().map(Path::to_path_buf));
    let tokens = Arc::new(TokenCell::new(store.load()));
    let gate = AuthGate::new(ApiClient::new(cfg.clone()), Arc::clone(&tokens), store);
    let appointments = AppointmentsApi::new(ApiClient::with_tokens(cfg, tokens));

    match cli.command {
        Commands::Login { email, password } => {
            let screen = LoginScreen::reduce(gate.login(&email, &password).await);
            if screen.authenticated {
                println!("Signed in as {email}.");
            } else if let Some(message) = screen.error_message {
                anyhow::bail!(message);
            }
        }
        Commands::Logout => {
            gate.logout();
            println!("Signed out.");
        }
        Commands::Status => {
            if gate.authenticated() {
                println!("Signed in.");
            } else {
                println!("Signed out.");
            }
        }
        Commands::Appointments { past, upcoming } => {
            let screen = AppointmentsScreen::reduce(appointments.list().await);
            if let Some(message) = screen.error_message {
                anyhow::bail!(message);
            }
            if !past {
                print_section("Upcoming", &screen.upcoming);
            }
            if !upcoming {
                print_section("Past", &screen.past);
            }
        }
    }

    Ok(())
}

fn print_section(title: &str, cards: &[AppointmentCard]) {
    println!("{title}:");
    if cards.is_empty() {
        println!("  (none)");
        println!();
        return;
    }
    for card in cards {
        println!("  {} {}  {}", card.month, card.day, card.time_range);
        println!("         {}", card.description);
    }
    println!();
}

//! verktyg - command-line front end for the utility library
//!
//! Runs one helper per invocation and prints the result to stdout:
//! - `email`, `zip` - shape validation, prints `true` or `false`
//! - `heading`, `price` - markup and price formatting
//! - `lowercase`, `genitive` - string helpers
//! - `users`, `groups` - the static directory as pretty JSON
//!
//! Logs go to stderr and are filtered with `RUST_LOG`.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use verktyg::{
    genitive, is_lower_case, make_heading, validate_email, validate_zip, Config, DirectoryStore,
    StaticDirectoryStore,
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Default currency label for this run, overrides the config file
    #[arg(short, long, global = true)]
    currency: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that a string looks like an email address
    Email { email: String },
    /// Check that a string is a five character numeric zip code
    Zip { zip: String },
    /// Wrap a title in an <hN> tag
    Heading {
        title: String,
        #[arg(allow_negative_numbers = true)]
        level: i64,
    },
    /// Round a price and attach a currency or %PRICE% pattern
    Price {
        #[arg(allow_negative_numbers = true)]
        amount: f64,
        pattern: Option<String>,
    },
    /// Check that a string is entirely lowercase
    Lowercase { text: String },
    /// Print the genitive form of a name
    Genitive { name: String },
    /// List users, optionally only those in one group
    Users {
        #[arg(short, long)]
        group: Option<u32>,
    },
    /// List groups
    Groups,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "verktyg=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Args::parse();
    let mut config = Config::load().context("Failed to load configuration")?;
    if let Some(currency) = args.currency {
        config.default_currency = currency;
    }
    tracing::debug!(?config, "configuration loaded");

    let store = StaticDirectoryStore;

    match args.command {
        Command::Email { email } => println!("{}", validate_email(&email)),
        Command::Zip { zip } => println!("{}", validate_zip(&zip)),
        Command::Heading { title, level } => println!("{}", make_heading(&title, level)?),
        Command::Price { amount, pattern } => {
            let formatter = config.price_formatter();
            println!("{}", formatter.format(amount, pattern.as_deref()));
        }
        Command::Lowercase { text } => println!("{}", is_lower_case(&text)),
        Command::Genitive { name } => println!("{}", genitive(&name)),
        Command::Users { group } => {
            let users = match group {
                Some(id) => store.users_in_group(id).await?,
                None => store.fetch_users().await?,
            };
            println!("{}", serde_json::to_string_pretty(&users)?);
        }
        Command::Groups => {
            let groups = store.fetch_groups().await?;
            println!("{}", serde_json::to_string_pretty(&groups)?);
        }
    }

    Ok(())
}

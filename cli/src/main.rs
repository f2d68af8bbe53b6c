use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use models::SharedTop;
use prefs::{AdminSession, FeatureFlags, FileStore, KvStore};
use serde_json::Value;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned HTTP {status}: {message}")]
    ServerError { status: u16, message: String },
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("local store failed: {0}")]
    Store(#[from] prefs::PrefsError),
}

#[derive(Parser, Debug)]
#[command(name = "ballon-cli", about = "Ballon d'Or proxy and local preferences CLI")]
struct Cli {
    #[arg(long, env = "BALLON_BASE_URL", default_value = "http://127.0.0.1:3001")]
    base_url: String,

    #[arg(long, env = "BALLON_STORE_PATH", default_value = "data/local-store.json")]
    store: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check that the proxy is up.
    Health,
    Players(PlayersCommand),
    Tops(TopsCommand),
    Flags(FlagsCommand),
    Admin(AdminCommand),
}

#[derive(Args, Debug)]
struct PlayersCommand {
    #[command(subcommand)]
    command: PlayersSubcommand,
}

#[derive(Subcommand, Debug)]
enum PlayersSubcommand {
    Search {
        query: String,
        #[arg(long)]
        season: Option<String>,
    },
}

#[derive(Args, Debug)]
struct TopsCommand {
    #[command(subcommand)]
    command: TopsSubcommand,
}

#[derive(Subcommand, Debug)]
enum TopsSubcommand {
    List {
        #[arg(long)]
        category: Option<String>,
    },
}

#[derive(Args, Debug)]
struct FlagsCommand {
    #[command(subcommand)]
    command: FlagsSubcommand,
}

#[derive(Subcommand, Debug)]
enum FlagsSubcommand {
    List,
    Get {
        name: String,
    },
    Set {
        name: String,
        #[arg(action = clap::ArgAction::Set)]
        enabled: bool,
    },
    /// Forget every stored flag; defaults apply again.
    Reset,
}

#[derive(Args, Debug)]
struct AdminCommand {
    #[command(subcommand)]
    command: AdminSubcommand,
}

#[derive(Subcommand, Debug)]
enum AdminSubcommand {
    Status,
    Login {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
    },
    Logout,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    let cli = Cli::parse();

    match cli.command {
        Command::Health => run_health(&cli.base_url).await,
        Command::Players(players) => run_players(&cli.base_url, players).await,
        Command::Tops(tops) => run_tops(&cli.base_url, tops).await,
        Command::Flags(flags) => {
            let store: Arc<dyn KvStore> = Arc::new(FileStore::new(cli.store));
            print_json(&run_flags(store, flags.command)?)
        }
        Command::Admin(admin) => {
            let store: Arc<dyn KvStore> = Arc::new(FileStore::new(cli.store));
            print_json(&run_admin(store, admin.command)?)
        }
    }
}

// =============================================================================
// PROXY COMMANDS
// =============================================================================

async fn run_health(base_url: &str) -> Result<(), CliError> {
    let json = api_get(base_url, "/health", &[]).await?;
    let timestamp = json.get("timestamp").and_then(Value::as_str).unwrap_or("-");
    println!("ok {timestamp}");
    Ok(())
}

async fn run_players(base_url: &str, players: PlayersCommand) -> Result<(), CliError> {
    match players.command {
        PlayersSubcommand::Search { query, season } => {
            let mut params = vec![("search", query)];
            if let Some(season) = season {
                params.push(("season", season));
            }
            let json = api_get(base_url, "/api/players", &params).await?;
            print_json(&json)
        }
    }
}

async fn run_tops(base_url: &str, tops: TopsCommand) -> Result<(), CliError> {
    match tops.command {
        TopsSubcommand::List { category } => {
            let params: Vec<_> = category.into_iter().map(|c| ("category", c)).collect();
            let json = api_get(base_url, "/api/tops", &params).await?;
            let tops: Vec<SharedTop> = serde_json::from_value(json)?;
            for top in &tops {
                println!("{}", format_top(top));
            }
            Ok(())
        }
    }
}

async fn api_get(base_url: &str, path: &str, params: &[(&str, String)]) -> Result<Value, CliError> {
    let url = format!("{}{}", base_url.trim_end_matches('/'), path);
    let response = reqwest::Client::new().get(&url).query(params).send().await?;
    let status = response.status();
    let value = response
        .json::<Value>()
        .await
        .unwrap_or_else(|_| Value::Null);

    if !status.is_success() {
        return Err(CliError::ServerError {
            status: status.as_u16(),
            message: value.to_string(),
        });
    }

    Ok(value)
}

fn format_top(top: &SharedTop) -> String {
    let podium: Vec<String> = top
        .ranked()
        .take(3)
        .map(|(rank, p)| format!("{rank}. {}", p.name))
        .collect();
    format!(
        "{id}  [{category}] {title} by {user}  likes={likes} shares={shares} comments={comments}  {podium}",
        id = top.id,
        category = top.category,
        title = top.title,
        user = top.user_name,
        likes = top.likes,
        shares = top.shares,
        comments = top.comment_count,
        podium = podium.join("  "),
    )
}

// =============================================================================
// LOCAL STORE COMMANDS
// =============================================================================

fn run_flags(store: Arc<dyn KvStore>, command: FlagsSubcommand) -> Result<Value, CliError> {
    let flags = FeatureFlags::new(store);
    match command {
        FlagsSubcommand::List => Ok(serde_json::to_value(flags.all()?)?),
        FlagsSubcommand::Get { name } => {
            let enabled = flags.get(&name)?;
            Ok(serde_json::json!({ name: enabled }))
        }
        FlagsSubcommand::Set { name, enabled } => {
            flags.set(&name, enabled)?;
            Ok(serde_json::json!({ name: enabled }))
        }
        FlagsSubcommand::Reset => {
            flags.reset()?;
            Ok(serde_json::to_value(flags.all()?)?)
        }
    }
}

fn run_admin(store: Arc<dyn KvStore>, command: AdminSubcommand) -> Result<Value, CliError> {
    let session = AdminSession::new(store);
    match command {
        AdminSubcommand::Status => Ok(serde_json::json!({
            "is_admin": session.is_admin()?,
            "profile": session.profile()?,
        })),
        AdminSubcommand::Login { name, email } => {
            let profile = session.login(&name, &email)?;
            Ok(serde_json::json!({ "is_admin": true, "profile": profile }))
        }
        AdminSubcommand::Logout => {
            session.logout()?;
            Ok(serde_json::json!({ "is_admin": false, "profile": null }))
        }
    }
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;

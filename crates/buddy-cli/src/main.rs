use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use buddy_core::{
    load_config, normalize, seed_scenarios, BuddyConfig, ChatEngine, EmergencyDetector,
    KeywordClassifier, SeedReport,
};
use buddy_memory::SqliteStore;
use buddy_schema::TurnRequest;
use buddy_server::state::AppState;
use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Parser)]
#[command(name = "buddy", version, about = "Buddy rule-based support chat engine")]
struct Cli {
    #[arg(
        long,
        default_value = "~/.buddy",
        help = "Config root directory (contains config/, data/ and logs/)"
    )]
    config_root: PathBuf,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    #[command(about = "Start the HTTP API server")]
    Serve {
        #[arg(long, help = "Override server.bind from config")]
        bind: Option<String>,
    },
    #[command(about = "Install the curated scenario set")]
    Seed {
        #[arg(long, help = "Replace scenarios even if the store is already seeded")]
        force: bool,
    },
    #[command(about = "Local REPL against the engine (no HTTP)")]
    Chat {
        #[arg(long, help = "Session id (defaults to a fresh one)")]
        session: Option<String>,
    },
    #[command(about = "Answer a single message and exit")]
    Ask {
        #[arg(help = "Message text")]
        message: String,
        #[arg(long, default_value = "cli", help = "Session id")]
        session: String,
        #[arg(long, help = "Also print the selection route as JSON")]
        route: bool,
    },
    #[command(about = "Print a session's chat history")]
    History {
        #[arg(help = "Session id")]
        session: String,
        #[arg(long, help = "Number of most recent messages (defaults to engine.history_limit)")]
        limit: Option<usize>,
    },
    #[command(about = "Show emergency check and category scores for a message")]
    Classify {
        #[arg(help = "Message text")]
        message: String,
    },
    #[command(about = "Validate config files")]
    Validate,
}

#[tokio::main]
async fn main() -> Result<()> {
    let mut cli = Cli::parse();
    cli.config_root = expand_tilde(&cli.config_root);

    let log_dir = cli.config_root.join("logs");
    std::fs::create_dir_all(&log_dir)?;
    let file_appender = tracing_appender::rolling::daily(&log_dir, "buddy.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking),
        )
        .init();

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    match command {
        Commands::Validate => {
            let config = load_config(&cli.config_root.join("config"))?;
            println!(
                "Config valid. app={} env={} bind={} database={}",
                config.app.name, config.app.env, config.server.bind, config.database.path
            );
        }
        Commands::Classify { message } => {
            let folded = normalize(&message);
            println!("normalized: {folded}");
            match EmergencyDetector::default().detect(&folded) {
                Some(phrase) => println!("emergency: yes ({phrase})"),
                None => println!("emergency: no"),
            }
            let classifier = KeywordClassifier::default();
            for scored in classifier.scores(&folded) {
                println!("  {:<12} {}", scored.category.as_str(), scored.score);
            }
            match classifier.best(&folded) {
                Some(best) => println!("category: {}", best.category),
                None => println!("category: none"),
            }
        }
        Commands::Seed { force } => {
            let (_config, store) = bootstrap(&cli.config_root)?;
            match seed_scenarios(store.as_ref(), force).await? {
                SeedReport::Skipped { existing } => {
                    println!("Store already holds {existing} scenarios; use --force to replace.")
                }
                SeedReport::Replaced { inserted } => println!("Seeded {inserted} scenarios."),
            }
        }
        Commands::Serve { bind } => {
            let (config, store) = bootstrap(&cli.config_root)?;
            seed_on_startup(&config, &store).await;
            let engine = ChatEngine::new(store.clone(), store, &config.engine);
            let addr = bind.unwrap_or_else(|| config.server.bind.clone());
            let state = AppState {
                engine: Arc::new(engine),
                history_limit: config.engine.history_limit,
                allowed_origins: config.server.allowed_origins.clone(),
            };
            buddy_server::serve(state, &addr).await?;
        }
        Commands::Ask {
            message,
            session,
            route,
        } => {
            let request = TurnRequest::new(session, message).validate()?;
            let (config, store) = bootstrap(&cli.config_root)?;
            seed_on_startup(&config, &store).await;
            let engine = ChatEngine::new(store.clone(), store, &config.engine);
            let reply = engine
                .handle_turn(&request.session_id, &request.message)
                .await;
            println!("{}", reply.response);
            if route {
                println!("{}", serde_json::to_string_pretty(&reply.route)?);
            }
        }
        Commands::History { session, limit } => {
            let (config, store) = bootstrap(&cli.config_root)?;
            let engine = ChatEngine::new(store.clone(), store, &config.engine);
            let limit = limit.unwrap_or(config.engine.history_limit);
            let messages = engine.history(session.trim(), limit).await?;
            if messages.is_empty() {
                println!("No messages for session {session}.");
            }
            for msg in messages {
                println!(
                    "[{}] {}: {}",
                    msg.created_at.format("%m-%d %H:%M"),
                    msg.role,
                    msg.content
                );
            }
        }
        Commands::Chat { session } => {
            let session = session.unwrap_or_else(|| format!("repl-{}", uuid::Uuid::new_v4()));
            run_repl(&cli.config_root, &session).await?;
        }
    }

    Ok(())
}

fn expand_tilde(path: &Path) -> PathBuf {
    if !path.starts_with("~") {
        return path.to_path_buf();
    }
    match std::env::var_os("HOME") {
        Some(home) => PathBuf::from(home).join(path.strip_prefix("~").unwrap_or(path)),
        None => path.to_path_buf(),
    }
}

/// `:memory:` is passed through; relative paths land under the config root.
fn resolve_database_path(root: &Path, raw: &str) -> Option<PathBuf> {
    if raw == ":memory:" {
        return None;
    }
    let path = PathBuf::from(raw);
    Some(if path.is_absolute() {
        path
    } else {
        root.join(path)
    })
}

fn bootstrap(root: &Path) -> Result<(BuddyConfig, Arc<SqliteStore>)> {
    let config = load_config(&root.join("config"))?;

    let store = match resolve_database_path(root, &config.database.path) {
        None => SqliteStore::open_in_memory()?,
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("failed to create database dir: {}", parent.display())
                })?;
            }
            let path_str = path
                .to_str()
                .with_context(|| format!("database path is not UTF-8: {}", path.display()))?;
            SqliteStore::open(path_str)
                .with_context(|| format!("failed to open database: {}", path.display()))?
        }
    };

    Ok((config, Arc::new(store)))
}

/// Seeding problems are reported but never stop the caller from serving.
async fn seed_on_startup(config: &BuddyConfig, store: &Arc<SqliteStore>) {
    if !config.seed.on_startup {
        return;
    }
    if let Err(err) = seed_scenarios(store.as_ref(), config.seed.force).await {
        tracing::error!(error = %format!("{err:#}"), "scenario seeding failed");
    }
}

async fn run_repl(root: &Path, session_id: &str) -> Result<()> {
    let (config, store) = bootstrap(root)?;
    seed_on_startup(&config, &store).await;
    let engine = ChatEngine::new(store.clone(), store, &config.engine);

    println!("Buddy REPL (session {session_id}). Type 'quit' to exit.");
    println!("---");

    let stdin = std::io::stdin();
    loop {
        print!("> ");
        std::io::stdout().flush()?;
        let mut input = String::new();
        if stdin.read_line(&mut input)? == 0 {
            break;
        }
        let input = input.trim();
        if input == "quit" || input == "exit" {
            break;
        }
        if input.is_empty() {
            continue;
        }

        match TurnRequest::new(session_id, input).validate() {
            Ok(request) => {
                let reply = engine
                    .handle_turn(&request.session_id, &request.message)
                    .await;
                println!("{}", reply.response);
            }
            Err(err) => eprintln!("Error: {err}"),
        }
        println!();
    }

    Ok(())
}

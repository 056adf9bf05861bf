mod cache;
mod config;
mod error;
mod state;
mod storage;

use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use serde::{de::DeserializeOwned, Serialize};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use kinlog_core::cache::Cache;
use kinlog_core::model::{Entity, EntityId};
use kinlog_core::storage::{ScopedStore, Store};

use crate::config::{Config, LogFormat};
use crate::error::CliError;
use crate::state::AppState;
use crate::storage::CachedAccessor;

/// Kinlog - Cached access to family activity records
#[derive(Parser, Debug)]
#[command(name = "kinlog")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the SQLite database file
    #[arg(long, global = true, env = "SQLITE_PATH")]
    sqlite_path: Option<String>,

    /// Redis connection URL (only used with the `redis` feature)
    #[arg(long, global = true, env = "REDIS_URL")]
    redis_url: Option<String>,

    /// Maximum number of in-memory cache entries
    #[arg(long, global = true, env = "CACHE_MAX_ENTRIES")]
    cache_max_entries: Option<usize>,

    #[command(subcommand)]
    kind: Kind,
}

impl Cli {
    /// Environment configuration with command-line overrides applied.
    fn config(&self) -> Config {
        let mut config = Config::from_env();
        if let Some(path) = &self.sqlite_path {
            config.sqlite_path = path.clone();
        }
        if let Some(url) = &self.redis_url {
            config.redis_url = url.clone();
        }
        if let Some(max) = self.cache_max_entries.filter(|&n| n > 0) {
            config.cache_max_entries = max;
        }
        config
    }
}

#[derive(Subcommand, Debug)]
enum Kind {
    /// UI languages
    Language {
        #[command(subcommand)]
        command: Command,
    },
    /// Notes written about a progeny
    Note {
        #[command(subcommand)]
        command: Command,
    },
    /// Skills a progeny has picked up
    Skill {
        #[command(subcommand)]
        command: Command,
    },
    /// Child profiles
    Progeny {
        #[command(subcommand)]
        command: Command,
    },
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print one entity by id
    Get { id: EntityId },
    /// Print a list of entities
    List(ListArgs),
    /// Add an entity from JSON; any id in the input is ignored
    Add { json: String },
    /// Replace an entity from JSON; the id selects the row
    Update { json: String },
    /// Delete an entity by id
    Delete { id: EntityId },
    /// Delete an entity given as JSON; its id and progeny are used as is
    Remove { json: String },
    /// Re-read an entity from the database into the cache
    Refresh { id: EntityId },
    /// Print the number of stored entities
    Count,
}

#[derive(Args, Debug, Default)]
struct ListArgs {
    /// Only entities of this progeny (required for notes and skills)
    #[arg(long)]
    progeny: Option<EntityId>,

    /// Only entities visible at this access level (notes and skills)
    #[arg(long)]
    access_level: Option<i32>,

    /// Only progenies administered by this email
    #[arg(long)]
    admin: Option<String>,

    /// Only the language with this code
    #[arg(long)]
    code: Option<String>,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = cli.config();

    init_tracing(config.log_format);

    match run(cli.kind, &config).await {
        Ok(output) => {
            println!("{output}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            tracing::debug!(error = %err, "Command failed");
            eprintln!("Error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}

/// Initialize the tracing subscriber. Logs go to stderr so stdout stays JSON.
fn init_tracing(format: LogFormat) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "kinlog=info".into());
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Pretty => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .init(),
    }
}

async fn run(kind: Kind, config: &Config) -> Result<String, CliError> {
    let state = AppState::new(config).await?;

    match kind {
        Kind::Language {
            command: Command::List(args),
        } => {
            reject(&args.progeny, "--progeny", "language")?;
            reject(&args.access_level, "--access-level", "language")?;
            reject(&args.admin, "--admin", "language")?;
            match args.code {
                Some(code) => match state.languages.find_by_code(&code).await? {
                    Some(language) => to_json(&language),
                    None => Err(CliError::NotFound {
                        entity_type: "language",
                        id: code,
                    }),
                },
                None => to_json(&state.languages.list_all().await?),
            }
        }
        Kind::Language { command } => run_common(&state.languages, command).await,

        Kind::Note {
            command: Command::List(args),
        } => list_scoped(&state.notes, args).await,
        Kind::Note { command } => run_common(&state.notes, command).await,

        Kind::Skill {
            command: Command::List(args),
        } => list_scoped(&state.skills, args).await,
        Kind::Skill { command } => run_common(&state.skills, command).await,

        Kind::Progeny {
            command: Command::List(args),
        } => {
            reject(&args.progeny, "--progeny", "progeny")?;
            reject(&args.access_level, "--access-level", "progeny")?;
            reject(&args.code, "--code", "progeny")?;
            match args.admin {
                Some(email) => to_json(&state.progenies.list_for_admin(&email).await?),
                None => to_json(&state.progenies.list_all().await?),
            }
        }
        Kind::Progeny { command } => run_common(&state.progenies, command).await,
    }
}

/// Runs the commands every kind supports. `list` is handled by the caller.
async fn run_common<E, S>(
    accessor: &CachedAccessor<E, S, dyn Cache>,
    command: Command,
) -> Result<String, CliError>
where
    E: Entity,
    S: Store<E> + ?Sized + 'static,
{
    match command {
        Command::Get { id } => match accessor.get(id).await? {
            Some(entity) => to_json(&entity),
            None => Err(not_found::<E>(id)),
        },
        Command::Add { json } => {
            let entity: E = from_json(&json)?;
            to_json(&accessor.insert(entity).await?)
        }
        Command::Update { json } => {
            let entity: E = from_json(&json)?;
            to_json(&accessor.update(entity).await?)
        }
        Command::Delete { id } => {
            accessor.delete(id).await?;
            to_json(&serde_json::json!({ "deleted": id }))
        }
        Command::Remove { json } => {
            let entity: E = from_json(&json)?;
            accessor.delete_entity(&entity).await?;
            to_json(&serde_json::json!({ "deleted": entity.id() }))
        }
        Command::Refresh { id } => match accessor.refresh(id).await? {
            Some(entity) => to_json(&entity),
            None => Err(not_found::<E>(id)),
        },
        Command::Count => to_json(&accessor.count().await?),
        Command::List(_) => Err(CliError::InvalidInput(format!(
            "list is not supported for {}",
            E::KIND
        ))),
    }
}

/// Lists a progeny-scoped kind, optionally filtered by access level.
async fn list_scoped<E, S>(
    accessor: &CachedAccessor<E, S, dyn Cache>,
    args: ListArgs,
) -> Result<String, CliError>
where
    E: kinlog_core::model::Scoped + kinlog_core::model::AccessControlled,
    S: ScopedStore<E> + ?Sized + 'static,
{
    reject(&args.admin, "--admin", E::KIND)?;
    reject(&args.code, "--code", E::KIND)?;
    let Some(progeny_id) = args.progeny else {
        return Err(CliError::InvalidInput(format!(
            "listing {} requires --progeny <id>",
            E::KIND
        )));
    };

    let entities = match args.access_level {
        Some(level) => accessor.list_accessible(progeny_id, level).await?,
        None => accessor.list_by_parent(progeny_id).await?,
    };
    to_json(&entities)
}

fn reject<T>(value: &Option<T>, flag: &str, kind: &str) -> Result<(), CliError> {
    match value {
        Some(_) => Err(CliError::InvalidInput(format!(
            "{flag} is not supported for {kind}"
        ))),
        None => Ok(()),
    }
}

fn not_found<E: Entity>(id: EntityId) -> CliError {
    CliError::NotFound {
        entity_type: E::KIND,
        id: id.to_string(),
    }
}

fn from_json<T: DeserializeOwned>(json: &str) -> Result<T, CliError> {
    Ok(serde_json::from_str(json)?)
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, CliError> {
    serde_json::to_string_pretty(value).map_err(|e| CliError::Other(e.into()))
}

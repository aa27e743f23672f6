//! tvdb - command-line client for the TVDB v4 API.

/// Application configuration (TOML).
mod config;

use std::future::Future;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing::instrument;
use tracing_subscriber::filter::EnvFilter;
#[cfg(not(feature = "otel"))]
use tracing_subscriber::fmt;
#[cfg(feature = "otel")]
use tracing_subscriber::layer::SubscriberExt;
#[cfg(feature = "otel")]
use tracing_subscriber::util::SubscriberInitExt;
use url::Url;

use crate::config::{ApiConfig, AppConfig, resolve_config_path};
use tvdb_api::normalize::parse_date;
use tvdb_api::{
    ApiError, DEFAULT_SEASON_TYPE, LocalTvdbApi, SearchParams, TvdbClient, UpdatesParams,
};

/// CLI argument parser.
#[derive(Parser)]
#[command(about, version)]
struct Cli {
    /// Override config directory.
    #[arg(long, global = true)]
    dir: Option<PathBuf>,

    /// Subcommand to run.
    #[command(subcommand)]
    command: Commands,
}

/// Available subcommands.
#[derive(Subcommand)]
enum Commands {
    /// Check the configured credentials by logging in.
    Login(LoginArgs),
    /// Search series, movies, people and companies.
    Search(SearchArgs),
    /// Show an episode.
    Episode(RecordArgs),
    /// Show a series, or one page of its episodes.
    Series(SeriesArgs),
    /// Show a movie.
    Movie(RecordArgs),
    /// Show a person.
    Person(PersonArgs),
    /// List records changed since a point in time.
    Updates(UpdatesArgs),
}

/// Arguments for the `login` subcommand.
#[derive(clap::Args)]
struct LoginArgs {
    /// API key to log in with instead of the configured one.
    #[arg(long)]
    api_key: Option<String>,

    /// Subscriber pin to log in with instead of the configured one.
    #[arg(long)]
    pin: Option<String>,

    /// Write the key and pin used to config.toml after a successful login.
    #[arg(long)]
    save: bool,
}

/// Arguments for the `search` subcommand.
#[derive(clap::Args)]
struct SearchArgs {
    /// Search query.
    #[arg(long)]
    query: String,

    /// Restrict results to one entity type (e.g. "series", "movie").
    #[arg(long = "type")]
    kind: Option<String>,

    /// Year of the series or movie.
    #[arg(long)]
    year: Option<u32>,

    /// Result offset.
    #[arg(long)]
    offset: Option<u32>,

    /// Maximum number of results.
    #[arg(long)]
    limit: Option<u32>,
}

/// Arguments for single-record subcommands.
#[derive(clap::Args)]
struct RecordArgs {
    /// Record ID.
    #[arg(long)]
    id: u64,

    /// Fetch the extended record.
    #[arg(long)]
    extended: bool,

    /// Extra data for the extended record (e.g. "translations").
    #[arg(long, requires = "extended")]
    meta: Option<String>,
}

/// Arguments for the `series` subcommand.
#[derive(clap::Args)]
struct SeriesArgs {
    /// Record selection.
    #[command(flatten)]
    record: RecordArgs,

    /// List episodes ordered by this season type instead of the series.
    #[arg(long, num_args = 0..=1, default_missing_value = DEFAULT_SEASON_TYPE, conflicts_with = "extended")]
    episodes: Option<String>,

    /// Episode page, used with --episodes.
    #[arg(long, default_value_t = 0, requires = "episodes")]
    page: u32,
}

/// Arguments for the `person` subcommand.
#[derive(clap::Args)]
struct PersonArgs {
    /// Person ID.
    #[arg(long)]
    id: u64,

    /// Fetch the extended record.
    #[arg(long)]
    extended: bool,
}

/// Arguments for the `updates` subcommand.
#[derive(clap::Args)]
struct UpdatesArgs {
    /// Lower bound: epoch seconds or a date.
    /// Formats: "1700000000", "2024-01-01", "2024-01-01 00:00:00", RFC 3339.
    #[arg(long)]
    since: String,

    /// Entity type filter (e.g. "series", "episodes").
    #[arg(long = "type")]
    kind: Option<String>,

    /// Action filter (e.g. "create", "update", "delete").
    #[arg(long)]
    action: Option<String>,
}

/// A logged-in client together with the pin used for re-login.
struct Connection {
    /// Catalog client.
    client: TvdbClient,
    /// Pin sent on every login.
    pin: Option<String>,
}

impl Connection {
    /// Runs `request`; on a 401 with `auto_relogin` enabled, logs in again and
    /// runs it once more.
    async fn call<T, F, Fut>(&self, request: F) -> Result<T, ApiError>
    where
        F: Fn() -> Fut,
        Fut: Future<Output = Result<T, ApiError>>,
    {
        match request().await {
            Err(e) if e.is_unauthorized() && self.client.auto_relogin() => {
                tracing::warn!("Session token rejected, logging in again");
                self.client.login(self.pin.as_deref()).await?;
                request().await
            }
            other => other,
        }
    }
}

/// Loads the config file and applies environment overrides.
///
/// # Errors
///
/// Returns an error if the config path cannot be resolved or the file cannot be parsed.
fn load_config(dir: Option<&PathBuf>) -> Result<AppConfig> {
    let path = resolve_config_path(dir, env_var)?;
    Ok(AppConfig::load(&path)?.with_env_overrides(env_var))
}

/// Reads an environment variable; non-UTF-8 values count as unset.
fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Builds a `TvdbClient` from the API configuration.
///
/// # Errors
///
/// Returns an error if no API key is configured, the base URL is invalid, or
/// the client fails to build.
#[instrument(skip_all)]
fn build_client(api: &ApiConfig) -> Result<TvdbClient> {
    let api_key = api
        .api_key
        .clone()
        .context("API key is required: set TVDB_API_KEY or api.api_key in config.toml")?;

    let mut builder = TvdbClient::builder()
        .api_key(api_key)
        .user_agent(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ))
        .auto_relogin(api.auto_relogin)
        .timeout(Duration::from_secs(api.timeout_secs));
    if let Some(base_url) = &api.base_url {
        let url = Url::parse(base_url).with_context(|| format!("invalid base_url: {base_url}"))?;
        builder = builder.base_url(url);
    }

    builder.build().context("failed to build TVDB client")
}

/// Builds a client and logs in.
///
/// # Errors
///
/// Returns an error if the client fails to build or the login request fails.
#[instrument(skip_all)]
async fn connect(dir: Option<&PathBuf>) -> Result<Connection> {
    let config = load_config(dir)?;
    let client = build_client(&config.api)?;
    let pin = config.api.pin;
    client
        .login(pin.as_deref())
        .await
        .context("failed to log in to TVDB")?;
    Ok(Connection { client, pin })
}

/// Logs a canonical record as pretty JSON.
///
/// # Errors
///
/// Returns an error if the record cannot be serialized.
fn emit<T: Serialize>(record: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(record).context("failed to serialize record")?;
    tracing::info!("{json}");
    Ok(())
}

/// Parses `--since` as epoch seconds or as a date.
///
/// # Errors
///
/// Returns an error if the value is neither.
fn parse_since(value: &str) -> Result<UpdatesParams> {
    if let Ok(epoch) = value.trim().parse::<i64>() {
        return Ok(UpdatesParams::new(epoch));
    }
    parse_date(Some(value))
        .map(UpdatesParams::since_datetime)
        .with_context(|| format!("invalid --since value: {value}"))
}

/// Runs the `login` subcommand.
///
/// # Errors
///
/// Returns an error if the login fails or the config cannot be saved.
#[instrument(skip_all)]
async fn run_login(args: &LoginArgs, dir: Option<&PathBuf>) -> Result<()> {
    let path = resolve_config_path(dir, env_var)?;
    let mut config = AppConfig::load(&path)?.with_env_overrides(env_var);
    if let Some(key) = &args.api_key {
        config.api.api_key = Some(key.clone());
    }
    if let Some(pin) = &args.pin {
        config.api.pin = Some(pin.clone());
    }

    let client = build_client(&config.api)?;
    client
        .login(config.api.pin.as_deref())
        .await
        .context("failed to log in to TVDB")?;
    tracing::info!("Logged in to {}", client.session().base_url());

    if args.save {
        config.save(&path)?;
        tracing::info!("Saved credentials to {}", path.display());
    }
    Ok(())
}

/// Runs the `search` subcommand.
///
/// # Errors
///
/// Returns an error if login or the API request fails.
#[instrument(skip_all)]
async fn run_search(args: &SearchArgs, dir: Option<&PathBuf>) -> Result<()> {
    let mut params = SearchParams::new(&args.query);
    if let Some(kind) = &args.kind {
        params = params.kind(kind);
    }
    if let Some(year) = args.year {
        params = params.year(year);
    }
    if let Some(offset) = args.offset {
        params = params.offset(offset);
    }
    if let Some(limit) = args.limit {
        params = params.limit(limit);
    }

    let conn = connect(dir).await?;
    let results = conn
        .call(|| conn.client.search(&params))
        .await
        .context("TVDB search request failed")?;

    tracing::info!("Total results: {}", results.len());
    emit(&results)
}

/// Runs the `episode` subcommand.
///
/// # Errors
///
/// Returns an error if login or the API request fails.
#[instrument(skip_all)]
async fn run_episode(args: &RecordArgs, dir: Option<&PathBuf>) -> Result<()> {
    let conn = connect(dir).await?;
    let meta = args.meta.as_deref();
    if args.extended {
        let episode = conn
            .call(|| conn.client.episode_extended(args.id, meta))
            .await
            .context("TVDB episode request failed")?;
        emit(&episode)
    } else {
        let episode = conn
            .call(|| conn.client.episode(args.id))
            .await
            .context("TVDB episode request failed")?;
        emit(&episode)
    }
}

/// Runs the `series` subcommand.
///
/// # Errors
///
/// Returns an error if login or the API request fails.
#[instrument(skip_all)]
async fn run_series(args: &SeriesArgs, dir: Option<&PathBuf>) -> Result<()> {
    let conn = connect(dir).await?;
    let id = args.record.id;
    if let Some(season_type) = &args.episodes {
        let page = conn
            .call(|| conn.client.series_episodes(id, season_type, args.page))
            .await
            .context("TVDB series episodes request failed")?;
        tracing::info!("Episodes on page {}: {}", args.page, page.episodes.len());
        emit(&page)
    } else if args.record.extended {
        let meta = args.record.meta.as_deref();
        let series = conn
            .call(|| conn.client.series_extended(id, meta))
            .await
            .context("TVDB series request failed")?;
        emit(&series)
    } else {
        let series = conn
            .call(|| conn.client.series(id))
            .await
            .context("TVDB series request failed")?;
        emit(&series)
    }
}

/// Runs the `movie` subcommand.
///
/// # Errors
///
/// Returns an error if login or the API request fails.
#[instrument(skip_all)]
async fn run_movie(args: &RecordArgs, dir: Option<&PathBuf>) -> Result<()> {
    let conn = connect(dir).await?;
    let meta = args.meta.as_deref();
    if args.extended {
        let movie = conn
            .call(|| conn.client.movie_extended(args.id, meta))
            .await
            .context("TVDB movie request failed")?;
        emit(&movie)
    } else {
        let movie = conn
            .call(|| conn.client.movie(args.id))
            .await
            .context("TVDB movie request failed")?;
        emit(&movie)
    }
}

/// Runs the `person` subcommand.
///
/// # Errors
///
/// Returns an error if login or the API request fails.
#[instrument(skip_all)]
async fn run_person(args: &PersonArgs, dir: Option<&PathBuf>) -> Result<()> {
    let conn = connect(dir).await?;
    if args.extended {
        let person = conn
            .call(|| conn.client.person_extended(args.id))
            .await
            .context("TVDB person request failed")?;
        emit(&person)
    } else {
        let person = conn
            .call(|| conn.client.person(args.id))
            .await
            .context("TVDB person request failed")?;
        emit(&person)
    }
}

/// Runs the `updates` subcommand.
///
/// # Errors
///
/// Returns an error if `--since` is invalid, or login or the API request fails.
#[instrument(skip_all)]
async fn run_updates(args: &UpdatesArgs, dir: Option<&PathBuf>) -> Result<()> {
    let mut params = parse_since(&args.since)?;
    if let Some(kind) = &args.kind {
        params = params.kind(kind);
    }
    if let Some(action) = &args.action {
        params = params.action(action);
    }

    let conn = connect(dir).await?;
    let updates = conn
        .call(|| conn.client.updates(&params))
        .await
        .context("TVDB updates request failed")?;

    tracing::info!("Total updates: {}", updates.len());
    emit(&updates)
}

/// Entry point.
///
/// # Errors
///
/// Returns an error if subcommand execution fails.
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    #[cfg(not(feature = "otel"))]
    {
        fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_target(false)
            .init();
    }

    #[cfg(feature = "otel")]
    {
        let env_filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        let fmt_layer = tracing_subscriber::fmt::layer().with_target(false);

        let otel_layer = std::env::var("OTEL_EXPORTER_OTLP_ENDPOINT")
            .ok()
            .and_then(|_| {
                let exporter = opentelemetry_otlp::SpanExporter::builder()
                    .with_http()
                    .build()
                    .ok()?;

                let tracer_provider = opentelemetry_sdk::trace::SdkTracerProvider::builder()
                    .with_simple_exporter(exporter)
                    .build();

                let tracer = opentelemetry::trace::TracerProvider::tracer(
                    &tracer_provider,
                    env!("CARGO_PKG_NAME"),
                );
                opentelemetry::global::set_tracer_provider(tracer_provider);

                Some(tracing_opentelemetry::layer().with_tracer(tracer))
            });

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .with(otel_layer)
            .init();
    }

    let cli = Cli::parse();
    let dir = cli.dir.as_ref();
    match cli.command {
        Commands::Login(args) => run_login(&args, dir).await,
        Commands::Search(args) => run_search(&args, dir).await,
        Commands::Episode(args) => run_episode(&args, dir).await,
        Commands::Series(args) => run_series(&args, dir).await,
        Commands::Movie(args) => run_movie(&args, dir).await,
        Commands::Person(args) => run_person(&args, dir).await,
        Commands::Updates(args) => run_updates(&args, dir).await,
    }
}

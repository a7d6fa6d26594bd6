// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Gym tracker command-line client.
//!
//! Each invocation is a fresh cookie session: pass `--email` (password from
//! `--password` or `GYM_PASSWORD`) to log in before the command runs.

use anyhow::{bail, Context};
use chrono::Utc;
use clap::{Parser, Subcommand};
use gym_tracker_client::{
    config::Config,
    models::{ExerciseGroup, ExerciseGroupKind, ExerciseOrdering, ExerciseQuery},
    routes::Route,
    services::FetchOutcome,
    time_utils::{format_utc_rfc3339, parse_timestamp},
    AppContext,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(
    name = "gym-client",
    version = env!("CARGO_PKG_VERSION"),
    about = "Command-line client for the gym tracker API",
    long_about = None
)]
struct Cli {
    /// Override the API base URL (default: $VITE_API_BASE_URL or localhost)
    #[arg(global = true, long = "api-url")]
    api_url: Option<String>,

    /// Log in with this email before running the command
    #[arg(global = true, long)]
    email: Option<String>,

    /// Password for --email (falls back to $GYM_PASSWORD)
    #[arg(global = true, long)]
    password: Option<String>,

    /// Emit logs as JSON
    #[arg(global = true, long = "json-logs")]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the logged-in user
    Me,

    /// List gym sessions
    Sessions,

    /// Show the open gym session, if any
    Current,

    /// List exercises grouped by muscle group
    Exercises {
        /// Filter by name, muscle group or tag
        #[arg(long)]
        search: Option<String>,

        /// Sort by most recently completed
        #[arg(long)]
        recent: bool,
    },

    /// Resolve a page path against the route table
    Route { path: String },

    /// End the session on the server
    Logout,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.json_logs);

    if let Commands::Route { path } = &cli.command {
        return print_route(path);
    }

    let config = match &cli.api_url {
        Some(url) => Config::with_base_url(url)?,
        None => Config::from_env()?,
    };
    tracing::debug!(base_url = %config.api_base_url, "Using API");

    let ctx = AppContext::new(config)?;

    if let Some(email) = &cli.email {
        let password = match &cli.password {
            Some(p) => p.clone(),
            None => std::env::var("GYM_PASSWORD").context("--password or GYM_PASSWORD required")?,
        };
        let outcome = ctx.auth.login(email, &password).await.map_err(|e| {
            let reason = e.detail().unwrap_or_else(|| e.to_string());
            anyhow::anyhow!("Login failed: {reason}")
        })?;
        if !outcome.is_authenticated() {
            bail!("Logged in but the session could not be read back: {outcome:?}");
        }
    }

    match cli.command {
        Commands::Me => match ctx.auth.fetch_current_user().await {
            FetchOutcome::Authenticated(user) => {
                println!("{} <{}> (id {})", user.display_name(), user.email, user.id);
            }
            FetchOutcome::NoSession => bail!("Not logged in"),
            FetchOutcome::Unavailable(e) => return Err(e).context("Could not reach the API"),
            FetchOutcome::Superseded => bail!("Identity changed while fetching"),
        },
        Commands::Sessions => {
            let now = Utc::now();
            for session in ctx.sessions.list().await? {
                let minutes = session.duration(now).map(|d| d.num_minutes());
                let started = parse_timestamp(&session.start_time)
                    .map_or_else(|| session.start_time.clone(), format_utc_rfc3339);
                println!(
                    "#{:<5} {} {:>4} min  {:>3} sets  {}{}",
                    session.id,
                    started,
                    minutes.map_or_else(|| "?".to_string(), |m| m.to_string()),
                    session.total_sets(),
                    if session.is_open { "[open] " } else { "" },
                    session.note,
                );
            }
        }
        Commands::Current => match ctx.sessions.current().await? {
            Some(session) => println!(
                "#{} started {} at {}",
                session.id,
                session.start_time,
                session
                    .location
                    .as_ref()
                    .map_or("unknown location", |l| l.name.as_str())
            ),
            None => println!("No open session"),
        },
        Commands::Exercises { search, recent } => {
            let query = ExerciseQuery {
                search,
                ordering: recent.then_some(ExerciseOrdering::Recent),
                ..Default::default()
            };
            let exercises = ctx.exercises.list(&query).await?;
            for group in ExerciseGroup::group_by(&exercises, ExerciseGroupKind::MuscleGroup) {
                println!("{}", group.label);
                for item in group.items {
                    println!(
                        "  {} (last: {})",
                        item.name,
                        item.last_completed_at.as_deref().unwrap_or("never")
                    );
                }
            }
        }
        Commands::Logout => {
            ctx.auth.logout().await?;
            println!("Logged out");
        }
        Commands::Route { .. } => unreachable!("handled before connecting"),
    }

    Ok(())
}

fn print_route(path: &str) -> anyhow::Result<()> {
    let route: Route = path.parse()?;
    println!("{:?} page in {:?} layout ({})", route.page(), route.layout(), route);
    Ok(())
}

/// Initialize logging to stderr, optionally as JSON.
fn init_logging(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("gym_tracker_client=info,warn"));

    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(false)
                    .flatten_event(true)
                    .with_writer(std::io::stderr),
            )
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

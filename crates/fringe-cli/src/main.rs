//! fringe - observability of stars with the VLTI and CHARA interferometers

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use fringe_catalog::{health, limits_feed, CatalogClient};
use fringe_survey::{count_survey, io, search, survey, VisionMode};

/// Check star observability with the VLTI and CHARA instruments
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// URL of the live MATISSE limiting-magnitude document
    #[arg(long, global = true)]
    limits_url: Option<String>,

    /// Print progress information
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Search and fetch observability data for one target
    Search {
        /// Name of the target
        #[arg(short, long)]
        target: String,

        /// Directory to save the fetched report into
        #[arg(long)]
        save_to: Option<PathBuf>,
    },
    /// Run the search on a list of targets
    Survey {
        /// Names of the targets
        #[arg(short, long, num_args = 1..)]
        target: Vec<String>,

        /// Directory to save the survey results into
        #[arg(long)]
        save_to: Option<PathBuf>,

        /// Gate the VISION count on diameter mode instead of imaging
        #[arg(long)]
        diam: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("fringe={default_level},fringe_survey={default_level},fringe_catalog={default_level}").parse().expect("valid filter")),
        )
        .init();

    let client = Arc::new(CatalogClient::new().with_limits_url(cli.limits_url));

    match cli.command {
        Command::Search { target, save_to } => run_search(client, &target, save_to).await,
        Command::Survey { target, save_to, diam } => {
            let mode = if diam { VisionMode::Diam } else { VisionMode::Imaging };
            run_survey(client, &target, save_to, mode).await
        }
    }
}

async fn run_search(
    client: Arc<CatalogClient>,
    target: &str,
    save_to: Option<PathBuf>,
) -> Result<()> {
    if !health::servers_reachable(&client).await {
        anyhow::bail!("catalog services are unreachable");
    }

    let limits = limits_feed::current_limits(&client).await;
    let report = search(&client, target, &limits)
        .await
        .with_context(|| format!("search for {target:?} failed"))?;

    println!("{}", serde_json::to_string_pretty(&report)?);

    if let Some(dir) = save_to {
        let mut results = fringe_survey::SurveyResult::new();
        results.insert(report.name.clone(), Some(report));
        let path = io::save(&results, dir.join(format!("{target}.json")), true)?;
        tracing::info!("report saved to {}", path.display());
    }
    Ok(())
}

async fn run_survey(
    client: Arc<CatalogClient>,
    targets: &[String],
    save_to: Option<PathBuf>,
    mode: VisionMode,
) -> Result<()> {
    tracing::info!("starting survey on {} stars", targets.len());
    let results = survey(client, targets).await?;

    if let Some(dir) = save_to {
        let path = io::save(&results, dir.join("survey.json"), true)?;
        tracing::info!("survey saved to {}", path.display());
    }

    let count = count_survey(&results, mode);
    println!("{count}");
    Ok(())
}

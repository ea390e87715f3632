//! fringe-survey - Target search and batch surveys
//!
//! Glues the catalog clients to the core decision engine: one `search`
//! per target, `survey` for a list of targets (each target fully
//! independent, scheduled as its own task), JSON persistence and the
//! per-instrument aggregation counts.

pub mod count;
pub mod io;
pub mod search;

use std::collections::BTreeMap;
use std::sync::Arc;

use thiserror::Error;
use tracing::warn;

use fringe_catalog::{health, limits_feed, CatalogClient, CatalogError};
use fringe_core::StarReport;

pub use count::{count_survey, SurveyCount, VisionMode};
pub use io::{load, save};
pub use search::search;

/// Result of a batch survey: target name to report, `None` when that
/// target failed. Keys are disjoint by construction; a BTreeMap keeps the
/// serialized document deterministic.
pub type SurveyResult = BTreeMap<String, Option<StarReport>>;

#[derive(Debug, Error)]
pub enum SurveyError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error("the target list is empty")]
    EmptyTargetList,

    #[error("catalog services are unreachable")]
    ServersUnreachable,

    #[error("{0} already exists (pass overwrite to replace it)")]
    AlreadyExists(std::path::PathBuf),

    #[error("survey file error: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed survey document: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Run the full search on a list of targets.
///
/// Each target runs as its own task; a failed target yields `None` under
/// its key and never aborts the batch. The MATISSE limit table is
/// resolved once and shared.
pub async fn survey(client: Arc<CatalogClient>, targets: &[String]) -> Result<SurveyResult, SurveyError> {
    if targets.is_empty() {
        return Err(SurveyError::EmptyTargetList);
    }
    if !health::servers_reachable(&client).await {
        return Err(SurveyError::ServersUnreachable);
    }

    let limits = Arc::new(limits_feed::current_limits(&client).await);

    let mut handles = Vec::with_capacity(targets.len());
    for target in targets {
        let client = Arc::clone(&client);
        let limits = Arc::clone(&limits);
        let target = target.clone();
        handles.push(tokio::spawn(async move {
            let report = match search::search(&client, &target, &limits).await {
                Ok(report) => Some(report),
                Err(e) => {
                    warn!("{target}: {e}");
                    None
                }
            };
            (target.to_uppercase(), report)
        }));
    }

    let mut results = SurveyResult::new();
    for handle in handles {
        // Task panics are programming errors, not lookup failures.
        let (name, report) = handle.await.expect("search task panicked");
        results.insert(name, report);
    }
    Ok(results)
}

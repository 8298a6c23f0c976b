use thiserror::Error;

/// Terminal failures of a single run.
///
/// Every collaborator-side failure (spawn, exit status, bad JSON, redirect
/// resolution) collapses into `Extraction`; the runner never branches on the
/// cause. The cause chain is still carried for the stderr report.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("no video URL supplied")]
    MissingInput,

    #[error("extraction failed")]
    Extraction(#[from] anyhow::Error),
}

use std::path::PathBuf;

use thiserror::Error;

/// Failures with a dedicated user-facing message. Everything else flows
/// through `anyhow` and is reported with the generic processing message.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("input file '{}' not found", path.display())]
    MissingInput { path: PathBuf },
    #[error("required column '{name}' not found in CSV header")]
    MissingColumn { name: String },
}
